//! `SQLite` implementation of the `XrayDatabase` trait.
//!
//! Every lookup runs in two steps: the queries are first resolved to row
//! ids (failing with `NotFound` when an entity does not exist), then the
//! property table is filtered by those ids and by reference.

use std::collections::{BTreeSet, HashSet};

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool};
use tracing::debug;

use xraydb_core::{
    AtomicShell, AtomicShellQuery, AtomicSubshell, AtomicSubshellQuery, DatabaseError,
    DefaultReferences, Element, ElementQuery, Encoding, PropertyKind, XrayDatabase,
    XrayTransition, XrayTransitionQuery, XrayTransitionSet, XrayTransitionSetQuery,
};

use super::row_mappers::{
    row_to_atomic_shell, row_to_atomic_subshell, row_to_element, row_to_xray_transition,
    select_atomic_subshell, select_xray_transition, storage,
};
use crate::select::{Condition, SelectBuilder, bind_params};

/// `SQLite` implementation of the `XrayDatabase` trait.
pub struct SqliteXrayDatabase {
    pool: SqlitePool,
    defaults: DefaultReferences,
}

impl SqliteXrayDatabase {
    /// Create a new database over a pool with the schema already applied.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            defaults: DefaultReferences::new(),
        }
    }

    async fn fetch_optional(
        &self,
        builder: &SelectBuilder,
    ) -> Result<Option<SqliteRow>, DatabaseError> {
        let (sql, params) = builder.build();
        bind_params(&sql, &params)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)
    }

    async fn fetch_all(&self, builder: &SelectBuilder) -> Result<Vec<SqliteRow>, DatabaseError> {
        let (sql, params) = builder.build();
        bind_params(&sql, &params)
            .fetch_all(&self.pool)
            .await
            .map_err(storage)
    }

    async fn fetch_one(
        &self,
        builder: &SelectBuilder,
        what: impl FnOnce() -> String,
    ) -> Result<SqliteRow, DatabaseError> {
        self.fetch_optional(builder)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(what()))
    }

    // Descriptor resolution

    async fn resolve_element(&self, query: &ElementQuery) -> Result<(i64, Element), DatabaseError> {
        let mut builder = SelectBuilder::new();
        builder
            .distinct()
            .add_select("element", "id")
            .add_select("element", "atomic_number")
            .add_from("element");

        match query {
            ElementQuery::AtomicNumber(z) => {
                builder.add_where("element", "atomic_number", "=", *z);
            }
            ElementQuery::Text(text) => {
                builder
                    .add_left_join("element_symbol", "element_id", "element", "id")
                    .add_left_join("element_name", "element_id", "element", "id")
                    .add_where_any(vec![
                        Condition::new("element_symbol", "symbol", "=", text.as_str()),
                        Condition::new("element_name", "name", "=", text.as_str()),
                    ]);
            }
        }
        builder.limit(1);

        let row = self
            .fetch_one(&builder, || format!("element {}", describe_element(query)))
            .await?;
        Ok((row.try_get("id").map_err(storage)?, row_to_element(&row)?))
    }

    async fn resolve_atomic_shell(
        &self,
        query: &AtomicShellQuery,
    ) -> Result<(i64, AtomicShell), DatabaseError> {
        let mut builder = SelectBuilder::new();
        builder
            .add_select("atomic_shell", "id")
            .add_select("atomic_shell", "principal_quantum_number")
            .add_from("atomic_shell");

        match query {
            AtomicShellQuery::Number(n) => {
                builder.add_where("atomic_shell", "principal_quantum_number", "=", *n);
            }
            AtomicShellQuery::Notation(notation) => {
                builder
                    .add_join(
                        "atomic_shell_notation",
                        "atomic_shell_id",
                        "atomic_shell",
                        "id",
                    )
                    .add_where_any(notation_conditions("atomic_shell_notation", notation));
            }
        }
        builder.limit(1);

        let row = self
            .fetch_one(&builder, || format!("atomic shell {query:?}"))
            .await?;
        Ok((row.try_get("id").map_err(storage)?, row_to_atomic_shell(&row)?))
    }

    async fn resolve_atomic_subshell(
        &self,
        query: &AtomicSubshellQuery,
    ) -> Result<(i64, AtomicSubshell), DatabaseError> {
        let mut builder = SelectBuilder::new();
        select_atomic_subshell(&mut builder);

        match query {
            AtomicSubshellQuery::QuantumNumbers(n, l, j_n) => {
                builder
                    .add_where("atomic_shell", "principal_quantum_number", "=", *n)
                    .add_where("atomic_subshell", "azimuthal_quantum_number", "=", *l)
                    .add_where(
                        "atomic_subshell",
                        "total_angular_momentum_nominator",
                        "=",
                        *j_n,
                    );
            }
            AtomicSubshellQuery::Notation(notation) => {
                builder
                    .add_join(
                        "atomic_subshell_notation",
                        "atomic_subshell_id",
                        "atomic_subshell",
                        "id",
                    )
                    .add_where_any(notation_conditions("atomic_subshell_notation", notation));
            }
        }
        builder.limit(1);

        let row = self
            .fetch_one(&builder, || format!("atomic subshell {query:?}"))
            .await?;
        Ok((
            row.try_get("id").map_err(storage)?,
            row_to_atomic_subshell(&row, "")?,
        ))
    }

    async fn resolve_xray_transition(
        &self,
        query: &XrayTransitionQuery,
    ) -> Result<(i64, XrayTransition), DatabaseError> {
        let mut builder = SelectBuilder::new();
        select_xray_transition(&mut builder);

        match query {
            XrayTransitionQuery::Subshells(src, dst) => {
                builder
                    .add_where("srcshell", "principal_quantum_number", "=", src.n())
                    .add_where("src", "azimuthal_quantum_number", "=", src.l())
                    .add_where("src", "total_angular_momentum_nominator", "=", src.j_n())
                    .add_where("dstshell", "principal_quantum_number", "=", dst.n())
                    .add_where("dst", "azimuthal_quantum_number", "=", dst.l())
                    .add_where("dst", "total_angular_momentum_nominator", "=", dst.j_n());
            }
            XrayTransitionQuery::Notation(notation) => {
                builder
                    .add_join(
                        "xray_transition_notation",
                        "xray_transition_id",
                        "xray_transition",
                        "id",
                    )
                    .add_where_any(notation_conditions("xray_transition_notation", notation));
            }
        }
        builder.limit(1);

        let row = self
            .fetch_one(&builder, || format!("X-ray transition {query:?}"))
            .await?;
        Ok((
            row.try_get("id").map_err(storage)?,
            row_to_xray_transition(&row)?,
        ))
    }

    async fn resolve_xray_transitionset(
        &self,
        query: &XrayTransitionSetQuery,
    ) -> Result<i64, DatabaseError> {
        match query {
            XrayTransitionSetQuery::Notation(notation) => {
                let mut builder = SelectBuilder::new();
                builder
                    .add_select("xray_transitionset", "id")
                    .add_from("xray_transitionset")
                    .add_join(
                        "xray_transitionset_notation",
                        "xray_transitionset_id",
                        "xray_transitionset",
                        "id",
                    )
                    .add_where_any(notation_conditions("xray_transitionset_notation", notation))
                    .limit(1);

                let row = self
                    .fetch_one(&builder, || format!("X-ray transition set {notation:?}"))
                    .await?;
                row.try_get("id").map_err(storage)
            }
            XrayTransitionSetQuery::Transitions(transitions) => {
                self.resolve_xray_transitionset_by_members(transitions).await
            }
        }
    }

    /// Intersect the `(set id, count)` pairs of every member, then keep the
    /// set whose member count matches.
    async fn resolve_xray_transitionset_by_members(
        &self,
        transitions: &[XrayTransition],
    ) -> Result<i64, DatabaseError> {
        let unique: BTreeSet<XrayTransition> = transitions.iter().copied().collect();
        if unique.is_empty() {
            return Err(DatabaseError::InvalidQuery(
                "a transition set needs at least one transition".to_string(),
            ));
        }
        let not_found = || {
            DatabaseError::NotFound(format!(
                "X-ray transition set of {} transitions",
                unique.len()
            ))
        };

        let mut possibilities: Option<HashSet<(i64, i64)>> = None;
        for transition in &unique {
            let transition_id = match self
                .resolve_xray_transition(&XrayTransitionQuery::from(*transition))
                .await
            {
                Ok((id, _)) => id,
                Err(DatabaseError::NotFound(_)) => return Err(not_found()),
                Err(e) => return Err(e),
            };

            let mut builder = SelectBuilder::new();
            builder
                .add_select("xray_transitionset_association", "xray_transitionset_id")
                .add_select("xray_transitionset", "count")
                .add_from("xray_transitionset_association")
                .add_join(
                    "xray_transitionset",
                    "id",
                    "xray_transitionset_association",
                    "xray_transitionset_id",
                )
                .add_where(
                    "xray_transitionset_association",
                    "xray_transition_id",
                    "=",
                    transition_id,
                );

            let rows: HashSet<(i64, i64)> = self
                .fetch_all(&builder)
                .await?
                .iter()
                .map(|row| Ok((row.try_get(0)?, row.try_get(1)?)))
                .collect::<Result<_, sqlx::Error>>()
                .map_err(storage)?;

            let current = match possibilities {
                None => rows,
                Some(previous) => previous.intersection(&rows).copied().collect(),
            };
            if current.is_empty() {
                return Err(not_found());
            }
            possibilities = Some(current);
        }

        let expected = unique.len() as i64;
        possibilities
            .unwrap_or_default()
            .into_iter()
            .find(|(_, count)| *count == expected)
            .map(|(id, _)| id)
            .ok_or_else(not_found)
    }

    async fn transitionset_members(&self, id: i64) -> Result<Vec<XrayTransition>, DatabaseError> {
        let mut builder = SelectBuilder::new();
        select_xray_transition(&mut builder)
            .add_join(
                "xray_transitionset_association",
                "xray_transition_id",
                "xray_transition",
                "id",
            )
            .add_where(
                "xray_transitionset_association",
                "xray_transitionset_id",
                "=",
                id,
            )
            .add_orderby("xray_transition", "id");

        self.fetch_all(&builder)
            .await?
            .iter()
            .map(row_to_xray_transition)
            .collect()
    }

    async fn resolve_language(&self, code: &str) -> Result<i64, DatabaseError> {
        let mut builder = SelectBuilder::new();
        builder
            .add_select("language", "id")
            .add_from("language")
            .add_where("language", "code", "=", code)
            .limit(1);
        let row = self
            .fetch_one(&builder, || format!("language {code}"))
            .await?;
        row.try_get("id").map_err(storage)
    }

    async fn resolve_notation(&self, name: &str) -> Result<i64, DatabaseError> {
        let mut builder = SelectBuilder::new();
        builder
            .add_select("notation", "id")
            .add_from("notation")
            .add_where("notation", "name", "=", name)
            .limit(1);
        let row = self
            .fetch_one(&builder, || format!("notation {name}"))
            .await?;
        row.try_get("id").map_err(storage)
    }

    // Property selection

    /// Select `table.column` for the given id filters.
    ///
    /// With a reference (explicit, else default), only that reference's row
    /// matches. Without one, the row of the lowest reference id wins.
    async fn select_value<T>(
        &self,
        kind: PropertyKind,
        table: &str,
        column: &str,
        filters: &[(&str, i64)],
        reference: Option<&str>,
    ) -> Result<T, DatabaseError>
    where
        T: for<'r> sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
    {
        let mut builder = SelectBuilder::new();
        builder.add_select(table, column).add_from(table);
        for (filter_column, id) in filters {
            builder.add_where(table, filter_column, "=", *id);
        }

        let reference = self.defaults.resolve(kind, reference);
        match &reference {
            Some(key) => {
                builder
                    .add_join("ref", "id", table, "reference_id")
                    .add_where("ref", "bibtexkey", "=", key.as_str());
            }
            None => {
                builder.add_orderby(table, "reference_id");
            }
        }
        builder.limit(1);

        let row = self
            .fetch_one(&builder, || match &reference {
                Some(key) => format!("{kind} (reference {key})"),
                None => kind.to_string(),
            })
            .await?;
        debug!(%kind, reference = ?reference, "Selected property");
        row.try_get(0).map_err(storage)
    }

    #[allow(clippy::too_many_arguments)]
    async fn select_notation(
        &self,
        kind: PropertyKind,
        table: &str,
        entity_column: &str,
        entity_id: i64,
        notation: &str,
        encoding: Encoding,
        reference: Option<&str>,
    ) -> Result<String, DatabaseError> {
        let notation_id = self.resolve_notation(notation).await?;
        self.select_value(
            kind,
            table,
            encoding.as_ref(),
            &[(entity_column, entity_id), ("notation_id", notation_id)],
            reference,
        )
        .await
    }

    async fn select_element_subshell_value(
        &self,
        kind: PropertyKind,
        table: &str,
        column: &str,
        element: &ElementQuery,
        atomic_subshell: &AtomicSubshellQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        let (element_id, _) = self.resolve_element(element).await?;
        let (subshell_id, _) = self.resolve_atomic_subshell(atomic_subshell).await?;
        self.select_value(
            kind,
            table,
            column,
            &[("element_id", element_id), ("atomic_subshell_id", subshell_id)],
            reference,
        )
        .await
    }

    async fn select_element_transition_value(
        &self,
        kind: PropertyKind,
        table: &str,
        column: &str,
        element: &ElementQuery,
        xray_transition: &XrayTransitionQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        let (element_id, _) = self.resolve_element(element).await?;
        let (transition_id, _) = self.resolve_xray_transition(xray_transition).await?;
        self.select_value(
            kind,
            table,
            column,
            &[
                ("element_id", element_id),
                ("xray_transition_id", transition_id),
            ],
            reference,
        )
        .await
    }

    async fn select_element_transitionset_value(
        &self,
        kind: PropertyKind,
        table: &str,
        column: &str,
        element: &ElementQuery,
        xray_transitionset: &XrayTransitionSetQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        let (element_id, _) = self.resolve_element(element).await?;
        let set_id = self.resolve_xray_transitionset(xray_transitionset).await?;
        self.select_value(
            kind,
            table,
            column,
            &[("element_id", element_id), ("xray_transitionset_id", set_id)],
            reference,
        )
        .await
    }
}

/// Notations match on their ASCII or UTF-16 rendering.
fn notation_conditions(table: &str, notation: &str) -> Vec<Condition> {
    vec![
        Condition::new(table, "ascii", "=", notation),
        Condition::new(table, "utf16", "=", notation),
    ]
}

fn describe_element(query: &ElementQuery) -> String {
    match query {
        ElementQuery::AtomicNumber(z) => format!("z={z}"),
        ElementQuery::Text(text) => format!("'{text}'"),
    }
}

#[async_trait]
impl XrayDatabase for SqliteXrayDatabase {
    async fn element(&self, element: &ElementQuery) -> Result<Element, DatabaseError> {
        Ok(self.resolve_element(element).await?.1)
    }

    async fn element_symbol(
        &self,
        element: &ElementQuery,
        reference: Option<&str>,
    ) -> Result<String, DatabaseError> {
        let (element_id, _) = self.resolve_element(element).await?;
        self.select_value(
            PropertyKind::ElementSymbol,
            "element_symbol",
            "symbol",
            &[("element_id", element_id)],
            reference,
        )
        .await
    }

    async fn element_name(
        &self,
        element: &ElementQuery,
        language: &str,
        reference: Option<&str>,
    ) -> Result<String, DatabaseError> {
        let (element_id, _) = self.resolve_element(element).await?;
        let language_id = self.resolve_language(language).await?;
        self.select_value(
            PropertyKind::ElementName,
            "element_name",
            "name",
            &[("element_id", element_id), ("language_id", language_id)],
            reference,
        )
        .await
    }

    async fn element_atomic_weight(
        &self,
        element: &ElementQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        let (element_id, _) = self.resolve_element(element).await?;
        self.select_value(
            PropertyKind::ElementAtomicWeight,
            "element_atomic_weight",
            "value",
            &[("element_id", element_id)],
            reference,
        )
        .await
    }

    async fn element_mass_density_kg_per_m3(
        &self,
        element: &ElementQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        let (element_id, _) = self.resolve_element(element).await?;
        self.select_value(
            PropertyKind::ElementMassDensity,
            "element_mass_density",
            "value_kg_per_m3",
            &[("element_id", element_id)],
            reference,
        )
        .await
    }

    async fn element_xray_transitions(
        &self,
        element: &ElementQuery,
        xray_transitionset: Option<&XrayTransitionSetQuery>,
        reference: Option<&str>,
    ) -> Result<Vec<XrayTransition>, DatabaseError> {
        let (element_id, _) = self.resolve_element(element).await?;

        let mut builder = SelectBuilder::new();
        select_xray_transition(&mut builder)
            .distinct()
            .add_join(
                "xray_transition_probability",
                "xray_transition_id",
                "xray_transition",
                "id",
            )
            .add_where("xray_transition_probability", "element_id", "=", element_id)
            .add_where("xray_transition_probability", "value", ">", 0.0);

        if let Some(key) = self
            .defaults
            .resolve(PropertyKind::XrayTransitionProbability, reference)
        {
            builder
                .add_join("ref", "id", "xray_transition_probability", "reference_id")
                .add_where("ref", "bibtexkey", "=", key);
        }

        if let Some(set) = xray_transitionset {
            let set_id = self.resolve_xray_transitionset(set).await?;
            builder
                .add_join(
                    "xray_transitionset_association",
                    "xray_transition_id",
                    "xray_transition",
                    "id",
                )
                .add_where(
                    "xray_transitionset_association",
                    "xray_transitionset_id",
                    "=",
                    set_id,
                );
        }
        builder.add_orderby("xray_transition", "id");

        self.fetch_all(&builder)
            .await?
            .iter()
            .map(row_to_xray_transition)
            .collect()
    }

    async fn atomic_shell(
        &self,
        atomic_shell: &AtomicShellQuery,
    ) -> Result<AtomicShell, DatabaseError> {
        Ok(self.resolve_atomic_shell(atomic_shell).await?.1)
    }

    async fn atomic_shell_notation(
        &self,
        atomic_shell: &AtomicShellQuery,
        notation: &str,
        encoding: Encoding,
        reference: Option<&str>,
    ) -> Result<String, DatabaseError> {
        let (shell_id, _) = self.resolve_atomic_shell(atomic_shell).await?;
        self.select_notation(
            PropertyKind::AtomicShellNotation,
            "atomic_shell_notation",
            "atomic_shell_id",
            shell_id,
            notation,
            encoding,
            reference,
        )
        .await
    }

    async fn atomic_subshell(
        &self,
        atomic_subshell: &AtomicSubshellQuery,
    ) -> Result<AtomicSubshell, DatabaseError> {
        Ok(self.resolve_atomic_subshell(atomic_subshell).await?.1)
    }

    async fn atomic_subshell_notation(
        &self,
        atomic_subshell: &AtomicSubshellQuery,
        notation: &str,
        encoding: Encoding,
        reference: Option<&str>,
    ) -> Result<String, DatabaseError> {
        let (subshell_id, _) = self.resolve_atomic_subshell(atomic_subshell).await?;
        self.select_notation(
            PropertyKind::AtomicSubshellNotation,
            "atomic_subshell_notation",
            "atomic_subshell_id",
            subshell_id,
            notation,
            encoding,
            reference,
        )
        .await
    }

    async fn atomic_subshell_binding_energy_ev(
        &self,
        element: &ElementQuery,
        atomic_subshell: &AtomicSubshellQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        self.select_element_subshell_value(
            PropertyKind::AtomicSubshellBindingEnergy,
            "atomic_subshell_binding_energy",
            "value_eV",
            element,
            atomic_subshell,
            reference,
        )
        .await
    }

    async fn atomic_subshell_radiative_width_ev(
        &self,
        element: &ElementQuery,
        atomic_subshell: &AtomicSubshellQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        self.select_element_subshell_value(
            PropertyKind::AtomicSubshellRadiativeWidth,
            "atomic_subshell_radiative_width",
            "value_eV",
            element,
            atomic_subshell,
            reference,
        )
        .await
    }

    async fn atomic_subshell_nonradiative_width_ev(
        &self,
        element: &ElementQuery,
        atomic_subshell: &AtomicSubshellQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        self.select_element_subshell_value(
            PropertyKind::AtomicSubshellNonRadiativeWidth,
            "atomic_subshell_nonradiative_width",
            "value_eV",
            element,
            atomic_subshell,
            reference,
        )
        .await
    }

    async fn atomic_subshell_occupancy(
        &self,
        element: &ElementQuery,
        atomic_subshell: &AtomicSubshellQuery,
        reference: Option<&str>,
    ) -> Result<u32, DatabaseError> {
        let (element_id, _) = self.resolve_element(element).await?;
        let (subshell_id, _) = self.resolve_atomic_subshell(atomic_subshell).await?;
        let value: i64 = self
            .select_value(
                PropertyKind::AtomicSubshellOccupancy,
                "atomic_subshell_occupancy",
                "value",
                &[("element_id", element_id), ("atomic_subshell_id", subshell_id)],
                reference,
            )
            .await?;
        u32::try_from(value)
            .map_err(|_| DatabaseError::Storage(format!("invalid occupancy {value}")))
    }

    async fn xray_transition(
        &self,
        xray_transition: &XrayTransitionQuery,
    ) -> Result<XrayTransition, DatabaseError> {
        Ok(self.resolve_xray_transition(xray_transition).await?.1)
    }

    async fn xray_transition_notation(
        &self,
        xray_transition: &XrayTransitionQuery,
        notation: &str,
        encoding: Encoding,
        reference: Option<&str>,
    ) -> Result<String, DatabaseError> {
        let (transition_id, _) = self.resolve_xray_transition(xray_transition).await?;
        self.select_notation(
            PropertyKind::XrayTransitionNotation,
            "xray_transition_notation",
            "xray_transition_id",
            transition_id,
            notation,
            encoding,
            reference,
        )
        .await
    }

    async fn xray_transition_energy_ev(
        &self,
        element: &ElementQuery,
        xray_transition: &XrayTransitionQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        self.select_element_transition_value(
            PropertyKind::XrayTransitionEnergy,
            "xray_transition_energy",
            "value_eV",
            element,
            xray_transition,
            reference,
        )
        .await
    }

    async fn xray_transition_probability(
        &self,
        element: &ElementQuery,
        xray_transition: &XrayTransitionQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        self.select_element_transition_value(
            PropertyKind::XrayTransitionProbability,
            "xray_transition_probability",
            "value",
            element,
            xray_transition,
            reference,
        )
        .await
    }

    async fn xray_transition_relative_weight(
        &self,
        element: &ElementQuery,
        xray_transition: &XrayTransitionQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        self.select_element_transition_value(
            PropertyKind::XrayTransitionRelativeWeight,
            "xray_transition_relative_weight",
            "value",
            element,
            xray_transition,
            reference,
        )
        .await
    }

    async fn xray_transitionset(
        &self,
        xray_transitionset: &XrayTransitionSetQuery,
    ) -> Result<XrayTransitionSet, DatabaseError> {
        let set_id = self.resolve_xray_transitionset(xray_transitionset).await?;
        let members = self.transitionset_members(set_id).await?;
        Ok(XrayTransitionSet::new(members)?)
    }

    async fn xray_transitionset_notation(
        &self,
        xray_transitionset: &XrayTransitionSetQuery,
        notation: &str,
        encoding: Encoding,
        reference: Option<&str>,
    ) -> Result<String, DatabaseError> {
        let set_id = self.resolve_xray_transitionset(xray_transitionset).await?;
        self.select_notation(
            PropertyKind::XrayTransitionSetNotation,
            "xray_transitionset_notation",
            "xray_transitionset_id",
            set_id,
            notation,
            encoding,
            reference,
        )
        .await
    }

    async fn xray_transitionset_energy_ev(
        &self,
        element: &ElementQuery,
        xray_transitionset: &XrayTransitionSetQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        self.select_element_transitionset_value(
            PropertyKind::XrayTransitionSetEnergy,
            "xray_transitionset_energy",
            "value_eV",
            element,
            xray_transitionset,
            reference,
        )
        .await
    }

    async fn xray_transitionset_relative_weight(
        &self,
        element: &ElementQuery,
        xray_transitionset: &XrayTransitionSetQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        self.select_element_transitionset_value(
            PropertyKind::XrayTransitionSetRelativeWeight,
            "xray_transitionset_relative_weight",
            "value",
            element,
            xray_transitionset,
            reference,
        )
        .await
    }

    fn default_reference(&self, property: &str) -> Result<Option<String>, DatabaseError> {
        self.defaults.get(property)
    }

    fn set_default_reference(
        &self,
        property: &str,
        reference: Option<&str>,
    ) -> Result<(), DatabaseError> {
        self.defaults.set(property, reference)
    }
}
