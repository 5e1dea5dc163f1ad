//! Population of the database from property parsers.
//!
//! [`DatabaseBuilder`] runs its parsers in order inside one transaction.
//! Descriptors referenced by a record (elements, subshells, transitions,
//! references, ...) are inserted on first use and cached by value, so each
//! one gets a single row no matter how many parsers mention it. Derived
//! tables are filled once every parser has run.

use std::collections::{BTreeSet, HashMap};

use sqlx::{Row, SqliteConnection, SqlitePool};
use thiserror::Error;
use tracing::{debug, info};

use xraydb_core::{
    AtomicShell, AtomicSubshell, Element, Language, Notation, NotationValues, ParseError,
    Property, PropertyParser, PropertyRecord, Reference, XrayTransition, XrayTransitionSet,
};

use crate::select::{SqlParam, bind_params};
use crate::setup::DERIVED_TABLES;

/// Errors raised while building the database.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Parser '{parser}' failed: {source}")]
    Parse {
        parser: String,
        #[source]
        source: ParseError,
    },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for BuildError {
    fn from(e: sqlx::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

/// Progress events emitted by [`DatabaseBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildProgress {
    ParserStarted {
        name: String,
        index: usize,
        total: usize,
    },
    ParserFinished {
        name: String,
        properties: usize,
    },
    Deriving,
}

/// Counts reported at the end of a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub parsers: usize,
    pub properties: usize,
    pub derived: u64,
}

/// Runs parsers into a database.
pub struct DatabaseBuilder {
    pool: SqlitePool,
    parsers: Vec<Box<dyn PropertyParser>>,
}

impl DatabaseBuilder {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            parsers: Vec::new(),
        }
    }

    /// Append a parser. Parsers run in insertion order.
    #[must_use]
    pub fn with_parser(mut self, parser: Box<dyn PropertyParser>) -> Self {
        self.parsers.push(parser);
        self
    }

    #[must_use]
    pub fn with_parsers<I>(mut self, parsers: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn PropertyParser>>,
    {
        self.parsers.extend(parsers);
        self
    }

    pub fn parser_count(&self) -> usize {
        self.parsers.len()
    }

    /// Run every parser, then derive the computed tables.
    ///
    /// Nothing is committed when a parser or a statement fails.
    pub async fn build<F>(&self, mut progress: F) -> Result<BuildReport, BuildError>
    where
        F: FnMut(BuildProgress) + Send,
    {
        let mut tx = self.pool.begin().await?;
        let mut inserter = Inserter::new(&mut *tx);
        let mut report = BuildReport {
            parsers: self.parsers.len(),
            ..BuildReport::default()
        };

        let total = self.parsers.len();
        for (index, parser) in self.parsers.iter().enumerate() {
            let name = parser.name().to_string();
            progress(BuildProgress::ParserStarted {
                name: name.clone(),
                index,
                total,
            });

            let properties = parser.parse().map_err(|source| BuildError::Parse {
                parser: name.clone(),
                source,
            })?;
            for property in &properties {
                inserter.insert_property(property).await?;
            }

            info!(parser = %name, count = properties.len(), "Inserted properties");
            report.properties += properties.len();
            progress(BuildProgress::ParserFinished {
                name,
                properties: properties.len(),
            });
        }

        progress(BuildProgress::Deriving);
        report.derived = derive(inserter.conn).await?;

        tx.commit().await?;
        info!(
            parsers = report.parsers,
            properties = report.properties,
            derived = report.derived,
            "Database built"
        );
        Ok(report)
    }
}

/// Descriptor ids already known in this build.
#[derive(Default)]
struct Cache {
    references: HashMap<String, i64>,
    languages: HashMap<String, i64>,
    notations: HashMap<String, i64>,
    elements: HashMap<Element, i64>,
    atomic_shells: HashMap<AtomicShell, i64>,
    atomic_subshells: HashMap<AtomicSubshell, i64>,
    xray_transitions: HashMap<XrayTransition, i64>,
    xray_transitionsets: HashMap<XrayTransitionSet, i64>,
}

struct Inserter<'c> {
    conn: &'c mut SqliteConnection,
    cache: Cache,
}

const REFERENCE_COLUMNS: [&str; 22] = [
    "bibtexkey",
    "author",
    "year",
    "title",
    "type",
    "booktitle",
    "editor",
    "pages",
    "edition",
    "journal",
    "school",
    "address",
    "url",
    "note",
    "number",
    "series",
    "volume",
    "publisher",
    "organization",
    "chapter",
    "howpublished",
    "doi",
];

impl<'c> Inserter<'c> {
    fn new(conn: &'c mut SqliteConnection) -> Self {
        Self {
            conn,
            cache: Cache::default(),
        }
    }

    /// Id of the row matching `select_sql`, inserting it with `insert_sql`
    /// when absent. Both statements take the same parameters.
    async fn id_or_insert(
        &mut self,
        select_sql: &str,
        insert_sql: &str,
        params: &[SqlParam],
    ) -> Result<i64, BuildError> {
        if let Some(row) = bind_params(select_sql, params)
            .fetch_optional(&mut *self.conn)
            .await?
        {
            return Ok(row.try_get(0)?);
        }
        let result = bind_params(insert_sql, params)
            .execute(&mut *self.conn)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn reference_id(&mut self, reference: &Reference) -> Result<i64, BuildError> {
        if let Some(id) = self.cache.references.get(&reference.bibtexkey) {
            return Ok(*id);
        }

        let existing = sqlx::query("SELECT id FROM ref WHERE bibtexkey = ?")
            .bind(&reference.bibtexkey)
            .fetch_optional(&mut *self.conn)
            .await?;
        let id = match existing {
            Some(row) => row.try_get(0)?,
            None => {
                let placeholders = vec!["?"; REFERENCE_COLUMNS.len()].join(", ");
                let sql = format!(
                    "INSERT INTO ref ({}) VALUES ({placeholders})",
                    REFERENCE_COLUMNS.join(", ")
                );
                let fields = [
                    &reference.author,
                    &reference.year,
                    &reference.title,
                    &reference.kind,
                    &reference.booktitle,
                    &reference.editor,
                    &reference.pages,
                    &reference.edition,
                    &reference.journal,
                    &reference.school,
                    &reference.address,
                    &reference.url,
                    &reference.note,
                    &reference.number,
                    &reference.series,
                    &reference.volume,
                    &reference.publisher,
                    &reference.organization,
                    &reference.chapter,
                    &reference.howpublished,
                    &reference.doi,
                ];
                let query = fields
                    .into_iter()
                    .fold(sqlx::query(&sql).bind(&reference.bibtexkey), |q, field| {
                        q.bind(field.as_deref())
                    });
                debug!(bibtexkey = %reference.bibtexkey, "Inserting reference");
                query.execute(&mut *self.conn).await?.last_insert_rowid()
            }
        };

        self.cache
            .references
            .insert(reference.bibtexkey.clone(), id);
        Ok(id)
    }

    async fn language_id(&mut self, language: &Language) -> Result<i64, BuildError> {
        if let Some(id) = self.cache.languages.get(language.code()) {
            return Ok(*id);
        }
        let id = self
            .id_or_insert(
                "SELECT id FROM language WHERE code = ?",
                "INSERT INTO language (code) VALUES (?)",
                &[language.code().into()],
            )
            .await?;
        self.cache.languages.insert(language.code().to_string(), id);
        Ok(id)
    }

    async fn notation_id(&mut self, notation: &Notation) -> Result<i64, BuildError> {
        if let Some(id) = self.cache.notations.get(notation.name()) {
            return Ok(*id);
        }
        let id = self
            .id_or_insert(
                "SELECT id FROM notation WHERE name = ?",
                "INSERT INTO notation (name) VALUES (?)",
                &[notation.name().into()],
            )
            .await?;
        self.cache.notations.insert(notation.name().to_string(), id);
        Ok(id)
    }

    async fn element_id(&mut self, element: Element) -> Result<i64, BuildError> {
        if let Some(id) = self.cache.elements.get(&element) {
            return Ok(*id);
        }
        let id = self
            .id_or_insert(
                "SELECT id FROM element WHERE atomic_number = ?",
                "INSERT INTO element (atomic_number) VALUES (?)",
                &[element.z().into()],
            )
            .await?;
        self.cache.elements.insert(element, id);
        Ok(id)
    }

    async fn atomic_shell_id(&mut self, shell: AtomicShell) -> Result<i64, BuildError> {
        if let Some(id) = self.cache.atomic_shells.get(&shell) {
            return Ok(*id);
        }
        let id = self
            .id_or_insert(
                "SELECT id FROM atomic_shell WHERE principal_quantum_number = ?",
                "INSERT INTO atomic_shell (principal_quantum_number) VALUES (?)",
                &[shell.n().into()],
            )
            .await?;
        self.cache.atomic_shells.insert(shell, id);
        Ok(id)
    }

    async fn atomic_subshell_id(&mut self, subshell: AtomicSubshell) -> Result<i64, BuildError> {
        if let Some(id) = self.cache.atomic_subshells.get(&subshell) {
            return Ok(*id);
        }
        let shell_id = self.atomic_shell_id(subshell.atomic_shell()).await?;
        let id = self
            .id_or_insert(
                "SELECT id FROM atomic_subshell WHERE atomic_shell_id = ? \
                 AND azimuthal_quantum_number = ? AND total_angular_momentum_nominator = ?",
                "INSERT INTO atomic_subshell (atomic_shell_id, azimuthal_quantum_number, \
                 total_angular_momentum_nominator) VALUES (?, ?, ?)",
                &[shell_id.into(), subshell.l().into(), subshell.j_n().into()],
            )
            .await?;
        self.cache.atomic_subshells.insert(subshell, id);
        Ok(id)
    }

    async fn xray_transition_id(&mut self, transition: XrayTransition) -> Result<i64, BuildError> {
        if let Some(id) = self.cache.xray_transitions.get(&transition) {
            return Ok(*id);
        }
        let source_id = self.atomic_subshell_id(transition.source).await?;
        let destination_id = self.atomic_subshell_id(transition.destination).await?;
        let id = self
            .id_or_insert(
                "SELECT id FROM xray_transition \
                 WHERE source_subshell_id = ? AND destination_subshell_id = ?",
                "INSERT INTO xray_transition (source_subshell_id, destination_subshell_id) \
                 VALUES (?, ?)",
                &[source_id.into(), destination_id.into()],
            )
            .await?;
        self.cache.xray_transitions.insert(transition, id);
        Ok(id)
    }

    /// A set is identified by its exact members.
    async fn xray_transitionset_id(
        &mut self,
        set: &XrayTransitionSet,
    ) -> Result<i64, BuildError> {
        if let Some(id) = self.cache.xray_transitionsets.get(set) {
            return Ok(*id);
        }

        let mut member_ids = BTreeSet::new();
        for transition in set.transitions() {
            member_ids.insert(self.xray_transition_id(*transition).await?);
        }
        let count = member_ids.len() as i64;

        let placeholders = vec!["?"; member_ids.len()].join(", ");
        let select_sql = format!(
            "SELECT xray_transitionset.id FROM xray_transitionset \
             JOIN xray_transitionset_association \
             ON xray_transitionset_association.xray_transitionset_id = xray_transitionset.id \
             WHERE xray_transitionset.count = ? \
             AND xray_transitionset_association.xray_transition_id IN ({placeholders}) \
             GROUP BY xray_transitionset.id \
             HAVING COUNT(DISTINCT xray_transitionset_association.xray_transition_id) = ?"
        );
        let mut params: Vec<SqlParam> = vec![count.into()];
        params.extend(member_ids.iter().map(|id| SqlParam::Int(*id)));
        params.push(count.into());

        let existing = bind_params(&select_sql, &params)
            .fetch_optional(&mut *self.conn)
            .await?;
        let id = match existing {
            Some(row) => row.try_get(0)?,
            None => {
                let id = sqlx::query("INSERT INTO xray_transitionset (count) VALUES (?)")
                    .bind(count)
                    .execute(&mut *self.conn)
                    .await?
                    .last_insert_rowid();
                for member_id in &member_ids {
                    sqlx::query(
                        "INSERT INTO xray_transitionset_association \
                         (xray_transitionset_id, xray_transition_id) VALUES (?, ?)",
                    )
                    .bind(id)
                    .bind(member_id)
                    .execute(&mut *self.conn)
                    .await?;
                }
                id
            }
        };

        self.cache.xray_transitionsets.insert(set.clone(), id);
        Ok(id)
    }

    /// `INSERT OR REPLACE`, so a parser re-run updates values in place.
    async fn insert_row(
        &mut self,
        table: &str,
        columns: &[&str],
        params: Vec<SqlParam>,
    ) -> Result<(), BuildError> {
        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT OR REPLACE INTO {table} ({}) VALUES ({placeholders})",
            columns.join(", ")
        );
        bind_params(&sql, &params).execute(&mut *self.conn).await?;
        Ok(())
    }

    async fn insert_notation(
        &mut self,
        table: &str,
        entity_column: &str,
        reference_id: i64,
        entity_id: i64,
        notation: &Notation,
        values: &NotationValues,
    ) -> Result<(), BuildError> {
        let notation_id = self.notation_id(notation).await?;
        self.insert_row(
            table,
            &[
                "reference_id",
                entity_column,
                "notation_id",
                "ascii",
                "utf16",
                "html",
                "latex",
            ],
            vec![
                reference_id.into(),
                entity_id.into(),
                notation_id.into(),
                values.ascii.as_str().into(),
                values.utf16.as_str().into(),
                values.html.as_str().into(),
                values.latex.as_str().into(),
            ],
        )
        .await
    }

    /// Insert a value keyed by reference, element and one more entity.
    #[allow(clippy::too_many_arguments)]
    async fn insert_element_value(
        &mut self,
        table: &str,
        entity_column: &str,
        value_column: &str,
        reference_id: i64,
        element: Element,
        entity_id: i64,
        value: SqlParam,
    ) -> Result<(), BuildError> {
        let element_id = self.element_id(element).await?;
        self.insert_row(
            table,
            &["reference_id", "element_id", entity_column, value_column],
            vec![
                reference_id.into(),
                element_id.into(),
                entity_id.into(),
                value,
            ],
        )
        .await
    }

    async fn insert_property(&mut self, property: &Property) -> Result<(), BuildError> {
        let reference_id = self.reference_id(&property.reference).await?;

        match &property.record {
            PropertyRecord::ElementSymbol { element, symbol } => {
                let element_id = self.element_id(*element).await?;
                self.insert_row(
                    "element_symbol",
                    &["reference_id", "element_id", "symbol"],
                    vec![reference_id.into(), element_id.into(), symbol.as_str().into()],
                )
                .await
            }
            PropertyRecord::ElementName {
                element,
                language,
                name,
            } => {
                let element_id = self.element_id(*element).await?;
                let language_id = self.language_id(language).await?;
                self.insert_row(
                    "element_name",
                    &["reference_id", "element_id", "language_id", "name"],
                    vec![
                        reference_id.into(),
                        element_id.into(),
                        language_id.into(),
                        name.as_str().into(),
                    ],
                )
                .await
            }
            PropertyRecord::ElementAtomicWeight { element, value } => {
                let element_id = self.element_id(*element).await?;
                self.insert_row(
                    "element_atomic_weight",
                    &["reference_id", "element_id", "value"],
                    vec![reference_id.into(), element_id.into(), (*value).into()],
                )
                .await
            }
            PropertyRecord::ElementMassDensity {
                element,
                value_kg_per_m3,
            } => {
                let element_id = self.element_id(*element).await?;
                self.insert_row(
                    "element_mass_density",
                    &["reference_id", "element_id", "value_kg_per_m3"],
                    vec![
                        reference_id.into(),
                        element_id.into(),
                        (*value_kg_per_m3).into(),
                    ],
                )
                .await
            }
            PropertyRecord::AtomicShellNotation {
                atomic_shell,
                notation,
                values,
            } => {
                let shell_id = self.atomic_shell_id(*atomic_shell).await?;
                self.insert_notation(
                    "atomic_shell_notation",
                    "atomic_shell_id",
                    reference_id,
                    shell_id,
                    notation,
                    values,
                )
                .await
            }
            PropertyRecord::AtomicSubshellNotation {
                atomic_subshell,
                notation,
                values,
            } => {
                let subshell_id = self.atomic_subshell_id(*atomic_subshell).await?;
                self.insert_notation(
                    "atomic_subshell_notation",
                    "atomic_subshell_id",
                    reference_id,
                    subshell_id,
                    notation,
                    values,
                )
                .await
            }
            PropertyRecord::AtomicSubshellBindingEnergy {
                element,
                atomic_subshell,
                value_ev,
            } => {
                let subshell_id = self.atomic_subshell_id(*atomic_subshell).await?;
                self.insert_element_value(
                    "atomic_subshell_binding_energy",
                    "atomic_subshell_id",
                    "value_eV",
                    reference_id,
                    *element,
                    subshell_id,
                    (*value_ev).into(),
                )
                .await
            }
            PropertyRecord::AtomicSubshellRadiativeWidth {
                element,
                atomic_subshell,
                value_ev,
            } => {
                let subshell_id = self.atomic_subshell_id(*atomic_subshell).await?;
                self.insert_element_value(
                    "atomic_subshell_radiative_width",
                    "atomic_subshell_id",
                    "value_eV",
                    reference_id,
                    *element,
                    subshell_id,
                    (*value_ev).into(),
                )
                .await
            }
            PropertyRecord::AtomicSubshellNonRadiativeWidth {
                element,
                atomic_subshell,
                value_ev,
            } => {
                let subshell_id = self.atomic_subshell_id(*atomic_subshell).await?;
                self.insert_element_value(
                    "atomic_subshell_nonradiative_width",
                    "atomic_subshell_id",
                    "value_eV",
                    reference_id,
                    *element,
                    subshell_id,
                    (*value_ev).into(),
                )
                .await
            }
            PropertyRecord::AtomicSubshellOccupancy {
                element,
                atomic_subshell,
                value,
            } => {
                let subshell_id = self.atomic_subshell_id(*atomic_subshell).await?;
                self.insert_element_value(
                    "atomic_subshell_occupancy",
                    "atomic_subshell_id",
                    "value",
                    reference_id,
                    *element,
                    subshell_id,
                    (*value).into(),
                )
                .await
            }
            PropertyRecord::XrayTransitionNotation {
                xray_transition,
                notation,
                values,
            } => {
                let transition_id = self.xray_transition_id(*xray_transition).await?;
                self.insert_notation(
                    "xray_transition_notation",
                    "xray_transition_id",
                    reference_id,
                    transition_id,
                    notation,
                    values,
                )
                .await
            }
            PropertyRecord::XrayTransitionEnergy {
                element,
                xray_transition,
                value_ev,
            } => {
                let transition_id = self.xray_transition_id(*xray_transition).await?;
                self.insert_element_value(
                    "xray_transition_energy",
                    "xray_transition_id",
                    "value_eV",
                    reference_id,
                    *element,
                    transition_id,
                    (*value_ev).into(),
                )
                .await
            }
            PropertyRecord::XrayTransitionProbability {
                element,
                xray_transition,
                value,
            } => {
                let transition_id = self.xray_transition_id(*xray_transition).await?;
                self.insert_element_value(
                    "xray_transition_probability",
                    "xray_transition_id",
                    "value",
                    reference_id,
                    *element,
                    transition_id,
                    (*value).into(),
                )
                .await
            }
            PropertyRecord::XrayTransitionRelativeWeight {
                element,
                xray_transition,
                value,
            } => {
                let transition_id = self.xray_transition_id(*xray_transition).await?;
                self.insert_element_value(
                    "xray_transition_relative_weight",
                    "xray_transition_id",
                    "value",
                    reference_id,
                    *element,
                    transition_id,
                    (*value).into(),
                )
                .await
            }
            PropertyRecord::XrayTransitionSetNotation {
                xray_transitionset,
                notation,
                values,
            } => {
                let set_id = self.xray_transitionset_id(xray_transitionset).await?;
                self.insert_notation(
                    "xray_transitionset_notation",
                    "xray_transitionset_id",
                    reference_id,
                    set_id,
                    notation,
                    values,
                )
                .await
            }
            PropertyRecord::XrayTransitionSetEnergy {
                element,
                xray_transitionset,
                value_ev,
            } => {
                let set_id = self.xray_transitionset_id(xray_transitionset).await?;
                self.insert_element_value(
                    "xray_transitionset_energy",
                    "xray_transitionset_id",
                    "value_eV",
                    reference_id,
                    *element,
                    set_id,
                    (*value_ev).into(),
                )
                .await
            }
            PropertyRecord::XrayTransitionSetRelativeWeight {
                element,
                xray_transitionset,
                value,
            } => {
                let set_id = self.xray_transitionset_id(xray_transitionset).await?;
                self.insert_element_value(
                    "xray_transitionset_relative_weight",
                    "xray_transitionset_id",
                    "value",
                    reference_id,
                    *element,
                    set_id,
                    (*value).into(),
                )
                .await
            }
        }
    }
}

/// Transition weights normalised to the strongest line of the same
/// element, reference and destination shell.
const DERIVE_TRANSITION_RELATIVE_WEIGHTS: &str = "
    INSERT OR IGNORE INTO xray_transition_relative_weight
        (reference_id, element_id, xray_transition_id, value, derived)
    SELECT p.reference_id, p.element_id, p.xray_transition_id, p.value / g.max_value, 1
    FROM xray_transition_probability AS p
    JOIN xray_transition AS t ON t.id = p.xray_transition_id
    JOIN atomic_subshell AS d ON d.id = t.destination_subshell_id
    JOIN (
        SELECT p2.reference_id, p2.element_id, d2.atomic_shell_id, MAX(p2.value) AS max_value
        FROM xray_transition_probability AS p2
        JOIN xray_transition AS t2 ON t2.id = p2.xray_transition_id
        JOIN atomic_subshell AS d2 ON d2.id = t2.destination_subshell_id
        GROUP BY p2.reference_id, p2.element_id, d2.atomic_shell_id
    ) AS g
        ON g.reference_id = p.reference_id
        AND g.element_id = p.element_id
        AND g.atomic_shell_id = d.atomic_shell_id
    WHERE g.max_value > 0";

/// Probability-weighted mean energy, only when every member has both an
/// energy and a probability from the same reference.
const DERIVE_TRANSITIONSET_ENERGIES: &str = "
    INSERT OR IGNORE INTO xray_transitionset_energy
        (reference_id, element_id, xray_transitionset_id, value_eV, derived)
    SELECT e.reference_id, e.element_id, a.xray_transitionset_id,
           SUM(e.value_eV * p.value) / SUM(p.value), 1
    FROM xray_transitionset_association AS a
    JOIN xray_transitionset AS s ON s.id = a.xray_transitionset_id
    JOIN xray_transition_energy AS e ON e.xray_transition_id = a.xray_transition_id
    JOIN xray_transition_probability AS p
        ON p.xray_transition_id = a.xray_transition_id
        AND p.element_id = e.element_id
        AND p.reference_id = e.reference_id
    GROUP BY e.reference_id, e.element_id, a.xray_transitionset_id
    HAVING COUNT(*) = MAX(s.count) AND SUM(p.value) > 0";

const DERIVE_TRANSITIONSET_RELATIVE_WEIGHTS: &str = "
    INSERT OR IGNORE INTO xray_transitionset_relative_weight
        (reference_id, element_id, xray_transitionset_id, value, derived)
    SELECT w.reference_id, w.element_id, a.xray_transitionset_id, SUM(w.value), 1
    FROM xray_transitionset_association AS a
    JOIN xray_transition_relative_weight AS w ON w.xray_transition_id = a.xray_transition_id
    GROUP BY w.reference_id, w.element_id, a.xray_transitionset_id";

/// Recompute the derived tables. Returns the number of rows added.
///
/// Rows derived by an earlier build are dropped first, so they follow the
/// current probabilities and energies. Rows inserted by a parser are kept
/// and take precedence over derived ones.
async fn derive(conn: &mut SqliteConnection) -> Result<u64, BuildError> {
    for table in DERIVED_TABLES {
        let rows = sqlx::query(&format!("DELETE FROM {table} WHERE derived = 1"))
            .execute(&mut *conn)
            .await?
            .rows_affected();
        debug!(table, rows, "Dropped previously derived values");
    }

    let mut total = 0;
    for (name, sql) in [
        ("xray_transition_relative_weight", DERIVE_TRANSITION_RELATIVE_WEIGHTS),
        ("xray_transitionset_energy", DERIVE_TRANSITIONSET_ENERGIES),
        (
            "xray_transitionset_relative_weight",
            DERIVE_TRANSITIONSET_RELATIVE_WEIGHTS,
        ),
    ] {
        let rows = sqlx::query(sql).execute(&mut *conn).await?.rows_affected();
        debug!(table = name, rows, "Derived values");
        total += rows;
    }
    Ok(total)
}
