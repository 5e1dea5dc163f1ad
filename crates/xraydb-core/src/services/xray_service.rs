//! X-ray service - convenience lookups composed over the database port.

use std::sync::Arc;

use crate::descriptor::{Element, Notation, XrayLine, XrayTransition};
use crate::ports::{CoreError, DatabaseError, XrayDatabase, optional};
use crate::property::PropertyKind;
use crate::query::{
    AtomicSubshellQuery, ElementQuery, Encoding, XrayLineQuery, XrayTransitionQuery,
    XrayTransitionSetQuery,
};

/// What is known about an element; missing values are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSummary {
    pub element: Element,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub atomic_weight: Option<f64>,
    pub mass_density_kg_per_m3: Option<f64>,
}

/// One transition of an element with its tabulated values.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionSummary {
    pub transition: XrayTransition,
    pub iupac: Option<String>,
    pub energy_ev: Option<f64>,
    pub probability: Option<f64>,
}

/// Service over the property database.
pub struct XrayService {
    db: Arc<dyn XrayDatabase>,
}

impl XrayService {
    pub fn new(db: Arc<dyn XrayDatabase>) -> Self {
        Self { db }
    }

    /// Direct access to the database port.
    pub fn database(&self) -> &Arc<dyn XrayDatabase> {
        &self.db
    }

    pub async fn element_summary(
        &self,
        element: &ElementQuery,
        language: &str,
    ) -> Result<ElementSummary, CoreError> {
        let descriptor = self.db.element(element).await?;
        let query = ElementQuery::from(descriptor);

        Ok(ElementSummary {
            element: descriptor,
            symbol: optional(self.db.element_symbol(&query, None).await)?,
            name: optional(self.db.element_name(&query, language, None).await)?,
            atomic_weight: optional(self.db.element_atomic_weight(&query, None).await)?,
            mass_density_kg_per_m3: optional(
                self.db.element_mass_density_kg_per_m3(&query, None).await,
            )?,
        })
    }

    pub async fn xray_line(
        &self,
        element: &ElementQuery,
        line: &XrayLineQuery,
        reference: Option<&str>,
    ) -> Result<XrayLine, CoreError> {
        Ok(self.db.xray_line(element, line, reference).await?)
    }

    /// Transitions of an element, highest energy first; unknown energies last.
    pub async fn transitions_of(
        &self,
        element: &ElementQuery,
        xray_transitionset: Option<&XrayTransitionSetQuery>,
    ) -> Result<Vec<TransitionSummary>, CoreError> {
        let transitions = self
            .db
            .element_xray_transitions(element, xray_transitionset, None)
            .await?;

        let mut summaries = Vec::with_capacity(transitions.len());
        for transition in transitions {
            let query = XrayTransitionQuery::from(transition);
            summaries.push(TransitionSummary {
                transition,
                iupac: optional(
                    self.db
                        .xray_transition_notation(&query, Notation::IUPAC, Encoding::Utf16, None)
                        .await,
                )?,
                energy_ev: optional(self.db.xray_transition_energy_ev(element, &query, None).await)?,
                probability: optional(
                    self.db
                        .xray_transition_probability(element, &query, None)
                        .await,
                )?,
            });
        }

        summaries.sort_by(|a, b| match (a.energy_ev, b.energy_ev) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.transition.cmp(&b.transition),
        });
        Ok(summaries)
    }

    /// Look up one numeric property of an element.
    ///
    /// `target` is the subshell, transition or transition set the property
    /// belongs to; element-level properties take none.
    pub async fn numeric_property(
        &self,
        kind: PropertyKind,
        element: &ElementQuery,
        target: Option<&str>,
        reference: Option<&str>,
    ) -> Result<f64, CoreError> {
        let db = &self.db;
        let value = match kind {
            PropertyKind::ElementAtomicWeight => {
                db.element_atomic_weight(element, reference).await?
            }
            PropertyKind::ElementMassDensity => {
                db.element_mass_density_kg_per_m3(element, reference).await?
            }
            PropertyKind::AtomicSubshellBindingEnergy => {
                let subshell = subshell_target(kind, target)?;
                db.atomic_subshell_binding_energy_ev(element, &subshell, reference)
                    .await?
            }
            PropertyKind::AtomicSubshellRadiativeWidth => {
                let subshell = subshell_target(kind, target)?;
                db.atomic_subshell_radiative_width_ev(element, &subshell, reference)
                    .await?
            }
            PropertyKind::AtomicSubshellNonRadiativeWidth => {
                let subshell = subshell_target(kind, target)?;
                db.atomic_subshell_nonradiative_width_ev(element, &subshell, reference)
                    .await?
            }
            PropertyKind::AtomicSubshellOccupancy => {
                let subshell = subshell_target(kind, target)?;
                f64::from(
                    db.atomic_subshell_occupancy(element, &subshell, reference)
                        .await?,
                )
            }
            PropertyKind::XrayTransitionEnergy => {
                let transition = XrayTransitionQuery::from(require_target(kind, target)?);
                db.xray_transition_energy_ev(element, &transition, reference)
                    .await?
            }
            PropertyKind::XrayTransitionProbability => {
                let transition = XrayTransitionQuery::from(require_target(kind, target)?);
                db.xray_transition_probability(element, &transition, reference)
                    .await?
            }
            PropertyKind::XrayTransitionRelativeWeight => {
                let transition = XrayTransitionQuery::from(require_target(kind, target)?);
                db.xray_transition_relative_weight(element, &transition, reference)
                    .await?
            }
            PropertyKind::XrayTransitionSetEnergy => {
                let set = XrayTransitionSetQuery::from(require_target(kind, target)?);
                db.xray_transitionset_energy_ev(element, &set, reference)
                    .await?
            }
            PropertyKind::XrayTransitionSetRelativeWeight => {
                let set = XrayTransitionSetQuery::from(require_target(kind, target)?);
                db.xray_transitionset_relative_weight(element, &set, reference)
                    .await?
            }
            PropertyKind::ElementSymbol
            | PropertyKind::ElementName
            | PropertyKind::AtomicShellNotation
            | PropertyKind::AtomicSubshellNotation
            | PropertyKind::XrayTransitionNotation
            | PropertyKind::XrayTransitionSetNotation => {
                return Err(CoreError::Validation(format!(
                    "'{kind}' is not a numeric property"
                )));
            }
        };
        Ok(value)
    }
}

fn require_target(kind: PropertyKind, target: Option<&str>) -> Result<&str, CoreError> {
    target.ok_or_else(|| CoreError::Validation(format!("'{kind}' requires a target")))
}

fn subshell_target(
    kind: PropertyKind,
    target: Option<&str>,
) -> Result<AtomicSubshellQuery, CoreError> {
    let target = require_target(kind, target)?;
    target
        .parse::<AtomicSubshellQuery>()
        .map_err(|e| CoreError::Database(DatabaseError::InvalidQuery(e.to_string())))
}
