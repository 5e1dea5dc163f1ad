//! X-ray database port.
//!
//! This is the query interface over the property database. Implementations
//! handle all storage details internally; every signature uses domain types.

use async_trait::async_trait;
use tracing::debug;

use super::DatabaseError;
use crate::descriptor::{
    AtomicShell, AtomicSubshell, Element, Notation, XrayLine, XrayTransition, XrayTransitionSet,
};
use crate::query::{
    AtomicShellQuery, AtomicSubshellQuery, ElementQuery, Encoding, XrayLineQuery,
    XrayTransitionQuery, XrayTransitionSetQuery,
};

/// Query interface over X-ray physical data.
///
/// # Reference resolution
///
/// Every property lookup takes an optional reference key. When `None`, the
/// default reference configured for that property is used; when no default
/// is configured, the first reference inserted for the value wins.
///
/// # Errors
///
/// Lookups return `DatabaseError::NotFound` when the entity or the value
/// does not exist.
#[async_trait]
pub trait XrayDatabase: Send + Sync {
    async fn element(&self, element: &ElementQuery) -> Result<Element, DatabaseError>;

    async fn element_atomic_number(&self, element: &ElementQuery) -> Result<u8, DatabaseError> {
        Ok(self.element(element).await?.atomic_number())
    }

    async fn element_symbol(
        &self,
        element: &ElementQuery,
        reference: Option<&str>,
    ) -> Result<String, DatabaseError>;

    async fn element_name(
        &self,
        element: &ElementQuery,
        language: &str,
        reference: Option<&str>,
    ) -> Result<String, DatabaseError>;

    async fn element_atomic_weight(
        &self,
        element: &ElementQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError>;

    async fn element_mass_density_kg_per_m3(
        &self,
        element: &ElementQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError>;

    async fn element_mass_density_g_per_cm3(
        &self,
        element: &ElementQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        Ok(self
            .element_mass_density_kg_per_m3(element, reference)
            .await?
            / 1000.0)
    }

    /// Transitions with a non-zero probability for the element, optionally
    /// restricted to the members of a transition set.
    async fn element_xray_transitions(
        &self,
        element: &ElementQuery,
        xray_transitionset: Option<&XrayTransitionSetQuery>,
        reference: Option<&str>,
    ) -> Result<Vec<XrayTransition>, DatabaseError>;

    async fn atomic_shell(&self, atomic_shell: &AtomicShellQuery)
    -> Result<AtomicShell, DatabaseError>;

    async fn atomic_shell_notation(
        &self,
        atomic_shell: &AtomicShellQuery,
        notation: &str,
        encoding: Encoding,
        reference: Option<&str>,
    ) -> Result<String, DatabaseError>;

    async fn atomic_subshell(
        &self,
        atomic_subshell: &AtomicSubshellQuery,
    ) -> Result<AtomicSubshell, DatabaseError>;

    async fn atomic_subshell_notation(
        &self,
        atomic_subshell: &AtomicSubshellQuery,
        notation: &str,
        encoding: Encoding,
        reference: Option<&str>,
    ) -> Result<String, DatabaseError>;

    async fn atomic_subshell_binding_energy_ev(
        &self,
        element: &ElementQuery,
        atomic_subshell: &AtomicSubshellQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError>;

    async fn atomic_subshell_radiative_width_ev(
        &self,
        element: &ElementQuery,
        atomic_subshell: &AtomicSubshellQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError>;

    async fn atomic_subshell_nonradiative_width_ev(
        &self,
        element: &ElementQuery,
        atomic_subshell: &AtomicSubshellQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError>;

    async fn atomic_subshell_occupancy(
        &self,
        element: &ElementQuery,
        atomic_subshell: &AtomicSubshellQuery,
        reference: Option<&str>,
    ) -> Result<u32, DatabaseError>;

    async fn xray_transition(
        &self,
        xray_transition: &XrayTransitionQuery,
    ) -> Result<XrayTransition, DatabaseError>;

    async fn xray_transition_notation(
        &self,
        xray_transition: &XrayTransitionQuery,
        notation: &str,
        encoding: Encoding,
        reference: Option<&str>,
    ) -> Result<String, DatabaseError>;

    async fn xray_transition_energy_ev(
        &self,
        element: &ElementQuery,
        xray_transition: &XrayTransitionQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError>;

    async fn xray_transition_probability(
        &self,
        element: &ElementQuery,
        xray_transition: &XrayTransitionQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError>;

    async fn xray_transition_relative_weight(
        &self,
        element: &ElementQuery,
        xray_transition: &XrayTransitionQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError>;

    async fn xray_transitionset(
        &self,
        xray_transitionset: &XrayTransitionSetQuery,
    ) -> Result<XrayTransitionSet, DatabaseError>;

    async fn xray_transitionset_notation(
        &self,
        xray_transitionset: &XrayTransitionSetQuery,
        notation: &str,
        encoding: Encoding,
        reference: Option<&str>,
    ) -> Result<String, DatabaseError>;

    async fn xray_transitionset_energy_ev(
        &self,
        element: &ElementQuery,
        xray_transitionset: &XrayTransitionSetQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError>;

    async fn xray_transitionset_relative_weight(
        &self,
        element: &ElementQuery,
        xray_transitionset: &XrayTransitionSetQuery,
        reference: Option<&str>,
    ) -> Result<f64, DatabaseError>;

    /// Resolve an X-ray line of an element.
    ///
    /// A notation is tried as a transition first, then as a transition set.
    /// The Siegbahn name falls back to the IUPAC one when the line has none.
    async fn xray_line(
        &self,
        element: &ElementQuery,
        line: &XrayLineQuery,
        reference: Option<&str>,
    ) -> Result<XrayLine, DatabaseError> {
        let element_descriptor = self.element(element).await?;

        let line = match line {
            XrayLineQuery::Transition(query) => LineTarget::Transition(query.clone()),
            XrayLineQuery::TransitionSet(query) => LineTarget::TransitionSet(query.clone()),
            XrayLineQuery::Notation(notation) => {
                let as_transition = XrayTransitionQuery::Notation(notation.clone());
                match self.xray_transition(&as_transition).await {
                    Ok(_) => LineTarget::Transition(as_transition),
                    Err(DatabaseError::NotFound(_)) => LineTarget::TransitionSet(
                        XrayTransitionSetQuery::Notation(notation.clone()),
                    ),
                    Err(e) => return Err(e),
                }
            }
        };

        match line {
            LineTarget::Transition(query) => {
                let transition = self.xray_transition(&query).await?;
                let query = XrayTransitionQuery::from(transition);
                let iupac = self
                    .xray_transition_notation(&query, Notation::IUPAC, Encoding::Utf16, None)
                    .await?;
                let siegbahn = optional(
                    self.xray_transition_notation(
                        &query,
                        Notation::SIEGBAHN,
                        Encoding::Utf16,
                        None,
                    )
                    .await,
                )?
                .unwrap_or_else(|| iupac.clone());
                let energy_ev = self
                    .xray_transition_energy_ev(element, &query, reference)
                    .await?;

                debug!(%transition, energy_ev, "Resolved X-ray line from transition");
                Ok(XrayLine {
                    element: element_descriptor,
                    transitions: vec![transition],
                    iupac,
                    siegbahn,
                    energy_ev,
                })
            }
            LineTarget::TransitionSet(query) => {
                let set = self.xray_transitionset(&query).await?;
                let query = XrayTransitionSetQuery::from(set.clone());
                let iupac = self
                    .xray_transitionset_notation(&query, Notation::IUPAC, Encoding::Utf16, None)
                    .await?;
                let siegbahn = optional(
                    self.xray_transitionset_notation(
                        &query,
                        Notation::SIEGBAHN,
                        Encoding::Utf16,
                        None,
                    )
                    .await,
                )?
                .unwrap_or_else(|| iupac.clone());
                let energy_ev = self
                    .xray_transitionset_energy_ev(element, &query, reference)
                    .await?;

                debug!(%set, energy_ev, "Resolved X-ray line from transition set");
                Ok(XrayLine {
                    element: element_descriptor,
                    transitions: set.into(),
                    iupac,
                    siegbahn,
                    energy_ev,
                })
            }
        }
    }

    /// Default reference configured for a property, if any.
    ///
    /// Returns `DatabaseError::UnknownProperty` for names that are not a
    /// [`PropertyKind`](crate::property::PropertyKind).
    fn default_reference(&self, property: &str) -> Result<Option<String>, DatabaseError>;

    /// Set (or clear, with `None`) the default reference of a property.
    fn set_default_reference(
        &self,
        property: &str,
        reference: Option<&str>,
    ) -> Result<(), DatabaseError>;
}

/// Line lookup after notation disambiguation.
enum LineTarget {
    Transition(XrayTransitionQuery),
    TransitionSet(XrayTransitionSetQuery),
}

/// Turn a `NotFound` into `Ok(None)`, keeping every other error.
pub fn optional<T>(result: Result<T, DatabaseError>) -> Result<Option<T>, DatabaseError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DatabaseError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
