//! X-ray transition descriptors.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AtomicSubshell, DescriptorError};

/// Transition of an electron from `source` to fill a vacancy in `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct XrayTransition {
    pub source: AtomicSubshell,
    pub destination: AtomicSubshell,
}

impl XrayTransition {
    pub const fn new(source: AtomicSubshell, destination: AtomicSubshell) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Build a transition from two `(n, l, j_n)` triples.
    pub fn from_quantum_numbers(
        source: (u32, u32, u32),
        destination: (u32, u32, u32),
    ) -> Result<Self, DescriptorError> {
        Ok(Self::new(
            AtomicSubshell::try_from(source)?,
            AtomicSubshell::try_from(destination)?,
        ))
    }

    pub const fn source_subshell(&self) -> AtomicSubshell {
        self.source
    }

    pub const fn destination_subshell(&self) -> AtomicSubshell {
        self.destination
    }

    /// True when both subshells belong to the same shell.
    pub const fn is_coster_kronig(&self) -> bool {
        self.source.n() == self.destination.n()
    }

    /// Whether an electric dipole or quadrupole transition between the two
    /// subshells is permitted (selection rules after the NIST EPQ library).
    pub fn is_radiative(source: &AtomicSubshell, destination: &AtomicSubshell) -> bool {
        if source.n() == destination.n() {
            return false;
        }

        let delta_j_n = source.j_n().abs_diff(destination.j_n());
        let delta_l = source.l().abs_diff(destination.l());

        let electric_dipole = delta_j_n <= 2 && delta_l == 1;
        let electric_quadrupole = delta_j_n <= 4
            && !(source.j_n() == 1 && destination.j_n() == 1)
            && (delta_l == 0 || delta_l == 2);

        electric_dipole || electric_quadrupole
    }
}

impl fmt::Display for XrayTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let src = &self.source;
        let dst = &self.destination;
        write!(
            f,
            "XrayTransition([n={}, l={}, j={:.1}] -> [n={}, l={}, j={:.1}])",
            src.n(),
            src.l(),
            src.j(),
            dst.n(),
            dst.l(),
            dst.j()
        )
    }
}

/// Non-empty, unordered set of possible transitions.
///
/// Members are kept sorted and deduplicated so equality does not depend on
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<XrayTransition>", into = "Vec<XrayTransition>")]
pub struct XrayTransitionSet {
    possible_transitions: Vec<XrayTransition>,
}

impl XrayTransitionSet {
    pub fn new<I>(transitions: I) -> Result<Self, DescriptorError>
    where
        I: IntoIterator<Item = XrayTransition>,
    {
        let unique: BTreeSet<XrayTransition> = transitions.into_iter().collect();
        if unique.is_empty() {
            return Err(DescriptorError::EmptyTransitionSet);
        }
        Ok(Self {
            possible_transitions: unique.into_iter().collect(),
        })
    }

    pub fn transitions(&self) -> &[XrayTransition] {
        &self.possible_transitions
    }

    pub fn len(&self) -> usize {
        self.possible_transitions.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.possible_transitions.is_empty()
    }

    pub fn contains(&self, transition: &XrayTransition) -> bool {
        self.possible_transitions.binary_search(transition).is_ok()
    }
}

impl TryFrom<Vec<XrayTransition>> for XrayTransitionSet {
    type Error = DescriptorError;

    fn try_from(value: Vec<XrayTransition>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<XrayTransitionSet> for Vec<XrayTransition> {
    fn from(set: XrayTransitionSet) -> Self {
        set.possible_transitions
    }
}

impl fmt::Display for XrayTransitionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "XrayTransitionSet({} possible transitions)",
            self.possible_transitions.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subshell(n: u32, l: u32, j_n: u32) -> AtomicSubshell {
        AtomicSubshell::new(n, l, j_n).unwrap()
    }

    #[test]
    fn test_is_radiative_ka1() {
        // K-L3
        assert!(XrayTransition::is_radiative(&subshell(2, 1, 3), &subshell(1, 0, 1)));
    }

    #[test]
    fn test_is_radiative_forbidden_s_to_s() {
        // K-L1: dipole needs |dl| = 1, quadrupole forbids j 1/2 -> 1/2
        assert!(!XrayTransition::is_radiative(&subshell(2, 0, 1), &subshell(1, 0, 1)));
    }

    #[test]
    fn test_is_radiative_same_shell() {
        assert!(!XrayTransition::is_radiative(&subshell(2, 1, 3), &subshell(2, 0, 1)));
    }

    #[test]
    fn test_is_radiative_quadrupole() {
        // K-M4 (3d3/2 -> 1s1/2) is an allowed quadrupole line
        assert!(XrayTransition::is_radiative(&subshell(3, 2, 3), &subshell(1, 0, 1)));
        // K-M5 (3d5/2 -> 1s1/2): delta j_n = 4, delta l = 2
        assert!(XrayTransition::is_radiative(&subshell(3, 2, 5), &subshell(1, 0, 1)));
        // K-N7 (4f7/2 -> 1s1/2): delta j_n = 6
        assert!(!XrayTransition::is_radiative(&subshell(4, 3, 7), &subshell(1, 0, 1)));
    }

    #[test]
    fn test_transition_from_quantum_numbers() {
        let t = XrayTransition::from_quantum_numbers((2, 1, 3), (1, 0, 1)).unwrap();
        assert_eq!(t.source_subshell(), subshell(2, 1, 3));
        assert!(!t.is_coster_kronig());
        assert!(XrayTransition::from_quantum_numbers((2, 2, 3), (1, 0, 1)).is_err());
    }

    #[test]
    fn test_transition_set_dedup_and_order() {
        let ka1 = XrayTransition::new(subshell(2, 1, 3), subshell(1, 0, 1));
        let ka2 = XrayTransition::new(subshell(2, 1, 1), subshell(1, 0, 1));

        let a = XrayTransitionSet::new([ka1, ka2, ka1]).unwrap();
        let b = XrayTransitionSet::new([ka2, ka1]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert!(a.contains(&ka1));
        assert_eq!(a.to_string(), "XrayTransitionSet(2 possible transitions)");
    }

    #[test]
    fn test_transition_set_empty() {
        assert_eq!(
            XrayTransitionSet::new(Vec::new()).unwrap_err(),
            DescriptorError::EmptyTransitionSet
        );
    }
}
