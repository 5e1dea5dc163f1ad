//! Lookup inputs accepted by [`XrayDatabase`](crate::ports::XrayDatabase).
//!
//! Every entity can be looked up by its descriptor (or the numbers that
//! make it up) or by a notation string in any notation system.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::descriptor::{
    AtomicShell, AtomicSubshell, Element, XrayTransition, XrayTransitionSet,
};

/// Element lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementQuery {
    AtomicNumber(u8),
    /// Symbol or name (any language), case-insensitive.
    Text(String),
}

impl From<Element> for ElementQuery {
    fn from(element: Element) -> Self {
        Self::AtomicNumber(element.atomic_number())
    }
}

impl From<u8> for ElementQuery {
    fn from(z: u8) -> Self {
        Self::AtomicNumber(z)
    }
}

impl From<&str> for ElementQuery {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ElementQuery {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl FromStr for ElementQuery {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(s.parse::<u8>()
            .map_or_else(|_| Self::Text(s.to_string()), Self::AtomicNumber))
    }
}

/// Atomic shell lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomicShellQuery {
    Number(u32),
    Notation(String),
}

impl From<AtomicShell> for AtomicShellQuery {
    fn from(shell: AtomicShell) -> Self {
        Self::Number(shell.n())
    }
}

impl From<u32> for AtomicShellQuery {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for AtomicShellQuery {
    fn from(notation: &str) -> Self {
        Self::Notation(notation.to_string())
    }
}

impl FromStr for AtomicShellQuery {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(s.parse::<u32>()
            .map_or_else(|_| Self::Notation(s.to_string()), Self::Number))
    }
}

/// Atomic subshell lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomicSubshellQuery {
    QuantumNumbers(u32, u32, u32),
    Notation(String),
}

impl From<AtomicSubshell> for AtomicSubshellQuery {
    fn from(subshell: AtomicSubshell) -> Self {
        Self::QuantumNumbers(subshell.n(), subshell.l(), subshell.j_n())
    }
}

impl From<(u32, u32, u32)> for AtomicSubshellQuery {
    fn from((n, l, j_n): (u32, u32, u32)) -> Self {
        Self::QuantumNumbers(n, l, j_n)
    }
}

impl From<&str> for AtomicSubshellQuery {
    fn from(notation: &str) -> Self {
        Self::Notation(notation.to_string())
    }
}

impl FromStr for AtomicSubshellQuery {
    type Err = Infallible;

    /// `"2,1,3"` parses as quantum numbers; anything else is a notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(parse_triple(s)
            .map_or_else(|| Self::Notation(s.to_string()), |(n, l, j_n)| {
                Self::QuantumNumbers(n, l, j_n)
            }))
    }
}

fn parse_triple(s: &str) -> Option<(u32, u32, u32)> {
    let parts: Vec<u32> = s
        .split(',')
        .map(|p| p.trim().parse().ok())
        .collect::<Option<_>>()?;
    match parts.as_slice() {
        [n, l, j_n] => Some((*n, *l, *j_n)),
        _ => None,
    }
}

/// X-ray transition lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XrayTransitionQuery {
    /// Source and destination subshells.
    Subshells(AtomicSubshell, AtomicSubshell),
    Notation(String),
}

impl From<XrayTransition> for XrayTransitionQuery {
    fn from(transition: XrayTransition) -> Self {
        Self::Subshells(transition.source, transition.destination)
    }
}

impl From<(AtomicSubshell, AtomicSubshell)> for XrayTransitionQuery {
    fn from((source, destination): (AtomicSubshell, AtomicSubshell)) -> Self {
        Self::Subshells(source, destination)
    }
}

impl From<&str> for XrayTransitionQuery {
    fn from(notation: &str) -> Self {
        Self::Notation(notation.to_string())
    }
}

/// X-ray transition set lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XrayTransitionSetQuery {
    /// Matches the stored set whose members are exactly these transitions.
    Transitions(Vec<XrayTransition>),
    Notation(String),
}

impl From<XrayTransitionSet> for XrayTransitionSetQuery {
    fn from(set: XrayTransitionSet) -> Self {
        Self::Transitions(set.into())
    }
}

impl From<Vec<XrayTransition>> for XrayTransitionSetQuery {
    fn from(transitions: Vec<XrayTransition>) -> Self {
        Self::Transitions(transitions)
    }
}

impl From<&str> for XrayTransitionSetQuery {
    fn from(notation: &str) -> Self {
        Self::Notation(notation.to_string())
    }
}

/// X-ray line lookup: either a single transition or a transition set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XrayLineQuery {
    Transition(XrayTransitionQuery),
    TransitionSet(XrayTransitionSetQuery),
    /// Tried as a transition notation first, then as a transition set notation.
    Notation(String),
}

impl From<XrayTransition> for XrayLineQuery {
    fn from(transition: XrayTransition) -> Self {
        Self::Transition(transition.into())
    }
}

impl From<XrayTransitionSet> for XrayLineQuery {
    fn from(set: XrayTransitionSet) -> Self {
        Self::TransitionSet(set.into())
    }
}

impl From<&str> for XrayLineQuery {
    fn from(notation: &str) -> Self {
        Self::Notation(notation.to_string())
    }
}

/// Text encoding of a notation.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Encoding {
    Ascii,
    #[default]
    Utf16,
    Html,
    Latex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_query_from_str() {
        assert_eq!("26".parse::<ElementQuery>().unwrap(), ElementQuery::AtomicNumber(26));
        assert_eq!(
            "Fe".parse::<ElementQuery>().unwrap(),
            ElementQuery::Text("Fe".to_string())
        );
        // Out of u8 range falls back to text and will simply not be found
        assert_eq!(
            "300".parse::<ElementQuery>().unwrap(),
            ElementQuery::Text("300".to_string())
        );
    }

    #[test]
    fn test_subshell_query_from_str() {
        assert_eq!(
            "2, 1, 3".parse::<AtomicSubshellQuery>().unwrap(),
            AtomicSubshellQuery::QuantumNumbers(2, 1, 3)
        );
        assert_eq!(
            "L3".parse::<AtomicSubshellQuery>().unwrap(),
            AtomicSubshellQuery::Notation("L3".to_string())
        );
        assert_eq!(
            "2,1".parse::<AtomicSubshellQuery>().unwrap(),
            AtomicSubshellQuery::Notation("2,1".to_string())
        );
    }

    #[test]
    fn test_encoding_strings() {
        assert_eq!(Encoding::default(), Encoding::Utf16);
        assert_eq!("LaTeX".parse::<Encoding>().unwrap(), Encoding::Latex);
        assert_eq!(Encoding::Html.as_ref(), "html");
        assert!("binary".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_descriptor_conversions() {
        let fe = Element::new(26).unwrap();
        assert_eq!(ElementQuery::from(fe), ElementQuery::AtomicNumber(26));

        let l3 = AtomicSubshell::new(2, 1, 3).unwrap();
        assert_eq!(
            AtomicSubshellQuery::from(l3),
            AtomicSubshellQuery::QuantumNumbers(2, 1, 3)
        );
    }
}
