//! Property records produced by parsers and stored by the database.
//!
//! A [`Property`] is one value of one property table, attributed to a
//! [`Reference`]. The record body ([`PropertyRecord`]) is serializable
//! and tagged by `kind`, which is also the format of JSON datasets.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::descriptor::{
    AtomicShell, AtomicSubshell, Element, Language, Notation, Reference, XrayTransition,
    XrayTransitionSet,
};
use crate::query::Encoding;

/// Names of the queryable properties.
///
/// These names are the keys used for default references in settings.
/// Unit-suffixed aliases (`*_ev`, `*_kg_per_m3`) are accepted on parse.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum PropertyKind {
    ElementSymbol,
    ElementName,
    ElementAtomicWeight,
    #[strum(
        to_string = "element_mass_density",
        serialize = "element_mass_density_kg_per_m3",
        serialize = "element_mass_density_g_per_cm3"
    )]
    ElementMassDensity,
    AtomicShellNotation,
    AtomicSubshellNotation,
    #[strum(
        to_string = "atomic_subshell_binding_energy",
        serialize = "atomic_subshell_binding_energy_ev"
    )]
    AtomicSubshellBindingEnergy,
    #[strum(
        to_string = "atomic_subshell_radiative_width",
        serialize = "atomic_subshell_radiative_width_ev"
    )]
    AtomicSubshellRadiativeWidth,
    #[strum(
        to_string = "atomic_subshell_nonradiative_width",
        serialize = "atomic_subshell_nonradiative_width_ev"
    )]
    AtomicSubshellNonRadiativeWidth,
    AtomicSubshellOccupancy,
    XrayTransitionNotation,
    #[strum(
        to_string = "xray_transition_energy",
        serialize = "xray_transition_energy_ev"
    )]
    XrayTransitionEnergy,
    XrayTransitionProbability,
    XrayTransitionRelativeWeight,
    #[strum(to_string = "xray_transitionset_notation")]
    XrayTransitionSetNotation,
    #[strum(
        to_string = "xray_transitionset_energy",
        serialize = "xray_transitionset_energy_ev"
    )]
    XrayTransitionSetEnergy,
    #[strum(to_string = "xray_transitionset_relative_weight")]
    XrayTransitionSetRelativeWeight,
}

/// A notation rendered in every supported encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotationValues {
    pub ascii: String,
    pub utf16: String,
    pub html: String,
    pub latex: String,
}

impl NotationValues {
    pub fn new(ascii: &str, utf16: &str, html: &str, latex: &str) -> Self {
        Self {
            ascii: ascii.to_string(),
            utf16: utf16.to_string(),
            html: html.to_string(),
            latex: latex.to_string(),
        }
    }

    /// Same text in all four encodings.
    pub fn uniform(value: &str) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn get(&self, encoding: Encoding) -> &str {
        match encoding {
            Encoding::Ascii => &self.ascii,
            Encoding::Utf16 => &self.utf16,
            Encoding::Html => &self.html,
            Encoding::Latex => &self.latex,
        }
    }
}

/// Body of a property, without its reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyRecord {
    ElementSymbol {
        element: Element,
        symbol: String,
    },
    ElementName {
        element: Element,
        language: Language,
        name: String,
    },
    ElementAtomicWeight {
        element: Element,
        value: f64,
    },
    ElementMassDensity {
        element: Element,
        value_kg_per_m3: f64,
    },
    AtomicShellNotation {
        atomic_shell: AtomicShell,
        notation: Notation,
        values: NotationValues,
    },
    AtomicSubshellNotation {
        atomic_subshell: AtomicSubshell,
        notation: Notation,
        values: NotationValues,
    },
    AtomicSubshellBindingEnergy {
        element: Element,
        atomic_subshell: AtomicSubshell,
        value_ev: f64,
    },
    AtomicSubshellRadiativeWidth {
        element: Element,
        atomic_subshell: AtomicSubshell,
        value_ev: f64,
    },
    #[serde(rename = "atomic_subshell_nonradiative_width")]
    AtomicSubshellNonRadiativeWidth {
        element: Element,
        atomic_subshell: AtomicSubshell,
        value_ev: f64,
    },
    AtomicSubshellOccupancy {
        element: Element,
        atomic_subshell: AtomicSubshell,
        value: u32,
    },
    XrayTransitionNotation {
        xray_transition: XrayTransition,
        notation: Notation,
        values: NotationValues,
    },
    XrayTransitionEnergy {
        element: Element,
        xray_transition: XrayTransition,
        value_ev: f64,
    },
    XrayTransitionProbability {
        element: Element,
        xray_transition: XrayTransition,
        value: f64,
    },
    XrayTransitionRelativeWeight {
        element: Element,
        xray_transition: XrayTransition,
        value: f64,
    },
    #[serde(rename = "xray_transitionset_notation")]
    XrayTransitionSetNotation {
        xray_transitionset: XrayTransitionSet,
        notation: Notation,
        values: NotationValues,
    },
    #[serde(rename = "xray_transitionset_energy")]
    XrayTransitionSetEnergy {
        element: Element,
        xray_transitionset: XrayTransitionSet,
        value_ev: f64,
    },
    #[serde(rename = "xray_transitionset_relative_weight")]
    XrayTransitionSetRelativeWeight {
        element: Element,
        xray_transitionset: XrayTransitionSet,
        value: f64,
    },
}

impl PropertyRecord {
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::ElementSymbol { .. } => PropertyKind::ElementSymbol,
            Self::ElementName { .. } => PropertyKind::ElementName,
            Self::ElementAtomicWeight { .. } => PropertyKind::ElementAtomicWeight,
            Self::ElementMassDensity { .. } => PropertyKind::ElementMassDensity,
            Self::AtomicShellNotation { .. } => PropertyKind::AtomicShellNotation,
            Self::AtomicSubshellNotation { .. } => PropertyKind::AtomicSubshellNotation,
            Self::AtomicSubshellBindingEnergy { .. } => PropertyKind::AtomicSubshellBindingEnergy,
            Self::AtomicSubshellRadiativeWidth { .. } => {
                PropertyKind::AtomicSubshellRadiativeWidth
            }
            Self::AtomicSubshellNonRadiativeWidth { .. } => {
                PropertyKind::AtomicSubshellNonRadiativeWidth
            }
            Self::AtomicSubshellOccupancy { .. } => PropertyKind::AtomicSubshellOccupancy,
            Self::XrayTransitionNotation { .. } => PropertyKind::XrayTransitionNotation,
            Self::XrayTransitionEnergy { .. } => PropertyKind::XrayTransitionEnergy,
            Self::XrayTransitionProbability { .. } => PropertyKind::XrayTransitionProbability,
            Self::XrayTransitionRelativeWeight { .. } => {
                PropertyKind::XrayTransitionRelativeWeight
            }
            Self::XrayTransitionSetNotation { .. } => PropertyKind::XrayTransitionSetNotation,
            Self::XrayTransitionSetEnergy { .. } => PropertyKind::XrayTransitionSetEnergy,
            Self::XrayTransitionSetRelativeWeight { .. } => {
                PropertyKind::XrayTransitionSetRelativeWeight
            }
        }
    }
}

/// A property value attributed to a reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub reference: Reference,
    pub record: PropertyRecord,
}

impl Property {
    pub const fn new(reference: Reference, record: PropertyRecord) -> Self {
        Self { reference, record }
    }

    pub const fn kind(&self) -> PropertyKind {
        self.record.kind()
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.kind(), self.reference.bibtexkey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_property_kind_names_round_trip() {
        for kind in PropertyKind::iter() {
            let name = kind.to_string();
            assert_eq!(name.parse::<PropertyKind>().unwrap(), kind, "{name}");
        }
    }

    #[test]
    fn test_property_kind_aliases() {
        assert_eq!(
            "element_mass_density_kg_per_m3".parse::<PropertyKind>().unwrap(),
            PropertyKind::ElementMassDensity
        );
        assert_eq!(
            "xray_transition_energy_ev".parse::<PropertyKind>().unwrap(),
            PropertyKind::XrayTransitionEnergy
        );
        assert!("foo".parse::<PropertyKind>().is_err());
    }

    #[test]
    fn test_record_json_shape() {
        let json = r#"{
            "kind": "xray_transition_energy",
            "element": 26,
            "xray_transition": {"source": [2, 1, 3], "destination": [1, 0, 1]},
            "value_ev": 6403.84
        }"#;
        let record: PropertyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind(), PropertyKind::XrayTransitionEnergy);

        let bad = r#"{"kind": "element_atomic_weight", "element": 0, "value": 1.0}"#;
        assert!(serde_json::from_str::<PropertyRecord>(bad).is_err());
    }

    #[test]
    fn test_notation_values_get() {
        let v = NotationValues::new("Ka1", "K\u{3b1}1", "K&alpha;<sub>1</sub>", "K$\\alpha_1$");
        assert_eq!(v.get(Encoding::Ascii), "Ka1");
        assert_eq!(v.get(Encoding::Utf16), "K\u{3b1}1");
    }
}
