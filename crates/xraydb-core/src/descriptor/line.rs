//! X-ray line: a transition or transition set resolved for one element.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Element, XrayTransition};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrayLine {
    pub element: Element,
    pub transitions: Vec<XrayTransition>,
    pub iupac: String,
    pub siegbahn: String,
    pub energy_ev: f64,
}

impl XrayLine {
    pub const fn atomic_number(&self) -> u8 {
        self.element.atomic_number()
    }

    pub const fn z(&self) -> u8 {
        self.element.atomic_number()
    }
}

/// Lines only compare when both the element and the energy agree on the
/// direction; otherwise they are unordered.
impl PartialOrd for XrayLine {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }

        let by_element = self.element.cmp(&other.element);
        let by_energy = self.energy_ev.partial_cmp(&other.energy_ev)?;
        match (by_element, by_energy) {
            (Ordering::Less, Ordering::Less) => Some(Ordering::Less),
            (Ordering::Greater, Ordering::Greater) => Some(Ordering::Greater),
            _ => None,
        }
    }
}

impl fmt::Display for XrayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XrayLine({})", self.iupac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(z: u8, energy_ev: f64) -> XrayLine {
        XrayLine {
            element: Element::new(z).unwrap(),
            transitions: Vec::new(),
            iupac: "K-L3".to_string(),
            siegbahn: "Ka1".to_string(),
            energy_ev,
        }
    }

    #[test]
    fn test_partial_order() {
        assert!(line(13, 1486.7) < line(26, 6403.8));
        assert!(line(26, 6403.8) > line(13, 1486.7));
        // Heavier element but lower energy: unordered
        assert_eq!(line(26, 705.0).partial_cmp(&line(13, 1486.7)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(line(26, 6403.8).to_string(), "XrayLine(K-L3)");
        assert_eq!(line(26, 6403.8).z(), 26);
    }
}
