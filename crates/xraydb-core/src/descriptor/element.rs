//! Chemical element descriptor.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DescriptorError;

/// Highest atomic number known to the database.
pub const MAX_ATOMIC_NUMBER: u8 = 118;

/// A chemical element, identified by its atomic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Element {
    atomic_number: u8,
}

impl Element {
    /// Create an element, validating `1 <= z <= 118`.
    pub fn new(atomic_number: u8) -> Result<Self, DescriptorError> {
        if atomic_number < 1 || atomic_number > MAX_ATOMIC_NUMBER {
            return Err(DescriptorError::InvalidAtomicNumber(u32::from(atomic_number)));
        }
        Ok(Self { atomic_number })
    }

    /// Iterate over every known element, hydrogen first.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_ATOMIC_NUMBER).map(|z| Self { atomic_number: z })
    }

    pub const fn atomic_number(&self) -> u8 {
        self.atomic_number
    }

    pub const fn z(&self) -> u8 {
        self.atomic_number
    }
}

impl TryFrom<u8> for Element {
    type Error = DescriptorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Element> for u8 {
    fn from(element: Element) -> Self {
        element.atomic_number
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element(z={})", self.atomic_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Element::new(0).is_err());
        assert!(Element::new(1).is_ok());
        assert!(Element::new(118).is_ok());
        assert_eq!(
            Element::new(119).unwrap_err(),
            DescriptorError::InvalidAtomicNumber(119)
        );
    }

    #[test]
    fn test_ordering_and_display() {
        let fe = Element::new(26).unwrap();
        let cu = Element::new(29).unwrap();
        assert!(fe < cu);
        assert_eq!(fe.z(), 26);
        assert_eq!(fe.to_string(), "Element(z=26)");
        assert_eq!(Element::all().count(), 118);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let fe: Element = serde_json::from_str("26").unwrap();
        assert_eq!(fe.atomic_number(), 26);
        assert!(serde_json::from_str::<Element>("0").is_err());
    }
}
