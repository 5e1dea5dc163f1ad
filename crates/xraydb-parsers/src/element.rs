//! Unattributed element symbols and names.

use tracing::debug;
use xraydb_core::{
    Element, Language, ParseError, Property, PropertyParser, PropertyRecord, Reference,
};

use crate::tables::{ENGLISH_NAMES, SYMBOLS};

/// Symbols of the 118 elements.
pub struct ElementSymbolParser;

impl PropertyParser for ElementSymbolParser {
    fn name(&self) -> &str {
        "element_symbol"
    }

    fn parse(&self) -> Result<Vec<Property>, ParseError> {
        let reference = Reference::unattributed();
        Ok(Element::all()
            .zip(SYMBOLS)
            .map(|(element, symbol)| {
                let prop = Property::new(
                    reference.clone(),
                    PropertyRecord::ElementSymbol {
                        element,
                        symbol: symbol.to_string(),
                    },
                );
                debug!(%prop, symbol, "Parsed");
                prop
            })
            .collect())
    }
}

/// English names of the 118 elements.
pub struct ElementNameParser;

impl PropertyParser for ElementNameParser {
    fn name(&self) -> &str {
        "element_name"
    }

    fn parse(&self) -> Result<Vec<Property>, ParseError> {
        let reference = Reference::unattributed();
        let language = Language::english();
        Ok(Element::all()
            .zip(ENGLISH_NAMES)
            .map(|(element, name)| {
                let prop = Property::new(
                    reference.clone(),
                    PropertyRecord::ElementName {
                        element,
                        language: language.clone(),
                        name: name.to_string(),
                    },
                );
                debug!(%prop, name, "Parsed");
                prop
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        let props = ElementSymbolParser.parse().unwrap();
        assert_eq!(props.len(), 118);
        assert!(props.iter().all(|p| p.reference.bibtexkey == "unattributed"));
        match &props[112].record {
            PropertyRecord::ElementSymbol { element, symbol } => {
                assert_eq!(element.z(), 113);
                assert_eq!(symbol, "Nh");
            }
            other => panic!("unexpected record {other:?}"),
        }
    }

    #[test]
    fn test_names() {
        let props = ElementNameParser.parse().unwrap();
        assert_eq!(props.len(), 118);
        match &props[25].record {
            PropertyRecord::ElementName {
                element,
                language,
                name,
            } => {
                assert_eq!(element.z(), 26);
                assert_eq!(language.code(), "en");
                assert_eq!(name, "Iron");
            }
            other => panic!("unexpected record {other:?}"),
        }
    }
}
