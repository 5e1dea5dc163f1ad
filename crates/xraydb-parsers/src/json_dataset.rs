//! JSON datasets.
//!
//! A dataset is one reference and the records it provides:
//!
//! ```json
//! {
//!   "reference": { "bibtexkey": "bearden1967", "year": "1967" },
//!   "properties": [
//!     { "kind": "element_atomic_weight", "element": 26, "value": 55.845 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use xraydb_core::{ParseError, Property, PropertyParser, PropertyRecord, Reference};

/// On-disk form of a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub reference: Reference,
    #[serde(default)]
    pub properties: Vec<PropertyRecord>,
}

impl Dataset {
    /// Attribute every record to the dataset's reference.
    pub fn into_properties(self) -> Result<Vec<Property>, ParseError> {
        self.reference.validate()?;
        let reference = self.reference;
        Ok(self
            .properties
            .into_iter()
            .map(|record| {
                let prop = Property::new(reference.clone(), record);
                debug!(%prop, "Parsed");
                prop
            })
            .collect())
    }
}

/// Parser over a JSON dataset file.
pub struct JsonDatasetParser {
    path: PathBuf,
    name: String,
}

impl JsonDatasetParser {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.file_stem().map_or_else(
            || "dataset".to_string(),
            |stem| format!("dataset:{}", stem.to_string_lossy()),
        );
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse_str(content: &str) -> Result<Vec<Property>, ParseError> {
        let dataset: Dataset = serde_json::from_str(content)?;
        dataset.into_properties()
    }
}

impl PropertyParser for JsonDatasetParser {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self) -> Result<Vec<Property>, ParseError> {
        let content = fs::read_to_string(&self.path).map_err(|e| ParseError::Io {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        let props = Self::parse_str(&content)?;
        info!(path = %self.path.display(), count = props.len(), "Parsed dataset");
        Ok(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xraydb_core::PropertyKind;

    #[test]
    fn test_parse_dataset() {
        let json = r#"{
            "reference": {"bibtexkey": "doe2016", "author": "Doe, J."},
            "properties": [
                {"kind": "element_atomic_weight", "element": 26, "value": 55.845},
                {"kind": "element_mass_density", "element": 26, "value_kg_per_m3": 7874.0}
            ]
        }"#;
        let props = JsonDatasetParser::parse_str(json).unwrap();
        assert_eq!(props.len(), 2);
        assert!(props.iter().all(|p| p.reference.bibtexkey == "doe2016"));
        assert_eq!(props[1].kind(), PropertyKind::ElementMassDensity);
    }

    #[test]
    fn test_blank_reference_rejected() {
        let json = r#"{"reference": {"bibtexkey": " "}, "properties": []}"#;
        assert!(matches!(
            JsonDatasetParser::parse_str(json),
            Err(ParseError::Descriptor(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            JsonDatasetParser::parse_str("{ not json"),
            Err(ParseError::Dataset(_))
        ));
    }

    #[test]
    fn test_name_from_file_stem() {
        let parser = JsonDatasetParser::new("/data/bearden1967.json");
        assert_eq!(parser.name(), "dataset:bearden1967");
    }
}
