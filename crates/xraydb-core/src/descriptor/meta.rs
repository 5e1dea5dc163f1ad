//! Language, notation and bibliographic reference descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DescriptorError;

/// ISO language code (2 or 3 characters), stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language {
    code: String,
}

impl Language {
    pub fn new(code: &str) -> Result<Self, DescriptorError> {
        let len = code.chars().count();
        if !(2..=3).contains(&len) {
            return Err(DescriptorError::InvalidLanguageCode(code.to_string()));
        }
        Ok(Self {
            code: code.to_lowercase(),
        })
    }

    pub fn english() -> Self {
        Self {
            code: "en".to_string(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl TryFrom<String> for Language {
    type Error = DescriptorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Language({})", self.code)
    }
}

/// Name of a notation system (`iupac`, `siegbahn`, `orbital`, ...), stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Notation {
    name: String,
}

impl Notation {
    pub const IUPAC: &'static str = "iupac";
    pub const SIEGBAHN: &'static str = "siegbahn";
    pub const ORBITAL: &'static str = "orbital";

    pub fn new(name: &str) -> Result<Self, DescriptorError> {
        if name.trim().is_empty() {
            return Err(DescriptorError::EmptyNotation);
        }
        Ok(Self {
            name: name.to_lowercase(),
        })
    }

    pub fn iupac() -> Self {
        Self {
            name: Self::IUPAC.to_string(),
        }
    }

    pub fn siegbahn() -> Self {
        Self {
            name: Self::SIEGBAHN.to_string(),
        }
    }

    pub fn orbital() -> Self {
        Self {
            name: Self::ORBITAL.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for Notation {
    type Error = DescriptorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Notation> for String {
    fn from(notation: Notation) -> Self {
        notation.name
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notation({})", self.name)
    }
}

/// Bibliographic reference. Fields follow BibTeX; only the key is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    pub bibtexkey: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booktitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub howpublished: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}

impl Reference {
    /// Key of the reference used for data with no bibliographic source.
    pub const UNATTRIBUTED: &'static str = "unattributed";

    /// Create a reference with only its key set.
    pub fn new(bibtexkey: &str) -> Self {
        Self {
            bibtexkey: bibtexkey.to_string(),
            ..Self::default()
        }
    }

    pub fn unattributed() -> Self {
        Self::new(Self::UNATTRIBUTED)
    }

    /// Reject references with a blank key.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.bibtexkey.trim().is_empty() {
            return Err(DescriptorError::EmptyReference);
        }
        Ok(())
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reference({})", self.bibtexkey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language() {
        assert_eq!(Language::new("EN").unwrap().code(), "en");
        assert!(Language::new("e").is_err());
        assert!(Language::new("engl").is_err());
        assert_eq!(Language::new("deu").unwrap().to_string(), "Language(deu)");
    }

    #[test]
    fn test_notation() {
        assert_eq!(Notation::new("IUPAC").unwrap(), Notation::iupac());
        assert_eq!(Notation::new("  ").unwrap_err(), DescriptorError::EmptyNotation);
    }

    #[test]
    fn test_reference_deserialize_partial() {
        let r: Reference =
            serde_json::from_str(r#"{"bibtexkey": "doe2016", "year": "2016", "type": "article"}"#)
                .unwrap();
        assert_eq!(r.bibtexkey, "doe2016");
        assert_eq!(r.year.as_deref(), Some("2016"));
        assert_eq!(r.kind.as_deref(), Some("article"));
        assert!(r.author.is_none());
        assert_eq!(r.to_string(), "Reference(doe2016)");
    }
}
