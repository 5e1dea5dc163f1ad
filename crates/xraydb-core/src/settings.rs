//! Settings domain types and validation.
//!
//! This module contains the persisted user preferences. These are pure
//! domain types with no infrastructure dependencies.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::descriptor::Language;
use crate::ports::DatabaseError;
use crate::property::PropertyKind;
use crate::query::Encoding;

/// Default language for element names.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Application settings structure.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Preferred reference per property name (canonical `PropertyKind` names).
    pub default_references: BTreeMap<String, String>,

    /// Language used for element names when none is requested.
    pub default_language: Option<String>,

    /// Encoding used for notations when none is requested.
    pub default_encoding: Option<Encoding>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            default_references: BTreeMap::new(),
            default_language: Some(DEFAULT_LANGUAGE.to_string()),
            default_encoding: Some(Encoding::Utf16),
        }
    }

    /// Get the effective language (with default fallback).
    pub fn effective_language(&self) -> &str {
        self.default_language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Get the effective encoding (with default fallback).
    pub fn effective_encoding(&self) -> Encoding {
        self.default_encoding.unwrap_or_default()
    }

    /// Merge a partial update into these settings.
    ///
    /// Property names in `default_references` are stored under their
    /// canonical name when they parse; unknown names are kept verbatim so
    /// that validation can report them.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        for (property, reference) in &other.default_references {
            let key = property
                .parse::<PropertyKind>()
                .map_or_else(|_| property.clone(), |kind| kind.to_string());
            match reference {
                Some(reference) => {
                    self.default_references.insert(key, reference.clone());
                }
                None => {
                    self.default_references.remove(&key);
                }
            }
        }
        if let Some(ref language) = other.default_language {
            self.default_language = language.as_ref().map(|l| l.to_lowercase());
        }
        if let Some(ref encoding) = other.default_encoding {
            self.default_encoding = *encoding;
        }
    }
}

/// Partial settings update.
///
/// Scalar fields are `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = set field to None/null
/// - `Some(Some(value))` = set field to value
///
/// In `default_references`, a `None` value removes the entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub default_references: BTreeMap<String, Option<String>>,
    pub default_language: Option<Option<String>>,
    pub default_encoding: Option<Option<Encoding>>,
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Unknown property '{0}'")]
    UnknownProperty(String),

    #[error("Reference for '{0}' cannot be empty")]
    EmptyReference(String),

    #[error("Language code must be between 2 and 3 characters, got '{0}'")]
    InvalidLanguage(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    for (property, reference) in &settings.default_references {
        if property.parse::<PropertyKind>().is_err() {
            return Err(SettingsError::UnknownProperty(property.clone()));
        }
        if reference.trim().is_empty() {
            return Err(SettingsError::EmptyReference(property.clone()));
        }
    }

    if let Some(ref language) = settings.default_language {
        if Language::new(language).is_err() {
            return Err(SettingsError::InvalidLanguage(language.clone()));
        }
    }

    Ok(())
}

/// Thread-safe table of default references, shared by database implementations.
#[derive(Debug, Default)]
pub struct DefaultReferences {
    inner: RwLock<HashMap<PropertyKind, String>>,
}

impl DefaultReferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a property name, mapping failures to `UnknownProperty`.
    pub fn parse_kind(property: &str) -> Result<PropertyKind, DatabaseError> {
        property
            .parse::<PropertyKind>()
            .map_err(|_| DatabaseError::UnknownProperty(property.to_string()))
    }

    pub fn get(&self, property: &str) -> Result<Option<String>, DatabaseError> {
        let kind = Self::parse_kind(property)?;
        Ok(self.get_kind(kind))
    }

    pub fn get_kind(&self, kind: PropertyKind) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&kind)
            .cloned()
    }

    pub fn set(&self, property: &str, reference: Option<&str>) -> Result<(), DatabaseError> {
        let kind = Self::parse_kind(property)?;
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match reference {
            Some(reference) => guard.insert(kind, reference.to_string()),
            None => guard.remove(&kind),
        };
        Ok(())
    }

    /// Resolve the reference to use: explicit first, then the default.
    pub fn resolve(&self, kind: PropertyKind, explicit: Option<&str>) -> Option<String> {
        explicit.map(str::to_string).or_else(|| self.get_kind(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::with_defaults();
        assert!(validate_settings(&settings).is_ok());
        assert_eq!(settings.effective_language(), "en");
        assert_eq!(settings.effective_encoding(), Encoding::Utf16);
    }

    #[test]
    fn test_merge_canonicalizes_property_names() {
        let mut settings = Settings::with_defaults();
        let mut update = SettingsUpdate::default();
        update.default_references.insert(
            "xray_transition_energy_ev".to_string(),
            Some("bearden1967".to_string()),
        );
        settings.merge(&update);

        assert_eq!(
            settings.default_references.get("xray_transition_energy"),
            Some(&"bearden1967".to_string())
        );

        let mut removal = SettingsUpdate::default();
        removal
            .default_references
            .insert("xray_transition_energy".to_string(), None);
        settings.merge(&removal);
        assert!(settings.default_references.is_empty());
    }

    #[test]
    fn test_validate_rejects_unknown_property() {
        let mut settings = Settings::with_defaults();
        settings
            .default_references
            .insert("foo".to_string(), "doe2016".to_string());
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::UnknownProperty(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_language() {
        let settings = Settings {
            default_language: Some("english".to_string()),
            ..Settings::with_defaults()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidLanguage(_))
        ));
    }

    #[test]
    fn test_default_references() {
        let defaults = DefaultReferences::new();
        assert_eq!(defaults.get("element_symbol").unwrap(), None);
        assert!(matches!(
            defaults.get("foo"),
            Err(DatabaseError::UnknownProperty(_))
        ));

        defaults.set("element_symbol", Some("doe2016")).unwrap();
        assert_eq!(
            defaults.get("element_symbol").unwrap(),
            Some("doe2016".to_string())
        );
        assert!(defaults.set("foo", Some("doe2016")).is_err());

        assert_eq!(
            defaults.resolve(PropertyKind::ElementSymbol, Some("other")),
            Some("other".to_string())
        );
        defaults.set("element_symbol", None).unwrap();
        assert_eq!(defaults.resolve(PropertyKind::ElementSymbol, None), None);
    }
}
