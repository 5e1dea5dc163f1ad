//! Property parser port.
//!
//! A parser turns one data source (a built-in table, a local file, a
//! dataset) into property records. The database builder drives parsers
//! and owns all persistence.

use std::path::PathBuf;

use thiserror::Error;

use crate::descriptor::DescriptorError;
use crate::property::Property;

/// Errors raised while parsing a data source.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    #[error("Line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("Invalid dataset: {0}")]
    Dataset(String),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Dataset(err.to_string())
    }
}

/// Source of property records.
pub trait PropertyParser: Send + Sync {
    /// Human-readable parser name, used in progress and log output.
    fn name(&self) -> &str;

    /// Parse every record the source provides.
    fn parse(&self) -> Result<Vec<Property>, ParseError>;
}
