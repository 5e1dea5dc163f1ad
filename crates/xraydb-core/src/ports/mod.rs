//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No filesystem implementation details
//! - Parsers produce records; only the database persists them

pub mod property_parser;
pub mod settings_repository;
pub mod xray_database;

use std::sync::Arc;
use thiserror::Error;

use crate::descriptor::DescriptorError;

pub use property_parser::{ParseError, PropertyParser};
pub use settings_repository::SettingsRepository;
pub use xray_database::{XrayDatabase, optional};

/// Container for all repository trait objects.
///
/// Adapters receive this from the storage crate's factory and hand it to
/// `AppCore`, so neither side depends on the concrete implementations.
#[derive(Clone)]
pub struct Repos {
    /// Property database.
    pub xray: Arc<dyn XrayDatabase>,
    /// Settings repository for application settings.
    pub settings: Arc<dyn SettingsRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(xray: Arc<dyn XrayDatabase>, settings: Arc<dyn SettingsRepository>) -> Self {
        Self { xray, settings }
    }
}

/// Errors returned by [`XrayDatabase`] lookups.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The entity or value does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The query cannot be interpreted.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The property name is not a known property.
    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored data does not form a valid descriptor.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Property lookup failed.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Data source could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}
