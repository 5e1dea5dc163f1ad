//! Path resolution errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving data locations.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the platform data directory.
    #[error("Could not determine the local data directory")]
    NoDataDir,

    /// Could not determine the home directory.
    #[error("Could not determine the home directory")]
    NoHomeDir,

    /// The provided path is empty.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// Could not resolve the current directory for a relative path.
    #[error("Failed to resolve current directory: {0}")]
    CurrentDirError(String),

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}
