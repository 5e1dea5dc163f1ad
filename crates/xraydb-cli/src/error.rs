//! CLI-specific error types and mappings.
//!
//! Maps core, storage and path errors to exit codes and user-facing
//! messages.

use thiserror::Error;
use xraydb_core::paths::PathError;
use xraydb_core::{CoreError, DatabaseError, ParseError};
use xraydb_db::BuildError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// The requested entity or value does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Argument or query error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Input data could not be parsed.
    #[error("Invalid data: {0}")]
    Data(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Invalid arguments (`EX_USAGE` is 64, 2 matches clap)
    /// - 64-78: Specific error categories
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,
            Self::Data(_) => 65,     // EX_DATAERR
            Self::NotFound(_) => 66, // EX_NOINPUT
            Self::Database(_) => 73, // EX_CANTCREAT (closest fit)
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }

    fn from_database(err: &DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(_) => Self::NotFound(err.to_string()),
            DatabaseError::InvalidQuery(_) | DatabaseError::UnknownProperty(_) => {
                Self::Arguments(err.to_string())
            }
            DatabaseError::Storage(_) => Self::Database(err.to_string()),
            DatabaseError::Descriptor(_) => Self::Data(err.to_string()),
        }
    }

    fn from_parse(err: &ParseError) -> Self {
        match err {
            ParseError::Io { .. } => Self::Io(err.to_string()),
            _ => Self::Data(err.to_string()),
        }
    }

    fn from_core(err: &CoreError) -> Self {
        match err {
            CoreError::Database(db_err) => Self::from_database(db_err),
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::Parse(parse_err) => Self::from_parse(parse_err),
            CoreError::Validation(msg) => Self::Arguments(msg.clone()),
            CoreError::Configuration(msg) => Self::Config(msg.clone()),
        }
    }

    fn from_build(err: &BuildError) -> Self {
        match err {
            BuildError::Parse { source, .. } => match Self::from_parse(source) {
                Self::Io(_) => Self::Io(err.to_string()),
                _ => Self::Data(err.to_string()),
            },
            BuildError::Storage(_) => Self::Database(err.to_string()),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::from_core(&err)
    }
}

impl From<DatabaseError> for CliError {
    fn from(err: DatabaseError) -> Self {
        Self::from_database(&err)
    }
}

impl From<BuildError> for CliError {
    fn from(err: BuildError) -> Self {
        Self::from_build(&err)
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error returned by a command.
///
/// Handlers return `anyhow::Result`; the underlying error is recovered by
/// downcasting. Anything unrecognised is a general error.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<CliError>() {
        return e.exit_code();
    }
    if let Some(e) = err.downcast_ref::<CoreError>() {
        return CliError::from_core(e).exit_code();
    }
    if let Some(e) = err.downcast_ref::<DatabaseError>() {
        return CliError::from_database(e).exit_code();
    }
    if let Some(e) = err.downcast_ref::<BuildError>() {
        return CliError::from_build(e).exit_code();
    }
    if err.downcast_ref::<PathError>().is_some() {
        return 78;
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return 74;
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use xraydb_core::SettingsError;

    #[test]
    fn test_not_found_exit_code() {
        let err = CliError::from(CoreError::Database(DatabaseError::NotFound(
            "element Xx".to_string(),
        )));
        assert!(matches!(err, CliError::NotFound(_)));
        assert_eq!(err.exit_code(), 66);
        assert_eq!(err.to_string(), "Not found: element Xx");
    }

    #[test]
    fn test_query_errors_are_usage_errors() {
        let err = CliError::from(DatabaseError::UnknownProperty("colour".to_string()));
        assert_eq!(err.exit_code(), 2);
        let err = CliError::from(CoreError::Validation("needs a target".to_string()));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_settings_errors_are_config_errors() {
        let err = CliError::from(CoreError::Settings(SettingsError::InvalidLanguage(
            "english".to_string(),
        )));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_build_errors() {
        let io = BuildError::Parse {
            parser: "dataset:missing".to_string(),
            source: ParseError::Io {
                path: PathBuf::from("missing.json"),
                reason: "not found".to_string(),
            },
        };
        assert_eq!(CliError::from(io).exit_code(), 74);

        let data = BuildError::Parse {
            parser: "campbell".to_string(),
            source: ParseError::Format {
                line: 3,
                reason: "invalid atomic number".to_string(),
            },
        };
        assert_eq!(CliError::from(data).exit_code(), 65);
        assert_eq!(
            CliError::from(BuildError::Storage("locked".to_string())).exit_code(),
            73
        );
    }

    #[test]
    fn test_exit_code_for_anyhow() {
        let err = anyhow::Error::from(CoreError::Database(DatabaseError::NotFound(
            "x".to_string(),
        )));
        assert_eq!(exit_code_for(&err), 66);

        let err = anyhow::Error::from(CliError::Arguments("bad".to_string()));
        assert_eq!(exit_code_for(&err), 2);

        let err = anyhow::Error::from(PathError::EmptyPath);
        assert_eq!(exit_code_for(&err), 78);

        assert_eq!(exit_code_for(&anyhow::anyhow!("something else")), 1);
    }
}
