//! Paths command handler.
//!
//! Displays the resolved data locations for diagnostics. Runs without
//! bootstrap so that it never creates the database file.

use std::env;
use std::fmt::Write as _;

use anyhow::Result;
use xraydb_core::paths::{DATA_DIR_ENV, DATABASE_ENV, data_root};

use crate::bootstrap::CliConfig;

/// Render the resolved paths in `key = value` format.
pub fn format_paths(config: &CliConfig) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "database = {}", config.database_path()?.display())?;
    writeln!(out, "data_root = {}", data_root()?.display())?;
    for var in [DATABASE_ENV, DATA_DIR_ENV] {
        let value = env::var(var).unwrap_or_else(|_| "(unset)".to_string());
        writeln!(out, "{var} = {value}")?;
    }
    Ok(out)
}

/// Execute the paths command.
pub fn execute(config: &CliConfig) -> Result<()> {
    print!("{}", format_paths(config)?);
    Ok(())
}
