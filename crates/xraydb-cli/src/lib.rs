//! Command-line adapter for xraydb.
//!
//! The binary in `main.rs` is the composition root; this library holds the
//! argument definitions, bootstrap, error mapping and command handlers so
//! they can be tested without spawning a process.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod commands;
pub mod config_commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::Commands;
pub use config_commands::ConfigCommand;
pub use error::{CliError, exit_code_for};
pub use parser::Cli;
