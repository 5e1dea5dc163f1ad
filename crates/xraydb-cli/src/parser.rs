//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Query X-ray physical data: elements, shells, transitions and lines.
#[derive(Parser)]
#[command(name = "xraydb")]
#[command(about = "Query X-ray data of elements, atomic subshells and transitions")]
#[command(version)]
pub struct Cli {
    /// Database file to use for this invocation
    #[arg(long = "database", global = true, env = "XRAYDB_DATABASE")]
    pub database: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub const fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
