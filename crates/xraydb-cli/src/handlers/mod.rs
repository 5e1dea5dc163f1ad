//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `AppCore` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Access repositories directly, except through `AppCore::xray().database()`
//! - Contain business logic
//! - Manage database connections

pub mod build;
pub mod config;
pub mod element;
pub mod line;
pub mod paths;
pub mod property;
pub mod shell;
pub mod transition;

use xraydb_core::ElementQuery;

/// Element query from command-line text: digits are an atomic number,
/// anything else a symbol or name.
pub(crate) fn element_query(text: &str) -> ElementQuery {
    let Ok(query) = text.parse::<ElementQuery>();
    query
}
