//! Element command handler.

use anyhow::Result;
use xraydb_core::XrayTransitionSetQuery;

use super::element_query;
use crate::bootstrap::CliContext;
use crate::presentation::{format_element_summary, format_transitions};

/// Execute the element command.
///
/// Prints the element summary and, with `transitions`, the element's
/// X-ray transitions (optionally only the members of `set`).
pub async fn execute(
    ctx: &CliContext,
    query: &str,
    language: Option<&str>,
    transitions: bool,
    set: Option<&str>,
) -> Result<()> {
    let element = element_query(query);
    let language = language.unwrap_or_else(|| ctx.settings().effective_language());

    let summary = ctx.app().xray().element_summary(&element, language).await?;
    print!("{}", format_element_summary(&summary));

    if transitions {
        let set = set.map(XrayTransitionSetQuery::from);
        let list = ctx
            .app()
            .xray()
            .transitions_of(&element, set.as_ref())
            .await?;
        println!();
        print!("{}", format_transitions(&list));
    }
    Ok(())
}
