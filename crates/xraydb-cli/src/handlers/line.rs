//! Line command handler.

use anyhow::Result;
use xraydb_core::XrayLineQuery;

use super::element_query;
use crate::bootstrap::CliContext;
use crate::presentation::format_line;

/// Execute the line command.
pub async fn execute(
    ctx: &CliContext,
    element: &str,
    line: &str,
    reference: Option<&str>,
) -> Result<()> {
    let line = ctx
        .app()
        .xray()
        .xray_line(&element_query(element), &XrayLineQuery::from(line), reference)
        .await?;
    println!("{}", format_line(&line));
    Ok(())
}
