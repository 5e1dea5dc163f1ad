//! Property command handler.

use anyhow::Result;
use xraydb_core::PropertyKind;

use super::element_query;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_value;

/// Look up one numeric property by name.
///
/// The mass density is stored in kg/m3; asking for
/// `element_mass_density_g_per_cm3` converts it.
pub async fn lookup(
    ctx: &CliContext,
    name: &str,
    element: &str,
    target: Option<&str>,
    reference: Option<&str>,
) -> Result<f64> {
    let kind = name
        .parse::<PropertyKind>()
        .map_err(|_| CliError::Arguments(format!("unknown property '{name}'")))?;

    let value = ctx
        .app()
        .xray()
        .numeric_property(kind, &element_query(element), target, reference)
        .await?;

    if name.eq_ignore_ascii_case("element_mass_density_g_per_cm3") {
        Ok(value / 1000.0)
    } else {
        Ok(value)
    }
}

/// Execute the property command.
pub async fn execute(
    ctx: &CliContext,
    name: &str,
    element: &str,
    target: Option<&str>,
    reference: Option<&str>,
) -> Result<()> {
    let value = lookup(ctx, name, element, target, reference).await?;
    println!("{}", format_value(value));
    Ok(())
}
