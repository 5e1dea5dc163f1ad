//! Shell and subshell command handlers.

use anyhow::Result;
use xraydb_core::{AtomicShellQuery, AtomicSubshellQuery, Encoding, optional};

use super::element_query;
use crate::bootstrap::CliContext;
use crate::presentation::format_value;

/// Execute the shell command.
pub async fn execute_shell(
    ctx: &CliContext,
    query: &str,
    notation: &str,
    encoding: Option<Encoding>,
) -> Result<()> {
    let db = ctx.app().xray().database();
    let Ok(query) = query.parse::<AtomicShellQuery>();
    let encoding = encoding.unwrap_or_else(|| ctx.settings().effective_encoding());

    let shell = db.atomic_shell(&query).await?;
    let text = db
        .atomic_shell_notation(&shell.into(), notation, encoding, None)
        .await?;

    println!("{shell}");
    println!("{notation}: {text}");
    Ok(())
}

/// Execute the subshell command.
///
/// With `element`, the element's binding energy, widths and occupancy of
/// the subshell follow; values that are not tabulated print as `-`.
pub async fn execute_subshell(
    ctx: &CliContext,
    query: &str,
    notation: &str,
    encoding: Option<Encoding>,
    element: Option<&str>,
) -> Result<()> {
    let db = ctx.app().xray().database();
    let Ok(query) = query.parse::<AtomicSubshellQuery>();
    let encoding = encoding.unwrap_or_else(|| ctx.settings().effective_encoding());

    let subshell = db.atomic_subshell(&query).await?;
    let query = AtomicSubshellQuery::from(subshell);
    let text = db
        .atomic_subshell_notation(&query, notation, encoding, None)
        .await?;

    println!("{subshell}");
    println!("{notation}: {text}");

    let Some(element) = element else {
        return Ok(());
    };
    let element = element_query(element);
    let z = db.element_atomic_number(&element).await?;

    let show = |value: Option<f64>, unit: &str| {
        value.map_or_else(|| "-".to_string(), |v| format!("{} {unit}", format_value(v)))
    };
    let binding = optional(
        db.atomic_subshell_binding_energy_ev(&element, &query, None)
            .await,
    )?;
    let radiative = optional(
        db.atomic_subshell_radiative_width_ev(&element, &query, None)
            .await,
    )?;
    let nonradiative = optional(
        db.atomic_subshell_nonradiative_width_ev(&element, &query, None)
            .await,
    )?;
    let occupancy = optional(db.atomic_subshell_occupancy(&element, &query, None).await)?;

    println!();
    println!("Element Z={z}");
    println!("  binding energy:      {}", show(binding, "eV"));
    println!("  radiative width:     {}", show(radiative, "eV"));
    println!("  non-radiative width: {}", show(nonradiative, "eV"));
    println!(
        "  occupancy:           {}",
        occupancy.map_or_else(|| "-".to_string(), |o| o.to_string())
    );
    Ok(())
}
