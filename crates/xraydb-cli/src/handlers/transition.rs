//! Transition command handler.

use anyhow::Result;
use xraydb_core::{Encoding, Notation, XrayTransitionQuery, optional};

use super::element_query;
use crate::bootstrap::CliContext;
use crate::presentation::{format_optional, format_value};

/// Execute the transition command.
pub async fn execute(
    ctx: &CliContext,
    query: &str,
    element: Option<&str>,
    encoding: Option<Encoding>,
) -> Result<()> {
    let db = ctx.app().xray().database();
    let encoding = encoding.unwrap_or_else(|| ctx.settings().effective_encoding());

    let transition = db
        .xray_transition(&XrayTransitionQuery::from(query))
        .await?;
    let query = XrayTransitionQuery::from(transition);

    let iupac = optional(
        db.xray_transition_notation(&query, Notation::IUPAC, encoding, None)
            .await,
    )?;
    let siegbahn = optional(
        db.xray_transition_notation(&query, Notation::SIEGBAHN, encoding, None)
            .await,
    )?;

    println!("{transition}");
    println!("iupac: {}", format_optional(iupac.as_ref(), "-"));
    println!("siegbahn: {}", format_optional(siegbahn.as_ref(), "-"));

    let Some(element) = element else {
        return Ok(());
    };
    let element = element_query(element);
    let z = db.element_atomic_number(&element).await?;

    let energy = optional(db.xray_transition_energy_ev(&element, &query, None).await)?;
    let probability = optional(db.xray_transition_probability(&element, &query, None).await)?;
    let weight = optional(
        db.xray_transition_relative_weight(&element, &query, None)
            .await,
    )?;
    let show = |v: Option<f64>| v.map_or_else(|| "-".to_string(), format_value);

    println!();
    println!("Element Z={z}");
    println!("  energy (eV):     {}", show(energy));
    println!("  probability:     {}", show(probability));
    println!("  relative weight: {}", show(weight));
    Ok(())
}
