//! Build command handler.
//!
//! Runs the built-in parsers plus any data files into the database,
//! reporting progress with an indicatif bar.

use std::path::{Path, PathBuf};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use xraydb_core::PropertyParser;
use xraydb_db::{BuildProgress, DatabaseBuilder};
use xraydb_parsers::{CampbellRadiativeWidthParser, JsonDatasetParser, default_parsers};

use crate::bootstrap::CliContext;

/// Register the built-in parsers, then the Campbell table, then datasets.
///
/// Datasets come last so that their references follow the built-in ones.
pub fn with_sources(
    builder: DatabaseBuilder,
    datasets: &[PathBuf],
    campbell: Option<&Path>,
) -> DatabaseBuilder {
    let mut builder = builder.with_parsers(default_parsers());
    if let Some(path) = campbell {
        builder = builder.with_parser(Box::new(CampbellRadiativeWidthParser::new(path)));
    }
    builder.with_parsers(
        datasets
            .iter()
            .map(|path| Box::new(JsonDatasetParser::new(path)) as Box<dyn PropertyParser>),
    )
}

fn progress_bar(len: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("█▓░"),
    );
    Ok(pb)
}

/// Execute the build command.
pub async fn execute(ctx: &CliContext, datasets: &[PathBuf], campbell: Option<&Path>) -> Result<()> {
    let builder = with_sources(ctx.database_builder(), datasets, campbell);
    let pb = progress_bar(builder.parser_count() as u64)?;

    let result = builder
        .build(|event| match event {
            BuildProgress::ParserStarted { name, .. } => pb.set_message(name),
            BuildProgress::ParserFinished { .. } => pb.inc(1),
            BuildProgress::Deriving => pb.set_message("deriving weights and set energies"),
        })
        .await;

    match result {
        Ok(report) => {
            pb.finish_with_message("done");
            info!(?report, "Database built");
            println!(
                "✓ Built {} from {} source(s): {} properties, {} derived values",
                ctx.database_path.display(),
                report.parsers,
                report.properties,
                report.derived
            );
            Ok(())
        }
        Err(e) => {
            pb.abandon_with_message("failed");
            Err(e.into())
        }
    }
}
