//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which delegate to
//! `AppCore`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use xraydb_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers};

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads `XRAYDB_DATABASE`
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.default_log_filter());

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code_for(&err));
    }
}

/// Log to stderr; `RUST_LOG` overrides the default filter.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::with_database(cli.database);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Paths must not create the database
    if matches!(command, Commands::Paths) {
        return handlers::paths::execute(&config);
    }

    let ctx = bootstrap(config.clone()).await?;

    match command {
        Commands::Build { datasets, campbell } => {
            handlers::build::execute(&ctx, &datasets, campbell.as_deref()).await?;
        }
        Commands::Element {
            query,
            language,
            transitions,
            set,
        } => {
            handlers::element::execute(
                &ctx,
                &query,
                language.as_deref(),
                transitions,
                set.as_deref(),
            )
            .await?;
        }
        Commands::Shell {
            query,
            notation,
            encoding,
        } => {
            handlers::shell::execute_shell(&ctx, &query, &notation, encoding).await?;
        }
        Commands::Subshell {
            query,
            notation,
            encoding,
            element,
        } => {
            handlers::shell::execute_subshell(
                &ctx,
                &query,
                &notation,
                encoding,
                element.as_deref(),
            )
            .await?;
        }
        Commands::Transition {
            query,
            element,
            encoding,
        } => {
            handlers::transition::execute(&ctx, &query, element.as_deref(), encoding).await?;
        }
        Commands::Line {
            element,
            line,
            reference,
        } => {
            handlers::line::execute(&ctx, &element, &line, reference.as_deref()).await?;
        }
        Commands::Property {
            name,
            element,
            target,
            reference,
        } => {
            handlers::property::execute(
                &ctx,
                &name,
                &element,
                target.as_deref(),
                reference.as_deref(),
            )
            .await?;
        }
        Commands::Config { command } => {
            handlers::config::execute(&ctx, command).await?;
        }
        Commands::Paths => handlers::paths::execute(&config)?,
    }

    Ok(())
}
