//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. The database pool, repositories and `AppCore` are
//! created here; handlers receive the composed [`CliContext`].

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;
use xraydb_core::paths::database_path;
use xraydb_core::services::AppCore;
use xraydb_core::{Repos, Settings};
use xraydb_db::{DatabaseBuilder, SqlitePool, XrayDbFactory, setup_database};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Explicit database file (`--database`); resolved from the
    /// environment and data directory when absent.
    pub database: Option<String>,
}

impl CliConfig {
    pub fn with_database(database: Option<String>) -> Self {
        Self { database }
    }

    /// Resolve the database file this configuration points at.
    pub fn database_path(&self) -> Result<PathBuf> {
        Ok(database_path(self.database.as_deref())?)
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// Settings loaded (and applied) at bootstrap.
    pub settings: Settings,
    /// Pool used to populate the database.
    pub pool: SqlitePool,
    /// Location of the database file.
    pub database_path: PathBuf,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Settings in effect for this invocation.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// A database builder with no parsers registered.
    pub fn database_builder(&self) -> DatabaseBuilder {
        XrayDbFactory::database_builder(self.pool.clone())
    }
}

/// Bootstrap the CLI application.
///
/// Opens (or creates) the database, assembles `AppCore` and applies the
/// persisted default references.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let db_path = config.database_path()?;
    debug!(path = %db_path.display(), "Opening database");
    let pool = setup_database(&db_path).await?;
    let repos = XrayDbFactory::build_repos(pool.clone());
    bootstrap_with(repos, pool, db_path).await
}

/// Bootstrap with custom repos (for testing).
pub async fn bootstrap_with(
    repos: Repos,
    pool: SqlitePool,
    database_path: PathBuf,
) -> Result<CliContext> {
    let app = AppCore::new(repos);
    let settings = app.apply_settings().await?;
    Ok(CliContext {
        app,
        settings,
        pool,
        database_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_creates_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("xraydb.db");
        let config = CliConfig::with_database(Some(path.to_string_lossy().into_owned()));

        let ctx = bootstrap(config).await.unwrap();
        assert_eq!(ctx.database_path, path);
        assert!(path.exists());
        assert_eq!(ctx.settings().effective_language(), "en");
        assert_eq!(ctx.database_builder().parser_count(), 0);
    }
}
