//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use xraydb_core::Repos;
use xraydb_core::services::AppCore;

use crate::builder::DatabaseBuilder;
use crate::repositories::{SqliteSettingsRepository, SqliteXrayDatabase};

/// Factory for creating repository instances with `SQLite` backends.
pub struct XrayDbFactory;

impl XrayDbFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteXrayDatabase::new(pool.clone())),
            Arc::new(SqliteSettingsRepository::new(pool)),
        )
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = XrayDbFactory::build_repos(pool);
    /// let core = AppCore::new(repos);
    /// ```
    pub fn build_app_core(pool: SqlitePool) -> AppCore {
        AppCore::new(Self::build_repos(pool))
    }

    /// Create a database builder with no parsers registered.
    pub fn database_builder(pool: SqlitePool) -> DatabaseBuilder {
        DatabaseBuilder::new(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup_test_database;
    use xraydb_core::ElementQuery;

    #[tokio::test]
    async fn test_build_app_core_on_empty_database() {
        let pool = setup_test_database().await.unwrap();
        let core = XrayDbFactory::build_app_core(pool);

        let settings = core.settings().get().await.unwrap();
        assert_eq!(settings.effective_language(), "en");
        assert!(
            core.xray()
                .database()
                .element(&ElementQuery::AtomicNumber(26))
                .await
                .is_err()
        );
    }
}
