//! `SQLite` storage for xraydb.
//!
//! - [`setup_database`] opens (or creates) a database file with the schema.
//! - [`DatabaseBuilder`] populates it from property parsers.
//! - [`SqliteXrayDatabase`] answers queries through the `XrayDatabase` port.
//! - [`XrayDbFactory`] wires the repositories into `Repos` / `AppCore`.

#![deny(unsafe_code)]

pub mod builder;
pub mod factory;
pub mod repositories;
pub mod select;
pub mod setup;

pub use builder::{BuildError, BuildProgress, BuildReport, DatabaseBuilder};
pub use factory::XrayDbFactory;
pub use repositories::{SqliteSettingsRepository, SqliteXrayDatabase};
pub use select::{Condition, SelectBuilder, SqlParam};
pub use sqlx::SqlitePool;

pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
