//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_settings_repository;
mod sqlite_xray_database;

pub use sqlite_settings_repository::SqliteSettingsRepository;
pub use sqlite_xray_database::SqliteXrayDatabase;
