//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for initializing
//! the `SQLite` database with full schema. Entry points call this with the
//! resolved database path.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;

/// Notation columns shared by every `*_notation` table.
const NOTATION_COLUMNS: &str = "
    notation_id INTEGER NOT NULL REFERENCES notation(id),
    ascii TEXT NOT NULL COLLATE NOCASE,
    utf16 TEXT NOT NULL COLLATE NOCASE,
    html TEXT NOT NULL,
    latex TEXT NOT NULL";

/// Tables that [`DatabaseBuilder`](crate::DatabaseBuilder) fills after the
/// parsers have run. Rows it computes carry `derived = 1`; rows inserted
/// from a parser keep the default of 0.
pub(crate) const DERIVED_TABLES: [&str; 3] = [
    "xray_transition_relative_weight",
    "xray_transitionset_energy",
    "xray_transitionset_relative_weight",
];

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// This function:
/// 1. Creates the parent directory and the database file if needed
/// 2. Creates all tables and indexes
/// 3. Initializes the settings table
///
/// # Example
///
/// ```rust,no_run
/// use xraydb_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/path/to/xraydb.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true),
    )
    .await?;

    create_schema(&pool).await?;
    init_settings_table(&pool).await?;

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// A single connection is kept alive for the lifetime of the pool, since
/// every new in-memory connection would otherwise start empty.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    init_settings_table(&pool).await?;
    Ok(pool)
}

/// Table definitions, in dependency order.
fn table_definitions() -> Vec<String> {
    let mut tables = vec![
        // Descriptors
        "CREATE TABLE IF NOT EXISTS ref (
            id INTEGER PRIMARY KEY,
            bibtexkey TEXT NOT NULL UNIQUE,
            author TEXT, year TEXT, title TEXT, type TEXT, booktitle TEXT,
            editor TEXT, pages TEXT, edition TEXT, journal TEXT, school TEXT,
            address TEXT, url TEXT, note TEXT, number TEXT, series TEXT,
            volume TEXT, publisher TEXT, organization TEXT, chapter TEXT,
            howpublished TEXT, doi TEXT
        )"
        .to_string(),
        "CREATE TABLE IF NOT EXISTS language (
            id INTEGER PRIMARY KEY,
            code TEXT NOT NULL UNIQUE COLLATE NOCASE
        )"
        .to_string(),
        "CREATE TABLE IF NOT EXISTS notation (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE COLLATE NOCASE
        )"
        .to_string(),
        "CREATE TABLE IF NOT EXISTS element (
            id INTEGER PRIMARY KEY,
            atomic_number INTEGER NOT NULL UNIQUE
        )"
        .to_string(),
        "CREATE TABLE IF NOT EXISTS atomic_shell (
            id INTEGER PRIMARY KEY,
            principal_quantum_number INTEGER NOT NULL UNIQUE
        )"
        .to_string(),
        "CREATE TABLE IF NOT EXISTS atomic_subshell (
            id INTEGER PRIMARY KEY,
            atomic_shell_id INTEGER NOT NULL REFERENCES atomic_shell(id),
            azimuthal_quantum_number INTEGER NOT NULL,
            total_angular_momentum_nominator INTEGER NOT NULL,
            UNIQUE (atomic_shell_id, azimuthal_quantum_number, total_angular_momentum_nominator)
        )"
        .to_string(),
        "CREATE TABLE IF NOT EXISTS xray_transition (
            id INTEGER PRIMARY KEY,
            source_subshell_id INTEGER NOT NULL REFERENCES atomic_subshell(id),
            destination_subshell_id INTEGER NOT NULL REFERENCES atomic_subshell(id),
            UNIQUE (source_subshell_id, destination_subshell_id)
        )"
        .to_string(),
        "CREATE TABLE IF NOT EXISTS xray_transitionset (
            id INTEGER PRIMARY KEY,
            count INTEGER NOT NULL
        )"
        .to_string(),
        "CREATE TABLE IF NOT EXISTS xray_transitionset_association (
            id INTEGER PRIMARY KEY,
            xray_transitionset_id INTEGER NOT NULL REFERENCES xray_transitionset(id),
            xray_transition_id INTEGER NOT NULL REFERENCES xray_transition(id),
            UNIQUE (xray_transitionset_id, xray_transition_id)
        )"
        .to_string(),
        // Element properties
        "CREATE TABLE IF NOT EXISTS element_symbol (
            id INTEGER PRIMARY KEY,
            reference_id INTEGER NOT NULL REFERENCES ref(id),
            element_id INTEGER NOT NULL REFERENCES element(id),
            symbol TEXT NOT NULL COLLATE NOCASE,
            UNIQUE (reference_id, element_id)
        )"
        .to_string(),
        "CREATE TABLE IF NOT EXISTS element_name (
            id INTEGER PRIMARY KEY,
            reference_id INTEGER NOT NULL REFERENCES ref(id),
            element_id INTEGER NOT NULL REFERENCES element(id),
            language_id INTEGER NOT NULL REFERENCES language(id),
            name TEXT NOT NULL COLLATE NOCASE,
            UNIQUE (reference_id, element_id, language_id)
        )"
        .to_string(),
    ];

    for (table, column) in [
        ("element_atomic_weight", "value REAL NOT NULL"),
        ("element_mass_density", "value_kg_per_m3 REAL NOT NULL"),
    ] {
        tables.push(format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY,
                reference_id INTEGER NOT NULL REFERENCES ref(id),
                element_id INTEGER NOT NULL REFERENCES element(id),
                {column},
                UNIQUE (reference_id, element_id)
            )"
        ));
    }

    // Notations
    for (table, entity, entity_table) in [
        ("atomic_shell_notation", "atomic_shell_id", "atomic_shell"),
        ("atomic_subshell_notation", "atomic_subshell_id", "atomic_subshell"),
        ("xray_transition_notation", "xray_transition_id", "xray_transition"),
        (
            "xray_transitionset_notation",
            "xray_transitionset_id",
            "xray_transitionset",
        ),
    ] {
        tables.push(format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY,
                reference_id INTEGER NOT NULL REFERENCES ref(id),
                {entity} INTEGER NOT NULL REFERENCES {entity_table}(id),
                {NOTATION_COLUMNS},
                UNIQUE (reference_id, {entity}, notation_id)
            )"
        ));
    }

    // Per-element values of shells, transitions and sets
    for (table, entity, entity_table, column) in [
        (
            "atomic_subshell_binding_energy",
            "atomic_subshell_id",
            "atomic_subshell",
            "value_eV REAL NOT NULL",
        ),
        (
            "atomic_subshell_radiative_width",
            "atomic_subshell_id",
            "atomic_subshell",
            "value_eV REAL NOT NULL",
        ),
        (
            "atomic_subshell_nonradiative_width",
            "atomic_subshell_id",
            "atomic_subshell",
            "value_eV REAL NOT NULL",
        ),
        (
            "atomic_subshell_occupancy",
            "atomic_subshell_id",
            "atomic_subshell",
            "value INTEGER NOT NULL",
        ),
        (
            "xray_transition_energy",
            "xray_transition_id",
            "xray_transition",
            "value_eV REAL NOT NULL",
        ),
        (
            "xray_transition_probability",
            "xray_transition_id",
            "xray_transition",
            "value REAL NOT NULL",
        ),
        (
            "xray_transition_relative_weight",
            "xray_transition_id",
            "xray_transition",
            "value REAL NOT NULL",
        ),
        (
            "xray_transitionset_energy",
            "xray_transitionset_id",
            "xray_transitionset",
            "value_eV REAL NOT NULL",
        ),
        (
            "xray_transitionset_relative_weight",
            "xray_transitionset_id",
            "xray_transitionset",
            "value REAL NOT NULL",
        ),
    ] {
        let derived = if DERIVED_TABLES.contains(&table) {
            ",\n                derived INTEGER NOT NULL DEFAULT 0"
        } else {
            ""
        };
        tables.push(format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY,
                reference_id INTEGER NOT NULL REFERENCES ref(id),
                element_id INTEGER NOT NULL REFERENCES element(id),
                {entity} INTEGER NOT NULL REFERENCES {entity_table}(id),
                {column}{derived},
                UNIQUE (reference_id, element_id, {entity})
            )"
        ));
    }

    tables.push(
        "CREATE TABLE IF NOT EXISTS settings_kv (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )"
        .to_string(),
    );

    tables
}

/// Creates the complete database schema.
///
/// It is safe to call multiple times as all operations use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    for statement in table_definitions() {
        sqlx::query(&statement).execute(pool).await?;
    }

    // Lookups by notation text and by transition membership
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_atomic_shell_notation_ascii ON atomic_shell_notation(ascii)",
        "CREATE INDEX IF NOT EXISTS idx_atomic_subshell_notation_ascii ON atomic_subshell_notation(ascii)",
        "CREATE INDEX IF NOT EXISTS idx_xray_transition_notation_ascii ON xray_transition_notation(ascii)",
        "CREATE INDEX IF NOT EXISTS idx_xray_transitionset_notation_ascii ON xray_transitionset_notation(ascii)",
        "CREATE INDEX IF NOT EXISTS idx_transitionset_association_transition ON xray_transitionset_association(xray_transition_id)",
        "CREATE INDEX IF NOT EXISTS idx_element_symbol_symbol ON element_symbol(symbol)",
        "CREATE INDEX IF NOT EXISTS idx_element_name_name ON element_name(name)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    // Migration: databases created before derived rows were marked
    for table in DERIVED_TABLES {
        let _ = sqlx::query(&format!(
            "ALTER TABLE {table} ADD COLUMN derived INTEGER NOT NULL DEFAULT 0"
        ))
        .execute(pool)
        .await;
        // Ignore error if column already exists
    }

    Ok(())
}

/// Initialize the settings table.
async fn init_settings_table(pool: &SqlitePool) -> Result<()> {
    use crate::SqliteSettingsRepository;

    let repo = SqliteSettingsRepository::new(pool.clone());
    repo.ensure_table().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_database() {
        let pool = setup_test_database().await.unwrap();

        for table in [
            "ref",
            "element",
            "element_symbol",
            "atomic_subshell_notation",
            "xray_transitionset_association",
            "xray_transitionset_relative_weight",
            "settings_kv",
        ] {
            let _: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(&pool)
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let pool = setup_test_database().await.unwrap();
        create_schema(&pool).await.unwrap();
    }
}
