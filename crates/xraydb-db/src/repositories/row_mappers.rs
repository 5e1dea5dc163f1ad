//! Row mapping helpers for `SQLite` queries.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use xraydb_core::{AtomicShell, AtomicSubshell, DatabaseError, Element, XrayTransition};

use crate::select::SelectBuilder;

/// Map a driver error into the port error type.
pub fn storage(e: sqlx::Error) -> DatabaseError {
    DatabaseError::Storage(e.to_string())
}

fn get_u32(row: &SqliteRow, column: &str) -> Result<u32, DatabaseError> {
    let value: i64 = row.try_get(column).map_err(storage)?;
    u32::try_from(value)
        .map_err(|_| DatabaseError::Storage(format!("column {column} out of range: {value}")))
}

pub fn row_to_element(row: &SqliteRow) -> Result<Element, DatabaseError> {
    let z: i64 = row.try_get("atomic_number").map_err(storage)?;
    let z = u8::try_from(z)
        .map_err(|_| DatabaseError::Storage(format!("atomic number out of range: {z}")))?;
    Ok(Element::new(z)?)
}

pub fn row_to_atomic_shell(row: &SqliteRow) -> Result<AtomicShell, DatabaseError> {
    Ok(AtomicShell::new(get_u32(row, "principal_quantum_number")?)?)
}

/// Subshell from the columns `{prefix}n`, `{prefix}l` and `{prefix}j_n`.
pub fn row_to_atomic_subshell(
    row: &SqliteRow,
    prefix: &str,
) -> Result<AtomicSubshell, DatabaseError> {
    Ok(AtomicSubshell::new(
        get_u32(row, &format!("{prefix}n"))?,
        get_u32(row, &format!("{prefix}l"))?,
        get_u32(row, &format!("{prefix}j_n"))?,
    )?)
}

pub fn row_to_xray_transition(row: &SqliteRow) -> Result<XrayTransition, DatabaseError> {
    Ok(XrayTransition::new(
        row_to_atomic_subshell(row, "src_")?,
        row_to_atomic_subshell(row, "dst_")?,
    ))
}

/// Select a subshell with the columns [`row_to_atomic_subshell`] reads.
pub fn select_atomic_subshell(builder: &mut SelectBuilder) -> &mut SelectBuilder {
    builder
        .add_select_as("atomic_subshell", "id", "id")
        .add_select_as("atomic_shell", "principal_quantum_number", "n")
        .add_select_as("atomic_subshell", "azimuthal_quantum_number", "l")
        .add_select_as("atomic_subshell", "total_angular_momentum_nominator", "j_n")
        .add_from("atomic_subshell")
        .add_join("atomic_shell", "id", "atomic_subshell", "atomic_shell_id")
}

/// Select a transition with the columns [`row_to_xray_transition`] reads.
///
/// The subshells are joined as `src`/`dst` and their shells as
/// `srcshell`/`dstshell`.
pub fn select_xray_transition(builder: &mut SelectBuilder) -> &mut SelectBuilder {
    builder
        .add_select_as("xray_transition", "id", "id")
        .add_select_as("srcshell", "principal_quantum_number", "src_n")
        .add_select_as("src", "azimuthal_quantum_number", "src_l")
        .add_select_as("src", "total_angular_momentum_nominator", "src_j_n")
        .add_select_as("dstshell", "principal_quantum_number", "dst_n")
        .add_select_as("dst", "azimuthal_quantum_number", "dst_l")
        .add_select_as("dst", "total_angular_momentum_nominator", "dst_j_n")
        .add_from("xray_transition")
        .add_join_as(
            "atomic_subshell",
            "src",
            "id",
            "xray_transition",
            "source_subshell_id",
        )
        .add_join_as(
            "atomic_subshell",
            "dst",
            "id",
            "xray_transition",
            "destination_subshell_id",
        )
        .add_join_as("atomic_shell", "srcshell", "id", "src", "atomic_shell_id")
        .add_join_as("atomic_shell", "dstshell", "id", "dst", "atomic_shell_id")
}
