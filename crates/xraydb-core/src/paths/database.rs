//! Database path resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::{data_root, normalize_user_path};

/// Environment variable pointing directly at a database file.
pub const DATABASE_ENV: &str = "XRAYDB_DATABASE";

/// File name of the database inside the data root.
pub const DATABASE_FILE_NAME: &str = "xraydb.db";

/// Get the path to the database file.
///
/// Resolution order:
/// 1. Explicit override (e.g. `--database`)
/// 2. `XRAYDB_DATABASE` environment variable
/// 3. `<data root>/data/xraydb.db`, creating `data/` if needed
pub fn database_path(explicit: Option<&str>) -> Result<PathBuf, PathError> {
    if let Some(path) = explicit {
        return normalize_user_path(path);
    }
    if let Ok(path) = env::var(DATABASE_ENV) {
        return normalize_user_path(&path);
    }
    database_path_in(&data_root()?)
}

/// Database path inside a given data root.
pub fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");

    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(data_dir.join(DATABASE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let custom = std::env::temp_dir().join("custom.db");
        let path = database_path(Some(&custom.to_string_lossy())).unwrap();
        assert_eq!(path, custom);
    }

    #[test]
    fn test_database_path_in_creates_data_dir() {
        let root = std::env::temp_dir().join(format!("xraydb_paths_{}", std::process::id()));
        let path = database_path_in(&root).unwrap();
        assert!(root.join("data").is_dir());
        assert!(path.to_string_lossy().ends_with(DATABASE_FILE_NAME));
        std::fs::remove_dir_all(&root).ok();
    }
}
