//! Local key-value persistence for journal state.
//!
//! All persisted state lives under a handful of namespaced keys in a single
//! local store: the entry collection, the streak count, and the last-entry
//! calendar day. The store has localStorage-style semantics: every write
//! persists the whole store synchronously, and readers tolerate a missing or
//! corrupt store by falling back to defaults.

use crate::errors::{AppError, AppResult, StoreError};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
#[cfg(unix)]
use std::fs::Permissions;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A minimal key-value store over JSON values.
///
/// There is exactly one logical writer per session, so no read-modify-write
/// guard is provided. Writes persist the entire store wholesale.
pub trait KvStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Stores `value` under `key` and persists the whole store synchronously.
    fn put(&mut self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// A file-backed key-value store: one JSON object per store file.
///
/// Opening never fails. A missing file yields an empty store; a malformed
/// file is logged and treated as empty, since this is low-stakes personal
/// data and silently starting fresh beats refusing to start at all.
pub struct FileStore {
    path: PathBuf,
    map: BTreeMap<String, Value>,
}

impl FileStore {
    /// Opens the store file at `path`, restoring any previously persisted state.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, Value>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(
                        "Store file {} is malformed ({}); starting with an empty store",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No store file at {}; starting fresh", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                warn!(
                    "Could not read store file {} ({}); starting with an empty store",
                    path.display(),
                    e
                );
                BTreeMap::new()
            }
        };

        FileStore { path, map }
    }

    /// Returns the path of the backing store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(&self.map)?;
        fs::write(&self.path, serialized).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    fn put(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.map.insert(key.to_string(), value);
        self.persist()
    }
}

/// An in-memory key-value store for tests.
#[derive(Default)]
pub struct MemoryStore {
    map: BTreeMap<String, Value>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with the given key-value pairs.
    pub fn with_values(values: impl IntoIterator<Item = (String, Value)>) -> Self {
        MemoryStore {
            map: values.into_iter().collect(),
        }
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    fn put(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.map.insert(key.to_string(), value);
        Ok(())
    }
}

/// Ensures the data directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns:
/// - `AppError::Config` if the provided path is not an absolute path
/// - `AppError::Io` if the directory creation fails due to permission issues,
///   invalid paths, or other filesystem errors
pub fn ensure_data_directory_exists(data_dir: &Path) -> AppResult<()> {
    // Validate that the path is absolute as a defense-in-depth measure
    if !data_dir.is_absolute() {
        return Err(AppError::Config(format!(
            "Data directory path must be absolute: {}",
            data_dir.display()
        )));
    }

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        // Journal data is personal; keep the directory owner-only.
        #[cfg(unix)]
        {
            let permissions = Permissions::from_mode(crate::constants::DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(data_dir, permissions).map_err(|e| {
                AppError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to set permissions on data directory: {}", e),
                ))
            })?;
            debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_store_get_and_put() {
        let mut store = MemoryStore::new();
        assert!(store.get("entries").is_none());

        store.put("entries", json!([1, 2, 3])).unwrap();
        assert_eq!(store.get("entries"), Some(&json!([1, 2, 3])));

        // Puts overwrite wholesale
        store.put("entries", json!([])).unwrap();
        assert_eq!(store.get("entries"), Some(&json!([])));
    }

    #[test]
    fn test_memory_store_with_values() {
        let store = MemoryStore::with_values([("streak_count".to_string(), json!(5))]);
        assert_eq!(store.get("streak_count"), Some(&json!(5)));
    }
}
