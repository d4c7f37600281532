//! JSON file-based key-value store.
//!
//! This module provides the default [`KvStore`] implementation: a single
//! human-readable JSON document holding a string-to-string map. It uses
//! atomic file writes (write-to-temp + rename) to prevent corruption on
//! crashes.
//!
//! A missing, unreadable, or malformed file on open is treated as an empty
//! store, never as a fatal condition. This is where the system's "corrupt
//! persisted state decays to defaults" rule is enforced.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1), the whole file is loaded into memory once on open
//! - **Write**: O(n), serializes and writes the entire map
//! - **Best for**: a handful of small keys, infrequent writes

use crate::domain::error::{ForecourtError, Result};
use crate::storage::backend::KvStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// On-disk container format.
///
/// Wraps the key map in a versioned object so the file stays extensible
/// without breaking older readers.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// All stored entries.
    #[serde(default)]
    entries: HashMap<String, String>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: HashMap::new(),
        }
    }
}

/// JSON file key-value store.
///
/// The entire map is kept in memory and flushed to disk on every mutation,
/// which is the right trade-off for this system's two small keys.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "favorites": "[\"1001\",\"1002\"]",
///     "admin_session": "{\"id\":\"1\",\"username\":\"admin\",...}"
///   }
/// }
/// ```
pub struct JsonFileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory cache, loaded on open.
    data: StoreData,
}

impl std::fmt::Debug for JsonFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("file_path", &self.file_path)
            .field("entries", &self.data.entries.len())
            .finish()
    }
}

impl JsonFileStore {
    /// Creates or opens a JSON file store.
    ///
    /// If the file exists and parses, its contents are loaded. If it exists
    /// but is unreadable or malformed, the store starts empty and the bad
    /// content is overwritten on the next write. Parent directories are
    /// created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error only if parent directory creation fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use forecourt::storage::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::open(PathBuf::from("/tmp/forecourt.json"))?;
    /// # Ok::<(), forecourt::domain::ForecourtError>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON key-value store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_or_default(&file_path)
        } else {
            tracing::debug!("no existing file, starting empty");
            StoreData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "store opened");

        Ok(Self { file_path, data })
    }

    /// Loads store data from disk, falling back to empty on any failure.
    ///
    /// Malformed persisted state must be treated as absent, so both read
    /// errors and parse errors degrade to the default (empty) store.
    fn load_or_default(path: &Path) -> StoreData {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(error = %e, "failed to read store file, starting empty");
                return StoreData::default();
            }
        };

        match serde_json::from_str::<StoreData>(&contents) {
            Ok(data) => {
                tracing::debug!(
                    version = data.version,
                    entries = data.entries.len(),
                    "loaded store data"
                );
                data
            }
            Err(e) => {
                tracing::debug!(error = %e, "malformed store file, starting empty");
                StoreData::default()
            }
        }
    }

    /// Saves store data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then renames it to the target path,
    /// so the file is never left half-written even if the process crashes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename
    /// fails.
    fn save_to_file(&self) -> Result<()> {
        tracing::debug!(path = ?self.file_path, "saving store data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| ForecourtError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::trace!("store saved");
        Ok(())
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("kv_put", key = %key).entered();

        self.data
            .entries
            .insert(key.to_string(), value.to_string());
        self.save_to_file()
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("kv_delete", key = %key).entered();

        if self.data.entries.remove(key).is_none() {
            tracing::trace!("key absent, nothing to delete");
            return Ok(());
        }
        self.save_to_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("store.json")).unwrap();

        store.put("favorites", "[\"42\"]").unwrap();
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[\"42\"]"));
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut store = JsonFileStore::open(path.clone()).unwrap();
            store.put("admin_session", "{}").unwrap();
        }

        let reopened = JsonFileStore::open(path).unwrap();
        assert_eq!(reopened.get("admin_session").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn delete_removes_key_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("store.json")).unwrap();

        store.put("favorites", "[]").unwrap();
        store.delete("favorites").unwrap();
        assert_eq!(store.get("favorites").unwrap(), None);

        // Deleting again is a no-op, not an error.
        store.delete("favorites").unwrap();
    }

    #[test]
    fn malformed_file_opens_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json at all {{{").unwrap();

        let store = JsonFileStore::open(path).unwrap();
        assert_eq!(store.get("favorites").unwrap(), None);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("store.json");

        let mut store = JsonFileStore::open(path).unwrap();
        store.put("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
