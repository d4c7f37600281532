//! In-memory key-value store.
//!
//! A [`KvStore`] backed by a plain map. Nothing survives the process; useful
//! for tests and for callers that explicitly opt out of disk persistence.

use crate::domain::error::Result;
use crate::storage::backend::KvStore;
use std::collections::HashMap;

/// Map-backed key-value store with no persistence.
///
/// # Examples
///
/// ```
/// use forecourt::storage::{KvStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.put("favorites", "[]")?;
/// store.delete("favorites")?;
/// assert!(store.get("favorites")?.is_none());
/// # Ok::<(), forecourt::domain::ForecourtError>(())
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
