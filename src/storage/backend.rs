//! Key-value store abstraction.
//!
//! This module defines the [`KvStore`] trait that abstracts over the small
//! persistence shim backing favorites and the admin session. The trait is
//! string-in, string-out: callers serialize their own payloads (in practice
//! with `serde_json`) and interpret any deserialization failure as "no saved
//! value", never as an error.
//!
//! # Design Philosophy
//!
//! The trait is minimal on purpose. Exactly two keys exist in the system
//! (the favorites list and the admin profile), there is no schema, no
//! versioned migrations at the value level, and no query surface. Anything
//! more would be inventing a database this system does not have.

use crate::domain::error::Result;

/// Abstraction over the local key-value persistence shim.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): single JSON document
///   on disk with atomic writes (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): in-process map, nothing
///   survives the process (tests, ephemeral callers)
///
/// # Examples
///
/// ```
/// use forecourt::storage::{KvStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.put("favorites", "[\"1001\"]")?;
/// assert_eq!(store.get("favorites")?.as_deref(), Some("[\"1001\"]"));
/// # Ok::<(), forecourt::domain::ForecourtError>(())
/// ```
pub trait KvStore: Send {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written or was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error only for genuine I/O failures; a missing or corrupt
    /// backing file is not one (see [`JsonFileStore`](crate::storage::JsonFileStore)).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn put(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`. No-op if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal cannot be persisted.
    fn delete(&mut self, key: &str) -> Result<()>;
}
