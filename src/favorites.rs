//! Favorites tracker with local persistence.
//!
//! [`Favorites`] holds the set of vehicle identifiers the current device's
//! visitor has bookmarked. Every mutation serializes the full list into the
//! key-value store under a fixed key; construction rehydrates from that key,
//! treating a missing or malformed value as empty.
//!
//! The set holds bare identifiers, not vehicle records. A favorited
//! identifier may reference a since-deleted vehicle; resolving favorites
//! against the inventory simply omits it.

use crate::domain::error::{ForecourtError, Result};
use crate::domain::Vehicle;
use crate::storage::KvStore;
use crate::store::Inventory;

/// Storage key the favorites list is persisted under.
pub const FAVORITES_KEY: &str = "favorites";

/// Per-device set of favorited vehicle identifiers.
///
/// Insertion-ordered and duplicate-free: `add` is idempotent, so adding an
/// identifier that is already present changes nothing and skips the
/// persistence write.
///
/// # Examples
///
/// ```
/// use forecourt::favorites::Favorites;
/// use forecourt::storage::MemoryStore;
///
/// let mut store = MemoryStore::new();
/// let mut favorites = Favorites::load(&store);
///
/// favorites.add("1001", &mut store)?;
/// assert!(favorites.contains("1001"));
///
/// // A rehydrated tracker sees the same set.
/// let rehydrated = Favorites::load(&store);
/// assert!(rehydrated.contains("1001"));
/// # Ok::<(), forecourt::domain::ForecourtError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    /// Rehydrates the favorites set from the key-value store.
    ///
    /// An absent key, an unreadable value, or malformed JSON all yield the
    /// empty set. Corruption of persisted state is never fatal here.
    #[must_use]
    pub fn load(store: &dyn KvStore) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => ids,
                Err(e) => {
                    tracing::debug!(error = %e, "malformed favorites value, starting empty");
                    vec![]
                }
            },
            Ok(None) => vec![],
            Err(e) => {
                tracing::debug!(error = %e, "failed to read favorites, starting empty");
                vec![]
            }
        };

        tracing::debug!(count = ids.len(), "favorites loaded");
        Self { ids }
    }

    /// Adds an identifier to the set and persists the new list.
    ///
    /// Idempotent: an identifier that is already present is not added again
    /// and nothing is written. The identifier is not validated against the
    /// inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated list fails.
    pub fn add(&mut self, id: &str, store: &mut dyn KvStore) -> Result<()> {
        if self.contains(id) {
            tracing::trace!(vehicle_id = %id, "already favorited, skipping");
            return Ok(());
        }
        self.ids.push(id.to_string());
        tracing::debug!(vehicle_id = %id, count = self.ids.len(), "favorite added");
        self.persist(store)
    }

    /// Removes an identifier from the set and persists the new list.
    ///
    /// No-op (without a write) if the identifier is not present.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated list fails.
    pub fn remove(&mut self, id: &str, store: &mut dyn KvStore) -> Result<()> {
        let before = self.ids.len();
        self.ids.retain(|fav| fav != id);
        if self.ids.len() == before {
            tracing::trace!(vehicle_id = %id, "not favorited, nothing to remove");
            return Ok(());
        }
        tracing::debug!(vehicle_id = %id, count = self.ids.len(), "favorite removed");
        self.persist(store)
    }

    /// Whether the identifier is currently favorited.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// The favorited identifiers in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of favorited identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolves the favorites against the inventory, in insertion order.
    ///
    /// Identifiers whose vehicle has been deleted are silently omitted; the
    /// weak reference failing lookup is expected, not an error.
    #[must_use]
    pub fn vehicles_in<'a>(&self, inventory: &'a Inventory) -> Vec<&'a Vehicle> {
        self.ids
            .iter()
            .filter_map(|id| inventory.vehicle(id))
            .collect()
    }

    /// Serializes the full list into the store.
    fn persist(&self, store: &mut dyn KvStore) -> Result<()> {
        let raw = serde_json::to_string(&self.ids)
            .map_err(|e| ForecourtError::Storage(format!("failed to serialize favorites: {e}")))?;
        store.put(FAVORITES_KEY, &raw)
    }
}
