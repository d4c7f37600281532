//! The injected application state container.
//!
//! [`AppContext`] owns every stateful component of the system (inventory,
//! favorites, session, router) plus the key-value store and the credential
//! verifier behind them. It is constructed once and passed explicitly to
//! whatever consumes it; there is no ambient global, which keeps ownership
//! and test isolation explicit.
//!
//! Each component is still mutated only through its own operations. The
//! context adds the handful of cross-component flows: favorite toggling
//! (favorites + store), login (verifier + session + router), and the
//! catalog view (inventory + query engine).

use crate::catalog::{self, FilterSpec, SortKey};
use crate::domain::error::Result;
use crate::domain::Vehicle;
use crate::favorites::Favorites;
use crate::session::{CredentialVerifier, FixedCredentials, Session};
use crate::storage::{KvStore, MemoryStore};
use crate::store::Inventory;

use super::router::Router;

/// Owns all application state and the seams behind it.
///
/// # Examples
///
/// ```
/// use forecourt::app::AppContext;
///
/// let mut ctx = AppContext::in_memory();
/// assert!(ctx.login("admin", "admin123")?);
/// assert!(ctx.session().is_authenticated());
/// # Ok::<(), forecourt::domain::ForecourtError>(())
/// ```
pub struct AppContext {
    inventory: Inventory,
    favorites: Favorites,
    session: Session,
    router: Router,
    kv: Box<dyn KvStore>,
    verifier: Box<dyn CredentialVerifier>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("vehicles", &self.inventory.vehicles().len())
            .field("inquiries", &self.inventory.inquiries().len())
            .field("favorites", &self.favorites.len())
            .field("authenticated", &self.session.is_authenticated())
            .field("page", &self.router.current_page())
            .finish()
    }
}

impl AppContext {
    /// Builds a context on top of the given store and verifier.
    ///
    /// Favorites and session are rehydrated from the store; the inventory
    /// starts empty (it has no backing persistence) and the router sits on
    /// the home page.
    #[must_use]
    pub fn new(kv: Box<dyn KvStore>, verifier: Box<dyn CredentialVerifier>) -> Self {
        let favorites = Favorites::load(kv.as_ref());
        let session = Session::load(kv.as_ref());

        tracing::debug!(
            favorites = favorites.len(),
            authenticated = session.is_authenticated(),
            "application context created"
        );

        Self {
            inventory: Inventory::new(),
            favorites,
            session,
            router: Router::new(),
            kv,
            verifier,
        }
    }

    /// Builds a context with no disk persistence and the stock credentials.
    ///
    /// Intended for tests and demos; nothing survives the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(MemoryStore::new()),
            Box::new(FixedCredentials::default()),
        )
    }

    /// Read access to the entity store.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable access to the entity store for administrative CRUD.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Read access to the favorites set.
    #[must_use]
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Read access to the session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read access to the router.
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Mutable access to the router for navigation intents.
    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    /// Computes the catalog display list over the current inventory.
    ///
    /// Pure derivation; calling this never changes state.
    #[must_use]
    pub fn catalog_view(&self, filters: &FilterSpec, sort: SortKey) -> Vec<Vehicle> {
        catalog::query(self.inventory.vehicles(), filters, sort)
    }

    /// The favorited vehicles that still exist, in insertion order.
    #[must_use]
    pub fn favorite_vehicles(&self) -> Vec<&Vehicle> {
        self.favorites.vehicles_in(&self.inventory)
    }

    /// Adds a vehicle to the favorites set (idempotent) and persists it.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the list fails.
    pub fn add_to_favorites(&mut self, vehicle_id: &str) -> Result<()> {
        self.favorites.add(vehicle_id, self.kv.as_mut())
    }

    /// Removes a vehicle from the favorites set and persists it.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the list fails.
    pub fn remove_from_favorites(&mut self, vehicle_id: &str) -> Result<()> {
        self.favorites.remove(vehicle_id, self.kv.as_mut())
    }

    /// Flips a vehicle's favorite state. Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the list fails.
    pub fn toggle_favorite(&mut self, vehicle_id: &str) -> Result<bool> {
        if self.favorites.contains(vehicle_id) {
            self.remove_from_favorites(vehicle_id)?;
            Ok(false)
        } else {
            self.add_to_favorites(vehicle_id)?;
            Ok(true)
        }
    }

    /// Attempts a login and, on success, routes to the admin page.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the session fails; the boolean is the
    /// authentication outcome.
    pub fn login(&mut self, username: &str, password: &str) -> Result<bool> {
        let ok = self
            .session
            .login(username, password, self.verifier.as_ref(), self.kv.as_mut())?;
        if ok {
            self.router.on_login_success();
        }
        Ok(ok)
    }

    /// Logs out and clears the persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error if removing the persisted entry fails.
    pub fn logout(&mut self) -> Result<()> {
        self.session.logout(self.kv.as_mut())
    }
}
