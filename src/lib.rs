//! Forecourt: the in-process core of a vehicle dealership catalog and
//! administration front end.
//!
//! Forecourt holds the state and derivation logic behind a dealership UI:
//! customers browse, filter, sort, favorite, and inquire about vehicles;
//! administrators manage inventory and incoming inquiries. There is no
//! server, no database, and no wire protocol: state lives in process memory,
//! with a small key-value shim persisting exactly two slices of it (the
//! favorites list and the admin session) across restarts.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← AppContext, Router
//! │  - Injected state container                         │
//! │  - Screen routing                                   │
//! └─────────────────────────────────────────────────────┘
//!         │                  │                  │
//! ┌───────────────┐  ┌───────────────┐  ┌───────────────┐
//! │ Entity Store  │  │ Favorites /   │  │ Catalog Query │
//! │ (store/)      │  │ Session       │  │ Engine        │
//! │ - Vehicles    │  │ - KV-backed   │  │ (catalog/)    │
//! │ - Inquiries   │  │ - Rehydrated  │  │ - Pure fns    │
//! └───────────────┘  └───────────────┘  └───────────────┘
//!         │                  │                  │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Persistence Layers                        │
//! │  - Records and enums (domain/)                      │
//! │  - KvStore trait, JSON file backend (storage/)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Data flow is unidirectional and fully synchronous: a user intent mutates
//! one component, the derived catalog view is recomputed by a pure function,
//! and screens re-render from it. There are no background tasks, timers, or
//! concurrent writers.
//!
//! # Modules
//!
//! - [`domain`]: records, enums, and the crate error type
//! - [`store`]: the in-memory entity store
//! - [`storage`]: the local key-value persistence shim
//! - [`favorites`]: the persistent favorites tracker
//! - [`session`]: admin authentication state with a pluggable verifier
//! - [`catalog`]: the pure filter/sort query engine
//! - [`app`]: the injected state container and view router
//! - [`analytics`]: derived dashboard statistics
//! - [`observability`]: tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use forecourt::app::AppContext;
//! use forecourt::catalog::{FilterSpec, SortKey};
//! use forecourt::domain::{BodyType, FuelType, Specifications, Transmission, VehicleDraft};
//!
//! let mut ctx = AppContext::in_memory();
//!
//! let id = ctx
//!     .inventory_mut()
//!     .add_vehicle(VehicleDraft {
//!         brand: "Tesla".to_string(),
//!         model: "Model Y".to_string(),
//!         year: 2024,
//!         price: 4_800_000,
//!         mileage: 1_200,
//!         body_type: BodyType::Suv,
//!         color: "White".to_string(),
//!         fuel_type: FuelType::Electric,
//!         transmission: Transmission::Automatic,
//!         images: vec![],
//!         description: "Long range".to_string(),
//!         features: vec![],
//!         specifications: Specifications::default(),
//!         is_featured: true,
//!         is_available: true,
//!     })
//!     .id
//!     .clone();
//!
//! ctx.add_to_favorites(&id)?;
//!
//! let spec = FilterSpec::default().with_brand("Tesla");
//! let listed = ctx.catalog_view(&spec, SortKey::Featured);
//! assert_eq!(listed[0].id, id);
//! # Ok::<(), forecourt::domain::ForecourtError>(())
//! ```

pub mod analytics;
pub mod app;
pub mod catalog;
pub mod domain;
pub mod favorites;
pub mod observability;
pub mod session;
pub mod storage;
pub mod store;

pub use app::{AppContext, Page, Router, Screen};
pub use catalog::{query, FilterSpec, SortKey};
pub use domain::{ForecourtError, Result};

use serde::Deserialize;
use session::{AdminProfile, AdminRole, FixedCredentials};
use std::path::{Path, PathBuf};
use storage::JsonFileStore;

/// Name of the JSON file backing the key-value store.
const STORE_FILE: &str = "forecourt.json";

/// Crate configuration.
///
/// Covers the three things an embedding application may want to vary: where
/// persisted state lives, the prototyping admin credentials, and the tracing
/// level. All fields have sensible defaults; a missing config file field
/// falls back to them.
///
/// # TOML format
///
/// ```toml
/// data_dir = "/var/lib/forecourt"
/// admin_username = "admin"
/// admin_password = "admin123"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the persisted key-value file.
    ///
    /// `None` resolves to `$HOME/.local/share/forecourt` at initialization.
    pub data_dir: Option<PathBuf>,

    /// Username accepted by the stock credential verifier.
    pub admin_username: String,

    /// Password accepted by the stock credential verifier.
    pub admin_password: String,

    /// Tracing filter directive, e.g. `"info"` or `"forecourt=debug"`.
    ///
    /// Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Fields absent from the file take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as
    /// TOML. Unlike persisted runtime state, a broken config file is
    /// surfaced to the caller: silently ignoring an explicit configuration
    /// would be worse than failing.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ForecourtError::Config(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| ForecourtError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// The resolved directory for persisted state.
    fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            let home = std::env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from);
            home.join(".local").join("share").join("forecourt")
        })
    }
}

/// Initializes the application with configuration.
///
/// Sets up the tracing subscriber, opens (or creates) the JSON key-value
/// store under the configured data directory, builds the stock credential
/// verifier from the configured pair, and returns a ready [`AppContext`]
/// with favorites and session rehydrated.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created. A malformed
/// store file is not an error; it rehydrates as empty.
///
/// # Example
///
/// ```no_run
/// use forecourt::{initialize, Config};
///
/// let ctx = initialize(&Config::default())?;
/// assert!(!ctx.session().is_authenticated());
/// # Ok::<(), forecourt::ForecourtError>(())
/// ```
pub fn initialize(config: &Config) -> Result<AppContext> {
    observability::init_tracing(config);
    tracing::debug!("initializing forecourt");

    let store_path = config.resolved_data_dir().join(STORE_FILE);
    let kv = JsonFileStore::open(store_path)?;

    let verifier = FixedCredentials::new(
        config.admin_username.clone(),
        config.admin_password.clone(),
        AdminProfile {
            id: "1".to_string(),
            username: config.admin_username.clone(),
            email: "admin@cardealership.com".to_string(),
            role: AdminRole::Admin,
        },
    );

    Ok(AppContext::new(Box::new(kv), Box::new(verifier)))
}
