//! Local key-value persistence shim.
//!
//! This system persists exactly two small slices of state across process
//! restarts: the favorites list and the admin session profile. Both go
//! through the [`KvStore`] trait defined here.
//!
//! # Modules
//!
//! - `backend`: the [`KvStore`] trait
//! - `json`: JSON file implementation with atomic writes
//! - `memory`: map-backed implementation for tests and ephemeral use

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::KvStore;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
