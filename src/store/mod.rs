//! Entity store layer.
//!
//! Holds the in-memory [`Inventory`], the single source of truth for vehicle
//! and inquiry records during the process lifetime.

pub mod inventory;

pub use inventory::Inventory;
