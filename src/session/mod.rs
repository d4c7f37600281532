//! Admin session layer.
//!
//! Holds the process's authentication state behind a pluggable credential
//! check, mirrored to local storage for restart continuity. This is a
//! prototyping gate for the admin screen, not a security model: no tokens,
//! no expiry, no server validation.
//!
//! # Modules
//!
//! - `profile`: the [`AdminProfile`] record and [`AdminRole`] enum
//! - `verifier`: the [`CredentialVerifier`] seam and its fixed-pair impl
//! - `state`: the [`Session`] state machine and persistence glue

pub mod profile;
pub mod state;
pub mod verifier;

pub use profile::{AdminProfile, AdminRole};
pub use state::{Session, SESSION_KEY};
pub use verifier::{CredentialVerifier, FixedCredentials};
