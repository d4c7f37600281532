//! Admin profile record.

use serde::{Deserialize, Serialize};

/// Role of an authenticated administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Admin,
    Manager,
}

/// Minimal profile of the authenticated administrator.
///
/// Produced by a [`CredentialVerifier`](super::CredentialVerifier) on a
/// successful login and mirrored into local storage for restart continuity.
/// Carries no token and is never validated against a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: AdminRole,
}
