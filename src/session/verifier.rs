//! Credential verification seam.
//!
//! The session layer never compares credentials itself; it delegates to a
//! [`CredentialVerifier`]. The only implementation shipped here is
//! [`FixedCredentials`], the prototyping placeholder matching one configured
//! username/password pair. A real verifier (API call, password hash check)
//! can be substituted without touching any call site.

use super::profile::{AdminProfile, AdminRole};

/// Verifies a credential pair and produces the admin profile on success.
///
/// Implementations decide what "valid" means. Returning `None` signals
/// rejection; the session layer leaves its state untouched in that case.
pub trait CredentialVerifier {
    /// Checks the pair, returning the authenticated profile on a match.
    fn verify(&self, username: &str, password: &str) -> Option<AdminProfile>;
}

/// Single fixed credential pair.
///
/// This is explicitly a placeholder trust model for gating the admin screen
/// during prototyping, not a security boundary. There is no hashing, no
/// lockout, no rate limiting, and no audit trail.
///
/// # Examples
///
/// ```
/// use forecourt::session::{CredentialVerifier, FixedCredentials};
///
/// let verifier = FixedCredentials::default();
/// assert!(verifier.verify("admin", "admin123").is_some());
/// assert!(verifier.verify("admin", "wrong").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct FixedCredentials {
    username: String,
    password: String,
    profile: AdminProfile,
}

impl FixedCredentials {
    /// Creates a verifier for the given pair, producing `profile` on match.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>, profile: AdminProfile) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            profile,
        }
    }
}

impl Default for FixedCredentials {
    /// The stock prototyping credentials: `admin` / `admin123`.
    fn default() -> Self {
        Self::new(
            "admin",
            "admin123",
            AdminProfile {
                id: "1".to_string(),
                username: "admin".to_string(),
                email: "admin@cardealership.com".to_string(),
                role: AdminRole::Admin,
            },
        )
    }
}

impl CredentialVerifier for FixedCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<AdminProfile> {
        if username == self.username && password == self.password {
            Some(self.profile.clone())
        } else {
            None
        }
    }
}
