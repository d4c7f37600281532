//! Session state: the authenticated/unauthenticated flag and profile.

use super::profile::AdminProfile;
use super::verifier::CredentialVerifier;
use crate::domain::error::{ForecourtError, Result};
use crate::storage::KvStore;

/// Storage key the admin profile is persisted under.
pub const SESSION_KEY: &str = "admin_session";

/// Current admin authentication state.
///
/// Either logged out (`None`) or holding the authenticated profile. The
/// boolean "authenticated" flag the system describes is derived: a present
/// profile means authenticated. The profile is mirrored to local storage on
/// login and removed on logout, so the state survives process restarts.
///
/// # Examples
///
/// ```
/// use forecourt::session::{FixedCredentials, Session};
/// use forecourt::storage::MemoryStore;
///
/// let verifier = FixedCredentials::default();
/// let mut store = MemoryStore::new();
/// let mut session = Session::load(&store);
///
/// assert!(!session.is_authenticated());
/// assert!(session.login("admin", "admin123", &verifier, &mut store)?);
/// assert!(session.is_authenticated());
/// # Ok::<(), forecourt::domain::ForecourtError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<AdminProfile>,
}

impl Session {
    /// Rehydrates session state from the key-value store.
    ///
    /// An absent key or a malformed value yields the logged-out state,
    /// never an error.
    #[must_use]
    pub fn load(store: &dyn KvStore) -> Self {
        let current = match store.get(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<AdminProfile>(&raw) {
                Ok(profile) => {
                    tracing::debug!(username = %profile.username, "session rehydrated");
                    Some(profile)
                }
                Err(e) => {
                    tracing::debug!(error = %e, "malformed session value, starting logged out");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::debug!(error = %e, "failed to read session, starting logged out");
                None
            }
        };

        Self { current }
    }

    /// Attempts a login with the given credentials.
    ///
    /// On a verifier match: stores the profile, persists it, and returns
    /// `Ok(true)`. On a mismatch: leaves all state untouched and returns
    /// `Ok(false)`. There is no lockout or rate limiting.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the profile fails; the
    /// authentication outcome itself is the boolean.
    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        verifier: &dyn CredentialVerifier,
        store: &mut dyn KvStore,
    ) -> Result<bool> {
        let _span = tracing::debug_span!("login", username = %username).entered();

        let Some(profile) = verifier.verify(username, password) else {
            tracing::debug!("credentials rejected");
            return Ok(false);
        };

        let raw = serde_json::to_string(&profile)
            .map_err(|e| ForecourtError::Storage(format!("failed to serialize profile: {e}")))?;
        store.put(SESSION_KEY, &raw)?;

        tracing::debug!(role = ?profile.role, "login succeeded");
        self.current = Some(profile);
        Ok(true)
    }

    /// Logs out: clears the profile and removes the persisted entry.
    ///
    /// # Errors
    ///
    /// Returns an error if removing the persisted entry fails.
    pub fn logout(&mut self, store: &mut dyn KvStore) -> Result<()> {
        tracing::debug!("logging out");
        self.current = None;
        store.delete(SESSION_KEY)
    }

    /// Whether an administrator is currently authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The authenticated profile, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&AdminProfile> {
        self.current.as_ref()
    }
}
