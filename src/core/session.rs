//! Scoped session guard over a secret store.
//!
//! Owns the login/logout lifecycle: login happens once in `Session::login`,
//! logout happens exactly once per run, whichever path the run takes. No
//! other component touches the session lifecycle.

use tracing::{debug, warn};

use crate::core::credentials::Credentials;
use crate::core::store::SecretStore;
use crate::error::{ResolveError, Result};

/// An authenticated session, released on drop.
#[derive(Debug)]
pub struct Session<'a, S: SecretStore> {
    store: &'a S,
}

impl<'a, S: SecretStore> Session<'a, S> {
    /// Exchange credentials for an authenticated session. One attempt,
    /// no retries.
    ///
    /// If login fails, a best-effort logout is still issued so no
    /// half-established session lingers, then the error propagates.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` from the backend.
    pub fn login(store: &'a S, credentials: &Credentials) -> Result<Self> {
        if let Err(e) = store.login(credentials) {
            best_effort_logout(store);
            return Err(e);
        }
        Ok(Self { store })
    }

    /// Look up one required secret. No caching, no retry.
    ///
    /// An empty value is an error distinct from a missing entry: the
    /// downstream properties file must never carry a blank credential.
    ///
    /// # Errors
    ///
    /// Returns `SecretNotFound`, `SecretEmpty`, or `Store`. Error text
    /// carries the secret name only.
    pub fn get_secret(&self, vault: &str, name: &str) -> Result<String> {
        debug!(secret = name, "fetching secret");
        let value = self.store.get_secret(vault, name)?;
        if value.is_empty() {
            return Err(ResolveError::SecretEmpty(name.to_string()));
        }
        Ok(value)
    }
}

impl<S: SecretStore> Drop for Session<'_, S> {
    fn drop(&mut self) {
        best_effort_logout(self.store);
    }
}

/// Logout failure is logged and suppressed: it must never mask an earlier
/// error or change a successful run's exit code.
fn best_effort_logout<S: SecretStore>(store: &S) {
    if let Err(e) = store.logout() {
        warn!("logout failed: {}", e);
    }
}
