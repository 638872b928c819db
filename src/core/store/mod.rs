//! Secret store backends.
//!
//! Provides the lookup abstraction against the vault service.
//!
//! ## Backends
//!
//! - **az**: Default. Shells out to the Azure CLI for login, secret
//!   retrieval, and logout.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `aws.rs`)
//! 3. Re-export from this module

mod az;

pub use az::AzCli;

use crate::core::credentials::Credentials;
use crate::error::Result;

/// Secret store backend trait.
///
/// Abstracts the three calls the resolver makes against a vault service:
/// a single login, one lookup per secret, and a logout. All calls are
/// blocking and synchronous; timeout behavior belongs to the backend.
///
/// Implementations must never place a secret value in an error message or
/// a log line. Secret names are fine; values are not.
pub trait SecretStore {
    /// Establish an authenticated session. Called at most once per run,
    /// with no retries.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` if the store rejects the credentials.
    fn login(&self, credentials: &Credentials) -> Result<()>;

    /// Look up one secret by name in the named vault.
    ///
    /// # Errors
    ///
    /// Returns `SecretNotFound` if the vault has no entry under `name`,
    /// `Store` for transport or tooling failures.
    fn get_secret(&self, vault: &str, name: &str) -> Result<String>;

    /// Tear down the authenticated session.
    ///
    /// # Errors
    ///
    /// Returns `Store` if logout fails; callers treat this as non-fatal.
    fn logout(&self) -> Result<()>;
}
