//! Secret-name computation and the resolution sequence.
//!
//! One run is strictly sequential: validate credentials, login, fetch the
//! five required secrets one by one, logout. All five secrets are required;
//! the first failure aborts the whole resolution. Nothing here caches,
//! retries, or substitutes placeholder values for failed lookups.

use crate::core::constants::{
    PROP_DB_PASSWORD, PROP_DB_URL, PROP_DB_USERNAME, SECRET_APPLICATION, SECRET_CHANGELOG_FILE,
    SECRET_LICENSE_KEY,
};
use crate::core::credentials::Credentials;
use crate::core::properties::ResolvedProperties;
use crate::core::session::Session;
use crate::core::store::SecretStore;
use crate::error::Result;

/// Compute the per-environment secret name for a property.
///
/// `dev` + `db-url` becomes `dev-liquibase-db-url`.
pub fn scoped_name(environment: &str, property: &str) -> String {
    format!("{}-{}-{}", environment, SECRET_APPLICATION, property)
}

/// Resolve the full property set from the store.
///
/// Performs the single login, the five lookups, and (via the session
/// guard) the logout. Returns the fully resolved set or the first error.
///
/// # Errors
///
/// Returns `MissingCredential` before any store call if the bundle is
/// incomplete, `AuthenticationFailed` if login fails, and the first
/// `SecretNotFound`/`SecretEmpty`/`Store` error from a lookup.
pub fn resolve_properties<S: SecretStore>(
    store: &S,
    credentials: &Credentials,
    vault: &str,
    environment: &str,
) -> Result<ResolvedProperties> {
    let session = Session::login(store, credentials)?;

    Ok(ResolvedProperties {
        license_key: session.get_secret(vault, SECRET_LICENSE_KEY)?,
        url: session.get_secret(vault, &scoped_name(environment, PROP_DB_URL))?,
        username: session.get_secret(vault, &scoped_name(environment, PROP_DB_USERNAME))?,
        password: session.get_secret(vault, &scoped_name(environment, PROP_DB_PASSWORD))?,
        changelog_file: session.get_secret(vault, SECRET_CHANGELOG_FILE)?,
    })
}
