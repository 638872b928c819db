//! Service-principal credential bundle.
//!
//! Credentials are read from the ambient environment exactly once, at the
//! CLI boundary, into an explicit struct. Lower-level components only ever
//! see the struct, never `std::env`.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::constants::{ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_TENANT_ID};
use crate::error::{ResolveError, Result};

/// The three fields a service-principal login needs. All opaque strings.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
}

// Manual impl so the client secret never reaches panic or debug output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("tenant_id", &self.tenant_id)
            .finish()
    }
}

impl Credentials {
    /// Build a credential bundle from explicit values.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` naming the first empty field.
    pub fn new(client_id: String, client_secret: String, tenant_id: String) -> Result<Self> {
        let creds = Self {
            client_id,
            client_secret,
            tenant_id,
        };
        creds.validate()?;
        Ok(creds)
    }

    /// Read the credential bundle from the process environment.
    ///
    /// Call this from the CLI layer only.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` naming the first variable that is unset
    /// or empty. No network call happens before this check passes.
    pub fn from_env() -> Result<Self> {
        Self::new(
            read_var(ENV_CLIENT_ID)?,
            read_var(ENV_CLIENT_SECRET)?,
            read_var(ENV_TENANT_ID)?,
        )
    }

    fn validate(&self) -> Result<()> {
        if self.client_id.is_empty() {
            return Err(ResolveError::MissingCredential(ENV_CLIENT_ID));
        }
        if self.client_secret.is_empty() {
            return Err(ResolveError::MissingCredential(ENV_CLIENT_SECRET));
        }
        if self.tenant_id.is_empty() {
            return Err(ResolveError::MissingCredential(ENV_TENANT_ID));
        }
        Ok(())
    }
}

fn read_var(name: &'static str) -> Result<String> {
    std::env::var(name).map_err(|_| ResolveError::MissingCredential(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(id: &str, secret: &str, tenant: &str) -> Result<Credentials> {
        Credentials::new(id.to_string(), secret.to_string(), tenant.to_string())
    }

    #[test]
    fn accepts_complete_bundle() {
        assert!(creds("app-id", "app-secret", "tenant").is_ok());
    }

    #[test]
    fn debug_output_redacts_the_client_secret() {
        let c = creds("app-id", "app-secret", "tenant").unwrap();
        let dbg = format!("{:?}", c);
        assert!(!dbg.contains("app-secret"));
        assert!(dbg.contains("<redacted>"));
        assert!(dbg.contains("app-id"));
    }

    #[test]
    fn rejects_empty_client_id() {
        let err = creds("", "app-secret", "tenant").unwrap_err();
        assert!(matches!(
            err,
            ResolveError::MissingCredential("AZURE_CLIENT_ID")
        ));
    }

    #[test]
    fn rejects_empty_client_secret() {
        let err = creds("app-id", "", "tenant").unwrap_err();
        assert!(matches!(
            err,
            ResolveError::MissingCredential("AZURE_CLIENT_SECRET")
        ));
    }

    #[test]
    fn rejects_empty_tenant_id() {
        let err = creds("app-id", "app-secret", "").unwrap_err();
        assert!(matches!(
            err,
            ResolveError::MissingCredential("AZURE_TENANT_ID")
        ));
    }
}
