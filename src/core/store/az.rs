//! Azure CLI secret store backend.
//!
//! Talks to Azure Key Vault through the `az` CLI in the same way a CI
//! pipeline step would: service-principal login, `keyvault secret show`
//! per lookup, logout.
//!
//! ## Requirements
//!
//! - `az` CLI must be installed and on PATH
//! - The service principal needs `get` permission on the vault's secrets

use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::trace;

use crate::core::credentials::Credentials;
use crate::core::store::SecretStore;
use crate::error::{ResolveError, Result};

const AZ_BIN: &str = "az";

/// Response shape of `az keyvault secret show --output json`.
/// Only the value field matters here.
#[derive(Deserialize)]
struct SecretBundle {
    value: String,
}

/// Azure Key Vault store backend using the az CLI.
pub struct AzCli;

impl AzCli {
    /// Create a new backend, verifying the az CLI is on PATH.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the CLI cannot be found.
    pub fn new() -> Result<Self> {
        which::which(AZ_BIN)
            .map_err(|_| ResolveError::Store("az CLI not found in PATH".to_string()))?;
        Ok(Self)
    }
}

impl SecretStore for AzCli {
    fn login(&self, credentials: &Credentials) -> Result<()> {
        trace!("logging in with service principal");

        let output = Command::new(AZ_BIN)
            .args([
                "login",
                "--service-principal",
                "--username",
                &credentials.client_id,
                "--password",
                &credentials.client_secret,
                "--tenant",
                &credentials.tenant_id,
                "--allow-no-subscriptions",
                "--output",
                "none",
            ])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ResolveError::Store(format!("failed to spawn az: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ResolveError::AuthenticationFailed(
                stderr.trim().to_string(),
            ));
        }

        Ok(())
    }

    fn get_secret(&self, vault: &str, name: &str) -> Result<String> {
        trace!(vault = vault, secret = name, "looking up secret");

        let output = Command::new(AZ_BIN)
            .args([
                "keyvault",
                "secret",
                "show",
                "--vault-name",
                vault,
                "--name",
                name,
                "--output",
                "json",
            ])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ResolveError::Store(format!("failed to spawn az: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // az reports a missing entry with the SecretNotFound error code
            if stderr.contains("SecretNotFound") || stderr.contains("was not found") {
                return Err(ResolveError::SecretNotFound(name.to_string()));
            }
            return Err(ResolveError::Store(format!(
                "lookup of {} failed: {}",
                name,
                stderr.trim()
            )));
        }

        let bundle: SecretBundle = serde_json::from_slice(&output.stdout)
            .map_err(|e| ResolveError::Store(format!("unexpected az output for {}: {}", name, e)))?;

        Ok(bundle.value)
    }

    fn logout(&self) -> Result<()> {
        trace!("logging out");

        let output = Command::new(AZ_BIN)
            .args(["logout"])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ResolveError::Store(format!("failed to spawn az: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ResolveError::Store(format!(
                "az logout failed: {}",
                stderr.trim()
            )));
        }

        Ok(())
    }
}
