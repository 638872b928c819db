//! The resolve command: credentials in, properties out.

use std::path::Path;

use tracing::debug;

use crate::cli::output;
use crate::core::credentials::Credentials;
use crate::core::resolve::resolve_properties;
use crate::core::store::AzCli;
use crate::error::{ResolveError, Result};

/// Resolve the property set from the vault and emit it.
///
/// With an output path, writes a `key=value` properties file; without one,
/// prints `NAME=value` lines to stdout for the calling shell to parse.
/// Emission happens only after every secret resolved, so a failed run
/// leaves no partial file and no partial stdout.
pub fn execute(vault: &str, environment: &str, out: Option<&Path>) -> Result<()> {
    if vault.is_empty() {
        return Err(ResolveError::InvalidArguments(
            "vault name must not be empty".to_string(),
        ));
    }
    if environment.is_empty() {
        return Err(ResolveError::InvalidArguments(
            "environment must not be empty".to_string(),
        ));
    }

    // Ambient environment is read here, once; everything below gets the
    // explicit bundle.
    let credentials = Credentials::from_env()?;
    let store = AzCli::new()?;

    debug!(vault = vault, environment = environment, "resolving properties");
    let props = resolve_properties(&store, &credentials, vault, environment)?;

    match out {
        Some(path) => {
            let text = props.to_properties()?;
            std::fs::write(path, text)?;
            output::success(&format!(
                "wrote 5 properties to {}",
                output::path(&path.display().to_string())
            ));
        }
        None => {
            let lines = props.to_env_lines()?;
            print!("{}", lines);
        }
    }

    Ok(())
}
