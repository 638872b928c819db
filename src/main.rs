//! Vaultprops - resolve Liquibase connection secrets from Azure Key Vault.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vaultprops::cli::output;
use vaultprops::cli::{execute, Cli};
use vaultprops::error::ResolveError;

fn main() {
    // Usage errors exit 1, not clap's default 2; --help/--version exit 0.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    });

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("VAULTPROPS_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vaultprops=debug")
        } else {
            EnvFilter::new("vaultprops=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(&cli) {
        let suggestion = match &e {
            ResolveError::MissingCredential(_) => {
                Some("export AZURE_CLIENT_ID, AZURE_CLIENT_SECRET and AZURE_TENANT_ID")
            }
            ResolveError::AuthenticationFailed(_) => {
                Some("check the service principal credentials and tenant")
            }
            ResolveError::Store(msg) if msg.contains("not found in PATH") => {
                Some("install the Azure CLI: https://aka.ms/azure-cli")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
