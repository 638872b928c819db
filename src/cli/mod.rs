//! Command-line interface.

pub mod output;
pub mod resolve;

use std::path::PathBuf;

use clap::Parser;

/// Vaultprops - resolve Liquibase connection secrets from Azure Key Vault.
#[derive(Parser)]
#[command(
    name = "vaultprops",
    about = "Resolve database credentials and a license key from Azure Key Vault into Liquibase properties",
    version,
    after_help = "Reads AZURE_CLIENT_ID, AZURE_CLIENT_SECRET and AZURE_TENANT_ID from the environment."
)]
pub struct Cli {
    /// Key Vault name holding the secrets
    pub vault: String,

    /// Environment identifier used to namespace secret names (e.g. dev, staging, prod)
    pub environment: String,

    /// Write a key=value properties file here instead of printing NAME=value lines
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute the resolve command.
pub fn execute(cli: &Cli) -> crate::error::Result<()> {
    resolve::execute(&cli.vault, &cli.environment, cli.output.as_deref())
}
