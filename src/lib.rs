//! Vaultprops - resolve Liquibase connection secrets from Azure Key Vault.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── resolve       # The one command: resolve + emit
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── credentials   # Service-principal credential bundle
//!     ├── session       # Scoped login/logout guard
//!     ├── resolve       # Secret-name computation and resolution
//!     ├── properties    # Resolved property set and emission
//!     └── store/        # Secret store backends
//!         ├── mod       # SecretStore trait
//!         └── az        # Azure CLI implementation
//! ```
//!
//! # Features
//!
//! - Single-attempt service-principal login, guaranteed logout on every path
//! - Fixed five-secret schema emitted in stable order
//! - Secret names, never values, in diagnostics
//! - Extensible store backend behind the `SecretStore` trait

pub mod cli;
pub mod core;
pub mod error;
