//! Names shared across the crate: credential variables, secret names,
//! output property keys.

/// Environment variables carrying the service-principal credentials.
pub const ENV_CLIENT_ID: &str = "AZURE_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "AZURE_CLIENT_SECRET";
pub const ENV_TENANT_ID: &str = "AZURE_TENANT_ID";

/// Application tag used in per-environment secret names
/// (`{environment}-liquibase-{property}`).
pub const SECRET_APPLICATION: &str = "liquibase";

/// Shared secrets, not namespaced by environment.
pub const SECRET_LICENSE_KEY: &str = "liquibase-license-key";
pub const SECRET_CHANGELOG_FILE: &str = "changelog-file";

/// Per-environment secret properties.
pub const PROP_DB_URL: &str = "db-url";
pub const PROP_DB_USERNAME: &str = "db-username";
pub const PROP_DB_PASSWORD: &str = "db-password";
