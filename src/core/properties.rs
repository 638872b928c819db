//! The resolved property set and its two emission forms.
//!
//! The schema is fixed: five values, always emitted in the same order so
//! diffs of logs and generated files stay stable.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{ResolveError, Result};

/// The five resolved values, in emission order.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ResolvedProperties {
    pub license_key: String,
    pub url: String,
    pub username: String,
    pub password: String,
    pub changelog_file: String,
}

// Manual impl so resolved values never reach panic or debug output;
// diagnostics carry key names only.
impl fmt::Debug for ResolvedProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedProperties")
            .field("license_key", &"<redacted>")
            .field("url", &"<redacted>")
            .field("username", &"<redacted>")
            .field("password", &"<redacted>")
            .field("changelog_file", &"<redacted>")
            .finish()
    }
}

impl ResolvedProperties {
    /// (properties-file key, environment-injection name, value), in the
    /// fixed emission order.
    fn entries(&self) -> [(&'static str, &'static str, &str); 5] {
        [
            ("liquibaseProLicenseKey", "LIQUIBASE_LICENSE_KEY", &self.license_key),
            ("url", "LIQUIBASE_COMMAND_URL", &self.url),
            ("username", "LIQUIBASE_COMMAND_USERNAME", &self.username),
            ("password", "LIQUIBASE_COMMAND_PASSWORD", &self.password),
            (
                "changeLogFile",
                "LIQUIBASE_COMMAND_CHANGELOG_FILE",
                &self.changelog_file,
            ),
        ]
    }

    /// Render as a flat `key=value` properties file.
    ///
    /// # Errors
    ///
    /// Returns `EmbeddedNewline` if any value contains a line break; one
    /// line is one assignment, so such a value cannot be represented.
    pub fn to_properties(&self) -> Result<String> {
        self.render(|file_key, _| file_key)
    }

    /// Render as `NAME=value` lines for re-injection into a calling
    /// shell's environment.
    ///
    /// # Errors
    ///
    /// Returns `EmbeddedNewline` if any value contains a line break.
    pub fn to_env_lines(&self) -> Result<String> {
        self.render(|_, env_name| env_name)
    }

    fn render(&self, pick: impl Fn(&'static str, &'static str) -> &'static str) -> Result<String> {
        let mut out = String::new();
        for (file_key, env_name, value) in self.entries() {
            let key = pick(file_key, env_name);
            if value.contains('\n') || value.contains('\r') {
                // fail loudly rather than truncate; name the key, not the value
                return Err(ResolveError::EmbeddedNewline(key.to_string()));
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResolvedProperties {
        ResolvedProperties {
            license_key: "L".to_string(),
            url: "jdbc:x".to_string(),
            username: "u".to_string(),
            password: "p".to_string(),
            changelog_file: "c.xml".to_string(),
        }
    }

    #[test]
    fn env_lines_use_fixed_names_and_order() {
        let out = sample().to_env_lines().unwrap();
        assert_eq!(
            out,
            "LIQUIBASE_LICENSE_KEY=L\n\
             LIQUIBASE_COMMAND_URL=jdbc:x\n\
             LIQUIBASE_COMMAND_USERNAME=u\n\
             LIQUIBASE_COMMAND_PASSWORD=p\n\
             LIQUIBASE_COMMAND_CHANGELOG_FILE=c.xml\n"
        );
    }

    #[test]
    fn properties_file_uses_fixed_keys_and_order() {
        let out = sample().to_properties().unwrap();
        assert_eq!(
            out,
            "liquibaseProLicenseKey=L\n\
             url=jdbc:x\n\
             username=u\n\
             password=p\n\
             changeLogFile=c.xml\n"
        );
    }

    #[test]
    fn debug_output_redacts_all_values() {
        let dbg = format!("{:?}", sample());
        for value in ["L", "jdbc:x", "u", "p", "c.xml"] {
            assert!(!dbg.contains(&format!("\"{}\"", value)));
        }
        assert!(dbg.contains("<redacted>"));
    }

    #[test]
    fn newline_in_value_fails_and_names_the_key() {
        let mut props = sample();
        props.password = "line1\nline2".to_string();
        let err = props.to_env_lines().unwrap_err();
        assert!(matches!(err, ResolveError::EmbeddedNewline(_)));
        let msg = err.to_string();
        assert!(msg.contains("LIQUIBASE_COMMAND_PASSWORD"));
        assert!(!msg.contains("line1"));
    }

    #[test]
    fn carriage_return_also_fails() {
        let mut props = sample();
        props.url = "jdbc:x\rrest".to_string();
        assert!(props.to_properties().is_err());
    }
}
