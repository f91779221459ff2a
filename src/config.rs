use std::env;

use thiserror::Error;

// ============================================================================
// Credentials
// ============================================================================

/// Environment variable holding the login email.
pub const EMAIL_VAR: &str = "EMAIL";
/// Environment variable holding the login password.
pub const PASSWORD_VAR: &str = "PASSWORD";
/// Environment variable holding the identity-provider application id.
pub const APPLICATION_ID_VAR: &str = "APPLICATION_ID";

/// Login credentials, resolved once at startup.
///
/// Defaults are applied at construction so the rest of the crate never
/// touches the process environment.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub application_id: String,
}

impl Credentials {
    /// Read credentials from the process environment.
    ///
    /// `EMAIL` and `PASSWORD` are required. `APPLICATION_ID` falls back to
    /// the provider's default tenant application.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build credentials from an arbitrary variable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let email = lookup(EMAIL_VAR).ok_or(ConfigError::MissingVar(EMAIL_VAR))?;
        let password = lookup(PASSWORD_VAR).ok_or(ConfigError::MissingVar(PASSWORD_VAR))?;
        let application_id = lookup(APPLICATION_ID_VAR).unwrap_or_else(default_application_id);

        Ok(Self {
            email,
            password,
            application_id,
        })
    }
}

fn default_application_id() -> String {
    "1".to_string()
}

// ============================================================================
// ConfigError
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

// ============================================================================
// Tests
// ============================================================================
