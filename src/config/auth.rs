//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Authentication configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    /// Which session validator to use
    #[serde(default)]
    pub mode: AuthMode,
}

/// Session validation mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Trust identity assertions issued by the gateway in front of the
    /// service.
    #[default]
    Trusted,
    /// Accept only pre-registered test tokens. Development only.
    Mock,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.mode == AuthMode::Mock && *environment == Environment::Production {
            return Err(ValidationError::MockAuthInProduction);
        }
        Ok(())
    }
}
