//! Admin site configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum admin token length accepted outside development.
pub const MIN_PRODUCTION_TOKEN_LENGTH: usize = 16;

/// Admin site configuration
#[derive(Debug, Deserialize)]
pub struct AdminConfig {
    /// Bearer token required on every `/admin` request
    pub token: SecretString,
}

impl AdminConfig {
    /// Validate admin configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let token = self.token.expose_secret();
        if token.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ADMIN_TOKEN"));
        }
        if *environment != Environment::Development && token.len() < MIN_PRODUCTION_TOKEN_LENGTH {
            return Err(ValidationError::AdminTokenTooShort);
        }
        Ok(())
    }
}
