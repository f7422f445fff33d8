//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `POLLS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use mysite::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod admin;
mod database;
mod error;
mod server;

pub use admin::AdminConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Admin site configuration
    pub admin: AdminConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads variables with the `POLLS` prefix:
    ///
    /// - `POLLS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `POLLS__DATABASE__URL=...` -> `database.url = ...`
    /// - `POLLS__ADMIN__TOKEN=...` -> `admin.token = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values cannot
    /// be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("POLLS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.admin.validate(&self.server.environment)?;
        if self.database.acquire_timeout() >= self.server.request_timeout() {
            return Err(ValidationError::AcquireTimeoutTooLong);
        }
        Ok(())
    }
}
