//! Configuration module with business-specific sub-modules
//!
//! - `auth` - token minting, lifetime and cleanup settings
//! - `database` - document store selection and connection pool settings
//! - `environment` - environment detection
//! - `server` - HTTP listener settings

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, DEVELOPMENT_SIGNING_SECRET, MAX_TOKEN_TTL_SECONDS};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Document store configuration
    pub database: DatabaseConfig,

    /// Token configuration
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
        }
    }

    /// Check settings that would make the server unsafe or unusable
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("PORT must be a non-zero port number".to_string());
        }
        if self.auth.token_ttl_seconds == 0 {
            return Err("TOKEN_TTL_SECONDS must be greater than zero".to_string());
        }
        if self.auth.token_ttl_seconds > MAX_TOKEN_TTL_SECONDS {
            return Err(format!(
                "TOKEN_TTL_SECONDS must not exceed {}",
                MAX_TOKEN_TTL_SECONDS
            ));
        }
        if self.auth.subject.is_empty() {
            return Err("TOKEN_SUBJECT must not be empty".to_string());
        }
        if self.environment.is_production() && self.auth.is_using_default_secret() {
            return Err(
                "TOKEN_SIGNING_SECRET or TOKEN_PRIVATE_KEY_PATH must be set in production".to_string(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.auth.token_ttl_seconds, 3600);
    }

    #[test]
    fn test_production_rejects_default_secret() {
        let config = AppConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let mut config = config;
        config.auth.signing_secret = "a-real-secret".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_ttl_is_rejected() {
        let mut config = AppConfig::default();
        config.auth.token_ttl_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_ttl_is_rejected() {
        let mut config = AppConfig::default();
        config.auth.token_ttl_seconds = 9_000_000_000_000;
        assert!(config.validate().is_err());

        config.auth.token_ttl_seconds = MAX_TOKEN_TTL_SECONDS;
        assert!(config.validate().is_ok());
    }
}
