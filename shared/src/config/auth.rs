//! Token issuance configuration

use serde::{Deserialize, Serialize};

/// Signing secret used when none is configured. Refused in production.
pub const DEVELOPMENT_SIGNING_SECRET: &str = "development-secret-please-change-in-production";

/// Longest accepted token lifetime (one year)
pub const MAX_TOKEN_TTL_SECONDS: u64 = 365 * 24 * 60 * 60;

/// Token issuance, lifetime and cleanup configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Subject every issued token authenticates
    pub subject: String,

    /// Seconds until an issued token is removed from the store
    pub token_ttl_seconds: u64,

    /// HS256 secret for signing custom tokens
    pub signing_secret: String,

    /// PEM private key for RS256 signing; takes precedence over the secret
    #[serde(default)]
    pub private_key_path: Option<String>,

    /// Issuer / service account placed in the token claims
    pub service_account: String,

    /// How often the expired-token sweeper runs
    pub cleanup_interval_seconds: u64,

    /// Whether the expired-token sweeper runs at all
    pub cleanup_enabled: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            subject: String::from("some-uid"),
            token_ttl_seconds: 3600, // 1 hour
            signing_secret: String::from(DEVELOPMENT_SIGNING_SECRET),
            private_key_path: None,
            service_account: String::from("fleet-api@fleet.local"),
            cleanup_interval_seconds: 300,
            cleanup_enabled: true,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let subject = std::env::var("TOKEN_SUBJECT").unwrap_or(defaults.subject);
        let token_ttl_seconds = std::env::var("TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.token_ttl_seconds);
        let signing_secret =
            std::env::var("TOKEN_SIGNING_SECRET").unwrap_or(defaults.signing_secret);
        let private_key_path = std::env::var("TOKEN_PRIVATE_KEY_PATH")
            .ok()
            .filter(|p| !p.is_empty());
        let service_account =
            std::env::var("TOKEN_SERVICE_ACCOUNT").unwrap_or(defaults.service_account);
        let cleanup_interval_seconds = std::env::var("TOKEN_CLEANUP_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.cleanup_interval_seconds);
        let cleanup_enabled = std::env::var("TOKEN_CLEANUP_ENABLED")
            .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(defaults.cleanup_enabled);

        Self {
            subject,
            token_ttl_seconds,
            signing_secret,
            private_key_path,
            service_account,
            cleanup_interval_seconds,
            cleanup_enabled,
        }
    }

    /// Check if the development secret would be used for signing
    pub fn is_using_default_secret(&self) -> bool {
        self.private_key_path.is_none() && self.signing_secret == DEVELOPMENT_SIGNING_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.subject, "some-uid");
        assert_eq!(config.token_ttl_seconds, 3600);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_private_key_replaces_default_secret() {
        let config = AuthConfig {
            private_key_path: Some("keys/signing.pem".to_string()),
            ..Default::default()
        };
        assert!(!config.is_using_default_secret());
    }
}
