//! Configuration for the token service

use std::path::PathBuf;
use std::time::Duration;

use fleet_shared::config::{AuthConfig, DEVELOPMENT_SIGNING_SECRET};

use crate::domain::entities::token::{DEFAULT_TOKEN_SUBJECT, DEFAULT_TOKEN_TTL_SECONDS};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Subject every issued token authenticates
    pub subject: String,
    /// Seconds until an issued token is removed from the store
    pub token_ttl_seconds: u64,
    /// HS256 signing secret
    pub signing_secret: String,
    /// RS256 private key; used instead of the secret when set
    pub private_key_path: Option<PathBuf>,
    /// Issuer placed in the custom token claims
    pub service_account: String,
}

impl TokenServiceConfig {
    /// Token lifetime as a timer delay
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_seconds)
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            subject: DEFAULT_TOKEN_SUBJECT.to_string(),
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
            signing_secret: DEVELOPMENT_SIGNING_SECRET.to_string(),
            private_key_path: None,
            service_account: "fleet-api@fleet.local".to_string(),
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            subject: config.subject.clone(),
            token_ttl_seconds: config.token_ttl_seconds,
            signing_secret: config.signing_secret.clone(),
            private_key_path: config.private_key_path.as_ref().map(PathBuf::from),
            service_account: config.service_account.clone(),
        }
    }
}
