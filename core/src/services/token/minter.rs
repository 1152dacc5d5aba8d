//! Custom token minting

use async_trait::async_trait;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::fs;
use std::path::Path;

use crate::domain::entities::token::{CustomTokenClaims, MAX_SUBJECT_LENGTH};
use crate::errors::DomainError;

use super::config::TokenServiceConfig;

/// Source of fresh opaque token strings bound to a subject
#[async_trait]
pub trait TokenMinter: Send + Sync {
    /// Mint a new token for `subject`
    ///
    /// Fails with `DomainError::Issuance` when no token can be produced.
    async fn mint(&self, subject: &str) -> Result<String, DomainError>;
}

/// Mints signed custom-token JWTs
#[derive(Clone)]
pub struct JwtTokenMinter {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
    service_account: String,
}

impl std::fmt::Debug for JwtTokenMinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenMinter")
            .field("algorithm", &self.algorithm)
            .field("service_account", &self.service_account)
            .finish()
    }
}

impl JwtTokenMinter {
    /// Creates an HS256 minter from a shared secret
    pub fn with_secret(secret: &str, service_account: impl Into<String>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            algorithm: Algorithm::HS256,
            service_account: service_account.into(),
        }
    }

    /// Creates an RS256 minter from a PEM-encoded private key
    pub fn with_rsa_pem(pem: &[u8], service_account: impl Into<String>) -> Result<Self, DomainError> {
        let encoding_key = EncodingKey::from_rsa_pem(pem).map_err(|e| DomainError::Internal {
            message: format!("Invalid private key format: {}", e),
        })?;

        Ok(Self {
            encoding_key,
            algorithm: Algorithm::RS256,
            service_account: service_account.into(),
        })
    }

    /// Creates an RS256 minter from a PEM file
    pub fn with_rsa_pem_file<P: AsRef<Path>>(
        path: P,
        service_account: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let pem = fs::read(path.as_ref()).map_err(|e| DomainError::Internal {
            message: format!(
                "Failed to read private key {}: {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::with_rsa_pem(&pem, service_account)
    }

    /// Picks RS256 when a private key is configured, HS256 otherwise
    pub fn from_config(config: &TokenServiceConfig) -> Result<Self, DomainError> {
        match &config.private_key_path {
            Some(path) => Self::with_rsa_pem_file(path, config.service_account.clone()),
            None => Ok(Self::with_secret(
                &config.signing_secret,
                config.service_account.clone(),
            )),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

#[async_trait]
impl TokenMinter for JwtTokenMinter {
    async fn mint(&self, subject: &str) -> Result<String, DomainError> {
        if subject.is_empty() || subject.len() > MAX_SUBJECT_LENGTH {
            return Err(DomainError::Issuance {
                message: format!(
                    "subject must be between 1 and {} characters",
                    MAX_SUBJECT_LENGTH
                ),
            });
        }

        let claims = CustomTokenClaims::new(&self.service_account, subject);
        encode(&Header::new(self.algorithm), &claims, &self.encoding_key).map_err(|e| {
            DomainError::Issuance {
                message: format!("Failed to sign custom token: {}", e),
            }
        })
    }
}
