//! Main token service implementation

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::entities::token::NewTokenRecord;
use crate::errors::DomainError;
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;
use super::expiry::ExpiryScheduler;
use super::minter::TokenMinter;

/// Answers whether a presented bearer token is currently valid
///
/// The request guard only needs this much of the token service.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify_token(&self, token: &str) -> Result<bool, DomainError>;
}

/// Service for issuing and verifying store-backed bearer tokens
pub struct TokenService<R: TokenRepository + 'static> {
    repository: Arc<R>,
    minter: Arc<dyn TokenMinter>,
    scheduler: Arc<dyn ExpiryScheduler>,
    config: TokenServiceConfig,
}

impl<R: TokenRepository + 'static> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Store holding the `tokens` collection
    /// * `minter` - Source of fresh token strings
    /// * `scheduler` - Arranges removal of each issued token after the TTL
    /// * `config` - Subject and TTL used for every issuance
    pub fn new(
        repository: Arc<R>,
        minter: Arc<dyn TokenMinter>,
        scheduler: Arc<dyn ExpiryScheduler>,
        config: TokenServiceConfig,
    ) -> Self {
        Self {
            repository,
            minter,
            scheduler,
            config,
        }
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Issues a new token for the configured subject
    ///
    /// The token is minted, stored as exactly one document, and handed to
    /// the scheduler for removal after the TTL. The expiry timer is armed
    /// only once the document has been written.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The token string
    /// * `Err(DomainError::Issuance)` - The minter failed; nothing was stored
    /// * `Err(DomainError::StoreWrite)` - The document could not be written
    /// * `Err(DomainError::Internal)` - The TTL cannot be turned into a deadline
    pub async fn issue(&self) -> Result<String, DomainError> {
        let token = self.minter.mint(&self.config.subject).await?;

        let ttl = chrono::Duration::from_std(self.config.ttl()).map_err(|e| {
            DomainError::Internal {
                message: format!("Invalid token TTL: {}", e),
            }
        })?;

        let record = NewTokenRecord::expiring_in(token.clone(), ttl).ok_or_else(|| {
            DomainError::Internal {
                message: format!(
                    "Token TTL of {}s puts the deadline out of range",
                    self.config.token_ttl_seconds
                ),
            }
        })?;

        let id = self.repository.insert(record).await?;

        self.scheduler.schedule(token.clone(), self.config.ttl());

        info!(
            document_id = %id,
            subject = %self.config.subject,
            ttl_secs = self.config.token_ttl_seconds,
            "Issued token"
        );

        Ok(token)
    }

    /// Checks whether `token` is currently valid
    ///
    /// Valid means at least one stored document carries this exact value and
    /// its deadline has not passed. The empty string is never valid and does
    /// not reach the store.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - Whether the token authorizes the request
    /// * `Err(DomainError::StoreRead)` - The store could not be queried
    pub async fn verify(&self, token: &str) -> Result<bool, DomainError> {
        if token.is_empty() {
            debug!("Rejected empty token");
            return Ok(false);
        }

        let records = self.repository.find_by_value(token).await?;
        if records.len() > 1 {
            warn!(matches = records.len(), "Token value stored more than once");
        }

        let valid = records.iter().any(|record| !record.is_expired());
        debug!(valid, "Verified token");
        Ok(valid)
    }
}

#[async_trait]
impl<R: TokenRepository + 'static> TokenVerifier for TokenService<R> {
    async fn verify_token(&self, token: &str) -> Result<bool, DomainError> {
        self.verify(token).await
    }
}
