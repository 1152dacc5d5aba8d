//! One-shot expiry timers for issued tokens

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::errors::DomainError;
use crate::repositories::TokenRepository;

/// Arranges for a token to be purged from the store after a delay
///
/// Scheduling never blocks the caller and never reports failure back;
/// a failed purge is logged and the record stays until the periodic sweep
/// or a restart with a clean store.
pub trait ExpiryScheduler: Send + Sync {
    fn schedule(&self, token: String, delay: Duration);
}

/// Deletes every document whose `token` field equals `token`
///
/// Returns the number of documents deleted. Zero matches is not an error.
/// Stops at the first failing delete.
pub async fn purge_token<R>(repository: &R, token: &str) -> Result<usize, DomainError>
where
    R: TokenRepository + ?Sized,
{
    let records = repository.find_by_value(token).await?;
    let mut deleted = 0;
    for record in &records {
        repository.delete_by_id(&record.id).await?;
        deleted += 1;
    }
    Ok(deleted)
}

/// Expiry scheduler backed by tokio timers
///
/// Each scheduled token gets its own spawned task. Pending timers do not
/// survive a restart.
pub struct TokioExpiryScheduler<R: TokenRepository + 'static> {
    repository: Arc<R>,
}

impl<R: TokenRepository + 'static> TokioExpiryScheduler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Purge a token immediately, logging the outcome
    pub async fn expire_now(&self, token: &str) -> Result<usize, DomainError> {
        expire(self.repository.as_ref(), token).await
    }
}

impl<R: TokenRepository + 'static> Clone for TokioExpiryScheduler<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TokenRepository + 'static> ExpiryScheduler for TokioExpiryScheduler<R> {
    fn schedule(&self, token: String, delay: Duration) {
        let repository = Arc::clone(&self.repository);
        debug!(delay_secs = delay.as_secs(), "Scheduling token expiry");

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Errors are already logged; nothing is waiting on this task.
            let _ = expire(repository.as_ref(), &token).await;
        });
    }
}

async fn expire<R: TokenRepository + ?Sized>(repository: &R, token: &str) -> Result<usize, DomainError> {
    match purge_token(repository, token).await {
        Ok(deleted) => {
            info!(deleted, "Expired token purged from store");
            Ok(deleted)
        }
        Err(e) => {
            error!("Failed to purge expired token: {}", e);
            Err(e)
        }
    }
}
