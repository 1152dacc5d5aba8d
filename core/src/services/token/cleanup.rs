//! Token cleanup service for periodic removal of expired token documents
//!
//! Expiry timers live in process memory, so a restart loses them. The
//! sweep removes any record whose deadline has passed regardless of how it
//! got left behind.

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use fleet_shared::config::AuthConfig;

use crate::errors::DomainError;
use crate::repositories::TokenRepository;

/// Configuration for token cleanup service
#[derive(Debug, Clone)]
pub struct TokenCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for TokenCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 300,
            enabled: true,
        }
    }
}

impl From<&AuthConfig> for TokenCleanupConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            interval_seconds: config.cleanup_interval_seconds,
            enabled: config.cleanup_enabled,
        }
    }
}

/// Service for sweeping expired token documents
pub struct TokenCleanupService<R: TokenRepository + 'static> {
    repository: Arc<R>,
    config: TokenCleanupConfig,
}

impl<R: TokenRepository> TokenCleanupService<R> {
    /// Create a new token cleanup service
    pub fn new(repository: Arc<R>, config: TokenCleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single cleanup cycle
    ///
    /// # Returns
    /// * `Ok(CleanupResult)` - Summary of the cycle; store failures are recorded in `errors`
    /// * `Err(DomainError)` - Reserved for failures outside the store
    pub async fn run_cleanup(&self) -> Result<CleanupResult, DomainError> {
        if !self.config.enabled {
            return Ok(CleanupResult::default());
        }

        debug!("Sweeping expired tokens");

        let mut result = CleanupResult::default();

        match self.repository.delete_expired(Utc::now()).await {
            Ok(count) => {
                result.expired_tokens_deleted = count;
                info!(deleted = count, "Expired tokens swept");
            }
            Err(e) => {
                error!(error = %e, "Expired-token sweep failed");
                result.errors.push(format!("Token cleanup error: {}", e));
            }
        }

        Ok(result)
    }

    /// Spawn the periodic sweep on the current tokio runtime
    ///
    /// Does nothing when the sweep is disabled. The first sweep runs
    /// immediately, then once per `interval_seconds` (at least one second).
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Expired-token sweep disabled; records are only removed by their expiry timers");
            return;
        }

        let period = std::time::Duration::from_secs(self.config.interval_seconds.max(1));
        info!(interval_secs = period.as_secs(), "Scheduling expired-token sweep");

        tokio::spawn(async move {
            let mut ticks = tokio::time::interval(period);
            loop {
                ticks.tick().await;
                match self.run_cleanup().await {
                    Ok(result) if result.is_success() => {}
                    Ok(result) => warn!(errors = ?result.errors, "Expired-token sweep hit store errors"),
                    Err(e) => error!(error = %e, "Expired-token sweep aborted"),
                }
            }
        });
    }
}

/// Result of a cleanup operation
#[derive(Debug, Default)]
pub struct CleanupResult {
    /// Number of expired token documents deleted
    pub expired_tokens_deleted: usize,
    /// Any errors encountered during cleanup
    pub errors: Vec<String>,
}

impl CleanupResult {
    /// Check if the cleanup was successful (no errors)
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
