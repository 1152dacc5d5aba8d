//! Token repository trait defining the interface for the `tokens` collection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::document::DocumentId;
use crate::domain::entities::token::{NewTokenRecord, TokenRecord};
use crate::errors::DomainError;

/// Repository trait for token documents
///
/// Maps onto any document or key-value store: add a document, query by the
/// `token` field, delete by document reference.
///
/// # Error conventions
/// - `insert` fails with `DomainError::StoreWrite`
/// - `find_by_value` fails with `DomainError::StoreRead`; an empty result is not an error
/// - `delete_by_id` and `delete_expired` fail with `DomainError::StoreDelete`
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Add a token document
    ///
    /// # Returns
    /// * `Ok(DocumentId)` - The identity assigned by the store
    /// * `Err(DomainError::StoreWrite)` - The document could not be written
    ///
    /// # Example
    /// ```no_run
    /// # use fleet_core::repositories::TokenRepository;
    /// # use fleet_core::domain::entities::token::NewTokenRecord;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let id = repo.insert(NewTokenRecord::new("abc123")).await?;
    /// println!("Token stored as {}", id);
    /// # Ok(())
    /// # }
    /// ```
    async fn insert(&self, record: NewTokenRecord) -> Result<DocumentId, DomainError>;

    /// Find every document whose `token` field equals `value`
    ///
    /// Duplicates are possible; no ordering is guaranteed.
    async fn find_by_value(&self, value: &str) -> Result<Vec<TokenRecord>, DomainError>;

    /// Delete the document with the given identity
    ///
    /// Deleting a document that no longer exists succeeds.
    async fn delete_by_id(&self, id: &DocumentId) -> Result<(), DomainError>;

    /// Delete every document whose deadline is at or before `now`
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of documents deleted
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;
}
