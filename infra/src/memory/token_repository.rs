//! In-memory implementation of the TokenRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use fleet_core::domain::entities::document::DocumentId;
use fleet_core::domain::entities::token::{NewTokenRecord, TokenRecord};
use fleet_core::errors::DomainError;
use fleet_core::repositories::TokenRepository;

use super::generate_document_id;

/// `tokens` collection held in process memory
#[derive(Default)]
pub struct InMemoryTokenRepository {
    records: RwLock<HashMap<DocumentId, TokenRecord>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn insert(&self, record: NewTokenRecord) -> Result<DocumentId, DomainError> {
        let id = generate_document_id();
        self.records
            .write()
            .await
            .insert(id.clone(), record.into_record(id.clone()));
        debug!(document_id = %id, "Inserted token document");
        Ok(id)
    }

    async fn find_by_value(&self, value: &str) -> Result<Vec<TokenRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|record| record.value == value)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: &DocumentId) -> Result<(), DomainError> {
        self.records.write().await.remove(id);
        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let initial_count = records.len();
        records.retain(|_, record| !record.is_expired_at(now));
        Ok(initial_count - records.len())
    }
}
