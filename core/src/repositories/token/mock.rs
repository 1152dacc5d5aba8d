//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::document::DocumentId;
use crate::domain::entities::token::{NewTokenRecord, TokenRecord};
use crate::errors::DomainError;

use super::TokenRepository;

/// Mock token repository for testing
///
/// Keeps documents in insertion order and can be switched into failing
/// reads, writes or deletes.
#[derive(Default)]
pub struct MockTokenRepository {
    records: RwLock<Vec<TokenRecord>>,
    next_id: AtomicUsize,
    writes: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    fail_deletes: AtomicBool,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of every stored document
    pub async fn records(&self) -> Vec<TokenRecord> {
        self.records.read().await.clone()
    }

    /// Number of stored documents with the given value
    pub async fn count_value(&self, value: &str) -> usize {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.value == value)
            .count()
    }

    /// Number of mutating calls that reached the store
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Store a document directly, bypassing failure injection
    pub async fn seed(&self, record: NewTokenRecord) -> DocumentId {
        let id = self.allocate_id();
        self.records.write().await.push(record.into_record(id.clone()));
        id
    }

    fn allocate_id(&self) -> DocumentId {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        DocumentId::new(format!("token-{n}"))
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn insert(&self, record: NewTokenRecord) -> Result<DocumentId, DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::StoreWrite {
                message: "mock write failure".to_string(),
            });
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(self.seed(record).await)
    }

    async fn find_by_value(&self, value: &str) -> Result<Vec<TokenRecord>, DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::StoreRead {
                message: "mock read failure".to_string(),
            });
        }
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| r.value == value).cloned().collect())
    }

    async fn delete_by_id(&self, id: &DocumentId) -> Result<(), DomainError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(DomainError::StoreDelete {
                message: "mock delete failure".to_string(),
            });
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.records.write().await.retain(|r| &r.id != id);
        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(DomainError::StoreDelete {
                message: "mock delete failure".to_string(),
            });
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.write().await;
        let initial_count = records.len();
        records.retain(|r| !r.is_expired_at(now));
        Ok(initial_count - records.len())
    }
}
