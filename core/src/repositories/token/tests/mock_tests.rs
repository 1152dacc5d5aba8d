//! Unit tests for mock token repository implementation

use chrono::{Duration, Utc};

use crate::domain::entities::token::NewTokenRecord;
use crate::errors::DomainError;
use crate::repositories::token::{MockTokenRepository, TokenRepository};

#[tokio::test]
async fn test_insert_and_find_by_value() {
    let repo = MockTokenRepository::new();

    let id = repo.insert(NewTokenRecord::new("abc123")).await.unwrap();
    let found = repo.find_by_value("abc123").await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, id);
    assert_eq!(found[0].value, "abc123");
    assert!(repo.find_by_value("other").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_values_are_kept() {
    let repo = MockTokenRepository::new();

    let first = repo.insert(NewTokenRecord::new("dup")).await.unwrap();
    let second = repo.insert(NewTokenRecord::new("dup")).await.unwrap();

    assert_ne!(first, second);
    assert_eq!(repo.find_by_value("dup").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_by_id_is_idempotent() {
    let repo = MockTokenRepository::new();
    let id = repo.insert(NewTokenRecord::new("abc123")).await.unwrap();

    repo.delete_by_id(&id).await.unwrap();
    repo.delete_by_id(&id).await.unwrap();

    assert_eq!(repo.count_value("abc123").await, 0);
}

#[tokio::test]
async fn test_delete_expired_keeps_live_records() {
    let repo = MockTokenRepository::new();
    repo.insert(NewTokenRecord::expiring_in("old", Duration::seconds(-5)).unwrap())
        .await
        .unwrap();
    repo.insert(NewTokenRecord::expiring_in("live", Duration::seconds(600)).unwrap())
        .await
        .unwrap();
    repo.insert(NewTokenRecord::new("forever")).await.unwrap();

    let deleted = repo.delete_expired(Utc::now()).await.unwrap();

    assert_eq!(deleted, 1);
    assert_eq!(repo.count_value("old").await, 0);
    assert_eq!(repo.count_value("live").await, 1);
    assert_eq!(repo.count_value("forever").await, 1);
}

#[tokio::test]
async fn test_failure_injection() {
    let repo = MockTokenRepository::new();

    repo.set_fail_writes(true);
    assert!(matches!(
        repo.insert(NewTokenRecord::new("x")).await,
        Err(DomainError::StoreWrite { .. })
    ));

    repo.set_fail_reads(true);
    assert!(matches!(
        repo.find_by_value("x").await,
        Err(DomainError::StoreRead { .. })
    ));
}
