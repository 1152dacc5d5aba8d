//! MySQL implementation of the TokenRepository trait.
//!
//! Token documents live in the `tokens` table. Ids are UUID v4 strings
//! generated on insert.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fleet_core::domain::entities::document::DocumentId;
use fleet_core::domain::entities::token::{NewTokenRecord, TokenRecord};
use fleet_core::errors::DomainError;
use fleet_core::repositories::TokenRepository;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to TokenRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<TokenRecord, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::StoreRead {
            message: format!("Failed to get id: {}", e),
        })?;
        let value: String = row.try_get("token").map_err(|e| DomainError::StoreRead {
            message: format!("Failed to get token: {}", e),
        })?;
        let expires_at: Option<DateTime<Utc>> =
            row.try_get("expires_at").map_err(|e| DomainError::StoreRead {
                message: format!("Failed to get expires_at: {}", e),
            })?;

        Ok(TokenRecord {
            id: DocumentId::new(id),
            value,
            expires_at,
        })
    }
}

/// Keep only records whose value is byte-identical to `value`
///
/// Guards against a `tokens` table created with a case-insensitive or
/// PAD SPACE collation.
fn exact_matches(records: Vec<TokenRecord>, value: &str) -> Vec<TokenRecord> {
    records.into_iter().filter(|r| r.value == value).collect()
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn insert(&self, record: NewTokenRecord) -> Result<DocumentId, DomainError> {
        let id = Uuid::new_v4().to_string();

        sqlx::query("INSERT INTO tokens (id, token, expires_at) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(&record.value)
            .bind(record.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::StoreWrite {
                message: format!("Failed to save token: {}", e),
            })?;

        Ok(DocumentId::new(id))
    }

    async fn find_by_value(&self, value: &str) -> Result<Vec<TokenRecord>, DomainError> {
        let rows = sqlx::query("SELECT id, token, expires_at FROM tokens WHERE token = ?")
            .bind(value)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::StoreRead {
                message: format!("Failed to query tokens: {}", e),
            })?;

        let records = rows
            .iter()
            .map(Self::row_to_record)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(exact_matches(records, value))
    }

    async fn delete_by_id(&self, id: &DocumentId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM tokens WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::StoreDelete {
                message: format!("Failed to delete token: {}", e),
            })?;

        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let result =
            sqlx::query("DELETE FROM tokens WHERE expires_at IS NOT NULL AND expires_at <= ?")
                .bind(now)
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::StoreDelete {
                    message: format!("Failed to delete expired tokens: {}", e),
                })?;

        Ok(result.rows_affected() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, value: &str) -> TokenRecord {
        TokenRecord {
            id: DocumentId::new(id),
            value: value.to_string(),
            expires_at: None,
        }
    }

    #[test]
    fn test_exact_matches_drops_collation_lookalikes() {
        let rows = vec![
            record("1", "abc123"),
            record("2", "ABC123"),
            record("3", "abc123 "),
            record("4", "abc123"),
        ];

        let kept = exact_matches(rows, "abc123");

        let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_exact_matches_empty_when_only_case_differs() {
        assert!(exact_matches(vec![record("1", "Token")], "token").is_empty());
    }
}
