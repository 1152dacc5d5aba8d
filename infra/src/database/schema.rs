//! Table bootstrap for the `tokens` and `cars` collections

use sqlx::MySqlPool;

use crate::InfrastructureError;

// Lookups compare ids and token values byte for byte: `utf8mb4_0900_bin` is
// case sensitive and NO PAD. Deadlines are stored as UTC in DATETIME(6).
const CREATE_TOKENS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS tokens (
        id VARCHAR(36) NOT NULL PRIMARY KEY,
        token VARCHAR(2048) CHARACTER SET utf8mb4 COLLATE utf8mb4_0900_bin NOT NULL,
        expires_at DATETIME(6) NULL DEFAULT NULL,
        INDEX idx_tokens_token (token(191)),
        INDEX idx_tokens_expires_at (expires_at)
    )
"#;

const CREATE_CARS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS cars (
        id VARCHAR(64) CHARACTER SET utf8mb4 COLLATE utf8mb4_0900_bin NOT NULL PRIMARY KEY,
        `Brand` VARCHAR(255) NOT NULL DEFAULT '',
        `Model` VARCHAR(255) NOT NULL DEFAULT '',
        `Year` BIGINT NOT NULL DEFAULT 0,
        `Color` VARCHAR(255) NOT NULL DEFAULT ''
    )
"#;

/// Create the `tokens` and `cars` tables when they do not exist yet
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    tracing::info!("Ensuring database schema");

    for statement in [CREATE_TOKENS_TABLE, CREATE_CARS_TABLE] {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            tracing::error!("Schema bootstrap failed: {}", e);
            InfrastructureError::Database(e)
        })?;
    }

    Ok(())
}
