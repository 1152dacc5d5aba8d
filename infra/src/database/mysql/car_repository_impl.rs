//! MySQL implementation of the CarRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fleet_core::domain::entities::car::Car;
use fleet_core::domain::entities::document::DocumentId;
use fleet_core::errors::DomainError;
use fleet_core::repositories::CarRepository;

const SELECT_COLUMNS: &str = "SELECT id, `Brand`, `Model`, `Year`, `Color` FROM cars";

/// MySQL implementation of CarRepository
pub struct MySqlCarRepository {
    pool: MySqlPool,
}

impl MySqlCarRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn read_error(e: sqlx::Error) -> DomainError {
        DomainError::StoreRead {
            message: format!("Failed to read car: {}", e),
        }
    }

    fn row_to_car(row: &sqlx::mysql::MySqlRow) -> Result<(DocumentId, Car), DomainError> {
        let id: String = row.try_get("id").map_err(Self::read_error)?;
        let car = Car {
            brand: row.try_get("Brand").map_err(Self::read_error)?,
            model: row.try_get("Model").map_err(Self::read_error)?,
            year: row.try_get("Year").map_err(Self::read_error)?,
            color: row.try_get("Color").map_err(Self::read_error)?,
        };
        Ok((DocumentId::new(id), car))
    }

    async fn upsert(&self, id: &str, car: &Car) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO cars (id, `Brand`, `Model`, `Year`, `Color`)
            VALUES (?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                `Brand` = VALUES(`Brand`),
                `Model` = VALUES(`Model`),
                `Year` = VALUES(`Year`),
                `Color` = VALUES(`Color`)
        "#;

        sqlx::query(query)
            .bind(id)
            .bind(&car.brand)
            .bind(&car.model)
            .bind(car.year)
            .bind(&car.color)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::StoreWrite {
                message: format!("Failed to save car: {}", e),
            })?;

        Ok(())
    }
}

#[async_trait]
impl CarRepository for MySqlCarRepository {
    async fn list(&self) -> Result<Vec<(DocumentId, Car)>, DomainError> {
        let rows = sqlx::query(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await
            .map_err(Self::read_error)?;

        rows.iter().map(Self::row_to_car).collect()
    }

    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Car>, DomainError> {
        let query = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::read_error)?;

        match row {
            Some(row) => Ok(Some(Self::row_to_car(&row)?.1)),
            None => Ok(None),
        }
    }

    async fn create(&self, car: &Car) -> Result<DocumentId, DomainError> {
        let id = Uuid::new_v4().to_string();
        self.upsert(&id, car).await?;
        Ok(DocumentId::new(id))
    }

    async fn set(&self, id: &DocumentId, car: &Car) -> Result<(), DomainError> {
        self.upsert(id.as_str(), car).await
    }

    async fn delete(&self, id: &DocumentId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::StoreDelete {
                message: format!("Failed to delete car: {}", e),
            })?;

        Ok(())
    }
}
