//! Car CRUD over a `CarRepository`

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::car::Car;
use crate::domain::entities::document::DocumentId;
use crate::errors::DomainError;
use crate::repositories::CarRepository;

/// Service for reading and writing car documents
pub struct CarService<C: CarRepository + 'static> {
    repository: Arc<C>,
}

impl<C: CarRepository + 'static> CarService<C> {
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// Every car keyed by its document identity
    pub async fn list_cars(&self) -> Result<BTreeMap<String, Car>, DomainError> {
        let cars = self.repository.list().await?;
        debug!(count = cars.len(), "Listed cars");
        Ok(cars
            .into_iter()
            .map(|(id, car)| (id.into_inner(), car))
            .collect())
    }

    /// # Errors
    /// * `DomainError::NotFound` - No car with that identity
    pub async fn get_car(&self, id: &DocumentId) -> Result<Car, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("car {}", id),
            })
    }

    /// Store a new car and return it together with its assigned identity
    pub async fn create_car(&self, car: Car) -> Result<(DocumentId, Car), DomainError> {
        let id = self.repository.create(&car).await?;
        info!(car_id = %id, "Created car");
        Ok((id, car))
    }

    /// Overwrite or create the car stored under `id`
    pub async fn update_car(&self, id: &DocumentId, car: Car) -> Result<Car, DomainError> {
        self.repository.set(id, &car).await?;
        info!(car_id = %id, "Updated car");
        Ok(car)
    }

    pub async fn delete_car(&self, id: &DocumentId) -> Result<(), DomainError> {
        self.repository.delete(id).await?;
        info!(car_id = %id, "Deleted car");
        Ok(())
    }
}
