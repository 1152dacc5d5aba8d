//! In-memory implementation of the CarRepository trait.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use fleet_core::domain::entities::car::Car;
use fleet_core::domain::entities::document::DocumentId;
use fleet_core::errors::DomainError;
use fleet_core::repositories::CarRepository;

use super::generate_document_id;

/// `cars` collection held in process memory
#[derive(Default)]
pub struct InMemoryCarRepository {
    cars: RwLock<BTreeMap<DocumentId, Car>>,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn list(&self) -> Result<Vec<(DocumentId, Car)>, DomainError> {
        let cars = self.cars.read().await;
        Ok(cars.iter().map(|(id, car)| (id.clone(), car.clone())).collect())
    }

    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Car>, DomainError> {
        Ok(self.cars.read().await.get(id).cloned())
    }

    async fn create(&self, car: &Car) -> Result<DocumentId, DomainError> {
        let id = generate_document_id();
        self.cars.write().await.insert(id.clone(), car.clone());
        Ok(id)
    }

    async fn set(&self, id: &DocumentId, car: &Car) -> Result<(), DomainError> {
        self.cars.write().await.insert(id.clone(), car.clone());
        Ok(())
    }

    async fn delete(&self, id: &DocumentId) -> Result<(), DomainError> {
        self.cars.write().await.remove(id);
        Ok(())
    }
}
