//! Mock implementation of CarRepository for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::car::Car;
use crate::domain::entities::document::DocumentId;
use crate::errors::DomainError;

use super::CarRepository;

#[derive(Default)]
pub struct MockCarRepository {
    cars: RwLock<BTreeMap<DocumentId, Car>>,
    next_id: AtomicUsize,
    fail_all: AtomicBool,
}

impl MockCarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with the matching store error
    pub fn set_fail_all(&self, fail: bool) {
        self.fail_all.store(fail, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.cars.read().await.len()
    }

    fn failing(&self) -> bool {
        self.fail_all.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CarRepository for MockCarRepository {
    async fn list(&self) -> Result<Vec<(DocumentId, Car)>, DomainError> {
        if self.failing() {
            return Err(DomainError::StoreRead {
                message: "mock read failure".to_string(),
            });
        }
        let cars = self.cars.read().await;
        Ok(cars.iter().map(|(id, car)| (id.clone(), car.clone())).collect())
    }

    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Car>, DomainError> {
        if self.failing() {
            return Err(DomainError::StoreRead {
                message: "mock read failure".to_string(),
            });
        }
        Ok(self.cars.read().await.get(id).cloned())
    }

    async fn create(&self, car: &Car) -> Result<DocumentId, DomainError> {
        if self.failing() {
            return Err(DomainError::StoreWrite {
                message: "mock write failure".to_string(),
            });
        }
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = DocumentId::new(format!("car-{n}"));
        self.cars.write().await.insert(id.clone(), car.clone());
        Ok(id)
    }

    async fn set(&self, id: &DocumentId, car: &Car) -> Result<(), DomainError> {
        if self.failing() {
            return Err(DomainError::StoreWrite {
                message: "mock write failure".to_string(),
            });
        }
        self.cars.write().await.insert(id.clone(), car.clone());
        Ok(())
    }

    async fn delete(&self, id: &DocumentId) -> Result<(), DomainError> {
        if self.failing() {
            return Err(DomainError::StoreDelete {
                message: "mock delete failure".to_string(),
            });
        }
        self.cars.write().await.remove(id);
        Ok(())
    }
}
