//! Car repository trait for the `cars` collection.

use async_trait::async_trait;

use crate::domain::entities::car::Car;
use crate::domain::entities::document::DocumentId;
use crate::errors::DomainError;

/// Repository trait for car documents
///
/// Reads fail with `DomainError::StoreRead`, `create`/`set` with
/// `DomainError::StoreWrite` and `delete` with `DomainError::StoreDelete`.
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Every car in the collection together with its identity
    async fn list(&self) -> Result<Vec<(DocumentId, Car)>, DomainError>;

    /// Find a car by identity
    ///
    /// # Returns
    /// * `Ok(Some(Car))` - Car found
    /// * `Ok(None)` - No document with that identity
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Car>, DomainError>;

    /// Add a car under a store-assigned identity
    async fn create(&self, car: &Car) -> Result<DocumentId, DomainError>;

    /// Overwrite the car with the given identity, creating it if absent
    async fn set(&self, id: &DocumentId, car: &Car) -> Result<(), DomainError>;

    /// Delete a car; deleting a missing document succeeds
    async fn delete(&self, id: &DocumentId) -> Result<(), DomainError>;
}
