//! Shared fixtures for the API integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use actix_web::web;

use fleet_api::AppState;
use fleet_core::domain::entities::car::Car;
use fleet_core::domain::entities::document::DocumentId;
use fleet_core::domain::entities::token::{NewTokenRecord, TokenRecord};
use fleet_core::errors::DomainError;
use fleet_core::repositories::{CarRepository, TokenRepository};
use fleet_core::services::{
    CarService, JwtTokenMinter, TokenService, TokenServiceConfig, TokioExpiryScheduler,
};
use fleet_infra::{InMemoryCarRepository, InMemoryTokenRepository};

pub const TEST_SECRET: &str = "api-test-secret";

pub fn app_state<T, C>(tokens: Arc<T>, cars: Arc<C>) -> web::Data<AppState<T, C>>
where
    T: TokenRepository + 'static,
    C: CarRepository + 'static,
{
    let token_service = TokenService::new(
        tokens.clone(),
        Arc::new(JwtTokenMinter::with_secret(TEST_SECRET, "fleet-api@test")),
        Arc::new(TokioExpiryScheduler::new(tokens)),
        TokenServiceConfig::default(),
    );
    web::Data::new(AppState::new(
        Arc::new(token_service),
        Arc::new(CarService::new(cars)),
    ))
}

pub struct TestContext {
    pub tokens: Arc<InMemoryTokenRepository>,
    pub cars: Arc<InMemoryCarRepository>,
    pub state: web::Data<AppState<InMemoryTokenRepository, InMemoryCarRepository>>,
}

/// Application state over fresh in-memory stores
pub fn context() -> TestContext {
    let tokens = Arc::new(InMemoryTokenRepository::new());
    let cars = Arc::new(InMemoryCarRepository::new());
    let state = app_state(tokens.clone(), cars.clone());
    TestContext {
        tokens,
        cars,
        state,
    }
}

/// Token store whose every operation fails
pub struct UnavailableTokenStore;

#[async_trait]
impl TokenRepository for UnavailableTokenStore {
    async fn insert(&self, _record: NewTokenRecord) -> Result<DocumentId, DomainError> {
        Err(DomainError::StoreWrite {
            message: "token store unavailable".to_string(),
        })
    }

    async fn find_by_value(&self, _value: &str) -> Result<Vec<TokenRecord>, DomainError> {
        Err(DomainError::StoreRead {
            message: "token store unavailable".to_string(),
        })
    }

    async fn delete_by_id(&self, _id: &DocumentId) -> Result<(), DomainError> {
        Err(DomainError::StoreDelete {
            message: "token store unavailable".to_string(),
        })
    }

    async fn delete_expired(&self, _now: DateTime<Utc>) -> Result<usize, DomainError> {
        Err(DomainError::StoreDelete {
            message: "token store unavailable".to_string(),
        })
    }
}

/// Car store whose every operation fails
pub struct UnavailableCarStore;

#[async_trait]
impl CarRepository for UnavailableCarStore {
    async fn list(&self) -> Result<Vec<(DocumentId, Car)>, DomainError> {
        Err(DomainError::StoreRead {
            message: "car store unavailable".to_string(),
        })
    }

    async fn find_by_id(&self, _id: &DocumentId) -> Result<Option<Car>, DomainError> {
        Err(DomainError::StoreRead {
            message: "car store unavailable".to_string(),
        })
    }

    async fn create(&self, _car: &Car) -> Result<DocumentId, DomainError> {
        Err(DomainError::StoreWrite {
            message: "car store unavailable".to_string(),
        })
    }

    async fn set(&self, _id: &DocumentId, _car: &Car) -> Result<(), DomainError> {
        Err(DomainError::StoreWrite {
            message: "car store unavailable".to_string(),
        })
    }

    async fn delete(&self, _id: &DocumentId) -> Result<(), DomainError> {
        Err(DomainError::StoreDelete {
            message: "car store unavailable".to_string(),
        })
    }
}
