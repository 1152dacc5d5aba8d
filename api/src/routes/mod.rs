//! Route handlers
//!
//! - `GET /authorize` issues a token
//! - car CRUD under `/cars` and `/car`, guarded by `TokenAuth`
//! - `GET /health`

pub mod authorize;
pub mod cars;
pub mod health;

use std::sync::Arc;

use fleet_core::repositories::{CarRepository, TokenRepository};
use fleet_core::services::{CarService, TokenService};

/// Application state that holds shared services
pub struct AppState<T, C>
where
    T: TokenRepository + 'static,
    C: CarRepository + 'static,
{
    pub token_service: Arc<TokenService<T>>,
    pub car_service: Arc<CarService<C>>,
}

impl<T, C> AppState<T, C>
where
    T: TokenRepository + 'static,
    C: CarRepository + 'static,
{
    pub fn new(token_service: Arc<TokenService<T>>, car_service: Arc<CarService<C>>) -> Self {
        Self {
            token_service,
            car_service,
        }
    }
}
