//! Car CRUD handlers
//!
//! Every handler here sits behind `TokenAuth`.

use actix_web::{web, HttpResponse};
use tracing::warn;
use validator::Validate;

use fleet_core::domain::entities::car::Car;
use fleet_core::domain::entities::document::DocumentId;
use fleet_core::errors::DomainError;
use fleet_core::repositories::{CarRepository, TokenRepository};

use super::AppState;
use crate::dto::CarRequest;
use crate::handlers::error::handle_domain_error;

fn validate_car(request: CarRequest) -> Result<Car, DomainError> {
    if let Err(errors) = request.validate() {
        warn!("Car validation failed: {}", errors);
        return Err(DomainError::Validation {
            message: errors.to_string(),
        });
    }
    Ok(Car::from(request))
}

/// Handler for GET /cars
///
/// Returns every car keyed by its id:
/// ```json
/// { "3fQk...": { "Brand": "Honda", "Model": "Civic", "Year": 2020, "Color": "blue" } }
/// ```
pub async fn list_cars<T, C>(state: web::Data<AppState<T, C>>) -> HttpResponse
where
    T: TokenRepository + 'static,
    C: CarRepository + 'static,
{
    match state.car_service.list_cars().await {
        Ok(cars) => HttpResponse::Ok().json(cars),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /car/{id}
///
/// 404 when no car has that id.
pub async fn get_car<T, C>(
    state: web::Data<AppState<T, C>>,
    path: web::Path<String>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    C: CarRepository + 'static,
{
    let id = DocumentId::new(path.into_inner());
    match state.car_service.get_car(&id).await {
        Ok(car) => HttpResponse::Ok().json(car),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /car
///
/// Stores the car under a new id and echoes it back.
pub async fn create_car<T, C>(
    state: web::Data<AppState<T, C>>,
    request: web::Json<CarRequest>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    C: CarRepository + 'static,
{
    let car = match validate_car(request.into_inner()) {
        Ok(car) => car,
        Err(error) => return handle_domain_error(&error),
    };

    match state.car_service.create_car(car).await {
        Ok((_, car)) => HttpResponse::Ok().json(car),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PUT /car/{id}
///
/// Overwrites the car, creating it if the id is unknown, and echoes it back.
pub async fn update_car<T, C>(
    state: web::Data<AppState<T, C>>,
    path: web::Path<String>,
    request: web::Json<CarRequest>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    C: CarRepository + 'static,
{
    let car = match validate_car(request.into_inner()) {
        Ok(car) => car,
        Err(error) => return handle_domain_error(&error),
    };

    let id = DocumentId::new(path.into_inner());
    match state.car_service.update_car(&id, car).await {
        Ok(car) => HttpResponse::Ok().json(car),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for DELETE /car/{id}
///
/// Answers 200 with an empty body whether or not the car existed.
pub async fn delete_car<T, C>(
    state: web::Data<AppState<T, C>>,
    path: web::Path<String>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    C: CarRepository + 'static,
{
    let id = DocumentId::new(path.into_inner());
    match state.car_service.delete_car(&id).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
