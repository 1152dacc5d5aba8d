use actix_web::{web, HttpResponse};

use fleet_core::repositories::{CarRepository, TokenRepository};

use super::AppState;
use crate::handlers::error::handle_domain_error;

/// Handler for GET /authorize
///
/// Issues a fresh token for the configured subject. The token stays valid
/// until its expiry timer removes it from the store.
///
/// # Response
///
/// ## Success (200 OK)
/// The token as a JSON string:
/// ```json
/// "eyJhbGciOiJIUzI1NiIs..."
/// ```
///
/// ## Errors
/// - 500 Internal Server Error: minting or storing the token failed
pub async fn authorize<T, C>(state: web::Data<AppState<T, C>>) -> HttpResponse
where
    T: TokenRepository + 'static,
    C: CarRepository + 'static,
{
    match state.token_service.issue().await {
        Ok(token) => HttpResponse::Ok().json(token),
        Err(error) => handle_domain_error(&error),
    }
}
