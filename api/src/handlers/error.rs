//! Mapping of domain errors onto HTTP responses

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::{header::ContentType, StatusCode},
    HttpRequest, HttpResponse,
};
use tracing::{error, warn};

use fleet_core::errors::DomainError;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Body sent with every 401
pub const UNAUTHORIZED_BODY: &str = "401";

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Server-side failures are logged in full and answered with a generic
/// message so no store or signing detail reaches the client.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Unauthorized => HttpResponse::Unauthorized()
            .content_type(ContentType::plaintext())
            .body(UNAUTHORIZED_BODY),
        DomainError::NotFound { resource } => {
            ErrorResponse::new("not_found", format!("{} not found", resource))
                .to_response(StatusCode::NOT_FOUND)
        }
        DomainError::Validation { message } => {
            warn!("Rejected request: {}", message);
            ErrorResponse::new("validation_error", message.clone())
                .to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::Issuance { .. }
        | DomainError::StoreWrite { .. }
        | DomainError::StoreRead { .. }
        | DomainError::StoreDelete { .. }
        | DomainError::Internal { .. } => {
            error!("Domain Error: {}", error);
            ErrorResponse::new("internal_error", "An internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Turns JSON body extraction failures into a 400 with an `ErrorResponse`
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("Malformed JSON body: {}", err);
    let response = ErrorResponse::new("invalid_json", err.to_string())
        .to_response(StatusCode::BAD_REQUEST);
    InternalError::from_response(err, response).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    ErrorResponse::new("not_found", "The requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}
