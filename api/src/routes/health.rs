use actix_web::HttpResponse;

use fleet_shared::types::HealthResponse;

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "fleet-api",
        env!("CARGO_PKG_VERSION"),
    ))
}
