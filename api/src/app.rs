//! Application factory
//!
//! Builds the actix-web `App` with routes, the token guard and JSON
//! settings. Request logging is attached by the caller.

use std::sync::Arc;

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};

use fleet_core::repositories::{CarRepository, TokenRepository};
use fleet_core::services::TokenVerifier;

use crate::handlers::error::{json_error_handler, not_found};
use crate::middleware::TokenAuth;
use crate::routes::{authorize::authorize, cars, health::health_check, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<T, C>(
    app_state: web::Data<AppState<T, C>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
>
where
    T: TokenRepository + 'static,
    C: CarRepository + 'static,
{
    let verifier: Arc<dyn TokenVerifier> = app_state.token_service.clone();

    let json_config = web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(web::Data::new(verifier))
        .app_data(json_config)
        .route("/health", web::get().to(health_check))
        .route("/authorize", web::get().to(authorize::<T, C>))
        .service(
            web::resource("/cars")
                .route(web::get().to(cars::list_cars::<T, C>))
                .wrap(TokenAuth::new()),
        )
        .service(
            web::resource("/car")
                .route(web::post().to(cars::create_car::<T, C>))
                .wrap(TokenAuth::new()),
        )
        .service(
            web::resource("/car/{id}")
                .route(web::get().to(cars::get_car::<T, C>))
                .route(web::put().to(cars::update_car::<T, C>))
                .route(web::delete().to(cars::delete_car::<T, C>))
                .wrap(TokenAuth::new()),
        )
        .default_service(web::route().to(not_found))
}
