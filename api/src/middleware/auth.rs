//! Token authentication middleware for protecting the car endpoints.
//!
//! The raw value of the `Authorization` header is the token; no scheme
//! prefix is stripped. The middleware asks the `TokenVerifier` registered
//! as app data whether the token is valid and answers 401 otherwise.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};
use tracing::{debug, error};

use fleet_core::errors::DomainError;
use fleet_core::services::TokenVerifier;

use crate::handlers::error::handle_domain_error;

/// Authentication context injected into requests that passed the guard
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// The token presented by the client
    pub token: String,
}

/// Token authentication middleware factory
#[derive(Debug, Clone, Default)]
pub struct TokenAuth;

impl TokenAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for TokenAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Token authentication middleware service
pub struct TokenAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TokenAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let verifier = match req.app_data::<web::Data<Arc<dyn TokenVerifier>>>() {
                Some(verifier) => Arc::clone(verifier.get_ref()),
                None => {
                    error!("No token verifier registered for protected route");
                    let response = handle_domain_error(&DomainError::Internal {
                        message: "token verifier not configured".to_string(),
                    });
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            let token = extract_token(&req);

            match verifier.verify_token(&token).await {
                Ok(true) => {
                    req.extensions_mut().insert(AuthContext { token });
                    let response = service.call(req).await?;
                    Ok(response.map_into_left_body())
                }
                Ok(false) => {
                    debug!(path = %req.path(), "Rejected request without a valid token");
                    let response = handle_domain_error(&DomainError::Unauthorized);
                    Ok(req.into_response(response).map_into_right_body())
                }
                Err(e) => {
                    let response = handle_domain_error(&e);
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Raw `Authorization` header value; empty when absent or not valid UTF-8
fn extract_token(req: &ServiceRequest) -> String {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Extractor for handlers behind `TokenAuth`
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("401"));

        ready(result)
    }
}
