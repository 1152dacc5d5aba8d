//! # Fleet API
//!
//! HTTP surface of the Fleet cars service: token issuance, the token guard
//! and car CRUD routes.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
