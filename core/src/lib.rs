//! # Fleet Core
//!
//! Core business logic and domain layer for the Fleet backend.
//! This crate contains domain entities, the token and car services,
//! repository interfaces, and error types that the infrastructure and
//! API crates build on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Car, DocumentId, NewTokenRecord, TokenRecord};
pub use errors::{DomainError, DomainResult};
pub use repositories::{CarRepository, TokenRepository};
pub use services::{CarService, TokenService, TokenVerifier};
