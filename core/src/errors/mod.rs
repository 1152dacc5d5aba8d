//! Domain-specific error types and error handling.

use thiserror::Error;


/// Core domain errors
///
/// Store failures are split by operation so callers can log precisely,
/// but all of them are server-side faults from the client's point of view.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Token issuance failed: {message}")]
    Issuance { message: String },

    #[error("Store write failed: {message}")]
    StoreWrite { message: String },

    #[error("Store read failed: {message}")]
    StoreRead { message: String },

    #[error("Store delete failed: {message}")]
    StoreDelete { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
