//! # Infrastructure Layer
//!
//! Concrete document stores behind the `fleet_core` repository traits.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Memory**: in-process document store for the `tokens` and `cars` collections
//! - **Database**: MySQL implementations using SQLx, with pool management and
//!   schema bootstrap
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// In-process document store
pub mod memory;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

pub use memory::{InMemoryCarRepository, InMemoryTokenRepository};

#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlCarRepository, MySqlTokenRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
