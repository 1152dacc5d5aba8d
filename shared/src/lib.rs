//! Shared configuration and common types for the Fleet server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error body returned by the API

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, DatabaseConfig, Environment, ServerConfig};
pub use types::{ErrorResponse, HealthResponse};
