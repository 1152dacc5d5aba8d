//! Token service module for store-backed bearer tokens
//!
//! This module handles all token-related operations including:
//! - Minting custom tokens for the configured subject
//! - Issuing tokens into the `tokens` collection
//! - Verifying presented tokens against the collection
//! - One-shot expiry timers and a periodic sweep of expired records

mod cleanup;
mod config;
mod expiry;
mod minter;
mod service;


pub use cleanup::{CleanupResult, TokenCleanupConfig, TokenCleanupService};
pub use config::TokenServiceConfig;
pub use expiry::{purge_token, ExpiryScheduler, TokioExpiryScheduler};
pub use minter::{JwtTokenMinter, TokenMinter};
pub use service::{TokenService, TokenVerifier};
