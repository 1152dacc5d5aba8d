//! Business services containing domain logic and use cases.

pub mod car;
pub mod token;

// Re-export commonly used types
pub use car::CarService;
pub use token::{
    purge_token, CleanupResult, ExpiryScheduler, JwtTokenMinter, TokenCleanupConfig,
    TokenCleanupService, TokenMinter, TokenService, TokenServiceConfig, TokenVerifier,
    TokioExpiryScheduler,
};
