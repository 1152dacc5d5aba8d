//! Domain entities representing core business objects.

pub mod car;
pub mod document;
pub mod token;

#[cfg(test)]
mod tests;

pub use car::Car;
pub use document::DocumentId;
pub use token::{
    CustomTokenClaims, NewTokenRecord, TokenRecord, CUSTOM_TOKEN_LIFETIME_SECONDS,
    DEFAULT_TOKEN_SUBJECT, DEFAULT_TOKEN_TTL_SECONDS, IDENTITY_TOOLKIT_AUDIENCE,
    MAX_SUBJECT_LENGTH,
};
