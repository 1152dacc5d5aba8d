pub mod car;
pub mod token;

pub use car::CarRepository;
pub use token::TokenRepository;

#[cfg(test)]
pub use car::MockCarRepository;
#[cfg(test)]
pub use token::MockTokenRepository;
