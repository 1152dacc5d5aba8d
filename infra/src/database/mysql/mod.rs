//! MySQL repository implementations

mod car_repository_impl;
mod token_repository_impl;

pub use car_repository_impl::MySqlCarRepository;
pub use token_repository_impl::MySqlTokenRepository;
