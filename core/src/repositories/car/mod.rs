#[path = "trait.rs"]
mod trait_;

pub use trait_::CarRepository;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockCarRepository;
