pub mod car;
pub mod error;

pub use car::CarRequest;
pub use error::{ErrorResponse, ErrorResponseExt};
