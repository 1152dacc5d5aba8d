//! In-process document store
//!
//! Collections live in a `tokio::sync::RwLock` and vanish with the process.
//! Document ids are 20 random alphanumeric characters.

mod car_repository;
mod token_repository;

pub use car_repository::InMemoryCarRepository;
pub use token_repository::InMemoryTokenRepository;

use rand::{distributions::Alphanumeric, Rng};

use fleet_core::domain::entities::document::DocumentId;

const DOCUMENT_ID_LENGTH: usize = 20;

pub(crate) fn generate_document_id() -> DocumentId {
    let id: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(DOCUMENT_ID_LENGTH)
        .map(char::from)
        .collect();
    DocumentId::new(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_alphanumeric() {
        let id = generate_document_id();

        assert_eq!(id.as_str().len(), DOCUMENT_ID_LENGTH);
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(generate_document_id(), generate_document_id());
    }
}
