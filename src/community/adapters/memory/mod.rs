//! In-memory community adapters.

mod event;
mod ngo;

pub use event::InMemoryEventRepository;
pub use ngo::InMemoryNgoRepository;

fn lock_error(err: impl std::fmt::Display) -> crate::community::ports::CommunityRepositoryError {
    crate::community::ports::CommunityRepositoryError::persistence(std::io::Error::other(
        err.to_string(),
    ))
}
