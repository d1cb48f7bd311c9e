//! Port contracts for the NGO directory and event listings.

mod repository;

pub use repository::{
    CommunityRepositoryError, CommunityRepositoryResult, EventRepository, NgoRepository,
};
