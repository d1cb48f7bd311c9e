//! Service layer for the NGO directory and event listings.

mod directory;

pub use directory::{CommunityService, CommunityServiceError, CommunityServiceResult};
