//! Domain model for NGOs and community events.

mod error;
mod event;
mod ngo;

pub use error::CommunityDomainError;
pub use event::{CommunityEvent, EventId};
pub use ngo::{Ngo, NgoId, default_ngos};
