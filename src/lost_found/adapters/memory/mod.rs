//! In-memory lost-and-found adapters.

mod report;
mod station;

pub use report::InMemoryLostFoundRepository;
pub use station::InMemoryPoliceStationRegistry;
