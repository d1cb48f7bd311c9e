//! Port contracts for lost-and-found storage and station lookup.

mod report_repository;
mod station_registry;

pub use report_repository::{
    LostFoundRepository, LostFoundRepositoryError, LostFoundRepositoryResult,
};
pub use station_registry::{
    PoliceStationRegistry, PoliceStationRegistryError, PoliceStationRegistryResult,
};
