//! Port contracts for complaint routing and persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by complaint
//! services.

pub mod repository;
pub mod routing;
pub mod worker_directory;

pub use repository::{ComplaintRepository, ComplaintRepositoryError, ComplaintRepositoryResult};
pub use routing::{CityExtractor, OrderIdGenerator};
pub use worker_directory::{WorkerDirectory, WorkerDirectoryError, WorkerDirectoryResult};
