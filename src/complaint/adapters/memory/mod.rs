//! In-memory adapters for complaint tests and single-process deployments.

mod complaint;
mod worker_directory;

pub use complaint::InMemoryComplaintRepository;
pub use worker_directory::InMemoryWorkerDirectory;
