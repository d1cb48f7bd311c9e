//! `PostgreSQL` adapters for complaint persistence and worker lookup.

mod models;
mod repository;
mod schema;
mod worker_directory;

pub use repository::{ComplaintPgPool, PostgresComplaintRepository};
pub use worker_directory::PostgresWorkerDirectory;
