//! Worker directory port used for auto-assignment.

use crate::complaint::domain::{OrderPrefix, WorkerId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for worker directory lookups.
pub type WorkerDirectoryResult<T> = Result<T, WorkerDirectoryError>;

/// Read-only directory of field workers and NGO accounts.
#[async_trait]
pub trait WorkerDirectory: Send + Sync {
    /// Returns every worker whose identifier starts with `prefix`.
    ///
    /// Matching is case-sensitive with no trailing boundary. Results keep
    /// directory order.
    async fn find_by_prefix(&self, prefix: OrderPrefix) -> WorkerDirectoryResult<Vec<WorkerId>>;
}

/// Errors returned by worker directory implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkerDirectoryError {
    /// The backing store cannot be reached.
    #[error("worker directory unavailable: {0}")]
    Unavailable(String),

    /// The lookup query failed.
    #[error("worker directory query failed: {0}")]
    Query(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkerDirectoryError {
    /// Wraps a query error.
    pub fn query(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Query(Arc::new(err))
    }
}
