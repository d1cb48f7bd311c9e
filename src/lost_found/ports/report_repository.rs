//! Report persistence port.

use crate::lost_found::domain::{LostFoundReport, ReportFilter, ReportId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for report repository operations.
pub type LostFoundRepositoryResult<T> = Result<T, LostFoundRepositoryError>;

/// Report persistence contract.
#[async_trait]
pub trait LostFoundRepository: Send + Sync {
    /// Stores a new report.
    ///
    /// # Errors
    ///
    /// Returns [`LostFoundRepositoryError::DuplicateReport`] when the report
    /// identifier already exists.
    async fn store(&self, report: &LostFoundReport) -> LostFoundRepositoryResult<()>;

    /// Returns reports matching the filter, newest first.
    async fn search(&self, filter: &ReportFilter)
    -> LostFoundRepositoryResult<Vec<LostFoundReport>>;
}

/// Errors returned by report repository implementations.
#[derive(Debug, Clone, Error)]
pub enum LostFoundRepositoryError {
    /// A report with the same identifier already exists.
    #[error("duplicate report identifier: {0}")]
    DuplicateReport(ReportId),

    /// Persistence failure.
    #[error("report persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl LostFoundRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
