//! Repository port for complaint persistence and lookup.

use crate::complaint::domain::{
    AssignmentStatus, Complaint, ComplaintId, ComplaintStatus, OrderId, WorkerId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for complaint repository operations.
pub type ComplaintRepositoryResult<T> = Result<T, ComplaintRepositoryError>;

/// Complaint persistence contract.
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Stores a new, routed complaint.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintRepositoryError::Unrouted`] when the complaint has
    /// no order identifier, [`ComplaintRepositoryError::DuplicateComplaint`]
    /// when the complaint ID exists, or
    /// [`ComplaintRepositoryError::DuplicateOrderId`] when another complaint
    /// already holds the order identifier.
    async fn store(&self, complaint: &Complaint) -> ComplaintRepositoryResult<()>;

    /// Attaches pending assignments for `workers` to a complaint that has no
    /// workers yet.
    ///
    /// Only the worker list and the change timestamp are written; the status
    /// and every other column keep their stored values. The change timestamp
    /// never moves backwards.
    ///
    /// Returns the stored complaint after the write, or `None` when nothing
    /// was written because the complaint is missing, already has workers, or
    /// `workers` is empty.
    async fn assign_workers_if_unassigned(
        &self,
        id: ComplaintId,
        workers: &[WorkerId],
        changed_at: DateTime<Utc>,
    ) -> ComplaintRepositoryResult<Option<Complaint>>;

    /// Moves the stored status from `from` to `to`.
    ///
    /// Returns the stored complaint after the write, or `None` when the
    /// complaint is missing or its stored status is no longer `from`.
    async fn transition_status(
        &self,
        id: ComplaintId,
        from: ComplaintStatus,
        to: ComplaintStatus,
        changed_at: DateTime<Utc>,
    ) -> ComplaintRepositoryResult<Option<Complaint>>;

    /// Records one worker's answer while that worker's entry is still
    /// pending.
    ///
    /// Other workers' entries are left as stored. Returns the stored
    /// complaint after the write, or `None` when the complaint is missing,
    /// the worker is not assigned, or the worker has already answered.
    async fn record_worker_response(
        &self,
        id: ComplaintId,
        worker_id: &WorkerId,
        response: AssignmentStatus,
        changed_at: DateTime<Utc>,
    ) -> ComplaintRepositoryResult<Option<Complaint>>;

    /// Finds a complaint by storage identifier.
    async fn find_by_id(&self, id: ComplaintId) -> ComplaintRepositoryResult<Option<Complaint>>;

    /// Finds a complaint by order identifier.
    async fn find_by_order_id(
        &self,
        order_id: &OrderId,
    ) -> ComplaintRepositoryResult<Option<Complaint>>;

    /// Returns up to `limit` complaints in `status`, most recently updated
    /// first.
    async fn list_by_status(
        &self,
        status: ComplaintStatus,
        limit: usize,
    ) -> ComplaintRepositoryResult<Vec<Complaint>>;

    /// Returns complaints newest first by creation time, at most `limit`
    /// when one is given.
    async fn list_all(&self, limit: Option<usize>) -> ComplaintRepositoryResult<Vec<Complaint>>;

    /// Returns every complaint the worker is assigned to, oldest first.
    async fn find_by_worker(&self, worker_id: &WorkerId)
    -> ComplaintRepositoryResult<Vec<Complaint>>;
}

/// Errors returned by complaint repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ComplaintRepositoryError {
    /// A complaint with the same identifier already exists.
    #[error("duplicate complaint identifier: {0}")]
    DuplicateComplaint(ComplaintId),

    /// Another complaint already holds the order identifier.
    #[error("duplicate order identifier: {0}")]
    DuplicateOrderId(OrderId),

    /// The complaint has not been routed and cannot be stored.
    #[error("complaint {0} has no order identifier")]
    Unrouted(ComplaintId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ComplaintRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
