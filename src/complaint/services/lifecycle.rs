//! Service layer for complaint status changes and worker responses.

use crate::complaint::{
    domain::{
        AssignmentStatus, Complaint, ComplaintDomainError, ComplaintId, ComplaintStatus, OrderId,
        ParseAssignmentStatusError, ParseComplaintStatusError, WorkerId,
    },
    ports::{ComplaintRepository, ComplaintRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Number of complaints returned by the resolved list when no limit is given.
pub const DEFAULT_RESOLVED_LIMIT: usize = 10;

/// Status writes attempted before reporting a concurrent modification.
/// Statuses only move forward, so at most two other changes can intervene.
const STATUS_WRITE_ATTEMPTS: u32 = 3;

/// Request payload for moving a complaint to a new status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionComplaintRequest {
    complaint_id: ComplaintId,
    target_status: String,
}

impl TransitionComplaintRequest {
    /// Creates a transition request from a status label such as
    /// `"In Progress"`.
    #[must_use]
    pub fn new(complaint_id: ComplaintId, target_status: impl Into<String>) -> Self {
        Self {
            complaint_id,
            target_status: target_status.into(),
        }
    }
}

/// Request payload for a worker accepting or rejecting an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RespondToAssignmentRequest {
    order_id: OrderId,
    worker_id: WorkerId,
    response: String,
}

impl RespondToAssignmentRequest {
    /// Creates a response request; `response` is `accepted` or `rejected`.
    #[must_use]
    pub fn new(order_id: OrderId, worker_id: WorkerId, response: impl Into<String>) -> Self {
        Self {
            order_id,
            worker_id,
            response: response.into(),
        }
    }
}

/// Service-level errors for complaint lifecycle operations.
#[derive(Debug, Error)]
pub enum ComplaintLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ComplaintDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ComplaintRepositoryError),
    /// The status label is not recognised.
    #[error(transparent)]
    InvalidStatus(#[from] ParseComplaintStatusError),
    /// The response label is not recognised.
    #[error(transparent)]
    InvalidResponse(#[from] ParseAssignmentStatusError),
    /// No complaint has the given identifier.
    #[error("complaint {0} not found")]
    NotFound(ComplaintId),
    /// No complaint has the given order identifier.
    #[error("no complaint with order identifier {0}")]
    UnknownOrder(OrderId),
    /// The complaint changed concurrently and the write could not be applied.
    #[error("complaint {0} was modified concurrently")]
    ConcurrentModification(ComplaintId),
}

/// Result type for complaint lifecycle operations.
pub type ComplaintLifecycleResult<T> = Result<T, ComplaintLifecycleError>;

/// Complaint lifecycle orchestration service.
#[derive(Clone)]
pub struct ComplaintLifecycleService<R, C>
where
    R: ComplaintRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ComplaintLifecycleService<R, C>
where
    R: ComplaintRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    async fn find_or_error(
        &self,
        complaint_id: ComplaintId,
    ) -> ComplaintLifecycleResult<Complaint> {
        self.repository
            .find_by_id(complaint_id)
            .await?
            .ok_or(ComplaintLifecycleError::NotFound(complaint_id))
    }

    async fn find_by_order_or_error(
        &self,
        order_id: &OrderId,
    ) -> ComplaintLifecycleResult<Complaint> {
        self.repository
            .find_by_order_id(order_id)
            .await?
            .ok_or_else(|| ComplaintLifecycleError::UnknownOrder(order_id.clone()))
    }

    /// Moves a complaint to the requested status.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintLifecycleError::InvalidStatus`] for an unknown
    /// label, [`ComplaintLifecycleError::NotFound`] for a missing complaint,
    /// domain errors for forbidden transitions, or repository errors. A
    /// status that keeps changing concurrently yields
    /// [`ComplaintLifecycleError::ConcurrentModification`].
    pub async fn transition(
        &self,
        request: TransitionComplaintRequest,
    ) -> ComplaintLifecycleResult<Complaint> {
        let target = ComplaintStatus::try_from(request.target_status.as_str())?;
        let complaint_id = request.complaint_id;
        for attempt in 1..=STATUS_WRITE_ATTEMPTS {
            let mut complaint = self.find_or_error(complaint_id).await?;
            let from = complaint.status();
            complaint.transition_to(target, &*self.clock)?;
            let written = self
                .repository
                .transition_status(complaint_id, from, target, complaint.updated_at())
                .await?;
            if let Some(stored) = written {
                info!(%complaint_id, %from, to = %target, "complaint status changed");
                return Ok(stored);
            }
            debug!(%complaint_id, %from, attempt, "status changed concurrently, re-reading");
        }
        Err(ComplaintLifecycleError::ConcurrentModification(complaint_id))
    }

    /// Marks a complaint resolved.
    ///
    /// # Errors
    ///
    /// Same as [`ComplaintLifecycleService::transition`].
    pub async fn mark_resolved(
        &self,
        complaint_id: ComplaintId,
    ) -> ComplaintLifecycleResult<Complaint> {
        self.transition(TransitionComplaintRequest::new(
            complaint_id,
            ComplaintStatus::Resolved.as_str(),
        ))
        .await
    }

    /// Records a worker's answer to an assignment.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintLifecycleError::InvalidResponse`] for an unknown
    /// label, [`ComplaintLifecycleError::UnknownOrder`] when no complaint has
    /// the order identifier, domain errors when the worker is not assigned
    /// or has already answered, or repository errors.
    pub async fn respond_to_assignment(
        &self,
        request: RespondToAssignmentRequest,
    ) -> ComplaintLifecycleResult<Complaint> {
        let response = AssignmentStatus::try_from(request.response.as_str())?;
        let mut complaint = self.find_by_order_or_error(&request.order_id).await?;
        complaint.record_worker_response(&request.worker_id, response, &*self.clock)?;
        let written = self
            .repository
            .record_worker_response(
                complaint.id(),
                &request.worker_id,
                response,
                complaint.updated_at(),
            )
            .await?;
        let Some(stored) = written else {
            // Another answer landed first; the fresh copy reports why.
            let mut fresh = self.find_by_order_or_error(&request.order_id).await?;
            fresh.record_worker_response(&request.worker_id, response, &*self.clock)?;
            return Err(ComplaintLifecycleError::ConcurrentModification(fresh.id()));
        };
        info!(
            order_id = %request.order_id,
            worker_id = %request.worker_id,
            %response,
            "worker answered assignment"
        );
        Ok(stored)
    }

    /// Returns the most recently resolved complaints, newest first.
    ///
    /// Without a limit, [`DEFAULT_RESOLVED_LIMIT`] complaints are returned.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintLifecycleError::Repository`] when the lookup fails.
    pub async fn recently_resolved(
        &self,
        limit: Option<usize>,
    ) -> ComplaintLifecycleResult<Vec<Complaint>> {
        Ok(self
            .repository
            .list_by_status(
                ComplaintStatus::Resolved,
                limit.unwrap_or(DEFAULT_RESOLVED_LIMIT),
            )
            .await?)
    }

    /// Returns every complaint assigned to the worker.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintLifecycleError::Repository`] when the lookup fails.
    pub async fn assigned_to(
        &self,
        worker_id: &WorkerId,
    ) -> ComplaintLifecycleResult<Vec<Complaint>> {
        Ok(self.repository.find_by_worker(worker_id).await?)
    }
}
