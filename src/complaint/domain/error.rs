//! Error types for complaint domain validation and parsing.

use super::{AssignmentStatus, ComplaintId, ComplaintStatus, WorkerId};
use thiserror::Error;

/// Errors returned while constructing or mutating complaint domain values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ComplaintDomainError {
    /// The complainant name is empty after trimming.
    #[error("complainant name must not be empty")]
    EmptyName,

    /// The complainant email is not a plausible address.
    #[error("invalid complainant email '{0}'")]
    InvalidEmail(String),

    /// The coordinate pair lies outside the valid latitude/longitude range.
    #[error("invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates {
        /// Rejected latitude.
        lat: f64,
        /// Rejected longitude.
        lng: f64,
    },

    /// The worker identifier is empty or contains whitespace.
    #[error("invalid worker identifier '{0}'")]
    InvalidWorkerId(String),

    /// The order identifier does not follow `<prefix><4 digits>`.
    #[error("invalid order identifier '{0}', expected two letters followed by 1000-9999")]
    InvalidOrderId(String),

    /// A generated order suffix fell outside `1000..=9999`.
    #[error("order suffix {0} is outside 1000-9999")]
    OrderSuffixOutOfRange(u16),

    /// The department label is empty after trimming.
    #[error("department label must not be empty")]
    EmptyDepartment,

    /// The requested status change is not permitted.
    #[error("invalid status transition for complaint {complaint_id}: {from:?} -> {to:?}")]
    InvalidStatusTransition {
        /// Complaint being transitioned.
        complaint_id: ComplaintId,
        /// Current status.
        from: ComplaintStatus,
        /// Requested status.
        to: ComplaintStatus,
    },

    /// Workers have already been attached to the complaint.
    #[error("workers already assigned to complaint {0}")]
    WorkersAlreadyAssigned(ComplaintId),

    /// The worker is not part of the complaint's assignment list.
    #[error("worker {worker_id} is not assigned to complaint {complaint_id}")]
    WorkerNotAssigned {
        /// Complaint that was addressed.
        complaint_id: ComplaintId,
        /// Worker that attempted to respond.
        worker_id: WorkerId,
    },

    /// The worker has already accepted or rejected the assignment.
    #[error("worker {worker_id} already answered complaint {complaint_id} with {status}")]
    AssignmentAlreadyAnswered {
        /// Complaint that was addressed.
        complaint_id: ComplaintId,
        /// Worker that attempted to respond.
        worker_id: WorkerId,
        /// Status recorded by the earlier response.
        status: AssignmentStatus,
    },

    /// Workers may only answer with `accepted` or `rejected`.
    #[error("assignment response must be accepted or rejected")]
    InvalidAssignmentResponse,
}

/// Error returned while parsing complaint statuses from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown complaint status: {0}")]
pub struct ParseComplaintStatusError(pub String);

/// Error returned while parsing a stored complaint category label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown complaint type: {0}")]
pub struct ParseComplaintTypeError(pub String);

/// Error returned while parsing worker assignment statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown assignment status: {0}")]
pub struct ParseAssignmentStatusError(pub String);
