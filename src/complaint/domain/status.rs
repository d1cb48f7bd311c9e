//! Complaint lifecycle and worker assignment statuses.

use super::{ParseAssignmentStatusError, ParseComplaintStatusError, WorkerId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complaint lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComplaintStatus {
    /// Submitted and awaiting action.
    #[default]
    Pending,
    /// Work on the complaint has started.
    #[serde(rename = "In Progress")]
    InProgress,
    /// The complaint has been resolved.
    Resolved,
}

impl ComplaintStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }

    /// Returns whether the status permits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved)
    }

    /// Returns whether moving to `target` is permitted.
    ///
    /// Transitions only move forward; `Pending` may jump straight to
    /// `Resolved`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::InProgress | Self::Resolved)
                | (Self::InProgress, Self::Resolved)
        )
    }
}

impl TryFrom<&str> for ComplaintStatus {
    type Error = ParseComplaintStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(ParseComplaintStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A worker's answer to an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Not yet answered.
    #[default]
    Pending,
    /// The worker took the complaint.
    Accepted,
    /// The worker declined the complaint.
    Rejected,
}

impl AssignmentStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl TryFrom<&str> for AssignmentStatus {
    type Error = ParseAssignmentStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(ParseAssignmentStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a complaint's assigned-worker list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerAssignment {
    worker_id: WorkerId,
    status: AssignmentStatus,
}

impl WorkerAssignment {
    /// Creates a pending assignment for a worker.
    #[must_use]
    pub const fn pending(worker_id: WorkerId) -> Self {
        Self {
            worker_id,
            status: AssignmentStatus::Pending,
        }
    }

    /// Reconstructs an assignment from storage.
    #[must_use]
    pub const fn from_parts(worker_id: WorkerId, status: AssignmentStatus) -> Self {
        Self { worker_id, status }
    }

    /// Returns the assigned worker.
    #[must_use]
    pub const fn worker_id(&self) -> &WorkerId {
        &self.worker_id
    }

    /// Returns the worker's answer.
    #[must_use]
    pub const fn status(&self) -> AssignmentStatus {
        self.status
    }

    pub(crate) const fn set_status(&mut self, status: AssignmentStatus) {
        self.status = status;
    }
}
