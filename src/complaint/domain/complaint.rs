//! Complaint aggregate root.

use super::{
    AssignmentStatus, ComplainantContact, ComplaintDomainError, ComplaintId, ComplaintStatus,
    ComplaintSubmission, ComplaintType, Department, GeoPoint, OrderId, RoutingDecision,
    WorkerAssignment, WorkerId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Complaint aggregate root.
///
/// A complaint starts unrouted. Routing sets the order identifier and the
/// owning department together, exactly once; worker assignment follows as a
/// separate step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    id: ComplaintId,
    order_id: Option<OrderId>,
    contact: ComplainantContact,
    description: String,
    #[serde(rename = "type")]
    complaint_type: ComplaintType,
    status: ComplaintStatus,
    department: Option<Department>,
    assigned_workers: Vec<WorkerAssignment>,
    address: Option<String>,
    location: Option<GeoPoint>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted complaint.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedComplaintData {
    /// Persisted complaint identifier.
    pub id: ComplaintId,
    /// Persisted order identifier, if routed.
    pub order_id: Option<OrderId>,
    /// Persisted contact details.
    pub contact: ComplainantContact,
    /// Persisted description.
    pub description: String,
    /// Persisted category.
    pub complaint_type: ComplaintType,
    /// Persisted lifecycle status.
    pub status: ComplaintStatus,
    /// Persisted department, if routed.
    pub department: Option<Department>,
    /// Persisted worker assignments.
    pub assigned_workers: Vec<WorkerAssignment>,
    /// Persisted address.
    pub address: Option<String>,
    /// Persisted coordinates.
    pub location: Option<GeoPoint>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest change timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Complaint {
    /// Creates a pending, unrouted complaint from a validated submission.
    #[must_use]
    pub fn new(submission: ComplaintSubmission, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let (contact, description, complaint_type, address, location) = submission.into_parts();

        Self {
            id: ComplaintId::new(),
            order_id: None,
            contact,
            description,
            complaint_type,
            status: ComplaintStatus::Pending,
            department: None,
            assigned_workers: Vec::new(),
            address,
            location,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a complaint from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedComplaintData) -> Self {
        Self {
            id: data.id,
            order_id: data.order_id,
            contact: data.contact,
            description: data.description,
            complaint_type: data.complaint_type,
            status: data.status,
            department: data.department,
            assigned_workers: data.assigned_workers,
            address: data.address,
            location: data.location,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the storage identifier.
    #[must_use]
    pub const fn id(&self) -> ComplaintId {
        self.id
    }

    /// Returns the order identifier once routed.
    #[must_use]
    pub const fn order_id(&self) -> Option<&OrderId> {
        self.order_id.as_ref()
    }

    /// Returns whether routing has been applied.
    #[must_use]
    pub const fn is_routed(&self) -> bool {
        self.order_id.is_some()
    }

    /// Returns the complainant contact details.
    #[must_use]
    pub const fn contact(&self) -> &ComplainantContact {
        &self.contact
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the category.
    #[must_use]
    pub const fn complaint_type(&self) -> ComplaintType {
        self.complaint_type
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ComplaintStatus {
        self.status
    }

    /// Returns the owning department once routed.
    #[must_use]
    pub const fn department(&self) -> Option<&Department> {
        self.department.as_ref()
    }

    /// Returns the assigned workers in directory order.
    #[must_use]
    pub fn assigned_workers(&self) -> &[WorkerAssignment] {
        &self.assigned_workers
    }

    /// Returns the address, if any.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns the coordinates, if any.
    #[must_use]
    pub const fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest change timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a routing decision.
    ///
    /// Returns `false` and leaves the complaint untouched when an order
    /// identifier is already present.
    pub fn apply_routing(&mut self, decision: RoutingDecision) -> bool {
        if self.order_id.is_some() {
            return false;
        }
        let (order_id, department) = decision.into_parts();
        self.order_id = Some(order_id);
        self.department = Some(department);
        true
    }

    /// Attaches eligible workers with status pending.
    ///
    /// An empty worker set leaves the complaint unassigned.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintDomainError::WorkersAlreadyAssigned`] when a worker
    /// list has already been attached.
    pub fn attach_workers(
        &mut self,
        workers: impl IntoIterator<Item = WorkerId>,
        clock: &impl Clock,
    ) -> Result<(), ComplaintDomainError> {
        if !self.assigned_workers.is_empty() {
            return Err(ComplaintDomainError::WorkersAlreadyAssigned(self.id));
        }
        let assignments: Vec<WorkerAssignment> =
            workers.into_iter().map(WorkerAssignment::pending).collect();
        if assignments.is_empty() {
            return Ok(());
        }
        self.assigned_workers = assignments;
        self.touch(clock);
        Ok(())
    }

    /// Moves the complaint to a new lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintDomainError::InvalidStatusTransition`] when the
    /// transition moves backward, repeats the current status, or leaves a
    /// terminal status.
    pub fn transition_to(
        &mut self,
        target: ComplaintStatus,
        clock: &impl Clock,
    ) -> Result<(), ComplaintDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(ComplaintDomainError::InvalidStatusTransition {
                complaint_id: self.id,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        self.touch(clock);
        Ok(())
    }

    /// Records a worker's accept or reject answer.
    ///
    /// Only the named worker's entry changes.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintDomainError::InvalidAssignmentResponse`] for a
    /// `pending` answer, [`ComplaintDomainError::WorkerNotAssigned`] when the
    /// worker is not on the list, and
    /// [`ComplaintDomainError::AssignmentAlreadyAnswered`] when the worker has
    /// already answered.
    pub fn record_worker_response(
        &mut self,
        worker_id: &WorkerId,
        response: AssignmentStatus,
        clock: &impl Clock,
    ) -> Result<(), ComplaintDomainError> {
        if response == AssignmentStatus::Pending {
            return Err(ComplaintDomainError::InvalidAssignmentResponse);
        }
        let complaint_id = self.id;
        let assignment = self
            .assigned_workers
            .iter_mut()
            .find(|assignment| assignment.worker_id() == worker_id)
            .ok_or_else(|| ComplaintDomainError::WorkerNotAssigned {
                complaint_id,
                worker_id: worker_id.clone(),
            })?;
        if assignment.status() != AssignmentStatus::Pending {
            return Err(ComplaintDomainError::AssignmentAlreadyAnswered {
                complaint_id,
                worker_id: worker_id.clone(),
                status: assignment.status(),
            });
        }
        assignment.set_status(response);
        self.touch(clock);
        Ok(())
    }

    /// Returns whether the worker appears on the assignment list.
    #[must_use]
    pub fn is_assigned_to(&self, worker_id: &WorkerId) -> bool {
        self.assigned_workers
            .iter()
            .any(|assignment| assignment.worker_id() == worker_id)
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
