//! In-memory repository for complaint records.

use async_trait::async_trait;
use chrono::{DateTime, Local, Utc};
use mockable::Clock;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::complaint::{
    domain::{AssignmentStatus, Complaint, ComplaintId, ComplaintStatus, OrderId, WorkerId},
    ports::{ComplaintRepository, ComplaintRepositoryError, ComplaintRepositoryResult},
};

/// Thread-safe in-memory complaint repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryComplaintRepository {
    state: Arc<RwLock<InMemoryComplaintState>>,
}

#[derive(Debug, Default)]
struct InMemoryComplaintState {
    complaints: HashMap<ComplaintId, Complaint>,
    order_index: HashMap<OrderId, ComplaintId>,
}

impl InMemoryComplaintRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored complaints.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn len(&self) -> ComplaintRepositoryResult<usize> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.complaints.len())
    }

    /// Returns whether the repository holds no complaints.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn is_empty(&self) -> ComplaintRepositoryResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn lock_error(err: impl std::fmt::Display) -> ComplaintRepositoryError {
    ComplaintRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Replays the caller's change timestamp through the aggregate's mutators,
/// never earlier than the stored one.
struct ChangedAt(DateTime<Utc>);

impl ChangedAt {
    fn after(stored: &Complaint, changed_at: DateTime<Utc>) -> Self {
        Self(changed_at.max(stored.updated_at()))
    }
}

impl Clock for ChangedAt {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn collect_sorted<K: Ord>(
    complaints: impl Iterator<Item = Complaint>,
    key: impl Fn(&Complaint) -> K,
) -> Vec<Complaint> {
    let mut matched: Vec<Complaint> = complaints.collect();
    matched.sort_by_key(|complaint| key(complaint));
    matched
}

#[async_trait]
impl ComplaintRepository for InMemoryComplaintRepository {
    async fn store(&self, complaint: &Complaint) -> ComplaintRepositoryResult<()> {
        let order_id = complaint
            .order_id()
            .cloned()
            .ok_or(ComplaintRepositoryError::Unrouted(complaint.id()))?;

        let mut state = self.state.write().map_err(lock_error)?;
        if state.complaints.contains_key(&complaint.id()) {
            return Err(ComplaintRepositoryError::DuplicateComplaint(complaint.id()));
        }
        if state.order_index.contains_key(&order_id) {
            return Err(ComplaintRepositoryError::DuplicateOrderId(order_id));
        }

        state.order_index.insert(order_id, complaint.id());
        state.complaints.insert(complaint.id(), complaint.clone());
        Ok(())
    }

    async fn assign_workers_if_unassigned(
        &self,
        id: ComplaintId,
        workers: &[WorkerId],
        changed_at: DateTime<Utc>,
    ) -> ComplaintRepositoryResult<Option<Complaint>> {
        if workers.is_empty() {
            return Ok(None);
        }
        let mut state = self.state.write().map_err(lock_error)?;
        let Some(stored) = state.complaints.get_mut(&id) else {
            return Ok(None);
        };
        let clock = ChangedAt::after(stored, changed_at);
        Ok(stored
            .attach_workers(workers.iter().cloned(), &clock)
            .ok()
            .map(|()| stored.clone()))
    }

    async fn transition_status(
        &self,
        id: ComplaintId,
        from: ComplaintStatus,
        to: ComplaintStatus,
        changed_at: DateTime<Utc>,
    ) -> ComplaintRepositoryResult<Option<Complaint>> {
        let mut state = self.state.write().map_err(lock_error)?;
        let Some(stored) = state.complaints.get_mut(&id) else {
            return Ok(None);
        };
        if stored.status() != from {
            return Ok(None);
        }
        let clock = ChangedAt::after(stored, changed_at);
        Ok(stored
            .transition_to(to, &clock)
            .ok()
            .map(|()| stored.clone()))
    }

    async fn record_worker_response(
        &self,
        id: ComplaintId,
        worker_id: &WorkerId,
        response: AssignmentStatus,
        changed_at: DateTime<Utc>,
    ) -> ComplaintRepositoryResult<Option<Complaint>> {
        let mut state = self.state.write().map_err(lock_error)?;
        let Some(stored) = state.complaints.get_mut(&id) else {
            return Ok(None);
        };
        let clock = ChangedAt::after(stored, changed_at);
        Ok(stored
            .record_worker_response(worker_id, response, &clock)
            .ok()
            .map(|()| stored.clone()))
    }

    async fn find_by_id(&self, id: ComplaintId) -> ComplaintRepositoryResult<Option<Complaint>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.complaints.get(&id).cloned())
    }

    async fn find_by_order_id(
        &self,
        order_id: &OrderId,
    ) -> ComplaintRepositoryResult<Option<Complaint>> {
        let state = self.state.read().map_err(lock_error)?;
        let complaint = state
            .order_index
            .get(order_id)
            .and_then(|id| state.complaints.get(id))
            .cloned();
        Ok(complaint)
    }

    async fn list_by_status(
        &self,
        status: ComplaintStatus,
        limit: usize,
    ) -> ComplaintRepositoryResult<Vec<Complaint>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut matched = collect_sorted(
            state
                .complaints
                .values()
                .filter(|complaint| complaint.status() == status)
                .cloned(),
            |complaint| Reverse(complaint.updated_at()),
        );
        matched.truncate(limit);
        Ok(matched)
    }

    async fn list_all(&self, limit: Option<usize>) -> ComplaintRepositoryResult<Vec<Complaint>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut listed = collect_sorted(state.complaints.values().cloned(), |complaint| {
            Reverse(complaint.created_at())
        });
        if let Some(max) = limit {
            listed.truncate(max);
        }
        Ok(listed)
    }

    async fn find_by_worker(
        &self,
        worker_id: &WorkerId,
    ) -> ComplaintRepositoryResult<Vec<Complaint>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(collect_sorted(
            state
                .complaints
                .values()
                .filter(|complaint| complaint.is_assigned_to(worker_id))
                .cloned(),
            Complaint::created_at,
        ))
    }
}
