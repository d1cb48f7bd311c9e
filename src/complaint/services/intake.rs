//! Service layer for complaint submission and worker auto-assignment.

use super::{
    config::{RoutingConfig, RoutingConfigError},
    routing::RoutingEngine,
};
use crate::complaint::{
    domain::{
        ComplainantContact, Complaint, ComplaintDomainError, ComplaintId, ComplaintSubmission,
        ComplaintType, GeoPoint, OrderId, OrderPrefix,
    },
    ports::{ComplaintRepository, ComplaintRepositoryError, WorkerDirectory},
};
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for filing a complaint.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitComplaintRequest {
    name: String,
    email: String,
    description: String,
    phone: Option<String>,
    complaint_type: Option<String>,
    address: Option<String>,
    location: Option<(f64, f64)>,
}

impl SubmitComplaintRequest {
    /// Creates a request with the required contact fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            description: description.into(),
            phone: None,
            complaint_type: None,
            address: None,
            location: None,
        }
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the category label; unknown labels route as `Other`.
    #[must_use]
    pub fn with_type(mut self, complaint_type: impl Into<String>) -> Self {
        self.complaint_type = Some(complaint_type.into());
        self
    }

    /// Sets the free-text address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the coordinate pair.
    #[must_use]
    pub const fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.location = Some((lat, lng));
        self
    }

    fn into_submission(self) -> Result<ComplaintSubmission, ComplaintDomainError> {
        let mut contact = ComplainantContact::new(self.name, self.email)?;
        if let Some(phone) = self.phone {
            contact = contact.with_phone(phone);
        }
        let complaint_type = ComplaintType::from_label(self.complaint_type.as_deref());
        let mut submission = ComplaintSubmission::new(contact, complaint_type, self.description);
        if let Some(address) = self.address {
            submission = submission.with_address(address);
        }
        if let Some((lat, lng)) = self.location {
            submission = submission.with_location(GeoPoint::new(lat, lng)?);
        }
        Ok(submission)
    }
}

/// Service-level errors for complaint intake.
#[derive(Debug, Error)]
pub enum ComplaintIntakeError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ComplaintDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ComplaintRepositoryError),
    /// Every drawn order identifier collided with a stored one.
    #[error("no free {prefix} order identifier after {attempts} attempts")]
    OrderIdSpaceExhausted {
        /// Prefix whose namespace was exhausted.
        prefix: OrderPrefix,
        /// Number of identifiers drawn.
        attempts: u32,
    },
    /// No complaint has the given identifier.
    #[error("complaint {0} not found")]
    NotFound(ComplaintId),
}

/// Result type for complaint intake operations.
pub type ComplaintIntakeResult<T> = Result<T, ComplaintIntakeError>;

/// Complaint intake orchestration service.
///
/// Submission validates, routes and persists the complaint, then runs worker
/// auto-assignment as a separate best-effort step. A directory failure or
/// timeout is logged and leaves the stored complaint unassigned.
#[derive(Clone)]
pub struct ComplaintIntakeService<R, D, C>
where
    R: ComplaintRepository,
    D: WorkerDirectory,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    directory: Arc<D>,
    clock: Arc<C>,
    engine: RoutingEngine,
    lookup_timeout: Duration,
    max_order_id_attempts: u32,
}

impl<R, D, C> ComplaintIntakeService<R, D, C>
where
    R: ComplaintRepository,
    D: WorkerDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a service with an explicit routing engine and default limits.
    #[must_use]
    pub fn new(
        repository: Arc<R>,
        directory: Arc<D>,
        clock: Arc<C>,
        engine: RoutingEngine,
    ) -> Self {
        let defaults = RoutingConfig::default();
        Self {
            repository,
            directory,
            clock,
            engine,
            lookup_timeout: defaults.worker_lookup_timeout,
            max_order_id_attempts: defaults.max_order_id_attempts,
        }
    }

    /// Creates a service whose engine and limits come from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingConfigError`] when the configuration is invalid.
    pub fn from_config(
        repository: Arc<R>,
        directory: Arc<D>,
        clock: Arc<C>,
        config: &RoutingConfig,
    ) -> Result<Self, RoutingConfigError> {
        let engine = RoutingEngine::from_config(config)?;
        Ok(Self::new(repository, directory, clock, engine)
            .with_lookup_timeout(config.worker_lookup_timeout)
            .with_max_order_id_attempts(config.max_order_id_attempts))
    }

    /// Overrides the worker lookup timeout.
    #[must_use]
    pub const fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// Overrides the number of order identifiers drawn per submission.
    ///
    /// Values below one are raised to one.
    #[must_use]
    pub fn with_max_order_id_attempts(mut self, attempts: u32) -> Self {
        self.max_order_id_attempts = attempts.max(1);
        self
    }

    /// Files a new complaint.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintIntakeError::Domain`] for invalid input,
    /// [`ComplaintIntakeError::OrderIdSpaceExhausted`] when no free order
    /// identifier was found, or [`ComplaintIntakeError::Repository`] when the
    /// initial write fails. Worker assignment failures are not errors.
    pub async fn submit(
        &self,
        request: SubmitComplaintRequest,
    ) -> ComplaintIntakeResult<Complaint> {
        let submission = request.into_submission()?;
        let draft = Complaint::new(submission, &*self.clock);
        let complaint = self.store_routed(draft).await?;

        info!(
            complaint_id = %complaint.id(),
            order_id = %complaint.order_id().map_or_else(String::new, ToString::to_string),
            department = %complaint.department().map_or_else(String::new, ToString::to_string),
            "complaint filed"
        );
        Ok(self.assign_best_effort(complaint).await)
    }

    /// Runs worker auto-assignment for a stored complaint.
    ///
    /// A complaint that already has workers is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintIntakeError::NotFound`] when the complaint does not
    /// exist or [`ComplaintIntakeError::Repository`] when it cannot be read.
    pub async fn assign_workers(
        &self,
        complaint_id: ComplaintId,
    ) -> ComplaintIntakeResult<Complaint> {
        let complaint = self
            .repository
            .find_by_id(complaint_id)
            .await?
            .ok_or(ComplaintIntakeError::NotFound(complaint_id))?;
        if !complaint.assigned_workers().is_empty() {
            return Ok(complaint);
        }
        Ok(self.assign_best_effort(complaint).await)
    }

    /// Finds a complaint by order identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintIntakeError::Repository`] when the lookup fails.
    pub async fn find_by_order_id(
        &self,
        order_id: &OrderId,
    ) -> ComplaintIntakeResult<Option<Complaint>> {
        Ok(self.repository.find_by_order_id(order_id).await?)
    }

    /// Finds a complaint by storage identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintIntakeError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: ComplaintId) -> ComplaintIntakeResult<Option<Complaint>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists submitted complaints, newest first.
    ///
    /// Feeds the "all submitted complaints" page and the map view; each
    /// complaint carries its description, address and coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintIntakeError::Repository`] when the lookup fails.
    pub async fn list_complaints(
        &self,
        limit: Option<usize>,
    ) -> ComplaintIntakeResult<Vec<Complaint>> {
        Ok(self.repository.list_all(limit).await?)
    }

    /// Lists complaints that carry coordinates, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintIntakeError::Repository`] when the lookup fails.
    pub async fn list_located(&self) -> ComplaintIntakeResult<Vec<Complaint>> {
        let complaints = self.repository.list_all(None).await?;
        Ok(complaints
            .into_iter()
            .filter(|complaint| complaint.location().is_some())
            .collect())
    }

    async fn store_routed(&self, draft: Complaint) -> ComplaintIntakeResult<Complaint> {
        let prefix = draft.complaint_type().prefix();
        for attempt in 1..=self.max_order_id_attempts {
            let mut candidate = draft.clone();
            self.engine.route(&mut candidate)?;
            match self.repository.store(&candidate).await {
                Ok(()) => return Ok(candidate),
                Err(ComplaintRepositoryError::DuplicateOrderId(order_id)) => {
                    debug!(%order_id, attempt, "order identifier taken, drawing another");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Err(ComplaintIntakeError::OrderIdSpaceExhausted {
            prefix,
            attempts: self.max_order_id_attempts,
        })
    }

    async fn assign_best_effort(&self, complaint: Complaint) -> Complaint {
        let Some(prefix) = complaint.order_id().map(OrderId::prefix) else {
            return complaint;
        };

        let lookup =
            tokio::time::timeout(self.lookup_timeout, self.directory.find_by_prefix(prefix)).await;
        let workers = match lookup {
            Ok(Ok(workers)) => workers,
            Ok(Err(err)) => {
                warn!(
                    complaint_id = %complaint.id(),
                    %prefix,
                    error = %err,
                    "worker auto-assignment failed, complaint left unassigned"
                );
                return complaint;
            }
            Err(_) => {
                warn!(
                    complaint_id = %complaint.id(),
                    %prefix,
                    timeout = ?self.lookup_timeout,
                    "worker lookup timed out, complaint left unassigned"
                );
                return complaint;
            }
        };

        if workers.is_empty() {
            debug!(complaint_id = %complaint.id(), %prefix, "no eligible workers");
            return complaint;
        }

        // Only the worker list is written; a status set during the lookup stays.
        let complaint_id = complaint.id();
        let written = self
            .repository
            .assign_workers_if_unassigned(complaint_id, &workers, self.clock.utc())
            .await;
        match written {
            Ok(Some(assigned)) => {
                info!(
                    %complaint_id,
                    workers = assigned.assigned_workers().len(),
                    "workers auto-assigned"
                );
                assigned
            }
            Ok(None) => {
                debug!(%complaint_id, "complaint already has workers, assignment skipped");
                self.latest(complaint).await
            }
            Err(err) => {
                warn!(
                    %complaint_id,
                    error = %err,
                    "persisting worker assignment failed, complaint left unassigned"
                );
                self.latest(complaint).await
            }
        }
    }

    /// Re-reads a complaint, falling back to the given copy when the read
    /// fails or finds nothing.
    async fn latest(&self, complaint: Complaint) -> Complaint {
        match self.repository.find_by_id(complaint.id()).await {
            Ok(Some(stored)) => stored,
            Ok(None) => complaint,
            Err(err) => {
                warn!(complaint_id = %complaint.id(), error = %err, "re-reading complaint failed");
                complaint
            }
        }
    }
}
