//! NGO directory seeding and event publication.

use crate::community::{
    domain::{CommunityDomainError, CommunityEvent, Ngo, default_ngos},
    ports::{CommunityRepositoryError, EventRepository, NgoRepository},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for community operations.
#[derive(Debug, Error)]
pub enum CommunityServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CommunityDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] CommunityRepositoryError),
}

/// Result type for community operations.
pub type CommunityServiceResult<T> = Result<T, CommunityServiceError>;

/// Community orchestration service.
#[derive(Clone)]
pub struct CommunityService<N, E, C>
where
    N: NgoRepository,
    E: EventRepository,
    C: Clock + Send + Sync,
{
    ngos: Arc<N>,
    events: Arc<E>,
    clock: Arc<C>,
}

impl<N, E, C> CommunityService<N, E, C>
where
    N: NgoRepository,
    E: EventRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new community service.
    #[must_use]
    pub const fn new(ngos: Arc<N>, events: Arc<E>, clock: Arc<C>) -> Self {
        Self { ngos, events, clock }
    }

    /// Returns the NGO directory, seeding the default partners when it is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`CommunityServiceError::Repository`] when the directory
    /// cannot be read or seeded.
    pub async fn list_ngos(&self) -> CommunityServiceResult<Vec<Ngo>> {
        let existing = self.ngos.list().await?;
        if !existing.is_empty() {
            return Ok(existing);
        }
        if self.ngos.seed_if_empty(&default_ngos(&*self.clock)).await? {
            info!("seeded empty NGO directory with default partners");
        }
        Ok(self.ngos.list().await?)
    }

    /// Adds an NGO to the directory.
    ///
    /// # Errors
    ///
    /// Returns [`CommunityServiceError::Domain`] for blank fields or
    /// [`CommunityServiceError::Repository`] when the insert fails.
    pub async fn register_ngo(
        &self,
        name: &str,
        contribution: &str,
        details: &str,
    ) -> CommunityServiceResult<Ngo> {
        let ngo = Ngo::new(name, contribution, details, &*self.clock)?;
        self.ngos.insert(&ngo).await?;
        info!(ngo_id = %ngo.id(), name = ngo.name(), "NGO registered");
        Ok(ngo)
    }

    /// Returns events by date, optionally narrowed to a city.
    ///
    /// # Errors
    ///
    /// Returns [`CommunityServiceError::Repository`] when the lookup fails.
    pub async fn list_events(
        &self,
        city: Option<&str>,
    ) -> CommunityServiceResult<Vec<CommunityEvent>> {
        Ok(self.events.list(city).await?)
    }

    /// Publishes a batch of events.
    ///
    /// # Errors
    ///
    /// Returns [`CommunityServiceError::Repository`] when any event is a
    /// duplicate or the insert fails.
    pub async fn publish_events(
        &self,
        events: Vec<CommunityEvent>,
    ) -> CommunityServiceResult<Vec<CommunityEvent>> {
        self.events.insert_many(&events).await?;
        info!(count = events.len(), "community events published");
        Ok(events)
    }
}
