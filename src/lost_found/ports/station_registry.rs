//! Police station registry port.

use crate::lost_found::domain::{PoliceStation, StationId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for station registry operations.
pub type PoliceStationRegistryResult<T> = Result<T, PoliceStationRegistryError>;

/// Registry of police stations that may hold found items.
#[async_trait]
pub trait PoliceStationRegistry: Send + Sync {
    /// Registers a station.
    ///
    /// # Errors
    ///
    /// Returns [`PoliceStationRegistryError::DuplicateStation`] when the
    /// station identifier is already registered.
    async fn register(&self, station: &PoliceStation) -> PoliceStationRegistryResult<()>;

    /// Looks a station up by its public identifier, verified or not.
    async fn find_by_station_id(
        &self,
        station_id: &StationId,
    ) -> PoliceStationRegistryResult<Option<PoliceStation>>;
}

/// Errors returned by station registry implementations.
#[derive(Debug, Clone, Error)]
pub enum PoliceStationRegistryError {
    /// A station with the same identifier is already registered.
    #[error("duplicate police station identifier: {0}")]
    DuplicateStation(StationId),

    /// Persistence failure.
    #[error("police station persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PoliceStationRegistryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
