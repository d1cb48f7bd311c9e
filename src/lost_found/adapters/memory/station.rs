//! In-memory police station registry.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::lost_found::{
    domain::{PoliceStation, StationId},
    ports::{PoliceStationRegistry, PoliceStationRegistryError, PoliceStationRegistryResult},
};

/// Thread-safe in-memory station registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPoliceStationRegistry {
    stations: Arc<RwLock<HashMap<StationId, PoliceStation>>>,
}

impl InMemoryPoliceStationRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> PoliceStationRegistryError {
    PoliceStationRegistryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl PoliceStationRegistry for InMemoryPoliceStationRegistry {
    async fn register(&self, station: &PoliceStation) -> PoliceStationRegistryResult<()> {
        let mut stations = self.stations.write().map_err(lock_error)?;
        if stations.contains_key(station.station_id()) {
            return Err(PoliceStationRegistryError::DuplicateStation(
                station.station_id().clone(),
            ));
        }
        stations.insert(station.station_id().clone(), station.clone());
        Ok(())
    }

    async fn find_by_station_id(
        &self,
        station_id: &StationId,
    ) -> PoliceStationRegistryResult<Option<PoliceStation>> {
        let stations = self.stations.read().map_err(lock_error)?;
        Ok(stations.get(station_id).cloned())
    }
}
