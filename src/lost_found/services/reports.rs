//! Report intake, search and station verification.

use crate::lost_found::{
    domain::{
        LostFoundDomainError, LostFoundReport, PoliceStation, ReportFilter, ReportSubmission,
        StationId,
    },
    ports::{
        LostFoundRepository, LostFoundRepositoryError, PoliceStationRegistry,
        PoliceStationRegistryError,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for lost-and-found operations.
#[derive(Debug, Error)]
pub enum LostFoundServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] LostFoundDomainError),
    /// Report repository operation failed.
    #[error(transparent)]
    Repository(#[from] LostFoundRepositoryError),
    /// Station registry operation failed.
    #[error(transparent)]
    Registry(#[from] PoliceStationRegistryError),
    /// The named station is unknown or not verified.
    #[error("police station {0} is unknown or not verified")]
    UnverifiedPoliceStation(StationId),
    /// No station has the given identifier.
    #[error("no police station with identifier {0}")]
    UnknownPoliceStation(StationId),
}

/// Result type for lost-and-found operations.
pub type LostFoundServiceResult<T> = Result<T, LostFoundServiceError>;

/// Lost-and-found orchestration service.
#[derive(Clone)]
pub struct LostFoundService<R, P, C>
where
    R: LostFoundRepository,
    P: PoliceStationRegistry,
    C: Clock + Send + Sync,
{
    reports: Arc<R>,
    stations: Arc<P>,
    clock: Arc<C>,
}

impl<R, P, C> LostFoundService<R, P, C>
where
    R: LostFoundRepository,
    P: PoliceStationRegistry,
    C: Clock + Send + Sync,
{
    /// Creates a new lost-and-found service.
    #[must_use]
    pub const fn new(reports: Arc<R>, stations: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            reports,
            stations,
            clock,
        }
    }

    /// Files a report.
    ///
    /// A found report is accepted only when its station is registered and
    /// verified.
    ///
    /// # Errors
    ///
    /// Returns [`LostFoundServiceError::Domain`] for invalid input,
    /// [`LostFoundServiceError::UnverifiedPoliceStation`] when the station
    /// is unknown or unverified, or storage errors.
    pub async fn submit_report(
        &self,
        submission: ReportSubmission,
    ) -> LostFoundServiceResult<LostFoundReport> {
        if let Some(station_id) = submission.station_to_verify()? {
            let station = self.stations.find_by_station_id(station_id).await?;
            if !station.as_ref().is_some_and(PoliceStation::is_verified) {
                warn!(%station_id, "found report rejected, station not verified");
                return Err(LostFoundServiceError::UnverifiedPoliceStation(
                    station_id.clone(),
                ));
            }
        }

        let report = LostFoundReport::file(submission, &*self.clock)?;
        self.reports.store(&report).await?;
        info!(report_id = %report.id(), kind = %report.kind(), "lost-and-found report filed");
        Ok(report)
    }

    /// Returns reports matching the filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`LostFoundServiceError::Repository`] when the lookup fails.
    pub async fn search(
        &self,
        filter: &ReportFilter,
    ) -> LostFoundServiceResult<Vec<LostFoundReport>> {
        Ok(self.reports.search(filter).await?)
    }

    /// Looks up a station so a reporter can confirm the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LostFoundServiceError::Domain`] for a blank identifier,
    /// [`LostFoundServiceError::UnknownPoliceStation`] when no station
    /// matches, or registry errors.
    pub async fn verify_station(&self, station_id: &str) -> LostFoundServiceResult<PoliceStation> {
        let station_id = StationId::new(station_id)?;
        self.stations
            .find_by_station_id(&station_id)
            .await?
            .ok_or(LostFoundServiceError::UnknownPoliceStation(station_id))
    }

    /// Registers a station.
    ///
    /// # Errors
    ///
    /// Returns [`LostFoundServiceError::Registry`] when the identifier is
    /// taken or the registry fails.
    pub async fn register_station(
        &self,
        station: PoliceStation,
    ) -> LostFoundServiceResult<PoliceStation> {
        self.stations.register(&station).await?;
        info!(station_id = %station.station_id(), "police station registered");
        Ok(station)
    }
}
