//! Lost-and-found and community services over in-memory adapters.

use chrono::{Duration, Utc};
use civicdesk::{
    community::{
        adapters::memory::{InMemoryEventRepository, InMemoryNgoRepository},
        domain::CommunityEvent,
        services::CommunityService,
    },
    lost_found::{
        adapters::memory::{InMemoryLostFoundRepository, InMemoryPoliceStationRegistry},
        domain::{PoliceStation, ReportFilter, ReportKind, ReportSubmission, StationId},
        services::{LostFoundService, LostFoundServiceError},
    },
};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn found_items_require_a_verified_station() -> Result<(), eyre::Report> {
    let service = LostFoundService::new(
        Arc::new(InMemoryLostFoundRepository::new()),
        Arc::new(InMemoryPoliceStationRegistry::new()),
        Arc::new(DefaultClock),
    );
    let station_id = StationId::new("PS-LDH-007")?;
    service
        .register_station(PoliceStation::new(
            station_id.clone(),
            "Sarabha Nagar",
            "Ludhiana",
            "Ludhiana",
        )?)
        .await?;

    let confirmed = service.verify_station("PS-LDH-007").await?;
    eyre::ensure!(confirmed.is_verified(), "registered station should be verified");

    let rejected = service
        .submit_report(
            ReportSubmission::new(ReportKind::Found, "Passport")
                .with_police_station(StationId::new("PS-FAKE-1")?),
        )
        .await;
    eyre::ensure!(
        matches!(rejected, Err(LostFoundServiceError::UnverifiedPoliceStation(_))),
        "unknown station must be rejected, got {rejected:?}"
    );

    service
        .submit_report(
            ReportSubmission::new(ReportKind::Found, "Passport")
                .with_address("Sarabha Nagar, Ludhiana")
                .with_police_station(station_id),
        )
        .await?;
    let found = service
        .search(&ReportFilter::default().with_kind(ReportKind::Found).with_city("LUDHIANA"))
        .await?;
    eyre::ensure!(found.len() == 1, "expected one found report, got {}", found.len());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn community_listings_are_seeded_and_sorted() -> Result<(), eyre::Report> {
    let service = CommunityService::new(
        Arc::new(InMemoryNgoRepository::new()),
        Arc::new(InMemoryEventRepository::new()),
        Arc::new(DefaultClock),
    );

    let ngos = service.list_ngos().await?;
    eyre::ensure!(ngos.len() == 3, "expected three seeded NGOs");

    let now = Utc::now();
    service
        .publish_events(vec![
            CommunityEvent::new("Later", now + Duration::days(7))?.at("Park", "Patiala"),
            CommunityEvent::new("Sooner", now + Duration::days(1))?.at("Library", "Patiala"),
            CommunityEvent::new("Elsewhere", now)?.at("Hall", "Jalandhar"),
        ])
        .await?;

    let patiala = service.list_events(Some("patiala")).await?;
    let titles: Vec<&str> = patiala.iter().map(CommunityEvent::title).collect();
    eyre::ensure!(titles == ["Sooner", "Later"], "unexpected order {titles:?}");
    Ok(())
}
