//! Shared world state for complaint routing BDD scenarios.

use std::sync::Arc;

use civicdesk::complaint::{
    adapters::memory::{InMemoryComplaintRepository, InMemoryWorkerDirectory},
    domain::{Complaint, WorkerId},
    services::{
        ComplaintIntakeService, ComplaintLifecycleError, ComplaintLifecycleService, RoutingConfig,
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Intake service type used by the BDD world.
pub type TestIntake =
    ComplaintIntakeService<InMemoryComplaintRepository, InMemoryWorkerDirectory, DefaultClock>;

/// Lifecycle service type used by the BDD world.
pub type TestLifecycle = ComplaintLifecycleService<InMemoryComplaintRepository, DefaultClock>;

/// Services built once the scenario names its worker roster.
pub struct ComplaintServices {
    pub intake: TestIntake,
    pub lifecycle: TestLifecycle,
}

/// Scenario world for complaint routing behaviour tests.
#[derive(Default)]
pub struct ComplaintWorld {
    pub services: Option<ComplaintServices>,
    pub last_complaint: Option<Complaint>,
    pub last_transition_result: Option<Result<Complaint, ComplaintLifecycleError>>,
}

impl ComplaintWorld {
    /// Wires default routing to a directory holding `roster`.
    ///
    /// # Errors
    ///
    /// Returns an error when a worker identifier is invalid.
    pub fn install_roster<'a>(
        &mut self,
        roster: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), eyre::Report> {
        let workers = roster
            .into_iter()
            .map(WorkerId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let repository = Arc::new(InMemoryComplaintRepository::new());
        let clock = Arc::new(DefaultClock);
        let intake = ComplaintIntakeService::from_config(
            repository.clone(),
            Arc::new(InMemoryWorkerDirectory::with_workers(workers)),
            clock.clone(),
            &RoutingConfig::default(),
        )?;
        self.services = Some(ComplaintServices {
            intake,
            lifecycle: ComplaintLifecycleService::new(repository, clock),
        });
        Ok(())
    }

    /// Returns the wired services.
    ///
    /// # Errors
    ///
    /// Returns an error when no roster step has run.
    pub fn services(&self) -> Result<&ComplaintServices, eyre::Report> {
        self.services
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing worker roster in scenario world"))
    }

    /// Returns the most recently filed complaint.
    ///
    /// # Errors
    ///
    /// Returns an error when no complaint has been filed yet.
    pub fn complaint(&self) -> Result<&Complaint, eyre::Report> {
        self.last_complaint
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing filed complaint in scenario world"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ComplaintWorld {
    ComplaintWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Splits a comma-separated scenario list.
pub fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty())
}
