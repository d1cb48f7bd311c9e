//! Status changes made while intake waits on the worker directory.

use crate::postgres::cluster::BoxError;
use crate::postgres::helpers::{PgContext, context, insert_workers, registered_at};
use async_trait::async_trait;
use civicdesk::complaint::{
    adapters::postgres::{PostgresComplaintRepository, PostgresWorkerDirectory},
    domain::{ComplaintStatus, OrderPrefix, WorkerId},
    ports::{ComplaintRepository, WorkerDirectory, WorkerDirectoryResult},
    services::{
        ComplaintIntakeService, ComplaintLifecycleService, RoutingConfig, SubmitComplaintRequest,
    },
};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;

/// Delays every lookup so the complaint sits stored but unassigned.
struct DelayedDirectory {
    delay: Duration,
    inner: PostgresWorkerDirectory,
}

#[async_trait]
impl WorkerDirectory for DelayedDirectory {
    async fn find_by_prefix(&self, prefix: OrderPrefix) -> WorkerDirectoryResult<Vec<WorkerId>> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_by_prefix(prefix).await
    }
}

type DelayedIntake =
    ComplaintIntakeService<PostgresComplaintRepository, DelayedDirectory, DefaultClock>;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resolution_during_worker_lookup_survives_assignment(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    insert_workers(&ctx.pool, &[("RD101", registered_at(0)), ("RD202", registered_at(1))]).await?;
    let repository = Arc::new(ctx.repository.clone());
    let directory = Arc::new(DelayedDirectory {
        delay: Duration::from_millis(300),
        inner: ctx.directory.clone(),
    });
    let intake: Arc<DelayedIntake> = Arc::new(ComplaintIntakeService::from_config(
        repository.clone(),
        directory,
        Arc::new(DefaultClock),
        &RoutingConfig::default(),
    )?);
    let lifecycle = ComplaintLifecycleService::new(repository.clone(), Arc::new(DefaultClock));

    let submitting = {
        let task_intake = Arc::clone(&intake);
        tokio::spawn(async move {
            let request =
                SubmitComplaintRequest::new("Gurpreet", "gurpreet@example.com", "Pothole")
                    .with_type("Road")
                    .with_address("Ferozepur Road, Ludhiana, Punjab");
            task_intake.submit(request).await
        })
    };

    let mut stored = None;
    for _ in 0..50 {
        stored = repository.list_all(Some(1)).await?.into_iter().next();
        if stored.is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    let pending = stored.ok_or("complaint should be stored before the lookup finishes")?;
    assert!(pending.assigned_workers().is_empty());
    lifecycle.mark_resolved(pending.id()).await?;

    let submitted = submitting.await??;
    let final_state = repository
        .find_by_id(pending.id())
        .await?
        .ok_or("complaint should still exist")?;

    assert_eq!(submitted.status(), ComplaintStatus::Resolved);
    assert_eq!(final_state.status(), ComplaintStatus::Resolved);
    let assigned: Vec<&str> = final_state
        .assigned_workers()
        .iter()
        .map(|entry| entry.worker_id().as_str())
        .collect();
    assert_eq!(assigned, vec!["RD101", "RD202"]);
    Ok(())
}
