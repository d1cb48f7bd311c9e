//! `PostgreSQL` integration tests for the complaint repository.

use crate::postgres::cluster::BoxError;
use crate::postgres::helpers::{PgContext, context, execute_sql, routed};
use chrono::Utc;
use civicdesk::complaint::{
    domain::{
        AssignmentStatus, Complaint, ComplaintId, ComplaintStatus, ComplaintType, OrderId, WorkerId,
    },
    ports::{ComplaintRepository, ComplaintRepositoryError},
};
use rstest::rstest;
use std::time::Duration;

fn workers(raw: &[&str]) -> Result<Vec<WorkerId>, BoxError> {
    raw.iter()
        .map(|id| WorkerId::new(*id).map_err(|err| Box::new(err) as BoxError))
        .collect()
}

fn ids(complaints: &[Complaint]) -> Vec<ComplaintId> {
    complaints.iter().map(Complaint::id).collect()
}

/// Stores complaints a few milliseconds apart so creation times differ.
async fn store_spaced(ctx: &PgContext, complaints: &[&Complaint]) -> Result<(), BoxError> {
    for complaint in complaints {
        ctx.repository.store(complaint).await?;
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reused_order_id_maps_to_duplicate_order_id(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let first = routed(ComplaintType::Road, "RD4321")?;
    let second = routed(ComplaintType::Road, "RD4321")?;
    ctx.repository.store(&first).await?;

    let result = ctx.repository.store(&second).await;

    assert!(
        matches!(
            result,
            Err(ComplaintRepositoryError::DuplicateOrderId(ref order_id))
                if order_id.to_string() == "RD4321"
        ),
        "expected DuplicateOrderId, got {result:?}"
    );
    assert!(ctx.repository.find_by_id(second.id()).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_complaint_round_trips_through_lookups(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let complaint = routed(ComplaintType::StrayDog, "SD1234")?;
    ctx.repository.store(&complaint).await?;

    let by_id = ctx
        .repository
        .find_by_id(complaint.id())
        .await?
        .ok_or("complaint should be found by id")?;
    let by_order = ctx
        .repository
        .find_by_order_id(&OrderId::parse("SD1234")?)
        .await?
        .ok_or("complaint should be found by order id")?;

    assert_eq!(by_id.id(), by_order.id());
    assert_eq!(by_id.complaint_type(), ComplaintType::StrayDog);
    assert_eq!(by_id.status(), ComplaintStatus::Pending);
    assert_eq!(
        by_id.department().map(ToString::to_string),
        complaint.department().map(ToString::to_string)
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_worker_matches_whole_identifiers_oldest_first(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let older = routed(ComplaintType::Road, "RD1001")?;
    let other_worker = routed(ComplaintType::Road, "RD1002")?;
    let newer = routed(ComplaintType::Road, "RD1003")?;
    store_spaced(&ctx, &[&older, &other_worker, &newer]).await?;
    let now = Utc::now();
    ctx.repository
        .assign_workers_if_unassigned(newer.id(), &workers(&["RD1", "RD7"])?, now)
        .await?;
    ctx.repository
        .assign_workers_if_unassigned(other_worker.id(), &workers(&["RD10"])?, now)
        .await?;
    ctx.repository
        .assign_workers_if_unassigned(older.id(), &workers(&["RD1"])?, now)
        .await?;

    let found = ctx.repository.find_by_worker(&WorkerId::new("RD1")?).await?;

    assert_eq!(ids(&found), vec![older.id(), newer.id()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn worker_assignment_keeps_a_status_written_after_the_read(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let complaint = routed(ComplaintType::Water, "WT2001")?;
    ctx.repository.store(&complaint).await?;
    ctx.repository
        .transition_status(
            complaint.id(),
            ComplaintStatus::Pending,
            ComplaintStatus::Resolved,
            Utc::now(),
        )
        .await?
        .ok_or("transition from pending should apply")?;

    let assigned = ctx
        .repository
        .assign_workers_if_unassigned(complaint.id(), &workers(&["WT01"])?, Utc::now())
        .await?
        .ok_or("first assignment should apply")?;
    let repeated = ctx
        .repository
        .assign_workers_if_unassigned(complaint.id(), &workers(&["WT02"])?, Utc::now())
        .await?;

    assert_eq!(assigned.status(), ComplaintStatus::Resolved);
    assert_eq!(assigned.assigned_workers().len(), 1);
    assert!(repeated.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_transition_requires_the_expected_current_status(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let complaint = routed(ComplaintType::Electricity, "EC3001")?;
    ctx.repository.store(&complaint).await?;

    let stale = ctx
        .repository
        .transition_status(
            complaint.id(),
            ComplaintStatus::InProgress,
            ComplaintStatus::Resolved,
            Utc::now(),
        )
        .await?;
    let stored = ctx
        .repository
        .find_by_id(complaint.id())
        .await?
        .ok_or("complaint should still exist")?;

    assert!(stale.is_none());
    assert_eq!(stored.status(), ComplaintStatus::Pending);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_answers_from_two_workers_are_both_kept(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let complaint = routed(ComplaintType::Waste, "WS4001")?;
    ctx.repository.store(&complaint).await?;
    ctx.repository
        .assign_workers_if_unassigned(complaint.id(), &workers(&["WS01", "WS02"])?, Utc::now())
        .await?;
    let first_worker = WorkerId::new("WS01")?;
    let second_worker = WorkerId::new("WS02")?;

    let (first, second) = tokio::join!(
        ctx.repository.record_worker_response(
            complaint.id(),
            &first_worker,
            AssignmentStatus::Accepted,
            Utc::now(),
        ),
        ctx.repository.record_worker_response(
            complaint.id(),
            &second_worker,
            AssignmentStatus::Rejected,
            Utc::now(),
        ),
    );
    assert!(first?.is_some());
    assert!(second?.is_some());

    let stored = ctx
        .repository
        .find_by_id(complaint.id())
        .await?
        .ok_or("complaint should still exist")?;
    let answers: Vec<(&str, AssignmentStatus)> = stored
        .assigned_workers()
        .iter()
        .map(|entry| (entry.worker_id().as_str(), entry.status()))
        .collect();
    assert_eq!(
        answers,
        vec![
            ("WS01", AssignmentStatus::Accepted),
            ("WS02", AssignmentStatus::Rejected),
        ]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn answered_assignment_cannot_be_answered_again(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let complaint = routed(ComplaintType::Waste, "WS4002")?;
    ctx.repository.store(&complaint).await?;
    ctx.repository
        .assign_workers_if_unassigned(complaint.id(), &workers(&["WS01"])?, Utc::now())
        .await?;
    let worker = WorkerId::new("WS01")?;
    let stranger = WorkerId::new("WS99")?;

    let accepted = ctx
        .repository
        .record_worker_response(complaint.id(), &worker, AssignmentStatus::Accepted, Utc::now())
        .await?;
    let flipped = ctx
        .repository
        .record_worker_response(complaint.id(), &worker, AssignmentStatus::Rejected, Utc::now())
        .await?;
    let unassigned = ctx
        .repository
        .record_worker_response(complaint.id(), &stranger, AssignmentStatus::Accepted, Utc::now())
        .await?;

    assert!(accepted.is_some());
    assert!(flipped.is_none());
    assert!(unassigned.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_order_newest_first(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let first = routed(ComplaintType::Road, "RD5001")?;
    let second = routed(ComplaintType::Water, "WT5002")?;
    let third = routed(ComplaintType::Other, "OT5003")?;
    store_spaced(&ctx, &[&first, &second, &third]).await?;
    for complaint in [&third, &first] {
        ctx.repository
            .transition_status(
                complaint.id(),
                ComplaintStatus::Pending,
                ComplaintStatus::Resolved,
                Utc::now(),
            )
            .await?;
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let everything = ctx.repository.list_all(None).await?;
    let newest_two = ctx.repository.list_all(Some(2)).await?;
    let resolved = ctx
        .repository
        .list_by_status(ComplaintStatus::Resolved, 10)
        .await?;

    assert_eq!(ids(&everything), vec![third.id(), second.id(), first.id()]);
    assert_eq!(ids(&newest_two), vec![third.id(), second.id()]);
    assert_eq!(ids(&resolved), vec![first.id(), third.id()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_stored_category_is_a_persistence_error(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let complaint = routed(ComplaintType::Road, "RD6001")?;
    ctx.repository.store(&complaint).await?;
    execute_sql(
        &ctx.pool,
        format!(
            "UPDATE complaints SET complaint_type = 'Noise' WHERE id = '{}'",
            complaint.id()
        ),
    )
    .await?;

    let result = ctx.repository.find_by_id(complaint.id()).await;

    assert!(
        matches!(result, Err(ComplaintRepositoryError::Persistence(ref err))
            if err.to_string().contains("Noise")),
        "expected a persistence error, got {result:?}"
    );
    Ok(())
}
