//! `PostgreSQL` integration tests for the worker directory prefix lookup.

use crate::postgres::cluster::BoxError;
use crate::postgres::helpers::{PgContext, context, insert_workers, registered_at};
use civicdesk::complaint::{
    domain::{OrderPrefix, WorkerId},
    ports::WorkerDirectory,
};
use rstest::rstest;

fn raw(identifiers: &[WorkerId]) -> Vec<&str> {
    identifiers.iter().map(WorkerId::as_str).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn prefix_lookup_orders_by_registration_then_identifier(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    insert_workers(
        &ctx.pool,
        &[
            ("RD300", registered_at(30)),
            ("RD200", registered_at(10)),
            ("RD100", registered_at(10)),
            ("WT100", registered_at(0)),
            ("RDX", registered_at(20)),
        ],
    )
    .await?;

    let found = ctx.directory.find_by_prefix(OrderPrefix::Rd).await?;

    assert_eq!(raw(&found), vec!["RD100", "RD200", "RDX", "RD300"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn prefix_lookup_is_case_sensitive(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    insert_workers(
        &ctx.pool,
        &[("rd001", registered_at(0)), ("xRD002", registered_at(1)), ("RD003", registered_at(2))],
    )
    .await?;

    let found = ctx.directory.find_by_prefix(OrderPrefix::Rd).await?;

    assert_eq!(raw(&found), vec!["RD003"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn prefix_without_workers_returns_empty(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    insert_workers(&ctx.pool, &[("EC001", registered_at(0))]).await?;

    let found = ctx.directory.find_by_prefix(OrderPrefix::Sd).await?;

    assert!(found.is_empty());
    Ok(())
}
