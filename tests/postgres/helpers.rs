//! Shared test helpers for `PostgreSQL` integration tests.

use super::cluster::{BoxError, PostgresCluster, TemporaryDatabase, cluster_required};
pub use super::cluster::postgres_cluster;
use chrono::{DateTime, Duration, TimeZone, Utc};
use civicdesk::complaint::{
    adapters::postgres::{ComplaintPgPool, PostgresComplaintRepository, PostgresWorkerDirectory},
    domain::{
        ComplainantContact, Complaint, ComplaintSubmission, ComplaintType, OrderId,
        RoutingDecision, department_for,
    },
};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_types::{Text, Timestamptz};
use mockable::DefaultClock;
use rstest::fixture;
use uuid::Uuid;

/// SQL creating the complaint and worker tables.
const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_complaints/up.sql");

/// Template database name for the pre-migrated schema.
const TEMPLATE_DB: &str = "civicdesk_test_template";

/// Adapters bound to a throwaway database.
///
/// Fields drop in declaration order, so the pools close before the
/// database guard runs.
pub struct PgContext {
    /// Complaint repository under test.
    pub repository: PostgresComplaintRepository,
    /// Worker directory under test.
    pub directory: PostgresWorkerDirectory,
    /// Pool for seeding and tampering with rows directly.
    pub pool: ComplaintPgPool,
    _temp_db: TemporaryDatabase,
}

fn apply_schema(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url)?;
    conn.batch_execute(CREATE_SCHEMA_SQL)?;
    Ok(())
}

async fn setup_context(cluster: PostgresCluster) -> Result<PgContext, BoxError> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, apply_schema)
        .await?;
    let temp_db = cluster
        .temporary_database_from_template(&format!("test_{}", Uuid::new_v4().simple()), TEMPLATE_DB)
        .await?;
    let manager = ConnectionManager::<PgConnection>::new(temp_db.url());
    let pool: ComplaintPgPool = Pool::builder().max_size(4).build(manager)?;
    Ok(PgContext {
        repository: PostgresComplaintRepository::new(pool.clone()),
        directory: PostgresWorkerDirectory::new(pool.clone()),
        pool,
        _temp_db: temp_db,
    })
}

/// Fresh database context, or `None` when no cluster is available and the
/// suite is not required to run.
#[fixture]
pub async fn context(
    postgres_cluster: Result<PostgresCluster, BoxError>,
) -> Result<Option<PgContext>, BoxError> {
    match postgres_cluster {
        Ok(cluster) => setup_context(cluster).await.map(Some),
        Err(err) if !cluster_required() => {
            tracing::warn!(error = %err, "SKIP-TEST-CLUSTER: embedded PostgreSQL unavailable");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Builds a pending complaint routed under `order_id`.
///
/// # Errors
///
/// Returns an error when the order identifier is malformed.
pub fn routed(complaint_type: ComplaintType, order_id: &str) -> Result<Complaint, BoxError> {
    let contact = ComplainantContact::new("Harleen", "harleen@example.com")?;
    let submission = ComplaintSubmission::new(contact, complaint_type, "Needs attention")
        .with_address("Civil Lines, Ludhiana, Punjab");
    let mut complaint = Complaint::new(submission, &DefaultClock);
    complaint.apply_routing(RoutingDecision::new(
        OrderId::parse(order_id)?,
        department_for(complaint_type, Some("Ludhiana")),
    ));
    Ok(complaint)
}

/// Registration time `seconds` after a fixed epoch.
#[must_use]
pub fn registered_at(seconds: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
        + Duration::seconds(seconds)
}

/// Inserts worker rows with explicit registration times.
///
/// # Errors
///
/// Returns an error if the connection or an insert fails.
pub async fn insert_workers(
    pool: &ComplaintPgPool,
    rows: &[(&str, DateTime<Utc>)],
) -> Result<(), BoxError> {
    let owned_pool = pool.clone();
    let owned_rows: Vec<(String, DateTime<Utc>)> = rows
        .iter()
        .map(|(id, created_at)| ((*id).to_owned(), *created_at))
        .collect();
    tokio::task::spawn_blocking(move || -> Result<(), BoxError> {
        let mut conn = owned_pool.get()?;
        for (worker_id, created_at) in owned_rows {
            diesel::sql_query("INSERT INTO workers (worker_id, created_at) VALUES ($1, $2)")
                .bind::<Text, _>(worker_id)
                .bind::<Timestamptz, _>(created_at)
                .execute(&mut conn)?;
        }
        Ok(())
    })
    .await?
}

/// Runs raw SQL against the test database.
///
/// # Errors
///
/// Returns an error if the connection or statement fails.
pub async fn execute_sql(pool: &ComplaintPgPool, sql: String) -> Result<(), BoxError> {
    let owned_pool = pool.clone();
    tokio::task::spawn_blocking(move || -> Result<(), BoxError> {
        let mut conn = owned_pool.get()?;
        conn.batch_execute(&sql)?;
        Ok(())
    })
    .await?
}
