//! `PostgreSQL` repository implementation for complaint storage.

use super::{
    models::{ComplaintRow, NewComplaintRow},
    schema::complaints,
};
use crate::complaint::{
    domain::{
        AssignmentStatus, ComplainantContact, Complaint, ComplaintId, ComplaintStatus,
        ComplaintType, Department, GeoPoint, OrderId, PersistedComplaintData, WorkerAssignment,
        WorkerId,
    },
    ports::{ComplaintRepository, ComplaintRepositoryError, ComplaintRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::{Jsonb, Text, Timestamptz, Uuid as SqlUuid, Varchar};

/// Column list shared by the raw SQL queries that load [`ComplaintRow`]s.
macro_rules! complaint_columns {
    () => {
        concat!(
            "id, order_id, name, email, phone, description, complaint_type, status, ",
            "department, assigned_workers, address, location_lat, location_lng, ",
            "created_at, updated_at",
        )
    };
}

/// `PostgreSQL` connection pool type used by complaint adapters.
pub type ComplaintPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed complaint repository.
#[derive(Debug, Clone)]
pub struct PostgresComplaintRepository {
    pool: ComplaintPgPool,
}

impl PostgresComplaintRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ComplaintPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ComplaintRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ComplaintRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ComplaintRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ComplaintRepositoryError::persistence)?
    }
}

#[async_trait]
impl ComplaintRepository for PostgresComplaintRepository {
    async fn store(&self, complaint: &Complaint) -> ComplaintRepositoryResult<()> {
        let complaint_id = complaint.id();
        let order_id = complaint
            .order_id()
            .cloned()
            .ok_or(ComplaintRepositoryError::Unrouted(complaint_id))?;
        let new_row = to_new_row(complaint, &order_id)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(complaints::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_order_id_unique_violation(info.as_ref()) =>
                    {
                        ComplaintRepositoryError::DuplicateOrderId(order_id.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ComplaintRepositoryError::DuplicateComplaint(complaint_id)
                    }
                    _ => ComplaintRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn assign_workers_if_unassigned(
        &self,
        id: ComplaintId,
        workers: &[WorkerId],
        changed_at: DateTime<Utc>,
    ) -> ComplaintRepositoryResult<Option<Complaint>> {
        if workers.is_empty() {
            return Ok(None);
        }
        let assignments: Vec<WorkerAssignment> =
            workers.iter().cloned().map(WorkerAssignment::pending).collect();
        let assigned_workers =
            serde_json::to_value(assignments).map_err(ComplaintRepositoryError::persistence)?;

        self.run_blocking(move |connection| {
            let row = diesel::sql_query(concat!(
                "UPDATE complaints SET assigned_workers = $1, ",
                "updated_at = GREATEST(updated_at, $2) ",
                "WHERE id = $3 AND assigned_workers = '[]'::jsonb ",
                "RETURNING ",
                complaint_columns!(),
            ))
            .bind::<Jsonb, _>(assigned_workers)
            .bind::<Timestamptz, _>(changed_at)
            .bind::<SqlUuid, _>(id.into_inner())
            .get_result::<ComplaintRow>(connection)
            .optional()
            .map_err(ComplaintRepositoryError::persistence)?;
            row.map(row_to_complaint).transpose()
        })
        .await
    }

    async fn transition_status(
        &self,
        id: ComplaintId,
        from: ComplaintStatus,
        to: ComplaintStatus,
        changed_at: DateTime<Utc>,
    ) -> ComplaintRepositoryResult<Option<Complaint>> {
        self.run_blocking(move |connection| {
            let row = diesel::sql_query(concat!(
                "UPDATE complaints SET status = $1, updated_at = GREATEST(updated_at, $2) ",
                "WHERE id = $3 AND status = $4 ",
                "RETURNING ",
                complaint_columns!(),
            ))
            .bind::<Varchar, _>(to.as_str())
            .bind::<Timestamptz, _>(changed_at)
            .bind::<SqlUuid, _>(id.into_inner())
            .bind::<Varchar, _>(from.as_str())
            .get_result::<ComplaintRow>(connection)
            .optional()
            .map_err(ComplaintRepositoryError::persistence)?;
            row.map(row_to_complaint).transpose()
        })
        .await
    }

    async fn record_worker_response(
        &self,
        id: ComplaintId,
        worker_id: &WorkerId,
        response: AssignmentStatus,
        changed_at: DateTime<Utc>,
    ) -> ComplaintRepositoryResult<Option<Complaint>> {
        if response == AssignmentStatus::Pending {
            return Ok(None);
        }
        let worker = worker_id.as_str().to_owned();

        // The containment guard and the element rewrite run in one statement,
        // so two workers answering at once both keep their entries.
        self.run_blocking(move |connection| {
            let row = diesel::sql_query(concat!(
                "UPDATE complaints SET assigned_workers = (",
                "SELECT jsonb_agg(CASE WHEN entry->>'workerId' = $1 ",
                "THEN jsonb_set(entry, '{status}', to_jsonb($2::text)) ",
                "ELSE entry END ORDER BY position) ",
                "FROM jsonb_array_elements(assigned_workers) ",
                "WITH ORDINALITY AS entries(entry, position)), ",
                "updated_at = GREATEST(updated_at, $3) ",
                "WHERE id = $4 AND assigned_workers @> jsonb_build_array(",
                "jsonb_build_object('workerId', $1::text, 'status', 'pending')) ",
                "RETURNING ",
                complaint_columns!(),
            ))
            .bind::<Text, _>(worker)
            .bind::<Text, _>(response.as_str())
            .bind::<Timestamptz, _>(changed_at)
            .bind::<SqlUuid, _>(id.into_inner())
            .get_result::<ComplaintRow>(connection)
            .optional()
            .map_err(ComplaintRepositoryError::persistence)?;
            row.map(row_to_complaint).transpose()
        })
        .await
    }

    async fn find_by_id(&self, id: ComplaintId) -> ComplaintRepositoryResult<Option<Complaint>> {
        self.run_blocking(move |connection| {
            let row = complaints::table
                .filter(complaints::id.eq(id.into_inner()))
                .select(ComplaintRow::as_select())
                .first::<ComplaintRow>(connection)
                .optional()
                .map_err(ComplaintRepositoryError::persistence)?;
            row.map(row_to_complaint).transpose()
        })
        .await
    }

    async fn find_by_order_id(
        &self,
        order_id: &OrderId,
    ) -> ComplaintRepositoryResult<Option<Complaint>> {
        let lookup = order_id.to_string();
        self.run_blocking(move |connection| {
            let row = complaints::table
                .filter(complaints::order_id.eq(lookup))
                .select(ComplaintRow::as_select())
                .first::<ComplaintRow>(connection)
                .optional()
                .map_err(ComplaintRepositoryError::persistence)?;
            row.map(row_to_complaint).transpose()
        })
        .await
    }

    async fn list_by_status(
        &self,
        status: ComplaintStatus,
        limit: usize,
    ) -> ComplaintRepositoryResult<Vec<Complaint>> {
        let row_limit = i64::try_from(limit).map_err(ComplaintRepositoryError::persistence)?;
        self.run_blocking(move |connection| {
            let rows = complaints::table
                .filter(complaints::status.eq(status.as_str()))
                .order(complaints::updated_at.desc())
                .limit(row_limit)
                .select(ComplaintRow::as_select())
                .load::<ComplaintRow>(connection)
                .map_err(ComplaintRepositoryError::persistence)?;
            rows.into_iter().map(row_to_complaint).collect()
        })
        .await
    }

    async fn list_all(&self, limit: Option<usize>) -> ComplaintRepositoryResult<Vec<Complaint>> {
        let row_limit = limit
            .map(i64::try_from)
            .transpose()
            .map_err(ComplaintRepositoryError::persistence)?
            .unwrap_or(i64::MAX);
        self.run_blocking(move |connection| {
            let rows = complaints::table
                .order((complaints::created_at.desc(), complaints::id.desc()))
                .limit(row_limit)
                .select(ComplaintRow::as_select())
                .load::<ComplaintRow>(connection)
                .map_err(ComplaintRepositoryError::persistence)?;
            rows.into_iter().map(row_to_complaint).collect()
        })
        .await
    }

    async fn find_by_worker(
        &self,
        worker_id: &WorkerId,
    ) -> ComplaintRepositoryResult<Vec<Complaint>> {
        let containment = serde_json::json!([{ "workerId": worker_id.as_str() }]);
        self.run_blocking(move |connection| {
            let rows = diesel::sql_query(concat!(
                "SELECT ",
                complaint_columns!(),
                " FROM complaints ",
                "WHERE assigned_workers @> $1 ",
                "ORDER BY created_at ASC",
            ))
            .bind::<Jsonb, _>(containment)
            .load::<ComplaintRow>(connection)
            .map_err(ComplaintRepositoryError::persistence)?;
            rows.into_iter().map(row_to_complaint).collect()
        })
        .await
    }
}

pub(super) fn to_new_row(
    complaint: &Complaint,
    order_id: &OrderId,
) -> ComplaintRepositoryResult<NewComplaintRow> {
    let assigned_workers = serde_json::to_value(complaint.assigned_workers())
        .map_err(ComplaintRepositoryError::persistence)?;
    let contact = complaint.contact();

    Ok(NewComplaintRow {
        id: complaint.id().into_inner(),
        order_id: order_id.to_string(),
        name: contact.name().to_owned(),
        email: contact.email().to_owned(),
        phone: contact.phone().map(str::to_owned),
        description: complaint.description().to_owned(),
        complaint_type: complaint.complaint_type().as_str().to_owned(),
        status: complaint.status().as_str().to_owned(),
        department: complaint.department().map(|dept| dept.as_str().to_owned()),
        assigned_workers,
        address: complaint.address().map(str::to_owned),
        location_lat: complaint.location().map(GeoPoint::lat),
        location_lng: complaint.location().map(GeoPoint::lng),
        created_at: complaint.created_at(),
        updated_at: complaint.updated_at(),
    })
}

pub(super) fn row_to_complaint(row: ComplaintRow) -> ComplaintRepositoryResult<Complaint> {
    let ComplaintRow {
        id,
        order_id,
        name,
        email,
        phone,
        description,
        complaint_type,
        status,
        department,
        assigned_workers,
        address,
        location_lat,
        location_lng,
        created_at,
        updated_at,
    } = row;

    let mut contact =
        ComplainantContact::new(name, email).map_err(ComplaintRepositoryError::persistence)?;
    if let Some(number) = phone {
        contact = contact.with_phone(number);
    }
    let location = match (location_lat, location_lng) {
        (Some(lat), Some(lng)) => {
            Some(GeoPoint::new(lat, lng).map_err(ComplaintRepositoryError::persistence)?)
        }
        _ => None,
    };
    let department = department
        .map(Department::new)
        .transpose()
        .map_err(ComplaintRepositoryError::persistence)?;
    let assigned_workers = serde_json::from_value::<Vec<WorkerAssignment>>(assigned_workers)
        .map_err(ComplaintRepositoryError::persistence)?;

    let data = PersistedComplaintData {
        id: ComplaintId::from_uuid(id),
        order_id: Some(OrderId::parse(&order_id).map_err(ComplaintRepositoryError::persistence)?),
        contact,
        description,
        complaint_type: ComplaintType::try_from(complaint_type.as_str())
            .map_err(ComplaintRepositoryError::persistence)?,
        status: ComplaintStatus::try_from(status.as_str())
            .map_err(ComplaintRepositoryError::persistence)?,
        department,
        assigned_workers,
        address,
        location,
        created_at,
        updated_at,
    };
    Ok(Complaint::from_persisted(data))
}

fn is_order_id_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_complaints_order_id_unique")
}
