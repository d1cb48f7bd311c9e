//! `PostgreSQL` worker directory lookup.

use super::{repository::ComplaintPgPool, schema::workers};
use crate::complaint::{
    domain::{OrderPrefix, WorkerId},
    ports::{WorkerDirectory, WorkerDirectoryError, WorkerDirectoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;

/// Worker directory backed by the `workers` table.
#[derive(Debug, Clone)]
pub struct PostgresWorkerDirectory {
    pool: ComplaintPgPool,
}

impl PostgresWorkerDirectory {
    /// Creates a directory from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ComplaintPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkerDirectory for PostgresWorkerDirectory {
    async fn find_by_prefix(&self, prefix: OrderPrefix) -> WorkerDirectoryResult<Vec<WorkerId>> {
        let pool = self.pool.clone();
        // Prefixes are fixed upper-case letters, so no LIKE escaping is needed.
        let pattern = format!("{prefix}%");

        let identifiers = tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(|err| WorkerDirectoryError::Unavailable(err.to_string()))?;
            workers::table
                .filter(workers::worker_id.like(pattern))
                .order((workers::created_at.asc(), workers::worker_id.asc()))
                .select(workers::worker_id)
                .load::<String>(&mut connection)
                .map_err(WorkerDirectoryError::query)
        })
        .await
        .map_err(WorkerDirectoryError::query)??;

        identifiers
            .into_iter()
            .map(|raw| WorkerId::new(raw).map_err(WorkerDirectoryError::query))
            .collect()
    }
}
