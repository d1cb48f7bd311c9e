//! In-memory worker directory.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::complaint::{
    domain::{OrderPrefix, WorkerId},
    ports::{WorkerDirectory, WorkerDirectoryError, WorkerDirectoryResult},
};

/// Worker directory that keeps identifiers in registration order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkerDirectory {
    workers: Arc<RwLock<Vec<WorkerId>>>,
}

impl InMemoryWorkerDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory pre-populated with the given workers.
    #[must_use]
    pub fn with_workers(workers: impl IntoIterator<Item = WorkerId>) -> Self {
        Self {
            workers: Arc::new(RwLock::new(workers.into_iter().collect())),
        }
    }

    /// Registers a worker; duplicates are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerDirectoryError::Unavailable`] when the lock is
    /// poisoned.
    pub fn register(&self, worker_id: WorkerId) -> WorkerDirectoryResult<()> {
        let mut workers = self
            .workers
            .write()
            .map_err(|err| WorkerDirectoryError::Unavailable(err.to_string()))?;
        if !workers.contains(&worker_id) {
            workers.push(worker_id);
        }
        Ok(())
    }
}

#[async_trait]
impl WorkerDirectory for InMemoryWorkerDirectory {
    async fn find_by_prefix(&self, prefix: OrderPrefix) -> WorkerDirectoryResult<Vec<WorkerId>> {
        let workers = self
            .workers
            .read()
            .map_err(|err| WorkerDirectoryError::Unavailable(err.to_string()))?;
        Ok(workers
            .iter()
            .filter(|worker_id| worker_id.has_prefix(prefix))
            .cloned()
            .collect())
    }
}
