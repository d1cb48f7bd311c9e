//! In-memory report repository.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::sync::{Arc, RwLock};

use crate::lost_found::{
    domain::{LostFoundReport, ReportFilter},
    ports::{LostFoundRepository, LostFoundRepositoryError, LostFoundRepositoryResult},
};

/// Thread-safe in-memory report repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLostFoundRepository {
    reports: Arc<RwLock<Vec<LostFoundReport>>>,
}

impl InMemoryLostFoundRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> LostFoundRepositoryError {
    LostFoundRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl LostFoundRepository for InMemoryLostFoundRepository {
    async fn store(&self, report: &LostFoundReport) -> LostFoundRepositoryResult<()> {
        let mut reports = self.reports.write().map_err(lock_error)?;
        if reports.iter().any(|existing| existing.id() == report.id()) {
            return Err(LostFoundRepositoryError::DuplicateReport(report.id()));
        }
        reports.push(report.clone());
        Ok(())
    }

    async fn search(
        &self,
        filter: &ReportFilter,
    ) -> LostFoundRepositoryResult<Vec<LostFoundReport>> {
        let reports = self.reports.read().map_err(lock_error)?;
        let mut matched: Vec<LostFoundReport> = reports
            .iter()
            .filter(|report| filter.matches(report))
            .cloned()
            .collect();
        matched.sort_by_key(|report| Reverse(report.reported_at()));
        Ok(matched)
    }
}
