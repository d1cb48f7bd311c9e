//! Persistence ports for NGOs and community events.

use crate::community::domain::{CommunityEvent, Ngo};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for community repository operations.
pub type CommunityRepositoryResult<T> = Result<T, CommunityRepositoryError>;

/// NGO directory persistence contract.
#[async_trait]
pub trait NgoRepository: Send + Sync {
    /// Returns every NGO in insertion order.
    async fn list(&self) -> CommunityRepositoryResult<Vec<Ngo>>;

    /// Adds an NGO.
    ///
    /// # Errors
    ///
    /// Returns [`CommunityRepositoryError::Duplicate`] when an NGO with the
    /// same identifier exists.
    async fn insert(&self, ngo: &Ngo) -> CommunityRepositoryResult<()>;

    /// Inserts `ngos` only when the directory is empty.
    ///
    /// The emptiness check and the insert happen atomically. Returns whether
    /// the directory was seeded.
    async fn seed_if_empty(&self, ngos: &[Ngo]) -> CommunityRepositoryResult<bool>;
}

/// Community event persistence contract.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Returns events sorted by date, earliest first.
    ///
    /// With `city`, only events whose city contains it, ignoring case, are
    /// returned.
    async fn list(&self, city: Option<&str>) -> CommunityRepositoryResult<Vec<CommunityEvent>>;

    /// Adds events.
    ///
    /// # Errors
    ///
    /// Returns [`CommunityRepositoryError::Duplicate`] when any event
    /// identifier already exists; nothing is inserted in that case.
    async fn insert_many(&self, events: &[CommunityEvent]) -> CommunityRepositoryResult<()>;
}

/// Errors returned by community repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CommunityRepositoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate community record: {0}")]
    Duplicate(String),

    /// Persistence failure.
    #[error("community persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CommunityRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
