//! In-memory NGO directory.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::community::{
    domain::Ngo,
    ports::{CommunityRepositoryError, CommunityRepositoryResult, NgoRepository},
};

/// Thread-safe in-memory NGO directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNgoRepository {
    ngos: Arc<RwLock<Vec<Ngo>>>,
}

impl InMemoryNgoRepository {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NgoRepository for InMemoryNgoRepository {
    async fn list(&self) -> CommunityRepositoryResult<Vec<Ngo>> {
        let ngos = self.ngos.read().map_err(lock_error)?;
        Ok(ngos.clone())
    }

    async fn insert(&self, ngo: &Ngo) -> CommunityRepositoryResult<()> {
        let mut ngos = self.ngos.write().map_err(lock_error)?;
        if ngos.iter().any(|existing| existing.id() == ngo.id()) {
            return Err(CommunityRepositoryError::Duplicate(ngo.id().to_string()));
        }
        ngos.push(ngo.clone());
        Ok(())
    }

    async fn seed_if_empty(&self, seed: &[Ngo]) -> CommunityRepositoryResult<bool> {
        let mut ngos = self.ngos.write().map_err(lock_error)?;
        if !ngos.is_empty() {
            return Ok(false);
        }
        ngos.extend_from_slice(seed);
        Ok(true)
    }
}
