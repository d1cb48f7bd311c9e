//! In-memory event listings.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::community::{
    domain::CommunityEvent,
    ports::{CommunityRepositoryError, CommunityRepositoryResult, EventRepository},
};

/// Thread-safe in-memory event repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<Vec<CommunityEvent>>>,
}

impl InMemoryEventRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn list(&self, city: Option<&str>) -> CommunityRepositoryResult<Vec<CommunityEvent>> {
        let needle = city.map(str::trim).filter(|c| !c.is_empty()).map(str::to_lowercase);
        let events = self.events.read().map_err(lock_error)?;
        let mut matched: Vec<CommunityEvent> = events
            .iter()
            .filter(|event| needle.as_deref().is_none_or(|n| event.is_in_city(n)))
            .cloned()
            .collect();
        matched.sort_by_key(CommunityEvent::date);
        Ok(matched)
    }

    async fn insert_many(&self, incoming: &[CommunityEvent]) -> CommunityRepositoryResult<()> {
        let mut events = self.events.write().map_err(lock_error)?;
        let mut seen: HashSet<_> = events.iter().map(CommunityEvent::id).collect();
        if let Some(duplicate) = incoming.iter().find(|event| !seen.insert(event.id())) {
            return Err(CommunityRepositoryError::Duplicate(duplicate.id().to_string()));
        }
        events.extend_from_slice(incoming);
        Ok(())
    }
}
