//! Community event listings.

use super::{CommunityDomainError, error::required};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Storage identity of a community event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random event identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scheduled community event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityEvent {
    id: EventId,
    title: String,
    description: String,
    date: DateTime<Utc>,
    venue: String,
    city: String,
    organizer: String,
    image: Option<String>,
}

impl CommunityEvent {
    /// Creates an event with a title and date; other fields start empty.
    ///
    /// # Errors
    ///
    /// Returns [`CommunityDomainError::EmptyField`] when the title is blank.
    pub fn new(
        title: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Result<Self, CommunityDomainError> {
        Ok(Self {
            id: EventId::new(),
            title: required("title", title)?,
            description: String::new(),
            date,
            venue: String::new(),
            city: String::new(),
            organizer: String::new(),
            image: None,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the venue and city.
    #[must_use]
    pub fn at(mut self, venue: impl Into<String>, city: impl Into<String>) -> Self {
        self.venue = venue.into().trim().to_owned();
        self.city = city.into().trim().to_owned();
        self
    }

    /// Sets the organiser.
    #[must_use]
    pub fn with_organizer(mut self, organizer: impl Into<String>) -> Self {
        self.organizer = organizer.into().trim().to_owned();
        self
    }

    /// Sets an image reference; blank values are ignored.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        let raw = image.into();
        let trimmed = raw.trim();
        self.image = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Returns the event identifier.
    #[must_use]
    pub const fn id(&self) -> EventId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns when the event takes place.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Returns the venue.
    #[must_use]
    pub fn venue(&self) -> &str {
        &self.venue
    }

    /// Returns the city.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the organiser.
    #[must_use]
    pub fn organizer(&self) -> &str {
        &self.organizer
    }

    /// Returns the image reference, if any.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Returns whether the event city contains `needle`, ignoring case.
    ///
    /// `needle` must already be lower-case.
    #[must_use]
    pub fn is_in_city(&self, needle: &str) -> bool {
        self.city.to_lowercase().contains(needle)
    }
}
