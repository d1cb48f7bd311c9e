//! Lost-and-found report aggregate and search filter.

use super::{LostFoundDomainError, ParseReportKindError, StationId};
use crate::complaint::domain::GeoPoint;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Storage identity of a lost-and-found report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(Uuid);

impl ReportId {
    /// Creates a new random report identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether an item was lost or found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    /// The reporter lost the item.
    Lost,
    /// The reporter found the item and handed it to a police station.
    Found,
}

impl ReportKind {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lost => "Lost",
            Self::Found => "Found",
        }
    }
}

impl TryFrom<&str> for ReportKind {
    type Error = ParseReportKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lost" => Ok(Self::Lost),
            "found" => Ok(Self::Found),
            _ => Err(ParseReportKindError(value.to_owned())),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated report input gathered from the reporter.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSubmission {
    kind: ReportKind,
    item_name: String,
    reporter_name: String,
    reporter_email: String,
    description: String,
    image: Option<String>,
    location: Option<GeoPoint>,
    address: String,
    police_station_id: Option<StationId>,
}

impl ReportSubmission {
    /// Starts a submission for the named item.
    #[must_use]
    pub fn new(kind: ReportKind, item_name: impl Into<String>) -> Self {
        Self {
            kind,
            item_name: item_name.into(),
            reporter_name: String::new(),
            reporter_email: String::new(),
            description: String::new(),
            image: None,
            location: None,
            address: String::new(),
            police_station_id: None,
        }
    }

    /// Sets the reporter's name and email.
    #[must_use]
    pub fn with_reporter(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.reporter_name = name.into().trim().to_owned();
        self.reporter_email = email.into().trim().to_owned();
        self
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
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

    /// Sets the coordinates where the item was lost or found.
    #[must_use]
    pub const fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the free-text address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into().trim().to_owned();
        self
    }

    /// Names the police station holding a found item.
    #[must_use]
    pub fn with_police_station(mut self, station_id: StationId) -> Self {
        self.police_station_id = Some(station_id);
        self
    }

    /// Returns the report kind.
    #[must_use]
    pub const fn kind(&self) -> ReportKind {
        self.kind
    }

    /// Returns the station a found report must be verified against.
    ///
    /// Lost reports never require a station, even when one is named.
    ///
    /// # Errors
    ///
    /// Returns [`LostFoundDomainError::MissingPoliceStation`] for a found
    /// report without a station.
    pub fn station_to_verify(&self) -> Result<Option<&StationId>, LostFoundDomainError> {
        match (self.kind, self.police_station_id.as_ref()) {
            (ReportKind::Lost, _) => Ok(None),
            (ReportKind::Found, Some(station_id)) => Ok(Some(station_id)),
            (ReportKind::Found, None) => Err(LostFoundDomainError::MissingPoliceStation),
        }
    }
}

/// A filed lost-and-found report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LostFoundReport {
    id: ReportId,
    #[serde(rename = "type")]
    kind: ReportKind,
    item_name: String,
    reporter_name: String,
    reporter_email: String,
    description: String,
    image: Option<String>,
    location: Option<GeoPoint>,
    address: String,
    police_station_id: Option<StationId>,
    reported_at: DateTime<Utc>,
}

impl LostFoundReport {
    /// Files a submission, stamping it with the current time.
    ///
    /// Station verification is the caller's job; this only enforces that a
    /// found report names a station.
    ///
    /// # Errors
    ///
    /// Returns [`LostFoundDomainError::EmptyItemName`] for a blank item name
    /// or [`LostFoundDomainError::MissingPoliceStation`] for a found report
    /// without a station.
    pub fn file(
        submission: ReportSubmission,
        clock: &impl Clock,
    ) -> Result<Self, LostFoundDomainError> {
        submission.station_to_verify()?;
        let item_name = submission.item_name.trim();
        if item_name.is_empty() {
            return Err(LostFoundDomainError::EmptyItemName);
        }
        Ok(Self {
            id: ReportId::new(),
            kind: submission.kind,
            item_name: item_name.to_owned(),
            reporter_name: submission.reporter_name,
            reporter_email: submission.reporter_email,
            description: submission.description,
            image: submission.image,
            location: submission.location,
            address: submission.address,
            police_station_id: submission.police_station_id,
            reported_at: clock.utc(),
        })
    }

    /// Returns the report identifier.
    #[must_use]
    pub const fn id(&self) -> ReportId {
        self.id
    }

    /// Returns whether the item was lost or found.
    #[must_use]
    pub const fn kind(&self) -> ReportKind {
        self.kind
    }

    /// Returns the item name.
    #[must_use]
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Returns the reporter's name.
    #[must_use]
    pub fn reporter_name(&self) -> &str {
        &self.reporter_name
    }

    /// Returns the reporter's email.
    #[must_use]
    pub fn reporter_email(&self) -> &str {
        &self.reporter_email
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the image reference, if any.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Returns the coordinates, if any.
    #[must_use]
    pub const fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    /// Returns the address; empty when none was given.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the police station holding the item, if any.
    #[must_use]
    pub const fn police_station_id(&self) -> Option<&StationId> {
        self.police_station_id.as_ref()
    }

    /// Returns when the report was filed.
    #[must_use]
    pub const fn reported_at(&self) -> DateTime<Utc> {
        self.reported_at
    }
}

/// Search criteria for lost-and-found reports.
///
/// An empty filter matches every report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    kind: Option<ReportKind>,
    city: Option<String>,
}

impl ReportFilter {
    /// Restricts results to one report kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: ReportKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restricts results to addresses containing `city`, ignoring case.
    /// Blank values leave the filter unrestricted.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        let raw = city.into();
        let trimmed = raw.trim();
        self.city = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        self
    }

    /// Returns whether the report satisfies every criterion.
    #[must_use]
    pub fn matches(&self, report: &LostFoundReport) -> bool {
        let kind_matches = self.kind.is_none_or(|kind| kind == report.kind);
        let city_matches = self
            .city
            .as_deref()
            .is_none_or(|city| report.address.to_lowercase().contains(city));
        kind_matches && city_matches
    }
}
