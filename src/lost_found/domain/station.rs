//! Police station records used to verify found reports.

use super::LostFoundDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Public identifier of a police station, for example `PS-DEL-001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Creates a station identifier from trimmed input.
    ///
    /// # Errors
    ///
    /// Returns [`LostFoundDomainError::EmptyStationId`] for blank input.
    pub fn new(value: impl Into<String>) -> Result<Self, LostFoundDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LostFoundDomainError::EmptyStationId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = LostFoundDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StationId> for String {
    fn from(value: StationId) -> Self {
        value.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered police station.
///
/// Stations are verified on registration unless explicitly marked otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliceStation {
    station_id: StationId,
    name: String,
    district: String,
    city: String,
    contact_number: Option<String>,
    email: Option<String>,
    verified: bool,
}

fn required(field: &'static str, value: String) -> Result<String, LostFoundDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LostFoundDomainError::EmptyStationField(field));
    }
    Ok(trimmed.to_owned())
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl PoliceStation {
    /// Creates a verified station record.
    ///
    /// # Errors
    ///
    /// Returns [`LostFoundDomainError::EmptyStationField`] when the name,
    /// district or city is blank.
    pub fn new(
        station_id: StationId,
        name: impl Into<String>,
        district: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, LostFoundDomainError> {
        Ok(Self {
            station_id,
            name: required("name", name.into())?,
            district: required("district", district.into())?,
            city: required("city", city.into())?,
            contact_number: None,
            email: None,
            verified: true,
        })
    }

    /// Sets the contact number; blank values are ignored.
    #[must_use]
    pub fn with_contact_number(mut self, number: impl Into<String>) -> Self {
        self.contact_number = optional(number.into());
        self
    }

    /// Sets the contact email; blank values are ignored.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = optional(email.into());
        self
    }

    /// Marks the station as not yet verified.
    #[must_use]
    pub const fn unverified(mut self) -> Self {
        self.verified = false;
        self
    }

    /// Returns the station identifier.
    #[must_use]
    pub const fn station_id(&self) -> &StationId {
        &self.station_id
    }

    /// Returns the station name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the district.
    #[must_use]
    pub fn district(&self) -> &str {
        &self.district
    }

    /// Returns the city.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the contact number, if any.
    #[must_use]
    pub fn contact_number(&self) -> Option<&str> {
        self.contact_number.as_deref()
    }

    /// Returns the contact email, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns whether found items may be reported against this station.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.verified
    }
}
