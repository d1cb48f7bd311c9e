//! Owning department labels.

use super::ComplaintDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Organisational unit responsible for resolving a complaint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Department(String);

impl Department {
    /// City token used when no city can be read from the address.
    pub const UNKNOWN_CITY: &'static str = "Unknown";

    /// Creates a department from a free-text label.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintDomainError::EmptyDepartment`] when the label is
    /// blank.
    pub fn new(label: impl Into<String>) -> Result<Self, ComplaintDomainError> {
        let raw = label.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ComplaintDomainError::EmptyDepartment);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub(crate) fn fixed(label: &'static str) -> Self {
        Self(label.to_owned())
    }

    /// Builds the city NGO department, `NGO<City>` with whitespace removed.
    ///
    /// A missing or blank city yields `NGOUnknown`.
    #[must_use]
    pub fn ngo_for_city(city: Option<&str>) -> Self {
        let token: String = city
            .map(|raw| raw.chars().filter(|ch| !ch.is_whitespace()).collect::<String>())
            .filter(|compact| !compact.is_empty())
            .unwrap_or_else(|| Self::UNKNOWN_CITY.to_owned());
        Self(format!("NGO{token}"))
    }

    /// Returns the label as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
