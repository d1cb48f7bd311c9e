//! Validated complaint submission values.

use super::{ComplaintDomainError, ComplaintType};
use serde::{Deserialize, Serialize};

/// Contact details of the citizen filing a complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplainantContact {
    name: String,
    email: String,
    phone: Option<String>,
}

impl ComplainantContact {
    /// Creates contact details with the required name and email.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintDomainError::EmptyName`] for a blank name or
    /// [`ComplaintDomainError::InvalidEmail`] when the email lacks a local
    /// part or domain.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ComplaintDomainError> {
        let raw_name = name.into();
        let normalized_name = raw_name.trim();
        if normalized_name.is_empty() {
            return Err(ComplaintDomainError::EmptyName);
        }

        let raw_email = email.into();
        let normalized_email = raw_email.trim();
        let is_plausible = normalized_email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !is_plausible {
            return Err(ComplaintDomainError::InvalidEmail(raw_email));
        }

        Ok(Self {
            name: normalized_name.to_owned(),
            email: normalized_email.to_owned(),
            phone: None,
        })
    }

    /// Sets the optional phone number; blank values are ignored.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        let raw = phone.into();
        let trimmed = raw.trim();
        self.phone = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Returns the complainant name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the complainant email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the complainant phone number, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

/// Geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Creates a validated coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintDomainError::InvalidCoordinates`] when either value
    /// is non-finite or out of range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, ComplaintDomainError> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if !valid {
            return Err(ComplaintDomainError::InvalidCoordinates { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Returns the latitude.
    #[must_use]
    pub const fn lat(self) -> f64 {
        self.lat
    }

    /// Returns the longitude.
    #[must_use]
    pub const fn lng(self) -> f64 {
        self.lng
    }
}

/// Validated input for a new complaint.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintSubmission {
    contact: ComplainantContact,
    description: String,
    complaint_type: ComplaintType,
    address: Option<String>,
    location: Option<GeoPoint>,
}

impl ComplaintSubmission {
    /// Creates a submission for the given contact and category.
    #[must_use]
    pub fn new(
        contact: ComplainantContact,
        complaint_type: ComplaintType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            contact,
            description: description.into().trim().to_owned(),
            complaint_type,
            address: None,
            location: None,
        }
    }

    /// Sets the free-text address; blank values are ignored.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        let raw = address.into();
        let trimmed = raw.trim();
        self.address = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Sets the coordinate pair.
    #[must_use]
    pub const fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Returns the contact details.
    #[must_use]
    pub const fn contact(&self) -> &ComplainantContact {
        &self.contact
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the category.
    #[must_use]
    pub const fn complaint_type(&self) -> ComplaintType {
        self.complaint_type
    }

    /// Returns the address, if any.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns the location, if any.
    #[must_use]
    pub const fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        ComplainantContact,
        String,
        ComplaintType,
        Option<String>,
        Option<GeoPoint>,
    ) {
        (
            self.contact,
            self.description,
            self.complaint_type,
            self.address,
            self.location,
        )
    }
}
