//! Identifier types for the complaint domain.

use super::{ComplaintDomainError, OrderPrefix};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Storage identity of a complaint record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(Uuid);

impl ComplaintId {
    /// Creates a new random complaint identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a complaint identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ComplaintId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-readable order identifier such as `RD4821`.
///
/// The two-letter prefix names the routing category and doubles as the
/// worker-eligibility prefix; the suffix lies in `1000..=9999`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId {
    prefix: OrderPrefix,
    suffix: u16,
}

impl OrderId {
    /// Smallest permitted numeric suffix.
    pub const MIN_SUFFIX: u16 = 1000;
    /// Largest permitted numeric suffix.
    pub const MAX_SUFFIX: u16 = 9999;

    /// Creates an order identifier from a prefix and numeric suffix.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintDomainError::OrderSuffixOutOfRange`] when the suffix
    /// lies outside `1000..=9999`.
    pub const fn new(prefix: OrderPrefix, suffix: u16) -> Result<Self, ComplaintDomainError> {
        if suffix < Self::MIN_SUFFIX || suffix > Self::MAX_SUFFIX {
            return Err(ComplaintDomainError::OrderSuffixOutOfRange(suffix));
        }
        Ok(Self { prefix, suffix })
    }

    /// Parses a stored order identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintDomainError::InvalidOrderId`] when the value is not
    /// a known prefix followed by four digits in range.
    pub fn parse(value: &str) -> Result<Self, ComplaintDomainError> {
        let invalid = || ComplaintDomainError::InvalidOrderId(value.to_owned());
        let trimmed = value.trim();
        if !trimmed.is_ascii() || trimmed.len() != 6 {
            return Err(invalid());
        }
        let (prefix_part, suffix_part) = trimmed.split_at(2);
        let prefix = OrderPrefix::try_from(prefix_part).map_err(|_| invalid())?;
        if !suffix_part.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(invalid());
        }
        let suffix = suffix_part.parse::<u16>().map_err(|_| invalid())?;
        Self::new(prefix, suffix).map_err(|_| invalid())
    }

    /// Returns the routing prefix.
    #[must_use]
    pub const fn prefix(&self) -> OrderPrefix {
        self.prefix
    }

    /// Returns the numeric suffix.
    #[must_use]
    pub const fn suffix(&self) -> u16 {
        self.suffix
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.suffix)
    }
}

impl TryFrom<String> for OrderId {
    type Error = ComplaintDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OrderId> for String {
    fn from(value: OrderId) -> Self {
        value.to_string()
    }
}

/// Identifier of a field worker or NGO account.
///
/// The leading characters encode department eligibility, so `RD123` is
/// eligible for road complaints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkerId(String);

impl WorkerId {
    /// Creates a validated worker identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintDomainError::InvalidWorkerId`] when the value is
    /// empty or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ComplaintDomainError> {
        let raw = value.into();
        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return Err(ComplaintDomainError::InvalidWorkerId(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the identifier is eligible for the given prefix.
    ///
    /// Matching is a case-sensitive `starts_with` with no trailing boundary.
    #[must_use]
    pub fn has_prefix(&self, prefix: OrderPrefix) -> bool {
        self.0.starts_with(prefix.as_str())
    }
}

impl AsRef<str> for WorkerId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WorkerId {
    type Error = ComplaintDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WorkerId> for String {
    fn from(value: WorkerId) -> Self {
        value.0
    }
}
