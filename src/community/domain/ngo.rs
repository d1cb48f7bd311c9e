//! NGO directory entries.

use super::{CommunityDomainError, error::required};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Storage identity of an NGO entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NgoId(Uuid);

impl NgoId {
    /// Creates a new random NGO identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NgoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NgoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A partner NGO with a summary of its work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ngo {
    id: NgoId,
    name: String,
    contribution: String,
    details: String,
    created_at: DateTime<Utc>,
}

impl Ngo {
    /// Creates an NGO entry.
    ///
    /// # Errors
    ///
    /// Returns [`CommunityDomainError::EmptyField`] when the name,
    /// contribution or details are blank.
    pub fn new(
        name: impl Into<String>,
        contribution: impl Into<String>,
        details: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, CommunityDomainError> {
        Ok(Self {
            id: NgoId::new(),
            name: required("name", name)?,
            contribution: required("contribution", contribution)?,
            details: required("details", details)?,
            created_at: clock.utc(),
        })
    }

    /// Returns the NGO identifier.
    #[must_use]
    pub const fn id(&self) -> NgoId {
        self.id
    }

    /// Returns the NGO name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a one-line summary of the NGO's contribution.
    #[must_use]
    pub fn contribution(&self) -> &str {
        &self.contribution
    }

    /// Returns the longer description.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns when the entry was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

const DEFAULT_NGOS: [(&str, &str, &str); 3] = [
    (
        "Helping Hands Foundation",
        "Distributed 10,000 food packets during flood relief.",
        "Helping Hands Foundation is a non-profit focused on humanitarian relief. They have supported 100,000+ people.",
    ),
    (
        "Green Earth Initiative",
        "Planted 5,000 trees in the last two months.",
        "Green Earth Initiative promotes reforestation and awareness through community-driven campaigns.",
    ),
    (
        "Smile For All",
        "Provided free education kits to 3,000 children.",
        "Smile For All focuses on child education and welfare through literacy programs in underprivileged areas.",
    ),
];

/// Builds the partner NGOs used to seed an empty directory.
#[must_use]
pub fn default_ngos(clock: &impl Clock) -> Vec<Ngo> {
    let created_at = clock.utc();
    DEFAULT_NGOS
        .iter()
        .map(|&(name, contribution, details)| Ngo {
            id: NgoId::new(),
            name: name.to_owned(),
            contribution: contribution.to_owned(),
            details: details.to_owned(),
            created_at,
        })
        .collect()
}
