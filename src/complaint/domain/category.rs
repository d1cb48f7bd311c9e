//! Complaint categories and the fixed category routing table.

use super::ParseComplaintTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category selected by the complainant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComplaintType {
    /// Potholes, damaged roads and footpaths.
    Road,
    /// Water supply and drainage.
    Water,
    /// Power cuts, street lights and wiring.
    Electricity,
    /// Garbage collection and dumping.
    Waste,
    /// Stray animal reports.
    #[serde(rename = "Stray-Dog")]
    StrayDog,
    /// Anything not covered by another category.
    #[default]
    Other,
}

impl ComplaintType {
    /// Returns the canonical display and storage label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Road => "Road",
            Self::Water => "Water",
            Self::Electricity => "Electricity",
            Self::Waste => "Waste",
            Self::StrayDog => "Stray-Dog",
            Self::Other => "Other",
        }
    }

    /// Maps a free-form label onto a category.
    ///
    /// Matching is case-insensitive but whitespace is significant, so
    /// `" road "` is not a road complaint. Missing and unrecognised labels
    /// fall back to [`ComplaintType::Other`].
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(raw) = label else {
            return Self::Other;
        };
        match raw.to_ascii_lowercase().as_str() {
            "road" => Self::Road,
            "water" => Self::Water,
            "electricity" => Self::Electricity,
            "waste" => Self::Waste,
            "stray-dog" => Self::StrayDog,
            _ => Self::Other,
        }
    }

    /// Returns the order prefix and department rule for this category.
    #[must_use]
    pub const fn route(self) -> (OrderPrefix, DepartmentRule) {
        match self {
            Self::Electricity => (
                OrderPrefix::Ec,
                DepartmentRule::Fixed("Electricity Board"),
            ),
            Self::Road => (OrderPrefix::Rd, DepartmentRule::Fixed("PWD Department")),
            Self::Water => (OrderPrefix::Wt, DepartmentRule::Fixed("Water Supply Dept")),
            Self::Waste => (OrderPrefix::Ws, DepartmentRule::NgoByCity),
            Self::StrayDog => (OrderPrefix::Sd, DepartmentRule::NgoByCity),
            Self::Other => (
                OrderPrefix::Ot,
                DepartmentRule::Fixed("General Department"),
            ),
        }
    }

    /// Returns the order prefix for this category.
    #[must_use]
    pub const fn prefix(self) -> OrderPrefix {
        self.route().0
    }
}

/// Strict parse of a canonical label, as written by [`ComplaintType::as_str`].
impl TryFrom<&str> for ComplaintType {
    type Error = ParseComplaintTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        [
            Self::Road,
            Self::Water,
            Self::Electricity,
            Self::Waste,
            Self::StrayDog,
            Self::Other,
        ]
        .into_iter()
        .find(|candidate| candidate.as_str() == value)
        .ok_or_else(|| ParseComplaintTypeError(value.to_owned()))
    }
}

impl fmt::Display for ComplaintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-letter routing prefix shared by order identifiers and worker IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrderPrefix {
    /// Electricity.
    #[serde(rename = "EC")]
    Ec,
    /// Road.
    #[serde(rename = "RD")]
    Rd,
    /// Water.
    #[serde(rename = "WT")]
    Wt,
    /// Waste.
    #[serde(rename = "WS")]
    Ws,
    /// Stray dog.
    #[serde(rename = "SD")]
    Sd,
    /// Other.
    #[serde(rename = "OT")]
    Ot,
}

impl OrderPrefix {
    /// Every prefix in routing-table order.
    pub const ALL: [Self; 6] = [Self::Ec, Self::Rd, Self::Wt, Self::Ws, Self::Sd, Self::Ot];

    /// Returns the two-letter code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ec => "EC",
            Self::Rd => "RD",
            Self::Wt => "WT",
            Self::Ws => "WS",
            Self::Sd => "SD",
            Self::Ot => "OT",
        }
    }
}

impl TryFrom<&str> for OrderPrefix {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|prefix| prefix.as_str() == value)
            .ok_or_else(|| value.to_owned())
    }
}

impl fmt::Display for OrderPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the owning department is chosen for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentRule {
    /// A fixed department label.
    Fixed(&'static str),
    /// A city NGO derived from the complaint address.
    NgoByCity,
}
