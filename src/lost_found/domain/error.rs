//! Error types for lost-and-found validation.

use thiserror::Error;

/// Errors returned while constructing lost-and-found domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LostFoundDomainError {
    /// The item name is empty after trimming.
    #[error("item name must not be empty")]
    EmptyItemName,

    /// The station identifier is empty after trimming.
    #[error("police station identifier must not be empty")]
    EmptyStationId,

    /// A required police station field is empty after trimming.
    #[error("police station {0} must not be empty")]
    EmptyStationField(&'static str),

    /// A found report was submitted without naming a police station.
    #[error("a found report requires a police station identifier")]
    MissingPoliceStation,
}

/// Error returned when parsing an unknown report kind label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown report kind '{0}', expected Lost or Found")]
pub struct ParseReportKindError(pub String);
