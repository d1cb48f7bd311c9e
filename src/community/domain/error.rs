//! Error types for community validation.

use thiserror::Error;

/// Errors returned while constructing community domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommunityDomainError {
    /// A required text field is empty after trimming.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

pub(super) fn required(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, CommunityDomainError> {
    let raw = value.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CommunityDomainError::EmptyField(field));
    }
    Ok(trimmed.to_owned())
}
