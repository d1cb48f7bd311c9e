//! Lost-and-found reports with police-station verification.
//!
//! Citizens report lost items freely. A found item must be handed to a
//! police station, so a found report names the station and that station must
//! be registered and verified before the report is accepted.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
