//! Step definitions for complaint routing scenarios.

pub mod given;
pub mod when;
pub mod world;
