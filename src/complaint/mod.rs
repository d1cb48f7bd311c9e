//! Complaint routing, auto-assignment and lifecycle.
//!
//! A filed complaint receives a human-readable order identifier and an
//! owning department from a fixed category table. Waste and stray-dog
//! complaints go to a city NGO read from the address. Workers whose
//! identifiers share the order prefix are then attached on a best-effort
//! basis. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
