//! Civicdesk: civic complaint routing and community services.
//!
//! This crate provides the back-office core of a citizen portal. Complaints
//! are routed to a department under a human-readable order identifier and
//! auto-assigned to field workers. Lost-and-found reports are checked
//! against verified police stations, and an NGO directory and community
//! event listings round out the portal.
//!
//! # Architecture
//!
//! Civicdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`complaint`]: Order identifiers, department routing, worker assignment
//!   and complaint lifecycle
//! - [`lost_found`]: Lost-and-found reports and police-station verification
//! - [`community`]: NGO directory and community events

pub mod community;
pub mod complaint;
pub mod lost_found;
