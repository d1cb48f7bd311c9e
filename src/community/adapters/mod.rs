//! Adapter implementations for community ports.

pub mod memory;
