//! Adapter implementations for lost-and-found ports.

pub mod memory;
