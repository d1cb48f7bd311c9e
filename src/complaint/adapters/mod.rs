//! Adapter implementations for complaint ports.

pub mod memory;
pub mod postgres;
pub mod routing;
