//! NGO directory and community event listings.
//!
//! The NGO directory is seeded with a small set of partner organisations the
//! first time it is read while empty. Community events are listed by date
//! and can be narrowed to a city.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
