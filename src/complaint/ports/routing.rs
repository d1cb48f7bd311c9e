//! Pluggable routing collaborators.

use crate::complaint::domain::OrderPrefix;

/// Source of numeric order-identifier suffixes.
pub trait OrderIdGenerator: Send + Sync {
    /// Returns a suffix in `1000..=9999` for the given prefix.
    fn next_suffix(&self, prefix: OrderPrefix) -> u16;
}

/// Extracts a city name from a free-text address.
pub trait CityExtractor: Send + Sync {
    /// Returns the city token, or `None` when the address does not match.
    fn extract_city(&self, address: &str) -> Option<String>;
}
