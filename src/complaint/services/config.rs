//! Routing configuration.

use crate::complaint::adapters::routing::RegionCityExtractor;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Tunables for complaint routing and worker auto-assignment.
///
/// Deserialises from JSON with every field optional:
///
/// ```
/// use civicdesk::complaint::services::RoutingConfig;
///
/// let config = RoutingConfig::from_json_str(r#"{"region": "Haryana"}"#)
///     .expect("valid configuration");
/// assert_eq!(config.region, "Haryana");
/// assert_eq!(config.max_order_id_attempts, 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutingConfig {
    /// Region name that follows the city in complaint addresses.
    pub region: String,
    /// Upper bound on a single worker directory lookup.
    #[serde(rename = "worker_lookup_timeout_ms", with = "duration_millis")]
    pub worker_lookup_timeout: Duration,
    /// Order identifiers drawn before creation gives up on a collision.
    pub max_order_id_attempts: u32,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            region: RegionCityExtractor::DEFAULT_REGION.to_owned(),
            worker_lookup_timeout: Duration::from_secs(5),
            max_order_id_attempts: 32,
        }
    }
}

/// Errors raised while loading or applying routing configuration.
#[derive(Debug, Error)]
pub enum RoutingConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid routing configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The region name is blank.
    #[error("routing region must not be blank")]
    BlankRegion,

    /// The lookup timeout is zero.
    #[error("worker lookup timeout must be greater than zero")]
    ZeroTimeout,

    /// The attempt count is zero.
    #[error("max order id attempts must be at least 1")]
    ZeroAttempts,

    /// The region pattern failed to compile.
    #[error("region pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}

impl RoutingConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingConfigError`] when the document is malformed or a
    /// value is out of range.
    pub fn from_json_str(raw: &str) -> Result<Self, RoutingConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first [`RoutingConfigError`] found.
    pub fn validate(&self) -> Result<(), RoutingConfigError> {
        if self.region.trim().is_empty() {
            return Err(RoutingConfigError::BlankRegion);
        }
        if self.worker_lookup_timeout.is_zero() {
            return Err(RoutingConfigError::ZeroTimeout);
        }
        if self.max_order_id_attempts == 0 {
            return Err(RoutingConfigError::ZeroAttempts);
        }
        Ok(())
    }

    /// Builds the address matcher for the configured region.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingConfigError::Pattern`] when the pattern fails to
    /// compile.
    pub fn city_extractor(&self) -> Result<RegionCityExtractor, RoutingConfigError> {
        Ok(RegionCityExtractor::new(&self.region)?)
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
