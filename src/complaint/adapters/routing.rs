//! Default routing collaborators: random order suffixes and a regional
//! address matcher.

use crate::complaint::{
    domain::{OrderId, OrderPrefix},
    ports::{CityExtractor, OrderIdGenerator},
};
use rand::Rng;
use regex::Regex;

/// Draws order suffixes uniformly from `1000..=9999`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSuffixGenerator;

impl OrderIdGenerator for RandomSuffixGenerator {
    fn next_suffix(&self, _prefix: OrderPrefix) -> u16 {
        rand::thread_rng().gen_range(OrderId::MIN_SUFFIX..=OrderId::MAX_SUFFIX)
    }
}

/// Reads the city from addresses written as `<City>, <Region>`.
///
/// The city is the run of letters and spaces immediately before the comma
/// that precedes the region name. Matching is case-insensitive.
#[derive(Debug, Clone)]
pub struct RegionCityExtractor {
    region: String,
    pattern: Regex,
}

impl RegionCityExtractor {
    /// Region matched when none is configured.
    pub const DEFAULT_REGION: &'static str = "Punjab";

    /// Builds a matcher for the given region name.
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] when the compiled pattern exceeds the regex
    /// size limits.
    pub fn new(region: &str) -> Result<Self, regex::Error> {
        let region_name = region.trim();
        let pattern = Regex::new(&format!(
            r"(?i)([A-Za-z\s]+),\s*{}",
            regex::escape(region_name)
        ))?;
        Ok(Self {
            region: region_name.to_owned(),
            pattern,
        })
    }

    /// Returns the configured region name.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }
}

impl CityExtractor for RegionCityExtractor {
    fn extract_city(&self, address: &str) -> Option<String> {
        let captures = self.pattern.captures(address)?;
        let city = captures.get(1)?.as_str().trim();
        (!city.is_empty()).then(|| city.to_owned())
    }
}
