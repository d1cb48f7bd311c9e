//! Order identifier and department assignment.

use super::config::{RoutingConfig, RoutingConfigError};
use crate::complaint::{
    adapters::routing::RandomSuffixGenerator,
    domain::{
        Complaint, ComplaintDomainError, ComplaintType, OrderId, RoutingDecision, department_for,
    },
    ports::{CityExtractor, OrderIdGenerator},
};
use std::sync::Arc;
use tracing::debug;

/// Derives order identifiers and owning departments for new complaints.
#[derive(Clone)]
pub struct RoutingEngine {
    generator: Arc<dyn OrderIdGenerator>,
    extractor: Arc<dyn CityExtractor>,
}

impl std::fmt::Debug for RoutingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingEngine").finish_non_exhaustive()
    }
}

impl RoutingEngine {
    /// Creates an engine from explicit collaborators.
    #[must_use]
    pub fn new(generator: Arc<dyn OrderIdGenerator>, extractor: Arc<dyn CityExtractor>) -> Self {
        Self {
            generator,
            extractor,
        }
    }

    /// Creates an engine with random suffixes and the configured region
    /// matcher.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingConfigError`] when the configuration is invalid.
    pub fn from_config(config: &RoutingConfig) -> Result<Self, RoutingConfigError> {
        config.validate()?;
        Ok(Self::new(
            Arc::new(RandomSuffixGenerator),
            Arc::new(config.city_extractor()?),
        ))
    }

    /// Computes a fresh routing decision.
    ///
    /// # Errors
    ///
    /// Returns [`ComplaintDomainError::OrderSuffixOutOfRange`] when the
    /// generator yields a suffix outside `1000..=9999`.
    pub fn decide(
        &self,
        complaint_type: ComplaintType,
        address: Option<&str>,
    ) -> Result<RoutingDecision, ComplaintDomainError> {
        let prefix = complaint_type.prefix();
        let order_id = OrderId::new(prefix, self.generator.next_suffix(prefix))?;
        let city = address.and_then(|raw| self.extractor.extract_city(raw));
        let department = department_for(complaint_type, city.as_deref());

        debug!(
            %order_id,
            %department,
            complaint_type = complaint_type.as_str(),
            "routing decision computed"
        );
        Ok(RoutingDecision::new(order_id, department))
    }

    /// Routes the complaint when it has no order identifier yet.
    ///
    /// Returns `false` without drawing an identifier when the complaint is
    /// already routed.
    ///
    /// # Errors
    ///
    /// Propagates [`RoutingEngine::decide`] failures.
    pub fn route(&self, complaint: &mut Complaint) -> Result<bool, ComplaintDomainError> {
        if complaint.is_routed() {
            return Ok(false);
        }
        let decision = self.decide(complaint.complaint_type(), complaint.address())?;
        Ok(complaint.apply_routing(decision))
    }
}
