//! Routing outcome values.

use super::{ComplaintType, Department, DepartmentRule, OrderId, OrderPrefix};

/// Order identifier and owning department chosen for a complaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision {
    order_id: OrderId,
    department: Department,
}

impl RoutingDecision {
    /// Creates a routing decision.
    #[must_use]
    pub const fn new(order_id: OrderId, department: Department) -> Self {
        Self {
            order_id,
            department,
        }
    }

    /// Returns the chosen order identifier.
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Returns the routing prefix, which is also the worker-eligibility
    /// prefix.
    #[must_use]
    pub const fn prefix(&self) -> OrderPrefix {
        self.order_id.prefix()
    }

    /// Returns the owning department.
    #[must_use]
    pub const fn department(&self) -> &Department {
        &self.department
    }

    pub(crate) fn into_parts(self) -> (OrderId, Department) {
        (self.order_id, self.department)
    }
}

/// Resolves the owning department for a category.
///
/// `city` is only consulted for categories routed to a city NGO.
#[must_use]
pub fn department_for(complaint_type: ComplaintType, city: Option<&str>) -> Department {
    match complaint_type.route().1 {
        DepartmentRule::Fixed(label) => Department::fixed(label),
        DepartmentRule::NgoByCity => Department::ngo_for_city(city),
    }
}
