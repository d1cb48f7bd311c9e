//! Application services for complaint routing and lifecycle orchestration.

mod config;
mod intake;
mod lifecycle;
mod routing;

pub use config::{RoutingConfig, RoutingConfigError};
pub use intake::{
    ComplaintIntakeError, ComplaintIntakeResult, ComplaintIntakeService, SubmitComplaintRequest,
};
pub use lifecycle::{
    ComplaintLifecycleError, ComplaintLifecycleResult, ComplaintLifecycleService,
    DEFAULT_RESOLVED_LIMIT, RespondToAssignmentRequest, TransitionComplaintRequest,
};
pub use routing::RoutingEngine;
