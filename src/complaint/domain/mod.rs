//! Domain model for complaint routing and lifecycle.
//!
//! The domain holds the category routing table, order identifiers, the
//! department rules, and the complaint aggregate. Infrastructure concerns
//! such as worker lookup and persistence stay behind the ports.

mod category;
mod complaint;
mod department;
mod error;
mod ids;
mod routing;
mod status;
mod submission;

pub use category::{ComplaintType, DepartmentRule, OrderPrefix};
pub use complaint::{Complaint, PersistedComplaintData};
pub use department::Department;
pub use error::{
    ComplaintDomainError, ParseAssignmentStatusError, ParseComplaintStatusError,
    ParseComplaintTypeError,
};
pub use ids::{ComplaintId, OrderId, WorkerId};
pub use routing::{RoutingDecision, department_for};
pub use status::{AssignmentStatus, ComplaintStatus, WorkerAssignment};
pub use submission::{ComplainantContact, ComplaintSubmission, GeoPoint};
