//! Domain model for lost-and-found reports.

mod error;
mod report;
mod station;

pub use error::{LostFoundDomainError, ParseReportKindError};
pub use report::{LostFoundReport, ReportFilter, ReportId, ReportKind, ReportSubmission};
pub use station::{PoliceStation, StationId};
