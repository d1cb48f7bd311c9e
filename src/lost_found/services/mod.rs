//! Service layer for lost-and-found reports.

mod reports;

pub use reports::{LostFoundService, LostFoundServiceError, LostFoundServiceResult};
