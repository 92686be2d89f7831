//! Report domain module.

mod model;

// Re-export public API
pub use model::{ReportReason, ReportTicket};
