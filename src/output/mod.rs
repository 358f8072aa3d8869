//! Report construction and JSON output.
//!
//! This module handles:
//! - Building a versioned report from a ready dashboard
//! - Writing reports to disk (pretty and compact)
//! - Reading reports back for validation

pub mod json;
pub mod report;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report, write_report_compact};
pub use report::{build_report, DashboardReport};
