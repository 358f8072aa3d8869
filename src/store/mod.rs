//! Read-only query surface over the loaded dataset.
//!
//! `Dashboard` owns the records and their cached aggregates.
//! `DashboardHandle` is the shared, load-once entry point consumers wait on.

pub mod dashboard;
pub mod handle;

pub use dashboard::Dashboard;
pub use handle::DashboardHandle;
