//! Reddot Dashboard
//!
//! Content strategy analytics for Reddot Events: platform pipeline
//! counts, hashtag popularity and competitor tracking.
//!
//! This crate provides the core implementation for the
//! `reddot` CLI tool.
//!
//! ## Getting Started
//!
//! ```ignore
//! use reddot_dashboard::dataset::BuiltinData;
//! use reddot_dashboard::store::DashboardHandle;
//!
//! let handle = DashboardHandle::default();
//! let dashboard = handle.load(&BuiltinData)?;
//! println!("{:?}", dashboard.platform_stats());
//! ```

pub mod aggregator;
pub mod commands;
pub mod dataset;
pub mod output;
pub mod store;
pub mod utils;
pub mod view;
