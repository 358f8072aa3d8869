//! Record definitions, validation and dataset sources.
//!
//! This module handles:
//! - Defining the typed platform, hashtag and competitor records
//! - Deserializing raw dataset JSON
//! - Validating raw records before anything is aggregated

pub mod loader;
pub mod raw;
pub mod schema;

// Re-export main types
pub use loader::{BuiltinData, Dataset, DatasetSource, JsonFile};
pub use raw::{RawCompetitor, RawDataset, RawHashtag, RawMetric, RawPlatform};
pub use schema::{Competitor, Hashtag, Metric, Platform, PlatformStatus};
