//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Malformed or out-of-range records, rejected at load time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{kind} #{index} has an empty name")]
    EmptyName { kind: &'static str, index: usize },

    #[error("Duplicate platform name: {0}")]
    DuplicatePlatform(String),

    #[error("Platform '{platform}' has invalid sequence number {value} (must be positive)")]
    InvalidSequence { platform: String, value: i64 },

    #[error("Duplicate platform sequence number: {0}")]
    DuplicateSequence(u32),

    #[error("Platform '{platform}' has unknown status '{status}'")]
    UnknownStatus { platform: String, status: String },

    #[error("Platform '{platform}' has negative {field} count: {value}")]
    NegativeCount {
        platform: String,
        field: &'static str,
        value: i64,
    },

    #[error("Platform '{platform}' has invalid {field} value: {value}")]
    InvalidMetric {
        platform: String,
        field: &'static str,
        value: String,
    },

    #[error("Platform '{platform}' uses the not-applicable marker for {field} but has a sequence number")]
    MisplacedSentinel { platform: String, field: &'static str },

    #[error("Root entry '{platform}' must mark {field} as not applicable")]
    RootMetricNotSentinel { platform: String, field: &'static str },

    #[error("Expected exactly one root platform entry without a sequence number, found {0}")]
    RootEntryCount(usize),

    #[error("'{record}' has malformed {field}: {value}")]
    InvalidLink {
        record: String,
        field: &'static str,
        value: String,
    },

    #[error("Hashtag '{0}' must start with '#'")]
    MissingHashPrefix(String),

    #[error("Hashtag '{tag}' has popularity score {score} outside 0-10")]
    ScoreOutOfRange { tag: String, score: i64 },

    #[error("Competitor '{name}' has invalid rank {rank} (must be positive)")]
    InvalidRank { name: String, rank: i64 },

    #[error("Duplicate competitor rank: {0}")]
    DuplicateRank(u32),
}

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset failed validation: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors surfaced through a `DashboardHandle`
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Dashboard data is not loaded yet")]
    NotReady,

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
