//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod export;
pub mod models;
pub mod query;
pub mod utils;

// Re-export main command functions
pub use export::{execute_export, validate_args};
pub use models::{ExportArgs, HashtagQuery, PlatformQuery};
pub use query::{hashtags_output, platforms_output, select_hashtags, select_platforms};
pub use utils::{display_schema, display_version, validate_dataset_file};
