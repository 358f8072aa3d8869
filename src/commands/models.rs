use crate::dataset::PlatformStatus;
use crate::utils::config::DEFAULT_TOP_HASHTAGS;
use std::path::PathBuf;

/// Arguments for the export command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Number of top hashtags to include
    pub top_hashtags: usize,

    /// Write compact JSON instead of pretty-printed
    pub compact: bool,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            output_json: PathBuf::from("report.json"),
            top_hashtags: DEFAULT_TOP_HASHTAGS,
            compact: false,
            print_summary: false,
        }
    }
}

/// Filters for the platforms command; all given filters must match
#[derive(Debug, Clone, Default)]
pub struct PlatformQuery {
    pub status: Option<PlatformStatus>,
    pub search: Option<String>,

    /// Only inactive platforms with a content plan, most committed first
    pub potential: bool,
}

/// Filters for the hashtags command; all given filters must match
#[derive(Debug, Clone, Default)]
pub struct HashtagQuery {
    /// Start from the top-N list instead of every hashtag
    pub top: Option<usize>,
    pub category: Option<String>,
    pub search: Option<String>,
}
