//! Configuration and constants for the dashboard.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Number of Reddot platforms shown in the header.
///
/// Configured, not counted: the record set also holds the synthetic
/// "Website" root entry, so `platforms.len()` is one larger.
pub const CONFIGURED_PLATFORM_TOTAL: usize = 13;

// Popularity scores run 0-10; 8 and above counts as a top hashtag
pub const MAX_POPULARITY_SCORE: u8 = 10;
pub const TOP_HASHTAG_MIN_SCORE: u8 = 8;

/// Default limit for `top_hashtags`
pub const DEFAULT_TOP_HASHTAGS: usize = 10;

/// Wire form of a metric that does not apply (the "Website" root row)
pub const NOT_APPLICABLE_SENTINEL: &str = "--";

/// Platform link marker for channels managed through another account
pub const VIA_INSTAGRAM_MARKER: &str = "via Instagram";

/// Suitability text that matches every platform
pub const ALL_PLATFORMS_MARKER: &str = "All platforms";

// Content-plan hosts that get a dedicated link label
pub const GOOGLE_DOCS_PREFIX: &str = "https://docs.google.com/";
pub const GOOGLE_DRIVE_PREFIX: &str = "https://drive.google.com/";

// Panel sizes for the dashboard views
pub const SUMMARY_TOP_PLATFORMS: usize = 3;
pub const PIPELINE_PLATFORMS: usize = 8;
pub const CATEGORY_CHART_BARS: usize = 6;
pub const GAP_ANALYSIS_ITEMS: usize = 5;
pub const PRIORITY_PLATFORM_ITEMS: usize = 6;
pub const POTENTIAL_HASHTAG_ITEMS: usize = 8;
pub const POTENTIAL_HASHTAG_MIN_SCORE: u8 = 9;

/// Suitability groups counted by the suitability matrix; each group is
/// matched on its first platform name
pub const SUITABILITY_GROUPS: &[&str] = &[
    ALL_PLATFORMS_MARKER,
    "LinkedIn, Twitter",
    "Instagram, Pinterest",
    "YouTube, Medium",
];

/// Status chart colors: active, inactive, already in place
pub const STATUS_CHART_COLORS: [&str; 3] = ["#00e676", "#ff5252", "#ff9800"];

/// Built-in dataset, validated at load like any other source
pub const BUILTIN_DATASET: &str = include_str!("../../data/reddot.json");

/// Runtime knobs for aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Value reported as `platform_stats().total`
    pub platform_total: usize,

    /// Minimum popularity score for the top hashtag list
    pub top_hashtag_min_score: u8,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            platform_total: CONFIGURED_PLATFORM_TOTAL,
            top_hashtag_min_score: TOP_HASHTAG_MIN_SCORE,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_platform_total(mut self, total: usize) -> Self {
        self.platform_total = total;
        self
    }

    /// Raise the top hashtag threshold; values below the default are
    /// clamped so the top list never admits scores under it
    pub fn with_top_hashtag_min_score(mut self, score: u8) -> Self {
        self.top_hashtag_min_score = score.clamp(TOP_HASHTAG_MIN_SCORE, MAX_POPULARITY_SCORE);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.platform_total, 13);
        assert_eq!(config.top_hashtag_min_score, 8);
    }

    #[test]
    fn test_builder() {
        let config = DashboardConfig::new()
            .with_platform_total(20)
            .with_top_hashtag_min_score(9);
        assert_eq!(config.platform_total, 20);
        assert_eq!(config.top_hashtag_min_score, 9);
    }

    #[test]
    fn test_top_hashtag_threshold_is_clamped() {
        assert_eq!(DashboardConfig::new().with_top_hashtag_min_score(3).top_hashtag_min_score, 8);
        assert_eq!(DashboardConfig::new().with_top_hashtag_min_score(12).top_hashtag_min_score, 10);
    }
}
