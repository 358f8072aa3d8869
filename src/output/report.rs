//! Versioned JSON report of every aggregate query.

use crate::aggregator::{ContentMetrics, HashtagAnalytics, PlatformCategory, PlatformStats};
use crate::dataset::{Competitor, Hashtag, Platform};
use crate::store::Dashboard;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    pub platform_stats: PlatformStats,

    pub content_metrics: ContentMetrics,

    pub hashtag_analytics: HashtagAnalytics,

    pub platform_categories: Vec<PlatformCategory>,

    /// Top hashtags, truncated to the requested limit
    pub top_hashtags: Vec<Hashtag>,

    /// Inactive platforms with a content plan, most committed first
    pub inactive_with_potential: Vec<Platform>,

    pub competitors: Vec<Competitor>,
}

/// Build a report from a ready dashboard
///
/// **Public** - `top_hashtags` limits the top hashtag list
pub fn build_report(dashboard: &Dashboard, top_hashtags: usize) -> DashboardReport {
    DashboardReport {
        version: SCHEMA_VERSION.to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        platform_stats: dashboard.platform_stats(),
        content_metrics: dashboard.content_metrics(),
        hashtag_analytics: dashboard.hashtag_analytics().clone(),
        platform_categories: dashboard.platform_categories().to_vec(),
        top_hashtags: dashboard.top_hashtags(top_hashtags).to_vec(),
        inactive_with_potential: dashboard
            .inactive_platforms_with_potential()
            .into_iter()
            .cloned()
            .collect(),
        competitors: dashboard.competitors().to_vec(),
    }
}
