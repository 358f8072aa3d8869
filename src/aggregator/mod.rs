//! Derived statistics over the validated dataset.
//!
//! This module computes, in one deterministic pass:
//! - Platform counts by status
//! - Content pipeline totals and completion rate
//! - Hashtag category breakdown and top hashtags
//! - Per-category platform rollups

pub mod categories;
pub mod metrics;
pub mod ranking;

use crate::dataset::{Dataset, Hashtag};
use crate::utils::config::DashboardConfig;
use log::debug;
use serde::{Deserialize, Serialize};

// Re-export main types and functions
pub use categories::{
    calculate_category_breakdown, calculate_platform_categories, CategoryBreakdown,
    PlatformCategory,
};
pub use metrics::{
    calculate_content_metrics, calculate_platform_stats, rounded_percentage, ContentMetrics,
    PlatformStats,
};
pub use ranking::{rank_hashtags, sort_by_committed};

/// Hashtag-side aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagAnalytics {
    pub category_breakdown: Vec<CategoryBreakdown>,

    /// Hashtags at or above the configured score, highest first
    pub top_hashtags: Vec<Hashtag>,

    pub total_categories: usize,
}

/// Everything derived from the raw records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    pub platform_stats: PlatformStats,
    pub content_metrics: ContentMetrics,
    pub hashtag_analytics: HashtagAnalytics,
    pub platform_categories: Vec<PlatformCategory>,
}

/// Compute all aggregates from a dataset
///
/// **Public** - pure and idempotent; the dataset is never modified
pub fn compute_aggregates(dataset: &Dataset, config: &DashboardConfig) -> Aggregates {
    debug!("Computing aggregates");

    let platform_stats = calculate_platform_stats(dataset.platforms(), config.platform_total);
    let content_metrics = calculate_content_metrics(dataset.platforms());

    let category_breakdown = calculate_category_breakdown(dataset.hashtags());
    let hashtag_analytics = HashtagAnalytics {
        total_categories: category_breakdown.len(),
        category_breakdown,
        top_hashtags: rank_hashtags(dataset.hashtags(), config.top_hashtag_min_score),
    };

    let platform_categories = calculate_platform_categories(dataset.platforms());

    debug!("Content: {}", content_metrics.summary());

    Aggregates {
        platform_stats,
        content_metrics,
        hashtag_analytics,
        platform_categories,
    }
}
