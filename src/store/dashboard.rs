//! The ready dashboard: immutable records plus cached aggregates.

use crate::aggregator::{
    compute_aggregates, sort_by_committed, Aggregates, ContentMetrics, HashtagAnalytics,
    PlatformCategory, PlatformStats,
};
use crate::dataset::{Competitor, Dataset, DatasetSource, Hashtag, Platform, PlatformStatus};
use crate::utils::config::DashboardConfig;
use crate::utils::error::LoadError;
use log::info;

/// Loaded records and their derived statistics
///
/// Nothing here is mutable after construction, so a `Dashboard` can be
/// shared across threads and read without locking.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    aggregates: Aggregates,
    config: DashboardConfig,
}

impl Dashboard {
    /// Build a dashboard and compute its aggregates once
    pub fn new(dataset: Dataset, config: DashboardConfig) -> Self {
        let aggregates = compute_aggregates(&dataset, &config);
        Self {
            dataset,
            aggregates,
            config,
        }
    }

    /// Load from a source and compute aggregates
    ///
    /// **Public** - the one load pass behind `DashboardHandle::load`
    pub fn from_source(
        source: &dyn DatasetSource,
        config: DashboardConfig,
    ) -> Result<Self, LoadError> {
        info!("Loading dashboard data from {}", source.describe());
        let dataset = source.load_dataset()?;
        Ok(Self::new(dataset, config))
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Cached aggregates
    pub fn aggregates(&self) -> &Aggregates {
        &self.aggregates
    }

    /// Recompute aggregates from the records without touching the cache
    pub fn recompute_aggregates(&self) -> Aggregates {
        compute_aggregates(&self.dataset, &self.config)
    }

    pub fn platforms(&self) -> &[Platform] {
        self.dataset.platforms()
    }

    pub fn hashtags(&self) -> &[Hashtag] {
        self.dataset.hashtags()
    }

    /// Competitors in rank order
    pub fn competitors(&self) -> &[Competitor] {
        self.dataset.competitors()
    }

    pub fn platform_stats(&self) -> PlatformStats {
        self.aggregates.platform_stats
    }

    pub fn content_metrics(&self) -> ContentMetrics {
        self.aggregates.content_metrics
    }

    pub fn hashtag_analytics(&self) -> &HashtagAnalytics {
        &self.aggregates.hashtag_analytics
    }

    pub fn platform_categories(&self) -> &[PlatformCategory] {
        &self.aggregates.platform_categories
    }

    /// Highest-scoring hashtags, at most `limit`
    ///
    /// **Public** - `limit == 0` yields an empty slice
    pub fn top_hashtags(&self, limit: usize) -> &[Hashtag] {
        let top = &self.aggregates.hashtag_analytics.top_hashtags;
        &top[..limit.min(top.len())]
    }

    /// Platforms with the given status, in record order
    pub fn platforms_by_status(&self, status: PlatformStatus) -> Vec<&Platform> {
        self.platforms()
            .iter()
            .filter(|p| p.status == status)
            .collect()
    }

    /// Inactive platforms that already have a content plan
    ///
    /// **Public** - sorted by committed content, highest first
    pub fn inactive_platforms_with_potential(&self) -> Vec<&Platform> {
        sort_by_committed(
            self.platforms()
                .iter()
                .filter(|p| p.status == PlatformStatus::NotActive && p.has_content_plan()),
        )
    }

    /// Hashtags whose category contains `category`, ignoring case
    pub fn hashtags_by_category(&self, category: &str) -> Vec<&Hashtag> {
        let needle = category.to_lowercase();
        self.hashtags()
            .iter()
            .filter(|h| h.matches_category(&needle))
            .collect()
    }

    /// Case-insensitive search over tag, category and usage context
    ///
    /// **Public** - an empty query matches everything
    pub fn search_hashtags(&self, query: &str) -> Vec<&Hashtag> {
        let needle = query.to_lowercase();
        self.hashtags()
            .iter()
            .filter(|h| h.matches_query(&needle))
            .collect()
    }

    /// Case-insensitive search over name, category and primary content
    ///
    /// **Public** - an empty query matches everything
    pub fn search_platforms(&self, query: &str) -> Vec<&Platform> {
        let needle = query.to_lowercase();
        self.platforms()
            .iter()
            .filter(|p| p.matches_query(&needle))
            .collect()
    }

    /// Hashtags whose suitability text names `platform`
    ///
    /// Case-sensitive, matching how suitability groups are written.
    pub fn hashtags_suitable_for(&self, platform: &str) -> Vec<&Hashtag> {
        self.hashtags()
            .iter()
            .filter(|h| h.platform_suitability.contains(platform))
            .collect()
    }
}
