//! Build view models from a ready dashboard.
//!
//! Each function reads only the dashboard's public queries.

use super::models::{
    ChartSeries, ContentPlanLink, DashboardView, HeaderMetrics, MetricsSummary, Opportunity,
    PipelineEntry, PlatformCard, PlatformLinkView, PostingWindow, Potential, PotentialHashtag,
    PresenceScore, ScheduleSlot, StatusBadge, SuitabilityCell,
};
use crate::aggregator::{rank_hashtags, rounded_percentage, sort_by_committed};
use crate::dataset::{Platform, PlatformStatus};
use crate::store::Dashboard;
use crate::utils::config::{
    CATEGORY_CHART_BARS, GAP_ANALYSIS_ITEMS, MAX_POPULARITY_SCORE, PIPELINE_PLATFORMS,
    POTENTIAL_HASHTAG_ITEMS, POTENTIAL_HASHTAG_MIN_SCORE, PRIORITY_PLATFORM_ITEMS,
    STATUS_CHART_COLORS, SUITABILITY_GROUPS, SUMMARY_TOP_PLATFORMS,
};
use log::debug;

/// Build every panel
///
/// **Public** - main entry point for front ends
pub fn build_dashboard_view(dashboard: &Dashboard) -> DashboardView {
    debug!("Building dashboard view");

    DashboardView {
        header: header_metrics(dashboard),
        status_chart: platform_status_chart(dashboard),
        metrics_summary: metrics_summary(dashboard),
        content_pipeline: content_pipeline(dashboard),
        platform_cards: platform_cards(dashboard),
        category_chart: hashtag_category_chart(dashboard),
        posting_schedule: posting_schedule(dashboard),
        suitability_matrix: suitability_matrix(dashboard),
        presence: presence_score(dashboard),
        gap_analysis: gap_analysis(dashboard),
        priority_platforms: priority_platforms(dashboard),
        potential_hashtags: potential_hashtags(dashboard),
    }
}

pub fn header_metrics(dashboard: &Dashboard) -> HeaderMetrics {
    let stats = dashboard.platform_stats();
    let content = dashboard.content_metrics();

    HeaderMetrics {
        total_platforms: stats.total,
        active_platforms: stats.active,
        total_committed: content.total_committed,
        total_drafted: content.total_drafted,
    }
}

/// Doughnut chart of platform statuses
pub fn platform_status_chart(dashboard: &Dashboard) -> ChartSeries {
    let stats = dashboard.platform_stats();

    ChartSeries {
        label: "Platform Status".to_string(),
        labels: vec![
            "Active".to_string(),
            "Inactive".to_string(),
            PlatformStatus::AlreadyInPlace.label().to_string(),
        ],
        values: vec![
            stats.active as u64,
            stats.inactive as u64,
            stats.already_in_place as u64,
        ],
        colors: STATUS_CHART_COLORS.iter().map(|c| c.to_string()).collect(),
    }
}

pub fn metrics_summary(dashboard: &Dashboard) -> MetricsSummary {
    MetricsSummary {
        content: dashboard.content_metrics(),
        top_platforms: top_committed(dashboard, SUMMARY_TOP_PLATFORMS),
    }
}

/// Per-platform progress for the platforms with the most committed content
pub fn content_pipeline(dashboard: &Dashboard) -> Vec<PipelineEntry> {
    top_committed(dashboard, PIPELINE_PLATFORMS)
}

/// Cards for every platform except the root entry
pub fn platform_cards(dashboard: &Dashboard) -> Vec<PlatformCard> {
    dashboard
        .platforms()
        .iter()
        .filter(|p| !p.is_root())
        .map(|p| PlatformCard {
            name: p.name.clone(),
            status: p.status,
            badge: StatusBadge::for_status(p.status),
            committed: p.committed.or_zero(),
            drafted: p.drafted.or_zero(),
            published: p.published.or_zero(),
            category: p.category.clone(),
            platform_link: PlatformLinkView::classify(&p.platform_link),
            content_plan: ContentPlanLink::classify(&p.content_plan),
            primary_content: p.primary_content.clone(),
        })
        .collect()
}

/// Bar chart of hashtag counts for the first few categories
pub fn hashtag_category_chart(dashboard: &Dashboard) -> ChartSeries {
    let breakdown = &dashboard.hashtag_analytics().category_breakdown;
    let shown = &breakdown[..CATEGORY_CHART_BARS.min(breakdown.len())];

    ChartSeries {
        label: "Hashtag Count".to_string(),
        labels: shown.iter().map(|b| b.category.clone()).collect(),
        values: shown.iter().map(|b| b.count as u64).collect(),
        colors: vec!["#00d4ff".to_string()],
    }
}

/// Hashtags grouped by posting window; empty windows are omitted
pub fn posting_schedule(dashboard: &Dashboard) -> Vec<ScheduleSlot> {
    PostingWindow::ALL
        .iter()
        .map(|window| ScheduleSlot {
            window: *window,
            hashtags: dashboard
                .hashtags()
                .iter()
                .filter(|h| PostingWindow::classify(&h.best_posting_time) == *window)
                .map(|h| h.tag.clone())
                .collect(),
        })
        .filter(|slot| !slot.hashtags.is_empty())
        .collect()
}

pub fn suitability_matrix(dashboard: &Dashboard) -> Vec<SuitabilityCell> {
    SUITABILITY_GROUPS
        .iter()
        .map(|&group| {
            let first = group.split(',').next().unwrap_or(group);
            SuitabilityCell {
                group: group.to_string(),
                count: dashboard.hashtags_suitable_for(first).len(),
            }
        })
        .collect()
}

/// Active platforms as a share of the configured total
pub fn presence_score(dashboard: &Dashboard) -> PresenceScore {
    let stats = dashboard.platform_stats();

    PresenceScore {
        score: rounded_percentage(stats.active as u64, stats.total as u64),
        active: stats.active,
        inactive: stats.inactive,
        tracked_competitors: dashboard.competitors().len(),
    }
}

pub fn gap_analysis(dashboard: &Dashboard) -> Vec<Opportunity> {
    opportunities(dashboard, GAP_ANALYSIS_ITEMS)
}

pub fn priority_platforms(dashboard: &Dashboard) -> Vec<Opportunity> {
    opportunities(dashboard, PRIORITY_PLATFORM_ITEMS)
}

/// The very best hashtags, flagged by potential
pub fn potential_hashtags(dashboard: &Dashboard) -> Vec<PotentialHashtag> {
    rank_hashtags(dashboard.hashtags(), POTENTIAL_HASHTAG_MIN_SCORE)
        .into_iter()
        .take(POTENTIAL_HASHTAG_ITEMS)
        .map(|h| PotentialHashtag {
            potential: if h.popularity_score == MAX_POPULARITY_SCORE {
                Potential::Highest
            } else {
                Potential::High
            },
            score: h.popularity_score,
            tag: h.tag,
            usage_context: h.usage_context,
        })
        .collect()
}

fn top_committed(dashboard: &Dashboard, limit: usize) -> Vec<PipelineEntry> {
    sort_by_committed(dashboard.platforms().iter().filter(|p| p.committed.or_zero() > 0))
        .into_iter()
        .take(limit)
        .map(pipeline_entry)
        .collect()
}

fn pipeline_entry(platform: &Platform) -> PipelineEntry {
    let committed = platform.committed.or_zero();
    let drafted = platform.drafted.or_zero();

    PipelineEntry {
        platform: platform.name.clone(),
        committed,
        drafted,
        published: platform.published.or_zero(),
        progress: rounded_percentage(u64::from(drafted), u64::from(committed)),
    }
}

fn opportunities(dashboard: &Dashboard, limit: usize) -> Vec<Opportunity> {
    dashboard
        .inactive_platforms_with_potential()
        .into_iter()
        .take(limit)
        .map(|p| Opportunity {
            platform: p.name.clone(),
            committed: p.committed.or_zero(),
            category: p.category.clone(),
            primary_content: p.primary_content.clone(),
        })
        .collect()
}
