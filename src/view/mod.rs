//! Dashboard view models.
//!
//! Panels are plain data built from the dashboard's public queries.
//! Nothing here produces markup; a front end or the CLI decides how to
//! present them.

pub mod builder;
pub mod models;
pub mod text;

// Re-export main types
pub use builder::{
    build_dashboard_view, content_pipeline, gap_analysis, hashtag_category_chart, header_metrics,
    metrics_summary, platform_cards, platform_status_chart, posting_schedule, potential_hashtags,
    presence_score, priority_platforms, suitability_matrix,
};
pub use models::{
    ChartSeries, ContentPlanLink, DashboardView, HeaderMetrics, MetricsSummary, Opportunity,
    PipelineEntry, PlatformCard, PlatformLinkView, PostingWindow, Potential, PotentialHashtag,
    PresenceScore, ScheduleSlot, StatusBadge, SuitabilityCell,
};
pub use text::{render_competitors, render_hashtags, render_platforms, render_summary};
