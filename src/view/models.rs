//! View-model structures for the dashboard panels.

use crate::aggregator::ContentMetrics;
use crate::dataset::PlatformStatus;
use crate::utils::config::{GOOGLE_DOCS_PREFIX, GOOGLE_DRIVE_PREFIX, VIA_INSTAGRAM_MARKER};
use serde::{Deserialize, Serialize};

/// Headline numbers shown above every tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMetrics {
    pub total_platforms: usize,
    pub active_platforms: usize,
    pub total_committed: u64,
    pub total_drafted: u64,
}

/// Data for one chart: parallel label/value/color vectors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub colors: Vec<String>,
}

/// Committed/drafted/published counts for one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineEntry {
    pub platform: String,
    pub committed: u32,
    pub drafted: u32,
    pub published: u32,

    /// Drafted as a rounded percentage of committed
    pub progress: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub content: ContentMetrics,
    pub top_platforms: Vec<PipelineEntry>,
}

/// Status badge style for a platform card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusBadge {
    Active,
    InPlace,
    Inactive,
}

impl StatusBadge {
    pub fn for_status(status: PlatformStatus) -> Self {
        match status {
            PlatformStatus::Active => StatusBadge::Active,
            PlatformStatus::AlreadyInPlace => StatusBadge::InPlace,
            PlatformStatus::NotActive => StatusBadge::Inactive,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatusBadge::Active => "status-active",
            StatusBadge::InPlace => "status-in-place",
            StatusBadge::Inactive => "status-inactive",
        }
    }
}

/// Content-plan reference, classified by host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "url")]
pub enum ContentPlanLink {
    Document(String),
    Folder(String),
    Other(String),
}

impl ContentPlanLink {
    /// Classify a content-plan reference; `None` when empty
    pub fn classify(reference: &str) -> Option<Self> {
        if reference.is_empty() {
            None
        } else if reference.starts_with(GOOGLE_DOCS_PREFIX) {
            Some(ContentPlanLink::Document(reference.to_string()))
        } else if reference.starts_with(GOOGLE_DRIVE_PREFIX) {
            Some(ContentPlanLink::Folder(reference.to_string()))
        } else {
            Some(ContentPlanLink::Other(reference.to_string()))
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentPlanLink::Document(_) => "View Content Plan",
            ContentPlanLink::Folder(_) => "View Content Folder",
            ContentPlanLink::Other(_) => "Content Created",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "url")]
pub enum PlatformLinkView {
    Url(String),
    ViaInstagram,
}

impl PlatformLinkView {
    pub fn classify(link: &str) -> Option<Self> {
        if link.is_empty() {
            None
        } else if link == VIA_INSTAGRAM_MARKER {
            Some(PlatformLinkView::ViaInstagram)
        } else {
            Some(PlatformLinkView::Url(link.to_string()))
        }
    }
}

/// One card in the platform grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCard {
    pub name: String,
    pub status: PlatformStatus,
    pub badge: StatusBadge,
    pub committed: u32,
    pub drafted: u32,
    pub published: u32,
    pub category: String,
    pub platform_link: Option<PlatformLinkView>,
    pub content_plan: Option<ContentPlanLink>,
    pub primary_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitabilityCell {
    pub group: String,
    pub count: usize,
}

/// Share of configured platforms that are active
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceScore {
    pub score: u32,
    pub active: usize,
    pub inactive: usize,
    pub tracked_competitors: usize,
}

/// An inactive platform worth activating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub platform: String,
    pub committed: u32,
    pub category: String,
    pub primary_content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Potential {
    Highest,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotentialHashtag {
    pub tag: String,
    pub usage_context: String,
    pub score: u8,
    pub potential: Potential,
}

/// Posting windows named in the hashtag guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostingWindow {
    BusinessHours,
    PeakHours,
    Evening,
    Weekends,
    Other,
}

impl PostingWindow {
    /// Fixed display order
    pub const ALL: [PostingWindow; 5] = [
        PostingWindow::BusinessHours,
        PostingWindow::PeakHours,
        PostingWindow::Evening,
        PostingWindow::Weekends,
        PostingWindow::Other,
    ];

    /// Classify a free-text best posting time
    pub fn classify(best_posting_time: &str) -> Self {
        let text = best_posting_time.to_lowercase();
        if text.starts_with("business hours") {
            PostingWindow::BusinessHours
        } else if text.starts_with("peak hours") {
            PostingWindow::PeakHours
        } else if text.starts_with("evening") {
            PostingWindow::Evening
        } else if text.starts_with("weekend") {
            PostingWindow::Weekends
        } else {
            PostingWindow::Other
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostingWindow::BusinessHours => "Business Hours",
            PostingWindow::PeakHours => "Peak Hours",
            PostingWindow::Evening => "Evening",
            PostingWindow::Weekends => "Weekends",
            PostingWindow::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub window: PostingWindow,
    pub hashtags: Vec<String>,
}

/// Every panel of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    pub header: HeaderMetrics,
    pub status_chart: ChartSeries,
    pub metrics_summary: MetricsSummary,
    pub content_pipeline: Vec<PipelineEntry>,
    pub platform_cards: Vec<PlatformCard>,
    pub category_chart: ChartSeries,
    pub posting_schedule: Vec<ScheduleSlot>,
    pub suitability_matrix: Vec<SuitabilityCell>,
    pub presence: PresenceScore,
    pub gap_analysis: Vec<Opportunity>,
    pub priority_platforms: Vec<Opportunity>,
    pub potential_hashtags: Vec<PotentialHashtag>,
}
