//! Platform status counts and content pipeline totals.

use crate::dataset::{Platform, PlatformStatus};
use log::debug;
use serde::{Deserialize, Serialize};

/// Platform counts by status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub active: usize,
    pub inactive: usize,
    pub already_in_place: usize,

    /// Configured platform total, not the record count
    pub total: usize,
}

/// Content pipeline totals across platforms with numeric counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetrics {
    pub total_committed: u64,
    pub total_drafted: u64,

    /// Drafted as a rounded percentage of committed
    pub completion_rate: u32,
}

/// Count platforms by status
///
/// **Public** - `total` comes from configuration
pub fn calculate_platform_stats(platforms: &[Platform], configured_total: usize) -> PlatformStats {
    let count = |status: PlatformStatus| platforms.iter().filter(|p| p.status == status).count();

    PlatformStats {
        active: count(PlatformStatus::Active),
        inactive: count(PlatformStatus::NotActive),
        already_in_place: count(PlatformStatus::AlreadyInPlace),
        total: configured_total,
    }
}

/// Sum committed and drafted content
///
/// **Public** - not-applicable counts contribute nothing
pub fn calculate_content_metrics(platforms: &[Platform]) -> ContentMetrics {
    let total_committed: u64 = platforms
        .iter()
        .filter_map(|p| p.committed.count())
        .map(u64::from)
        .sum();
    let total_drafted: u64 = platforms
        .iter()
        .filter_map(|p| p.drafted.count())
        .map(u64::from)
        .sum();

    debug!(
        "Content totals: {} committed, {} drafted",
        total_committed, total_drafted
    );

    ContentMetrics {
        total_committed,
        total_drafted,
        completion_rate: rounded_percentage(total_drafted, total_committed),
    }
}

/// `round(part / whole * 100)`, or 0 when `whole` is 0
///
/// **Public** - shared by the view models for progress bars and scores
pub fn rounded_percentage(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

impl ContentMetrics {
    /// Get human-readable summary
    ///
    /// **Public** - for logging
    pub fn summary(&self) -> String {
        format!(
            "Committed: {} | Drafted: {} | Completion: {}%",
            self.total_committed, self.total_drafted, self.completion_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Metric;

    fn platform(name: &str, status: PlatformStatus, committed: Metric, drafted: Metric) -> Platform {
        Platform {
            sno: Some(1),
            name: name.to_string(),
            status,
            committed,
            drafted,
            published: Metric::Count(0),
            content_plan: String::new(),
            platform_link: String::new(),
            category: String::new(),
            primary_content: String::new(),
        }
    }

    #[test]
    fn test_platform_stats_uses_configured_total() {
        let platforms = vec![
            platform("A", PlatformStatus::Active, Metric::Count(1), Metric::Count(0)),
            platform("B", PlatformStatus::NotActive, Metric::Count(1), Metric::Count(0)),
        ];
        let stats = calculate_platform_stats(&platforms, 13);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.already_in_place, 0);
        assert_eq!(stats.total, 13);
    }

    #[test]
    fn test_content_metrics_skips_sentinel() {
        let platforms = vec![
            platform("Root", PlatformStatus::AlreadyInPlace, Metric::NotApplicable, Metric::NotApplicable),
            platform("A", PlatformStatus::Active, Metric::Count(180), Metric::Count(45)),
            platform("B", PlatformStatus::NotActive, Metric::Count(20), Metric::Count(5)),
        ];
        let metrics = calculate_content_metrics(&platforms);
        assert_eq!(metrics.total_committed, 200);
        assert_eq!(metrics.total_drafted, 50);
        assert_eq!(metrics.completion_rate, 25);
    }

    #[test]
    fn test_completion_rate_zero_committed() {
        let platforms = vec![platform(
            "A",
            PlatformStatus::Active,
            Metric::Count(0),
            Metric::Count(3),
        )];
        let metrics = calculate_content_metrics(&platforms);
        assert_eq!(metrics.completion_rate, 0);
    }

    #[test]
    fn test_rounded_percentage() {
        assert_eq!(rounded_percentage(109, 1030), 11);
        assert_eq!(rounded_percentage(1, 2), 50);
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(5, 0), 0);
    }
}
