use pretty_assertions::assert_eq;
use reddot_dashboard::aggregator::{
    calculate_content_metrics, calculate_platform_categories, compute_aggregates, ContentMetrics,
    PlatformStats,
};
use reddot_dashboard::dataset::{Dataset, Metric, PlatformStatus};
use reddot_dashboard::utils::config::DashboardConfig;

fn builtin() -> Dataset {
    Dataset::builtin().unwrap()
}

#[test]
fn test_platform_stats_for_builtin_data() {
    let aggregates = compute_aggregates(&builtin(), &DashboardConfig::default());

    assert_eq!(
        aggregates.platform_stats,
        PlatformStats {
            active: 6,
            inactive: 7,
            already_in_place: 1,
            total: 13,
        }
    );
}

#[test]
fn test_platform_total_is_configured_not_counted() {
    let dataset = builtin();
    assert_eq!(dataset.platforms().len(), 14);

    let aggregates = compute_aggregates(&dataset, &DashboardConfig::default());
    assert_eq!(aggregates.platform_stats.total, 13);

    let config = DashboardConfig::new().with_platform_total(20);
    assert_eq!(compute_aggregates(&dataset, &config).platform_stats.total, 20);
}

#[test]
fn test_content_metrics_for_builtin_data() {
    let metrics = calculate_content_metrics(builtin().platforms());

    assert_eq!(
        metrics,
        ContentMetrics {
            total_committed: 1030,
            total_drafted: 109,
            completion_rate: 11,
        }
    );
}

#[test]
fn test_every_metric_is_count_or_root_sentinel() {
    let dataset = builtin();

    for platform in dataset.platforms() {
        for metric in [platform.committed, platform.drafted, platform.published] {
            if platform.is_root() {
                assert_eq!(metric, Metric::NotApplicable, "{}", platform.name);
            } else {
                assert!(metric.count().is_some(), "{}", platform.name);
            }
        }
    }
    assert_eq!(dataset.platforms().iter().filter(|p| p.is_root()).count(), 1);
}

#[test]
fn test_hashtag_category_breakdown() {
    let aggregates = compute_aggregates(&builtin(), &DashboardConfig::default());
    let analytics = &aggregates.hashtag_analytics;

    let summary: Vec<(&str, usize, f64)> = analytics
        .category_breakdown
        .iter()
        .map(|b| (b.category.as_str(), b.count, b.avg_score))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("Brand Events", 2, 9.5),
            ("Core Events", 2, 9.0),
            ("Creative Events", 4, 8.5),
            ("Professional Events", 5, 7.2),
            ("Personal Events", 3, 8.3),
            ("Service Events", 1, 8.0),
            ("Technology Events", 1, 7.0),
            ("Premium Events", 1, 8.0),
            ("Eco Events", 1, 8.0),
        ]
    );
    assert_eq!(analytics.total_categories, 9);
}

#[test]
fn test_top_hashtags_in_aggregates() {
    let aggregates = compute_aggregates(&builtin(), &DashboardConfig::default());
    let top = &aggregates.hashtag_analytics.top_hashtags;

    assert_eq!(top.len(), 14);
    assert!(top.iter().all(|h| h.popularity_score >= 8));
    assert!(top.windows(2).all(|w| w[0].popularity_score >= w[1].popularity_score));
}

#[test]
fn test_platform_categories() {
    let categories = calculate_platform_categories(builtin().platforms());

    assert_eq!(categories.len(), 12);
    assert_eq!(categories[0].category, "Digital Identity");
    assert_eq!(categories[0].total_committed, 0);

    let visual = categories.iter().find(|c| c.category == "Visual Content").unwrap();
    assert_eq!((visual.count, visual.active, visual.inactive, visual.total_committed), (2, 2, 0, 360));

    let writing = categories
        .iter()
        .find(|c| c.category == "Professional Writing")
        .unwrap();
    assert_eq!((writing.count, writing.active, writing.inactive, writing.total_committed), (2, 1, 1, 80));
}

#[test]
fn test_compute_aggregates_is_idempotent() {
    let dataset = builtin();
    let config = DashboardConfig::default();

    let first = compute_aggregates(&dataset, &config);
    let second = compute_aggregates(&dataset, &config);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_status_counts_cover_every_record() {
    let dataset = builtin();
    let stats = compute_aggregates(&dataset, &DashboardConfig::default()).platform_stats;

    assert_eq!(
        stats.active + stats.inactive + stats.already_in_place,
        dataset.platforms().len()
    );
    assert_eq!(
        dataset
            .platforms()
            .iter()
            .filter(|p| p.status == PlatformStatus::AlreadyInPlace)
            .count(),
        1
    );
}
