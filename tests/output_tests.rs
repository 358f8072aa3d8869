use reddot_dashboard::dataset::BuiltinData;
use reddot_dashboard::output::{build_report, read_report, report_to_string, write_report};
use reddot_dashboard::store::DashboardHandle;
use tempfile::NamedTempFile;

#[test]
fn test_report_contents() {
    let dashboard = DashboardHandle::default().load(&BuiltinData).unwrap();
    let report = build_report(&dashboard, 3);

    assert_eq!(report.version, "1.0.0");
    assert_eq!(report.top_hashtags.len(), 3);
    assert_eq!(report.hashtag_analytics.top_hashtags.len(), 14);
    assert_eq!(report.inactive_with_potential[0].name, "Google Business");
    assert_eq!(report.competitors.len(), 10);
    assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
}

#[test]
fn test_write_and_read_report() {
    let dashboard = DashboardHandle::default().load(&BuiltinData).unwrap();
    let report = build_report(&dashboard, 10);
    let temp_file = NamedTempFile::new().unwrap();

    write_report(&report, temp_file.path()).unwrap();
    let loaded = read_report(temp_file.path()).unwrap();

    assert_eq!(loaded.platform_stats, report.platform_stats);
    assert_eq!(loaded.content_metrics, report.content_metrics);
    assert_eq!(loaded.top_hashtags, report.top_hashtags);
}

#[test]
fn test_report_json_field_names() {
    let dashboard = DashboardHandle::default().load(&BuiltinData).unwrap();
    let json = report_to_string(&build_report(&dashboard, 1)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["platform_stats"]["already_in_place"], 1);
    assert_eq!(value["content_metrics"]["completion_rate"], 11);
    assert_eq!(value["top_hashtags"][0]["tag"], "#EventPlanning");
    assert_eq!(value["inactive_with_potential"][0]["status"], "Not Active");
}

#[test]
fn test_read_report_missing_file() {
    assert!(read_report("/nonexistent/report.json").is_err());
}
