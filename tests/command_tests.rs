use reddot_dashboard::commands::{
    execute_export, hashtags_output, platforms_output, validate_args, validate_dataset_file,
    ExportArgs, HashtagQuery, PlatformQuery,
};
use reddot_dashboard::dataset::{BuiltinData, PlatformStatus};
use reddot_dashboard::output::read_report;
use reddot_dashboard::store::DashboardHandle;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_validate_args_valid() {
    let args = ExportArgs {
        output_json: PathBuf::from("out/report.json"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_empty_output() {
    let args = ExportArgs {
        output_json: PathBuf::new(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_export_writes_report() {
    let dashboard = DashboardHandle::default().load(&BuiltinData).unwrap();
    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join("report.json");

    let args = ExportArgs {
        output_json: output.clone(),
        top_hashtags: 5,
        compact: true,
        print_summary: false,
    };

    execute_export(&dashboard, &args).unwrap();

    let report = read_report(&output).unwrap();
    assert_eq!(report.top_hashtags.len(), 5);
    assert_eq!(report.platform_stats.total, 13);
}

#[test]
fn test_execute_export_into_directory_fails() {
    let dashboard = DashboardHandle::default().load(&BuiltinData).unwrap();
    let temp_dir = tempfile::tempdir().unwrap();

    let args = ExportArgs {
        output_json: temp_dir.path().to_path_buf(),
        ..Default::default()
    };

    assert!(execute_export(&dashboard, &args).is_err());
}

#[test]
fn test_validate_dataset_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(include_bytes!("../data/reddot.json")).unwrap();
    assert!(validate_dataset_file(file.path()).is_ok());

    let mut bad = NamedTempFile::new().unwrap();
    bad.write_all(br#"{"platforms": [], "hashtags": [], "competitors": []}"#)
        .unwrap();
    // No root entry
    assert!(validate_dataset_file(bad.path()).is_err());
}

#[test]
fn test_platforms_output_filters_by_status() {
    let dashboard = DashboardHandle::default().load(&BuiltinData).unwrap();
    let output = platforms_output(
        &dashboard,
        &PlatformQuery {
            status: Some(PlatformStatus::AlreadyInPlace),
            ..Default::default()
        },
    );

    assert!(output.contains("Website"));
    assert!(output.contains("--"));
    assert!(output.ends_with("1 platform(s)"));
}

#[test]
fn test_hashtags_output_top_within_category() {
    let dashboard = DashboardHandle::default().load(&BuiltinData).unwrap();
    let output = hashtags_output(
        &dashboard,
        &HashtagQuery {
            top: Some(10),
            category: Some("creative".to_string()),
            search: None,
        },
    );

    assert!(output.contains("#EventDesign"));
    assert!(output.contains("#EventPhotography"));
    assert!(!output.contains("#EventInnovation"));
    assert!(output.ends_with("3 hashtag(s)"));
}
