//! JSON report output writer.
//!
//! Writes DashboardReport structs to JSON files with proper formatting.

use super::report::DashboardReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `report` - Report data to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let report = build_report(&dashboard, 10);
/// write_report(&report, "report.json")?;
/// ```
pub fn write_report(report: &DashboardReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    let writer = open_output(output_path)?;

    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// Write report as compact JSON (no formatting)
///
/// **Public** - useful when file size matters
pub fn write_report_compact(
    report: &DashboardReport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing compact report to: {}", output_path.display());

    let writer = open_output(output_path)?;

    serde_json::to_writer(writer, report)?;
    Ok(())
}

/// Serialize a report to a pretty JSON string
///
/// **Public** - useful for tests and stdout output
pub fn report_to_string(report: &DashboardReport) -> Result<String, OutputError> {
    serde_json::to_string_pretty(report)
        .map_err(OutputError::SerializationFailed)
}

/// Read a report from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<DashboardReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let report: DashboardReport = serde_json::from_reader(File::open(input_path)?)?;
    debug!("Report version {} from {}", report.version, report.generated_at);
    Ok(report)
}

/// Validate the path and open a buffered writer, creating parents
///
/// **Private** - shared by the pretty and compact writers
fn open_output(output_path: &Path) -> Result<BufWriter<File>, OutputError> {
    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent)
                .map_err(|e| OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                )))?;
        }
    }

    Ok(BufWriter::new(File::create(output_path)?))
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
