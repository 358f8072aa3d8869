//! Export command implementation.
//!
//! The export command:
//! 1. Takes the ready dashboard
//! 2. Builds a versioned report of every aggregate query
//! 3. Writes it as JSON
//! 4. Optionally prints a text summary

use super::models::ExportArgs;
use crate::output::{build_report, write_report, write_report_compact};
use crate::store::Dashboard;
use crate::view::render_summary;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Upper bound for `--top`; the dataset holds dozens of hashtags at most
const MAX_TOP_HASHTAGS: usize = 1000;

/// Execute the export command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * File write errors
pub fn execute_export(dashboard: &Dashboard, args: &ExportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/2: Building report...");
    let report = build_report(dashboard, args.top_hashtags);

    debug!(
        "Report: {} categories, {} top hashtags, {} opportunities",
        report.hashtag_analytics.total_categories,
        report.top_hashtags.len(),
        report.inactive_with_potential.len()
    );

    info!("Step 2/2: Writing report...");
    let written = if args.compact {
        write_report_compact(&report, &args.output_json)
    } else {
        write_report(&report, &args.output_json)
    };
    written.context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", render_summary(dashboard, args.top_hashtags));
    }

    let elapsed = start_time.elapsed();
    info!("Export completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate export arguments
///
/// **Public** - can be called before execute_export for early validation
pub fn validate_args(args: &ExportArgs) -> Result<()> {
    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.top_hashtags > MAX_TOP_HASHTAGS {
        anyhow::bail!("top hashtags is too large (max {})", MAX_TOP_HASHTAGS);
    }

    Ok(())
}
