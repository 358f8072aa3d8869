use crate::dataset::Dataset;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a dataset JSON file
pub fn validate_dataset_file(file_path: impl AsRef<Path>) -> Result<()> {
    let file_path = file_path.as_ref();
    println!("Validating dataset: {}", file_path.display());

    let dataset = Dataset::from_file(file_path)
        .with_context(|| format!("Invalid dataset {}", file_path.display()))?;

    println!("✓ Valid dataset JSON");
    println!("  Platforms: {}", dataset.platforms().len());
    println!("  Hashtags: {}", dataset.hashtags().len());
    println!("  Competitors: {}", dataset.competitors().len());

    Ok(())
}

/// Display report schema information
pub fn display_schema(show_details: bool) {
    println!("Reddot Dashboard Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string               - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string          - RFC 3339 timestamp");
        println!("  platform_stats: object        - Platform counts by status");
        println!("    active, inactive, already_in_place: number");
        println!("    total: number               - Configured platform total");
        println!("  content_metrics: object");
        println!("    total_committed: number");
        println!("    total_drafted: number");
        println!("    completion_rate: number     - Drafted / committed, rounded %");
        println!("  hashtag_analytics: object");
        println!("    category_breakdown: array   - count, total_score, avg_score per category");
        println!("    top_hashtags: array         - Score >= 8, highest first");
        println!("    total_categories: number");
        println!("  platform_categories: array    - count, active, inactive, total_committed");
        println!("  top_hashtags: array           - Top list truncated to the export limit");
        println!("  inactive_with_potential: array - Inactive platforms with a content plan");
        println!("  competitors: array            - rank, name, website?");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Reddot Dashboard v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Content strategy analytics for Reddot Events.");
}
