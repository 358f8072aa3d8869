//! Reddot Dashboard CLI
//!
//! Prints and exports content strategy statistics for Reddot Events.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use std::path::PathBuf;

use reddot_dashboard::commands::{
    display_schema, display_version, execute_export, hashtags_output, platforms_output,
    validate_args, validate_dataset_file, ExportArgs, HashtagQuery, PlatformQuery,
};
use reddot_dashboard::dataset::{BuiltinData, DatasetSource, JsonFile, PlatformStatus};
use reddot_dashboard::store::{Dashboard, DashboardHandle};
use reddot_dashboard::utils::config::{
    DashboardConfig, CONFIGURED_PLATFORM_TOTAL, DEFAULT_TOP_HASHTAGS,
};
use reddot_dashboard::view::{render_competitors, render_summary};

/// Reddot Dashboard - content strategy analytics
#[derive(Parser, Debug)]
#[command(name = "reddot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Dataset JSON file to use instead of the built-in data
    #[arg(long, global = true, env = "REDDOT_DATA")]
    data: Option<PathBuf>,

    /// Platform total reported in statistics
    #[arg(long, global = true, env = "REDDOT_PLATFORM_TOTAL", default_value_t = CONFIGURED_PLATFORM_TOTAL)]
    platform_total: usize,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the dashboard summary
    Summary {
        /// Number of top hashtags to list
        #[arg(long, default_value_t = DEFAULT_TOP_HASHTAGS)]
        top: usize,
    },

    /// List platforms
    Platforms {
        /// Only platforms with this status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        /// Case-insensitive search over name, category and content
        #[arg(short, long)]
        search: Option<String>,

        /// Only inactive platforms that already have a content plan
        #[arg(long)]
        potential: bool,
    },

    /// List hashtags
    Hashtags {
        /// Only the N highest-scoring hashtags (score 8+)
        #[arg(long)]
        top: Option<usize>,

        /// Case-insensitive category filter
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive search over tag, category and usage context
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List tracked competitors in rank order
    Competitors,

    /// Export all statistics as a JSON report
    Export {
        /// Output path for JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Number of top hashtags to include
        #[arg(long, default_value_t = DEFAULT_TOP_HASHTAGS)]
        top: usize,

        /// Write compact JSON
        #[arg(long)]
        compact: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a dataset JSON file
    Validate {
        /// Path to dataset JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display report schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StatusArg {
    Active,
    NotActive,
    AlreadyInPlace,
}

impl From<StatusArg> for PlatformStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => PlatformStatus::Active,
            StatusArg::NotActive => PlatformStatus::NotActive,
            StatusArg::AlreadyInPlace => PlatformStatus::AlreadyInPlace,
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = DashboardConfig::new().with_platform_total(cli.platform_total);

    // Execute command
    match cli.command {
        Commands::Summary { top } => {
            let dashboard = load_dashboard(cli.data, config)?;
            println!("{}", render_summary(&dashboard, top));
        }

        Commands::Platforms {
            status,
            search,
            potential,
        } => {
            let dashboard = load_dashboard(cli.data, config)?;
            let query = PlatformQuery {
                status: status.map(PlatformStatus::from),
                search,
                potential,
            };
            println!("{}", platforms_output(&dashboard, &query));
        }

        Commands::Hashtags {
            top,
            category,
            search,
        } => {
            let dashboard = load_dashboard(cli.data, config)?;
            let query = HashtagQuery {
                top,
                category,
                search,
            };
            println!("{}", hashtags_output(&dashboard, &query));
        }

        Commands::Competitors => {
            let dashboard = load_dashboard(cli.data, config)?;
            println!("{}", render_competitors(dashboard.competitors()));
        }

        Commands::Export {
            output,
            top,
            compact,
            summary,
        } => {
            let args = ExportArgs {
                output_json: output,
                top_hashtags: top,
                compact,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            let dashboard = load_dashboard(cli.data, config)?;
            execute_export(&dashboard, &args)?;
        }

        Commands::Validate { file } => {
            validate_dataset_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Load the dashboard from the selected source
///
/// **Private** - shared by every data command
fn load_dashboard(data: Option<PathBuf>, config: DashboardConfig) -> Result<std::sync::Arc<Dashboard>> {
    let source: Box<dyn DatasetSource> = match data {
        Some(path) => Box::new(JsonFile(path)),
        None => Box::new(BuiltinData),
    };

    let handle = DashboardHandle::new(config);
    let dashboard = handle
        .load(source.as_ref())
        .with_context(|| format!("Failed to load {}", source.describe()))?;

    Ok(dashboard)
}
