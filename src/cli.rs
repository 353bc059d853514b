//! Command-line interface components.

use crate::config::PreviewConfig;
use crate::constants::PREVIEW_ROW_LIMIT;
use crate::preview::{render_json, render_table, status_message, summary_line};
use crate::upload::{UploadOutcome, UploadSession};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};

/// Output format for the final preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "csv-preview")]
#[command(about = "Preview the first rows of CSV files with inferred cell types")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// CSV files to upload, in order; the last successful one is shown
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Output format for the preview
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Number of data rows to preview (1-10)
    #[arg(short, long, default_value_t = PREVIEW_ROW_LIMIT)]
    pub rows: usize,

    /// Text shown for empty cells
    #[arg(long, default_value = "null")]
    pub null_marker: String,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Clear the dataset after loading
    #[arg(long)]
    pub clear: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Build the preview configuration from the flags
    pub fn to_config(&self) -> PreviewConfig {
        let config = PreviewConfig::default()
            .with_preview_rows(self.rows)
            .with_null_marker(self.null_marker.as_str());

        if self.no_color {
            config.without_color()
        } else {
            config
        }
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Set up structured logging on stderr
///
/// Quiet mode uses the compact format; otherwise lines carry the uptime.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csv_preview={}", log_level)));

    let layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);
    let layer = if args.quiet {
        layer.compact().boxed()
    } else {
        layer.with_timer(fmt::time::uptime()).boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Load every file through one session and print the final preview
///
/// Returns whether a dataset is loaded at the end (or was loaded before
/// `--clear` removed it).
pub async fn run(args: Args) -> Result<bool> {
    let config = args.to_config();
    config.validate().context("Invalid preview settings")?;

    if !config.color {
        colored::control::set_override(false);
    }

    let mut session = UploadSession::new(config);
    let mut loaded_any = false;

    for path in &args.files {
        info!("Uploading {}", path.display());
        let outcome = session.load(path).await;
        loaded_any |= outcome.is_loaded();
        report(&outcome);
    }

    if session.has_dataset() {
        let dataset = session.current();
        println!("{}: {}", dataset.source_name, summary_line(dataset));
    }

    if args.clear {
        report(&session.reset());
    }

    let dataset = session.current();
    let output = match args.format {
        OutputFormat::Table => render_table(dataset, session.config()),
        OutputFormat::Json => render_json(dataset).context("Failed to serialize dataset")?,
    };
    println!("{}", output);

    Ok(loaded_any)
}

fn report(outcome: &UploadOutcome) {
    let message = status_message(outcome);
    match outcome {
        UploadOutcome::Failed { .. } => eprintln!("{}", message),
        _ => println!("{}", message),
    }
}
