//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::app::services::feed::TelemetryFeed;
use crate::cli::args::ReplayArgs;
use crate::config::Config;
use crate::constants::DEFAULT_SOURCE_LABEL;
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Replay statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ReplayStats {
    /// Number of records emitted to stdout
    pub records_emitted: usize,
    /// Number of complete passes over the dataset
    pub full_cycles: u64,
    /// Number of records in the loaded dataset
    pub records_loaded: usize,
    /// Total command run time
    pub elapsed: std::time::Duration,
}

impl ReplayStats {
    /// Records emitted per second over the run
    pub fn emit_rate(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds > 0.0 {
            self.records_emitted as f64 / seconds
        } else {
            0.0
        }
    }

    /// One-line summary for end-of-run reporting
    pub fn summary(&self) -> String {
        format!(
            "Emitted {} records ({} full cycles) from {} loaded in {:.1}s ({:.1} records/s)",
            self.records_emitted,
            self.full_cycles,
            self.records_loaded,
            self.elapsed.as_secs_f64(),
            self.emit_rate()
        )
    }
}

/// Build the runtime configuration from replay arguments
pub fn build_configuration(args: &ReplayArgs) -> Result<Config> {
    let mut config = Config::default()
        .with_interval_ms(args.interval_ms)
        .with_log_level(args.get_log_level());

    if let Some(cycles) = args.cycles {
        config = config.with_max_cycles(cycles);
    }

    if args.input.is_some() {
        config = config.without_builtin_sample();
    }

    config.validate()?;
    Ok(config)
}

/// Set up structured logging for CLI commands
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("telemetry_replay={}", log_level)));

    // Set up subscriber based on output format preference
    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Read a telemetry export file into memory
pub async fn read_dataset_bytes(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))
}

/// Resolve the source label for a file-based dataset
///
/// An explicit label wins; otherwise the file name is used, falling back to
/// the default label for paths without one.
pub fn resolve_label(path: &Path, label_override: Option<&str>) -> String {
    if let Some(label) = label_override {
        return label.to_string();
    }

    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_SOURCE_LABEL.to_string())
}

/// Build a feed from the CLI input selection
///
/// With no input path the feed starts from the built-in sample dataset, or
/// empty when sample seeding is disabled; otherwise the file is read and
/// ingested, failing fast on any rejection.
pub async fn load_feed(
    input: Option<&Path>,
    label_override: Option<&str>,
    seed_builtin_sample: bool,
) -> Result<TelemetryFeed> {
    match input {
        None if seed_builtin_sample => {
            info!("No input file given, using built-in sample dataset");
            Ok(TelemetryFeed::with_builtin_sample())
        }
        None => {
            info!("No input file given, starting with an empty feed");
            Ok(TelemetryFeed::new())
        }
        Some(path) => {
            let raw = read_dataset_bytes(path).await?;
            let label = resolve_label(path, label_override);
            let feed = TelemetryFeed::new();
            let dataset = feed.ingest_bytes(&raw, label).await?;
            debug!("{}", dataset.summary());
            Ok(feed)
        }
    }
}
