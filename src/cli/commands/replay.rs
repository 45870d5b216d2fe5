//! Replay command implementation for the telemetry replay CLI
//!
//! This module contains the main feed loop: load a dataset (file or built-in
//! sample), then emit one normalized record per tick to stdout as a JSON
//! line, cycling through the dataset until the cycle limit is reached or the
//! process is interrupted.

use super::shared::{ReplayStats, build_configuration, load_feed, setup_logging};
use crate::app::services::feed::TelemetryFeed;
use crate::cli::args::ReplayArgs;
use crate::{Error, Result};
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Replay command runner for the telemetry replay tool
///
/// This function orchestrates the replay workflow:
/// 1. Set up logging and validate arguments
/// 2. Load the dataset into a feed
/// 3. Emit records at the configured pace until done or interrupted
/// 4. Report summary statistics
pub async fn run_replay(args: ReplayArgs) -> Result<ReplayStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting telemetry replay");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = build_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let feed = load_feed(
        args.input.as_deref(),
        args.label.as_deref(),
        config.replay.seed_builtin_sample,
    )
    .await?;
    let dataset = feed.info().await;
    info!(
        "Replaying '{}': {} records, {} columns, {}ms interval",
        dataset.source_label,
        dataset.total_rows,
        dataset.columns.len(),
        config.replay.interval_ms
    );

    let max_records = config
        .replay
        .max_cycles
        .map(|cycles| cycles.saturating_mul(dataset.total_rows as u64));
    let emitted = emit_loop(&feed, config.interval(), max_records).await?;

    let mut stats = ReplayStats {
        records_emitted: emitted,
        records_loaded: dataset.total_rows,
        ..Default::default()
    };
    if dataset.total_rows > 0 {
        stats.full_cycles = (emitted / dataset.total_rows) as u64;
    }
    stats.elapsed = start_time.elapsed();

    if !args.quiet {
        eprintln!("{}", stats.summary());
    }

    Ok(stats)
}

/// Emit records to stdout at a fixed pace
///
/// Pulls the next record on every tick and prints it as a single JSON line.
/// Stops when `max_records` is reached, when the dataset is empty, or on
/// CTRL+C. Returns the number of records emitted.
async fn emit_loop(
    feed: &TelemetryFeed,
    every: Duration,
    max_records: Option<u64>,
) -> Result<usize> {
    let mut interval = tokio::time::interval(every);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut emitted: usize = 0;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                match feed.next_record().await {
                    Some(record) => {
                        let line = serde_json::to_string(&record).map_err(|e| {
                            Error::configuration(format!("Failed to serialize record: {}", e))
                        })?;
                        println!("{}", line);
                        emitted += 1;

                        if let Some(max) = max_records {
                            if emitted as u64 >= max {
                                info!("Reached cycle limit after {} records", emitted);
                                break;
                            }
                        }
                    }
                    None => {
                        warn!("Dataset is empty, nothing to replay");
                        break;
                    }
                }
            }
            result = &mut ctrl_c => {
                match result {
                    Ok(()) => {
                        info!("Received CTRL+C, stopping replay");
                        break;
                    }
                    Err(e) => {
                        return Err(Error::io("Failed to listen for CTRL+C", e));
                    }
                }
            }
        }
    }

    Ok(emitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SAMPLE_RECORD_COUNT;
    use serde_json::json;

    #[tokio::test]
    async fn test_emit_loop_respects_record_cap() {
        let feed = TelemetryFeed::with_builtin_sample();

        let emitted = emit_loop(&feed, Duration::from_millis(1), Some(SAMPLE_RECORD_COUNT as u64))
            .await
            .unwrap();

        assert_eq!(emitted, SAMPLE_RECORD_COUNT);
        // One full cycle lands the cursor back at the start
        assert_eq!(feed.info().await.current_index, 0);
    }

    #[tokio::test]
    async fn test_emit_loop_partial_cycle() {
        let feed = TelemetryFeed::with_builtin_sample();

        let emitted = emit_loop(&feed, Duration::from_millis(1), Some(5)).await.unwrap();

        assert_eq!(emitted, 5);
        assert_eq!(feed.info().await.current_index, 5);
    }

    #[tokio::test]
    async fn test_emit_loop_on_empty_feed() {
        let feed = TelemetryFeed::new();

        let emitted = emit_loop(&feed, Duration::from_millis(1), None).await.unwrap();
        assert_eq!(emitted, 0);
    }

    #[tokio::test]
    async fn test_emit_loop_wraps_across_cycles() {
        let feed = TelemetryFeed::new();
        feed.ingest_value(&json!([{"v": 1}, {"v": 2}, {"v": 3}]), "short")
            .await
            .unwrap();

        // Two full cycles over a three-record dataset
        let emitted = emit_loop(&feed, Duration::from_millis(1), Some(6)).await.unwrap();

        assert_eq!(emitted, 6);
        assert_eq!(feed.info().await.current_index, 0);
    }
}
