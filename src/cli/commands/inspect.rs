//! Inspect command implementation for the telemetry replay CLI
//!
//! This module loads a dataset the same way the replay command does and
//! reports its structure (row count, columns, sample record) without
//! starting the feed. Useful for verifying an export before replaying it.

use super::shared::{ReplayStats, load_feed, setup_logging};
use crate::app::models::{DatasetInfo, TagRecord};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::{Error, Result};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Inspect command runner for the telemetry replay tool
pub async fn run_inspect(args: InspectArgs) -> Result<ReplayStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), false)?;

    info!("Inspecting dataset");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let feed = load_feed(args.input.as_deref(), None, true).await?;
    let dataset = feed.info().await;

    match args.output_format {
        OutputFormat::Human => {
            let preview = if args.rows > 0 {
                let mut records = feed.all_records().await;
                records.truncate(args.rows);
                records
            } else {
                Vec::new()
            };
            println!("{}", render_human_report(&dataset, &preview)?);
        }
        OutputFormat::Json => {
            let report = serde_json::to_string_pretty(&dataset)
                .map_err(|e| Error::configuration(format!("Failed to serialize report: {}", e)))?;
            println!("{}", report);
        }
    }

    Ok(ReplayStats {
        records_loaded: dataset.total_rows,
        elapsed: start_time.elapsed(),
        ..Default::default()
    })
}

/// Render the human-readable dataset report
fn render_human_report(dataset: &DatasetInfo, preview: &[TagRecord]) -> Result<String> {
    let mut report = String::new();

    report.push_str(&format!("\n{}\n", "Dataset Report".bright_green().bold()));
    report.push_str(&format!(
        "  {} {}\n",
        "Source:".bright_cyan(),
        dataset.source_label.bright_white().bold()
    ));
    report.push_str(&format!(
        "  {} {}\n",
        "Records:".bright_cyan(),
        dataset.total_rows.to_string().bright_white()
    ));
    report.push_str(&format!(
        "  {} {}\n",
        "Cursor:".bright_cyan(),
        dataset.current_index.to_string().bright_white()
    ));
    report.push_str(&format!(
        "  {} {}\n",
        "Columns:".bright_cyan(),
        dataset.columns.len().to_string().bright_white()
    ));
    for column in &dataset.columns {
        report.push_str(&format!("    - {}\n", column));
    }

    if let Some(sample) = &dataset.sample_row {
        let line = serialize_record(sample)?;
        report.push_str(&format!("  {} {}\n", "Sample:".bright_cyan(), line));
    }

    if !preview.is_empty() {
        report.push_str(&format!(
            "\n{}\n",
            format!("First {} records", preview.len()).bright_green().bold()
        ));
        for record in preview {
            report.push_str(&format!("  {}\n", serialize_record(record)?));
        }
    }

    Ok(report)
}

fn serialize_record(record: &TagRecord) -> Result<String> {
    serde_json::to_string(record)
        .map_err(|e| Error::configuration(format!("Failed to serialize record: {}", e)))
}
