//! Check command implementation for the telemetry replay CLI
//!
//! This module validates a telemetry export without loading it into a feed:
//! the file is decoded and normalized exactly as ingestion would, and the
//! first rule violation is reported. Exits non-zero when the export would be
//! rejected.

use super::shared::{ReplayStats, read_dataset_bytes, setup_logging};
use crate::app::models::TagRecord;
use crate::app::services::normalizer::normalize_dataset;
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::{Error, Result};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Validation outcome for an accepted export
#[derive(Debug, Clone)]
pub struct CheckSummary {
    /// Number of records the export normalizes to
    pub records: usize,
    /// Column names taken from the first record
    pub columns: Vec<String>,
}

/// Check command runner for the telemetry replay tool
pub async fn run_check(args: CheckArgs) -> Result<ReplayStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), false)?;

    info!("Checking export file: {}", args.input.display());
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let raw = read_dataset_bytes(&args.input).await?;

    match evaluate_dataset(&raw) {
        Ok(summary) => {
            report_valid(&args, &summary)?;
            Ok(ReplayStats {
                records_loaded: summary.records,
                elapsed: start_time.elapsed(),
                ..Default::default()
            })
        }
        Err(error) => {
            report_invalid(&args, &error)?;
            Err(error)
        }
    }
}

/// Run the export through the ingestion pipeline without storing anything
fn evaluate_dataset(raw: &[u8]) -> Result<CheckSummary> {
    let parsed: serde_json::Value = serde_json::from_slice(raw)
        .map_err(|e| Error::decode("payload is not valid JSON", Some(e)))?;

    let records = normalize_dataset(&parsed)?;
    let columns = records
        .first()
        .map(TagRecord::tag_names)
        .unwrap_or_default();

    Ok(CheckSummary {
        records: records.len(),
        columns,
    })
}

fn report_valid(args: &CheckArgs, summary: &CheckSummary) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("\n{}", "Export Check".bright_green().bold());
            println!(
                "  {} {}",
                "Status:".bright_cyan(),
                "VALID".bright_green().bold()
            );
            println!(
                "  {} {}",
                "Records:".bright_cyan(),
                summary.records.to_string().bright_white()
            );
            println!(
                "  {} {}",
                "Columns:".bright_cyan(),
                summary.columns.len().to_string().bright_white()
            );
            println!("    {}", summary.columns.join(", "));
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "valid": true,
                "records": summary.records,
                "columns": summary.columns,
            });
            println!("{}", to_pretty(&report)?);
        }
    }

    Ok(())
}

fn report_invalid(args: &CheckArgs, error: &Error) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("\n{}", "Export Check".bright_red().bold());
            println!(
                "  {} {}",
                "Status:".bright_cyan(),
                "INVALID".bright_red().bold()
            );
            println!("  {} {}", "Reason:".bright_cyan(), error);
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "valid": false,
                "error": error.to_string(),
            });
            println!("{}", to_pretty(&report)?);
        }
    }

    Ok(())
}

fn to_pretty(report: &serde_json::Value) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| Error::configuration(format!("Failed to serialize report: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_export_summary() {
        let raw = br#"[{"a": 1, "b": "2.5"}, {"a": null, "b": true}]"#;

        let summary = evaluate_dataset(raw).unwrap();
        assert_eq!(summary.records, 2);
        assert_eq!(summary.columns, vec!["a", "b"]);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = evaluate_dataset(b"{ not json");
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn test_wrong_shape_rejected() {
        let result = evaluate_dataset(br#"{"a": 1}"#);
        assert!(matches!(result, Err(Error::InvalidShape { .. })));
    }

    #[test]
    fn test_record_without_fields_rejected() {
        let result = evaluate_dataset(br#"[{"a": 1}, {}]"#);
        assert!(matches!(result, Err(Error::NoValidFields { index: 1 })));
    }
}
