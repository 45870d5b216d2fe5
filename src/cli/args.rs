//! Command-line argument definitions for the telemetry replay tool
//!
//! This module defines the complete CLI interface using clap derive API.
//! Each subcommand validates its own arguments before the command runs.

use crate::constants::DEFAULT_REPLAY_INTERVAL_MS;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the telemetry replay tool
///
/// Ingests loosely-typed rig telemetry exports (JSON arrays of tag/value
/// objects), normalizes them to numeric records and replays them as an
/// endless cyclic feed.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "telemetry-replay",
    version,
    about = "Normalize rig telemetry exports and replay them as a cyclic feed",
    long_about = "A tool that ingests semi-structured telemetry exports (JSON arrays of \
                  tag/value objects), coerces every reading to a numeric value, and replays \
                  the normalized records one at a time in an endless cycle. Starts from a \
                  deterministic built-in sample dataset when no input file is given, so the \
                  feed is usable before any real export exists."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the telemetry replay tool
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Replay a normalized dataset to stdout as a paced cyclic feed
    Replay(ReplayArgs),
    /// Show dataset structure and contents without replaying
    Inspect(InspectArgs),
    /// Validate an export file and report why it is rejected
    Check(CheckArgs),
}

/// Arguments for the replay command (main feed loop)
#[derive(Debug, Clone, Parser)]
pub struct ReplayArgs {
    /// Input telemetry export to replay
    ///
    /// A JSON file containing an array of tag/value objects. If not
    /// specified, the built-in sample dataset is replayed instead.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input telemetry export (JSON array of objects)"
    )]
    pub input: Option<PathBuf>,

    /// Source label to attach to the dataset
    ///
    /// Shown in dataset info and log output. Defaults to the input file
    /// name, or the built-in label when no input is given.
    #[arg(
        long = "label",
        value_name = "LABEL",
        help = "Source label for the dataset (defaults to the file name)"
    )]
    pub label: Option<String>,

    /// Delay between emitted records in milliseconds
    #[arg(
        long = "interval-ms",
        value_name = "MS",
        default_value_t = DEFAULT_REPLAY_INTERVAL_MS,
        help = "Delay between emitted records in milliseconds"
    )]
    pub interval_ms: u64,

    /// Stop after this many full passes over the dataset
    ///
    /// The feed is endless by default; this caps it for scripting and
    /// testing.
    #[arg(
        long = "cycles",
        value_name = "COUNT",
        help = "Stop after this many full passes over the dataset"
    )]
    pub cycles: Option<u64>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only emit records and errors; no startup banner or summary.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except records and errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command (dataset reports)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input telemetry export to inspect
    ///
    /// If not specified, the built-in sample dataset is inspected.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input telemetry export (JSON array of objects)"
    )]
    pub input: Option<PathBuf>,

    /// Output format for the dataset report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the dataset report"
    )]
    pub output_format: OutputFormat,

    /// Number of records to print after the summary
    ///
    /// Human format only; the JSON report always carries the sample row.
    #[arg(
        long = "rows",
        value_name = "COUNT",
        default_value_t = 0,
        help = "Print the first COUNT records after the summary (human format)"
    )]
    pub rows: usize,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the check command (export validation)
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Telemetry export to validate
    #[arg(value_name = "FILE", help = "Telemetry export to validate")]
    pub input: PathBuf,

    /// Output format for the validation report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the validation report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

fn validate_input_file(input: &Path) -> Result<()> {
    if !input.exists() {
        return Err(Error::configuration(format!(
            "Input file does not exist: {}",
            input.display()
        )));
    }

    if !input.is_file() {
        return Err(Error::configuration(format!(
            "Input path is not a file: {}",
            input.display()
        )));
    }

    Ok(())
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ReplayArgs {
    /// Validate the replay command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_input_file(input)?;
        }

        if self.interval_ms == 0 {
            return Err(Error::configuration(
                "Replay interval must be greater than zero".to_string(),
            ));
        }

        if self.cycles == Some(0) {
            return Err(Error::configuration(
                "Cycle limit must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
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

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_input_file(input)?;
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl CheckArgs {
    /// Validate the check command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for ReplayArgs {
    fn default() -> Self {
        Self {
            input: None,
            label: None,
            interval_ms: DEFAULT_REPLAY_INTERVAL_MS,
            cycles: None,
            verbose: 0,
            quiet: false,
        }
    }
}

impl Default for InspectArgs {
    fn default() -> Self {
        Self {
            input: None,
            output_format: OutputFormat::Human,
            rows: 0,
            verbose: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_export_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("export.json");
        std::fs::write(&path, r#"[{"a": 1}]"#).unwrap();
        path
    }

    #[test]
    fn test_replay_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        let args = ReplayArgs {
            input: Some(create_export_file(&temp_dir)),
            ..Default::default()
        };
        assert!(args.validate().is_ok());

        // No input is valid (built-in sample)
        assert!(ReplayArgs::default().validate().is_ok());

        // Zero interval
        let mut invalid_args = args.clone();
        invalid_args.interval_ms = 0;
        assert!(invalid_args.validate().is_err());

        // Zero cycle limit
        let mut invalid_args = args.clone();
        invalid_args.cycles = Some(0);
        assert!(invalid_args.validate().is_err());

        // Nonexistent input file
        let mut invalid_args = args.clone();
        invalid_args.input = Some(PathBuf::from("/nonexistent/export.json"));
        assert!(invalid_args.validate().is_err());

        // Directory instead of a file
        let mut invalid_args = args;
        invalid_args.input = Some(temp_dir.path().to_path_buf());
        assert!(invalid_args.validate().is_err());
    }

    #[test]
    fn test_inspect_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        let args = InspectArgs {
            input: Some(create_export_file(&temp_dir)),
            ..Default::default()
        };
        assert!(args.validate().is_ok());
        assert!(InspectArgs::default().validate().is_ok());

        let invalid_args = InspectArgs {
            input: Some(PathBuf::from("/nonexistent/export.json")),
            ..Default::default()
        };
        assert!(invalid_args.validate().is_err());
    }

    #[test]
    fn test_check_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        let args = CheckArgs {
            input: create_export_file(&temp_dir),
            output_format: OutputFormat::Human,
            verbose: 0,
        };
        assert!(args.validate().is_ok());

        let invalid_args = CheckArgs {
            input: PathBuf::from("/nonexistent/export.json"),
            output_format: OutputFormat::Human,
            verbose: 0,
        };
        assert!(invalid_args.validate().is_err());
    }

    #[test]
    fn test_replay_log_level_mapping() {
        let mut args = ReplayArgs::default();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 5;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_command_line_parsing() {
        let args = Args::try_parse_from([
            "telemetry-replay",
            "replay",
            "--interval-ms",
            "250",
            "--cycles",
            "2",
        ])
        .unwrap();

        match args.get_command() {
            Commands::Replay(replay_args) => {
                assert_eq!(replay_args.interval_ms, 250);
                assert_eq!(replay_args.cycles, Some(2));
                assert!(replay_args.input.is_none());
            }
            _ => panic!("Expected replay command"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["telemetry-replay", "replay", "-q", "-v"]);
        assert!(result.is_err());
    }
}
