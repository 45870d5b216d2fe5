//! Command implementations for the telemetry replay CLI
//!
//! This module contains the main command execution logic and shared
//! helpers for the CLI interface. Each command is implemented in its own
//! module for better organization and maintainability.

pub mod check;
pub mod inspect;
pub mod replay;
pub mod shared;

// Re-export the main types and functions for convenient access
pub use shared::ReplayStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the telemetry replay tool
///
/// This function dispatches to the appropriate subcommand handler based on CLI args.
/// Each command is implemented in its own module:
/// - `replay`: Paced cyclic feed of normalized records to stdout
/// - `inspect`: Dataset structure and content reports
/// - `check`: Export validation with rejection reasons
pub async fn run(args: Args) -> Result<ReplayStats> {
    match args.get_command() {
        Commands::Replay(replay_args) => replay::run_replay(replay_args).await,
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args).await,
        Commands::Check(check_args) => check::run_check(check_args).await,
    }
}
