//! Application constants for telemetry replay
//!
//! This module contains dataset labels, the built-in sample schema,
//! and default values used throughout the telemetry replay application.

// =============================================================================
// Source Labels
// =============================================================================

/// Sentinel source label before any ingestion has occurred
pub const DEFAULT_SOURCE_LABEL: &str = "default";

// =============================================================================
// Built-in Sample Dataset
// =============================================================================

/// Number of records in the built-in synthetic sample dataset
pub const SAMPLE_RECORD_COUNT: usize = 20;

/// Every n-th sample record has its `[141].8` tag zeroed to mimic
/// idle periods in real exports
pub const SAMPLE_ZERO_STRIDE: usize = 3;

/// Tag names of the built-in sample schema, matching the PLC export
/// naming convention (`DC_out_100ms[channel].field`)
pub mod sample_tags {
    pub const CH140_10: &str = "DC_out_100ms[140].10";
    pub const CH140_13: &str = "DC_out_100ms[140].13";
    pub const CH140_14: &str = "DC_out_100ms[140].14";
    pub const CH140_8: &str = "DC_out_100ms[140].8";
    pub const CH140_9: &str = "DC_out_100ms[140].9";
    pub const CH141_10: &str = "DC_out_100ms[141].10";
    pub const CH141_13: &str = "DC_out_100ms[141].13";
    pub const CH141_8: &str = "DC_out_100ms[141].8";
    pub const CH141_9: &str = "DC_out_100ms[141].9";
    pub const CH144: &str = "DC_out_100ms[144]";
    pub const CH146: &str = "DC_out_100ms[146]";
    pub const CH148: &str = "DC_out_100ms[148]";
    pub const CH164: &str = "DC_out_100ms[164]";
    pub const CH165: &str = "DC_out_100ms[165]";

    /// All sample tags in record key order
    pub const ALL: &[&str] = &[
        CH140_10, CH140_13, CH140_14, CH140_8, CH140_9, CH141_10, CH141_13, CH141_8, CH141_9,
        CH144, CH146, CH148, CH164, CH165,
    ];
}

// =============================================================================
// Replay Defaults
// =============================================================================

/// Default delay between emitted records in milliseconds
pub const DEFAULT_REPLAY_INTERVAL_MS: u64 = 1000;

// =============================================================================
// Logging Constants
// =============================================================================

/// Log levels accepted by the logging configuration
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Helper Functions
// =============================================================================

/// Check if a string names a known log level
pub fn is_valid_log_level(level: &str) -> bool {
    LOG_LEVELS.contains(&level)
}

/// Number of tags in each built-in sample record
pub fn sample_tag_count() -> usize {
    sample_tags::ALL.len()
}
