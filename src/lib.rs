//! Telemetry Replay Library
//!
//! A Rust library for ingesting loosely-typed tag/value telemetry exports
//! (flat JSON records of instrument readings) and replaying them as an
//! endless cyclic record feed.
//!
//! This library provides tools for:
//! - Normalizing heterogeneous JSON records into a uniform numeric schema
//! - Coercing null/string/boolean values with lenient, table-driven rules
//! - Holding the current dataset in an in-memory store with a wrap-around cursor
//! - Serving records one at a time, forever cycling in ingestion order
//! - Inspecting dataset shape (row count, columns, sample row) without mutation
//! - Seeding a deterministic built-in sample dataset at startup

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dataset_store;
        pub mod feed;
        pub mod normalizer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DatasetInfo, TagRecord};
pub use app::services::dataset_store::DatasetStore;
pub use app::services::feed::TelemetryFeed;
pub use config::Config;

/// Result type alias for telemetry replay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for telemetry ingestion and replay
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Root of the payload is not an array of records
    #[error("Invalid dataset shape: {message}")]
    InvalidShape { message: String },

    /// Payload parsed but contained zero records
    #[error("Dataset contains no records")]
    EmptyInput,

    /// An element of the payload is not a structured object
    #[error("Record at index {index} is not an object")]
    InvalidElement { index: usize },

    /// An element normalized to zero usable fields
    #[error("Record at index {index} has no usable fields")]
    NoValidFields { index: usize },

    /// Raw bytes could not be decoded as UTF-8 JSON
    #[error("Payload decoding failed: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an invalid shape error
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape {
            message: message.into(),
        }
    }

    /// Create an invalid element error for a record index
    pub fn invalid_element(index: usize) -> Self {
        Self::InvalidElement { index }
    }

    /// Create a no valid fields error for a record index
    pub fn no_valid_fields(index: usize) -> Self {
        Self::NoValidFields { index }
    }

    /// Create a decoding error with context
    pub fn decode(message: impl Into<String>, source: Option<serde_json::Error>) -> Self {
        Self::Decode {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode {
            message: "JSON decoding failed".to_string(),
            source: Some(error),
        }
    }
}
