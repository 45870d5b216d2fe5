//! Shared async handle over the dataset store
//!
//! [`TelemetryFeed`] is the boundary the rest of the application talks to. It
//! owns the [`DatasetStore`] behind a single async mutex so ingestion and
//! replay can run from concurrent tasks without interleaving: every store
//! operation takes the lock once, does its work, and releases it.
//!
//! Payload decoding and normalization happen before the lock is taken, so a
//! slow or invalid upload never stalls readers and a rejected dataset leaves
//! the current one untouched.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::app::models::{DatasetInfo, TagRecord};
use crate::app::services::dataset_store::DatasetStore;
use crate::app::services::normalizer::normalize_dataset;
use crate::{Error, Result};

/// Cloneable handle to the shared telemetry dataset
///
/// Clones share the same underlying store; ingestion through one handle is
/// immediately visible to all others.
#[derive(Debug, Clone)]
pub struct TelemetryFeed {
    store: Arc<Mutex<DatasetStore>>,
}

impl TelemetryFeed {
    /// Create a feed over an empty store
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(DatasetStore::new())),
        }
    }

    /// Create a feed seeded with the built-in sample dataset
    pub fn with_builtin_sample() -> Self {
        Self {
            store: Arc::new(Mutex::new(DatasetStore::with_builtin_sample())),
        }
    }

    /// Decode a raw JSON payload and ingest it
    ///
    /// Decoding failures surface as [`Error::Decode`] without touching the
    /// store. Callers pass the originating file name as the label.
    pub async fn ingest_bytes(&self, raw: &[u8], label: impl Into<String>) -> Result<DatasetInfo> {
        let parsed: Value = serde_json::from_slice(raw)
            .map_err(|e| Error::decode("payload is not valid JSON", Some(e)))?;
        self.ingest_value(&parsed, label).await
    }

    /// Normalize a parsed payload and swap it in as the current dataset
    ///
    /// All-or-nothing: on any normalization error the previous dataset and
    /// cursor are left exactly as they were.
    pub async fn ingest_value(
        &self,
        parsed: &Value,
        label: impl Into<String>,
    ) -> Result<DatasetInfo> {
        let label = label.into();

        let records = match normalize_dataset(parsed) {
            Ok(records) => records,
            Err(error) => {
                warn!("Rejected dataset from '{}': {}", label, error);
                return Err(error);
            }
        };

        let mut store = self.store.lock().await;
        store.replace(records, label);
        let info = store.info();
        info!(
            "Ingested {} records from '{}'",
            info.total_rows, info.source_label
        );
        Ok(info)
    }

    /// Describe the current dataset
    pub async fn info(&self) -> DatasetInfo {
        self.store.lock().await.info()
    }

    /// Return a copy of every record in sequence order
    pub async fn all_records(&self) -> Vec<TagRecord> {
        self.store.lock().await.all()
    }

    /// Rewind the replay cursor and report the resulting state
    pub async fn reset_cursor(&self) -> DatasetInfo {
        let mut store = self.store.lock().await;
        store.reset_cursor();
        debug!("Cursor reset for '{}'", store.source_label());
        store.info()
    }

    /// Return the record under the cursor and advance, wrapping at the end
    pub async fn next_record(&self) -> Option<TagRecord> {
        self.store.lock().await.next()
    }

    /// Return the record at `index` without moving the cursor
    pub async fn record_at(&self, index: i64) -> Option<TagRecord> {
        self.store.lock().await.by_index(index)
    }
}

impl Default for TelemetryFeed {
    fn default() -> Self {
        Self::new()
    }
}
