//! In-memory dataset store with a wrap-around replay cursor
//!
//! This module holds the current telemetry dataset as an ordered sequence of
//! normalized records together with a cursor that walks the sequence one
//! record at a time, wrapping back to the start after the last record. The
//! store is the single source of truth for what is being replayed; swapping
//! in a new dataset is atomic and always rewinds the cursor.
//!
//! The store itself is synchronous and not thread-safe. Shared async access
//! goes through [`TelemetryFeed`](crate::app::services::feed::TelemetryFeed),
//! which wraps the store in a mutex.

pub mod sample;

#[cfg(test)]
pub mod tests;

use crate::app::models::{DatasetInfo, TagRecord};
use crate::constants::DEFAULT_SOURCE_LABEL;

/// Ordered record sequence with replay position
///
/// All mutation goes through [`replace`](DatasetStore::replace),
/// [`next`](DatasetStore::next) and [`reset_cursor`](DatasetStore::reset_cursor),
/// keeping the cursor in step with the records it indexes.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Vec<TagRecord>,
    source_label: String,
    cursor: usize,
}

impl DatasetStore {
    /// Create an empty store with the default source label
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            source_label: DEFAULT_SOURCE_LABEL.to_string(),
            cursor: 0,
        }
    }

    /// Create a store pre-loaded with the built-in sample dataset
    pub fn with_builtin_sample() -> Self {
        let mut store = Self::new();
        store.replace(sample::builtin_dataset(), DEFAULT_SOURCE_LABEL);
        store
    }

    /// Swap in a new dataset, rewinding the cursor to the start
    pub fn replace(&mut self, records: Vec<TagRecord>, source_label: impl Into<String>) {
        self.records = records;
        self.source_label = source_label.into();
        self.cursor = 0;
    }

    /// Return the record under the cursor and advance, wrapping at the end
    ///
    /// Returns `None` when the store is empty; the cursor stays put.
    pub fn next(&mut self) -> Option<TagRecord> {
        if self.records.is_empty() {
            return None;
        }
        let record = self.records[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.records.len();
        Some(record)
    }

    /// Rewind the cursor to the first record
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Describe the current dataset
    ///
    /// Column names and the sample row come from the first record; an empty
    /// store reports no columns and no sample.
    pub fn info(&self) -> DatasetInfo {
        let first = self.records.first();
        DatasetInfo {
            total_rows: self.records.len(),
            current_index: self.cursor,
            source_label: self.source_label.clone(),
            columns: first.map(TagRecord::tag_names).unwrap_or_default(),
            sample_row: first.cloned(),
        }
    }

    /// Return a copy of every record in sequence order
    pub fn all(&self) -> Vec<TagRecord> {
        self.records.clone()
    }

    /// Return a copy of the record at `index`, if it exists
    ///
    /// Negative and out-of-range indices return `None`.
    pub fn by_index(&self, index: i64) -> Option<TagRecord> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.records.get(i))
            .cloned()
    }

    /// Number of records in the current dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Label identifying where the current dataset came from
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    /// Current replay position
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}
