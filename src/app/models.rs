//! Data models for telemetry ingestion and replay
//!
//! This module contains the core data structures for representing normalized
//! telemetry records and dataset metadata. Records keep their tag order from
//! the original export, so serialized output matches the upstream payload
//! field for field.

use serde::ser::{Serialize, SerializeMap, Serializer};

// =============================================================================
// Tag Record Structure
// =============================================================================

/// A single normalized telemetry record
///
/// Maps tag names (arbitrary text, including PLC bracket notation such as
/// `DC_out_100ms[140].10`) to numeric values. Insertion order is preserved:
/// iterating or serializing a record yields tags in the order they appeared
/// in the source element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagRecord {
    fields: Vec<(String, f64)>,
}

impl TagRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Create an empty record with capacity for `capacity` tags
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Insert a tag value
    ///
    /// A repeated tag keeps its original position and takes the new value,
    /// matching JSON object semantics.
    pub fn insert(&mut self, tag: impl Into<String>, value: f64) {
        let tag = tag.into();
        match self.fields.iter_mut().find(|(name, _)| *name == tag) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((tag, value)),
        }
    }

    /// Get a value by tag name
    pub fn get(&self, tag: &str) -> Option<f64> {
        self.fields
            .iter()
            .find(|(name, _)| name == tag)
            .map(|(_, value)| *value)
    }

    /// Number of tags in this record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the record holds no tags
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over tag/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fields.iter().map(|(tag, value)| (tag.as_str(), *value))
    }

    /// Tag names in insertion order
    pub fn tag_names(&self) -> Vec<String> {
        self.fields.iter().map(|(tag, _)| tag.clone()).collect()
    }
}

impl Serialize for TagRecord {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (tag, value) in &self.fields {
            map.serialize_entry(tag, value)?;
        }
        map.end()
    }
}

impl FromIterator<(String, f64)> for TagRecord {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut record = TagRecord::new();
        for (tag, value) in iter {
            record.insert(tag, value);
        }
        record
    }
}

impl<'a> FromIterator<(&'a str, f64)> for TagRecord {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(tag, value)| (tag.to_string(), value))
            .collect()
    }
}

// =============================================================================
// Dataset Info Structure
// =============================================================================

/// Snapshot of the currently stored dataset
///
/// Returned by every boundary operation that reports dataset state. Serialized
/// in camelCase to match the wire shape consumed by dashboard clients;
/// `sampleRow` is omitted entirely when the store is empty.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInfo {
    /// Total number of records in the dataset
    pub total_rows: usize,

    /// Position of the replay cursor (next record to serve)
    pub current_index: usize,

    /// Human-readable origin of the dataset
    pub source_label: String,

    /// Tag names of the first record, in record order
    pub columns: Vec<String>,

    /// First record of the dataset, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_row: Option<TagRecord>,
}

impl DatasetInfo {
    /// One-line human-readable summary of the dataset
    pub fn summary(&self) -> String {
        format!(
            "Dataset '{}': {} records, {} columns, cursor at {}",
            self.source_label,
            self.total_rows,
            self.columns.len(),
            self.current_index
        )
    }
}
