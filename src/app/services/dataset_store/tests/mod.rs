//! Unit tests for the dataset store
//!
//! Covers cursor cycling, dataset replacement, index lookups and the
//! built-in sample dataset, organized by component.

pub mod store_tests;

// Test helper functions shared across test modules
use crate::app::models::TagRecord;

/// Build a record from literal tag/value pairs
pub fn record(pairs: &[(&str, f64)]) -> TagRecord {
    pairs.iter().map(|&(tag, value)| (tag, value)).collect()
}

/// Build `count` two-tag records with values derived from the index
pub fn create_test_records(count: usize) -> Vec<TagRecord> {
    (0..count)
        .map(|i| record(&[("tag_a", i as f64), ("tag_b", i as f64 * 10.0)]))
        .collect()
}
