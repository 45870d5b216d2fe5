//! Built-in synthetic sample dataset
//!
//! Generates the deterministic dataset the store is seeded with at startup so
//! the feed produces plausible readings before any real export is ingested.
//! Values follow simple linear ramps per tag, with two deliberate shapes: a
//! boolean-style tag that alternates 0/1 and a flow tag that drops to zero on
//! every third record to mimic idle periods in real rig exports.

use crate::app::models::TagRecord;
use crate::constants::{SAMPLE_RECORD_COUNT, SAMPLE_ZERO_STRIDE, sample_tags};

/// Generate the full built-in sample dataset
///
/// Always returns [`SAMPLE_RECORD_COUNT`] records with identical tag order;
/// two calls produce identical data.
pub fn builtin_dataset() -> Vec<TagRecord> {
    (0..SAMPLE_RECORD_COUNT).map(sample_record).collect()
}

/// Generate the sample record at the given position
pub fn sample_record(index: usize) -> TagRecord {
    let n = index as f64;

    let mut record = TagRecord::with_capacity(sample_tags::ALL.len());
    record.insert(sample_tags::CH140_10, 0.5 + n * 0.1);
    record.insert(sample_tags::CH140_13, 1.2 + n * 0.05);
    record.insert(sample_tags::CH140_14, 10.0 + n * 2.0);
    record.insert(sample_tags::CH140_8, 95.0 - n * 0.5);
    record.insert(sample_tags::CH140_9, 60.0 + n);
    record.insert(sample_tags::CH141_10, 120.0 + n * 3.0);
    record.insert(sample_tags::CH141_13, 15.0 + n * 0.8);
    record.insert(
        sample_tags::CH141_8,
        if index % SAMPLE_ZERO_STRIDE == 0 {
            0.0
        } else {
            25.0 + n
        },
    );
    record.insert(sample_tags::CH141_9, 20.0 + n * 1.5);
    record.insert(sample_tags::CH144, (index % 2) as f64);
    record.insert(sample_tags::CH146, 1.0);
    record.insert(sample_tags::CH148, 15.0 + n * 0.7);
    record.insert(sample_tags::CH164, 25.0 + n * 1.2);
    record.insert(sample_tags::CH165, 8.0 + n * 0.5);
    record
}
