//! Dataset normalization pipeline
//!
//! This module converts an arbitrary parsed JSON value (expected shape: an
//! array of loosely-typed objects) into a sequence of normalized numeric
//! records, or fails with a precise reason. Normalization is all-or-nothing:
//! the first violated rule aborts the whole operation so callers never see a
//! partial dataset.
//!
//! Value coercion is deliberately lenient so heterogeneous exports can be
//! ingested without per-field preprocessing; strictness lives at the record
//! and dataset level instead.

use crate::app::models::TagRecord;
use crate::{Error, Result};
use serde_json::Value;
use tracing::debug;

/// Normalize a parsed payload into telemetry records
///
/// The payload must be a non-empty array of objects. Each object becomes one
/// [`TagRecord`] with every value coerced to `f64` via [`coerce_value`].
/// Empty and whitespace-only keys are dropped silently; an element left with
/// zero keys fails the whole operation.
///
/// Element order and per-element key order are preserved.
pub fn normalize_dataset(raw: &Value) -> Result<Vec<TagRecord>> {
    let rows = raw
        .as_array()
        .ok_or_else(|| Error::invalid_shape("data must be an array of objects"))?;

    if rows.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let fields = row.as_object().ok_or(Error::InvalidElement { index })?;

        let mut record = TagRecord::with_capacity(fields.len());
        for (tag, value) in fields {
            if tag.trim().is_empty() {
                continue;
            }
            record.insert(tag.clone(), coerce_value(value));
        }

        if record.is_empty() {
            return Err(Error::NoValidFields { index });
        }
        records.push(record);
    }

    debug!("Normalized {} records", records.len());
    Ok(records)
}

/// Coerce a single JSON value to a numeric reading
///
/// Applies the ingestion coercion table: null becomes 0, numbers pass through
/// unchanged, strings are parsed as floats taking the longest leading number
/// (strings without one become 0), booleans map to 1/0, and anything
/// structured becomes 0. Never fails.
pub fn coerce_value(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_numeric_string(s),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Array(_) | Value::Object(_) => 0.0,
    }
}

/// Parse a string field as a float, defaulting to 0 when unparseable
///
/// Mirrors the lenient number parsing of logger exports: when the whole
/// string is not a valid float, the longest leading number is taken instead,
/// so unit-suffixed readings like `"10 units"` keep their value. A parse
/// that yields NaN counts as unparseable; signed infinities are kept,
/// matching the pass-through rule for non-finite numeric values.
fn parse_numeric_string(s: &str) -> f64 {
    let trimmed = s.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => {
            let end = leading_float_end(trimmed);
            if end == 0 {
                return 0.0;
            }
            trimmed[..end].parse::<f64>().unwrap_or(0.0)
        }
    }
}

/// Length of the longest prefix that parses as a float
///
/// Accepts an optional sign followed by either the `Infinity` keyword or a
/// decimal number with optional fraction and exponent. Returns 0 when the
/// string does not start with a number.
fn leading_float_end(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos = 1;
    }

    if s[pos..].starts_with("Infinity") {
        return pos + "Infinity".len();
    }

    let mantissa_start = pos;
    while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
        pos += 1;
    }
    if matches!(bytes.get(pos), Some(b'.')) {
        pos += 1;
        while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
            pos += 1;
        }
    }
    if !bytes[mantissa_start..pos].iter().any(u8::is_ascii_digit) {
        return 0;
    }

    // The exponent only counts when it carries at least one digit
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exponent = pos + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = exponent;
        while matches!(bytes.get(exponent), Some(b'0'..=b'9')) {
            exponent += 1;
        }
        if exponent > exponent_digits {
            pos = exponent;
        }
    }

    pos
}
