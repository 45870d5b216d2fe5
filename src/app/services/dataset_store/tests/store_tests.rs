//! Tests for DatasetStore cursor and dataset management

use super::{create_test_records, record};
use crate::app::services::dataset_store::DatasetStore;
use crate::constants::DEFAULT_SOURCE_LABEL;

#[test]
fn test_new_store_is_empty() {
    let store = DatasetStore::new();

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.cursor(), 0);
    assert_eq!(store.source_label(), DEFAULT_SOURCE_LABEL);
}

#[test]
fn test_replace_swaps_dataset_and_label() {
    let mut store = DatasetStore::new();
    store.replace(create_test_records(3), "export.json");

    assert_eq!(store.len(), 3);
    assert_eq!(store.source_label(), "export.json");
    assert_eq!(store.cursor(), 0);
}

#[test]
fn test_replace_rewinds_cursor() {
    let mut store = DatasetStore::new();
    store.replace(create_test_records(5), "first");
    store.next();
    store.next();
    assert_eq!(store.cursor(), 2);

    store.replace(create_test_records(2), "second");
    assert_eq!(store.cursor(), 0);
    assert_eq!(store.len(), 2);
    assert_eq!(store.source_label(), "second");
}

#[test]
fn test_next_wraps_around() {
    let mut store = DatasetStore::new();
    store.replace(create_test_records(3), "cycle");

    let first = store.next().unwrap();
    let second = store.next().unwrap();
    let third = store.next().unwrap();
    assert_eq!(first.get("tag_a"), Some(0.0));
    assert_eq!(second.get("tag_a"), Some(1.0));
    assert_eq!(third.get("tag_a"), Some(2.0));

    // Fourth call starts the cycle again
    let wrapped = store.next().unwrap();
    assert_eq!(wrapped, first);
    assert_eq!(store.cursor(), 1);
}

#[test]
fn test_next_on_single_record_repeats() {
    let mut store = DatasetStore::new();
    store.replace(vec![record(&[("only", 7.0)])], "single");

    for _ in 0..4 {
        assert_eq!(store.next().unwrap().get("only"), Some(7.0));
    }
    assert_eq!(store.cursor(), 0);
}

#[test]
fn test_next_on_empty_store_returns_none() {
    let mut store = DatasetStore::new();

    assert!(store.next().is_none());
    assert!(store.next().is_none());
    assert_eq!(store.cursor(), 0);
}

#[test]
fn test_reset_cursor_mid_cycle() {
    let mut store = DatasetStore::new();
    store.replace(create_test_records(4), "resettable");
    store.next();
    store.next();
    store.next();
    assert_eq!(store.cursor(), 3);

    store.reset_cursor();
    assert_eq!(store.cursor(), 0);
    assert_eq!(store.next().unwrap().get("tag_a"), Some(0.0));
}

#[test]
fn test_info_describes_dataset() {
    let mut store = DatasetStore::new();
    store.replace(
        vec![
            record(&[("pressure", 1.5), ("flow", 20.0)]),
            record(&[("pressure", 1.6), ("rpm", 90.0)]),
        ],
        "rig.json",
    );
    store.next();

    let info = store.info();
    assert_eq!(info.total_rows, 2);
    assert_eq!(info.current_index, 1);
    assert_eq!(info.source_label, "rig.json");
    // Columns and sample come from the first record only
    assert_eq!(info.columns, vec!["pressure", "flow"]);
    assert_eq!(info.sample_row.unwrap().get("flow"), Some(20.0));
}

#[test]
fn test_info_on_empty_store() {
    let store = DatasetStore::new();

    let info = store.info();
    assert_eq!(info.total_rows, 0);
    assert_eq!(info.current_index, 0);
    assert_eq!(info.source_label, DEFAULT_SOURCE_LABEL);
    assert!(info.columns.is_empty());
    assert!(info.sample_row.is_none());
}

#[test]
fn test_all_returns_detached_copy() {
    let mut store = DatasetStore::new();
    store.replace(create_test_records(2), "copied");

    let mut snapshot = store.all();
    snapshot[0].insert("tag_a", 999.0);
    snapshot.pop();

    // Store contents are unaffected by mutations of the copy
    assert_eq!(store.len(), 2);
    assert_eq!(store.by_index(0).unwrap().get("tag_a"), Some(0.0));
}

#[test]
fn test_by_index_bounds() {
    let mut store = DatasetStore::new();
    store.replace(create_test_records(3), "indexed");

    assert_eq!(store.by_index(0).unwrap().get("tag_a"), Some(0.0));
    assert_eq!(store.by_index(2).unwrap().get("tag_a"), Some(2.0));
    assert!(store.by_index(-1).is_none());
    assert!(store.by_index(3).is_none());
    assert!(store.by_index(i64::MAX).is_none());
    assert!(store.by_index(i64::MIN).is_none());
}

#[test]
fn test_by_index_does_not_move_cursor() {
    let mut store = DatasetStore::new();
    store.replace(create_test_records(3), "peek");
    store.next();

    store.by_index(2);
    assert_eq!(store.cursor(), 1);
}

#[test]
fn test_with_builtin_sample_seeds_store() {
    let store = DatasetStore::with_builtin_sample();

    assert_eq!(store.len(), crate::constants::SAMPLE_RECORD_COUNT);
    assert_eq!(store.source_label(), DEFAULT_SOURCE_LABEL);
    assert_eq!(store.cursor(), 0);
}
