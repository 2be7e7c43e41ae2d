//! Record File Persistence Tests
//!
//! Tests for invariants:
//! - save then load reproduces ids, names, ages, salaries and order
//! - load skips invalid entries and stops at malformed numbers
//! - load resets next-id from the highest loaded id
//! - a name that is not UTF-8 costs only its own entry
//! - a failed open leaves the store untouched

use rosterdb::record::Record;
use rosterdb::store::{RecordStore, SkipReason, StoreError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// =============================================================================
// Round Trip
// =============================================================================

/// Saved records come back identical and in the same order.
#[test]
fn test_save_load_round_trip() {
    let temp_dir = create_temp_dir();
    let path = temp_dir.path().join("records.txt");

    let mut store = RecordStore::new();
    store.add("Иван", 25, 50000.0).unwrap();
    store.add("Анна-Мария", 30, 75000.5).unwrap();
    store.add("O'Brien", 61, 0.0).unwrap();
    store.add("Ольга", 28, 1_000_000_000.0).unwrap();
    store.delete(1).unwrap();
    store.add("Сергей", 40, 80000.25).unwrap();
    store.sort_by_name(false);

    assert_eq!(store.save(&path).unwrap(), 4);

    let mut fresh = RecordStore::new();
    let report = fresh.load(&path).unwrap();

    assert_eq!(report.accepted, 4);
    assert_eq!(report.entries_read, 4);
    assert!(report.skipped.is_empty());
    assert!(report.stopped.is_none());
    assert_eq!(fresh.records(), store.records());
    assert_eq!(fresh.next_id(), 5);
}

/// Save writes the documented line format.
#[test]
fn test_save_format() {
    let temp_dir = create_temp_dir();
    let path = temp_dir.path().join("records.txt");

    let mut store = RecordStore::new();
    store.add("Anna", 30, 75000.0).unwrap();
    store.add("Ivan", 25, 1234.567).unwrap();
    store.save(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "1 Anna 30 75000.00\n2 Ivan 25 1234.57\n");
}

/// Save overwrites, it never appends.
#[test]
fn test_save_overwrites() {
    let temp_dir = create_temp_dir();
    let path = write_file(&temp_dir, "records.txt", "9 Old 50 1.00\n8 Older 60 2.00\n");

    let store = RecordStore::new();
    assert_eq!(store.save(&path).unwrap(), 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

/// Saving into a missing directory is an I/O error.
#[test]
fn test_save_unwritable_path() {
    let temp_dir = create_temp_dir();
    let path = temp_dir.path().join("missing").join("records.txt");

    let err = RecordStore::new().save(&path).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert_eq!(err.code(), "ROSTER_IO_FAILED");
}

/// Names with spaces are written but split on reload.
#[test]
fn test_whitespace_name_is_not_round_trip_safe() {
    let temp_dir = create_temp_dir();
    let path = temp_dir.path().join("records.txt");

    let mut store = RecordStore::new();
    store.add("Anna Maria", 30, 10.0).unwrap();
    store.save(&path).unwrap();

    let mut fresh = RecordStore::new();
    let report = fresh.load(&path).unwrap();
    assert_eq!(report.accepted, 0);
    assert!(report.stopped.is_some());
}

// =============================================================================
// Load
// =============================================================================

/// Malformed numeric, duplicate id and two valid entries.
#[test]
fn test_load_mixed_file() {
    let temp_dir = create_temp_dir();
    let path = write_file(
        &temp_dir,
        "records.txt",
        "3 Anna 30 75000.00\n\
         3 Copy 31 1.00\n\
         7 Ivan 25 50000.00\n\
         8 Broken x 1.00\n",
    );

    let mut store = RecordStore::new();
    store.add("Прежний", 50, 1.0).unwrap();

    let report = store.load(&path).unwrap();

    assert_eq!(
        store.records(),
        &[
            Record::new(3, "Anna", 30, 75000.0),
            Record::new(7, "Ivan", 25, 50000.0),
        ]
    );
    assert_eq!(store.next_id(), 8);
    assert_eq!(report.accepted, 2);
    assert_eq!(report.entries_read, 3);
    assert_eq!(report.skipped_count(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::DuplicateId { id: 3 });
    assert_eq!(report.stopped.as_ref().map(|s| s.entry), Some(4));
}

/// The first malformed number ends parsing; later entries are ignored.
#[test]
fn test_load_stops_at_malformed_number() {
    let temp_dir = create_temp_dir();
    let path = write_file(
        &temp_dir,
        "records.txt",
        "1 Anna 30 10.00\nabc Ivan 25 20.00\n3 Olga 28 30.00\n",
    );

    let mut store = RecordStore::new();
    let report = store.load(&path).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(report.entries_read, 1);
    assert!(report.stopped.unwrap().reason.contains("id"));
}

/// Out-of-range fields are skipped with a reason each.
#[test]
fn test_load_skips_out_of_range() {
    let temp_dir = create_temp_dir();
    let path = write_file(
        &temp_dir,
        "records.txt",
        "-1 A 30 1.00\n2 B 0 1.00\n3 C 30 -5.00\n4 D 30 5.00\n",
    );

    let mut store = RecordStore::new();
    let report = store.load(&path).unwrap();

    assert_eq!(store.records(), &[Record::new(4, "D", 30, 5.0)]);
    let reasons: Vec<SkipReason> = report.skipped.into_iter().map(|s| s.reason).collect();
    assert_eq!(
        reasons,
        vec![
            SkipReason::InvalidId { id: -1 },
            SkipReason::InvalidAge { age: 0 },
            SkipReason::InvalidSalary { salary: -5.0 },
        ]
    );
}

/// A name in a single-byte code page is skipped; its neighbours load.
#[test]
fn test_load_skips_non_utf8_name() {
    let temp_dir = create_temp_dir();
    let path = temp_dir.path().join("records.txt");
    // "Анна" in a single-byte Cyrillic code page
    fs::write(
        &path,
        b"1 Anna 30 10.00\n2 \xC0\xED\xED\xE0 25 20.00\n3 Olga 28 30.00\n",
    )
    .unwrap();

    let mut store = RecordStore::new();
    let report = store.load(&path).unwrap();

    assert_eq!(
        store.records(),
        &[
            Record::new(1, "Anna", 30, 10.0),
            Record::new(3, "Olga", 28, 30.0),
        ]
    );
    assert_eq!(store.next_id(), 4);
    assert_eq!(report.entries_read, 3);
    assert_eq!(report.accepted, 2);
    assert_eq!(report.skipped[0].entry, 2);
    assert!(matches!(report.skipped[0].reason, SkipReason::InvalidName { .. }));
    assert!(report.stopped.is_none());
}

/// Loading an empty file empties the store and resets next-id to 1.
#[test]
fn test_load_empty_file() {
    let temp_dir = create_temp_dir();
    let path = write_file(&temp_dir, "records.txt", "");

    let mut store = RecordStore::new();
    store.add("Anna", 30, 1.0).unwrap();
    store.add("Ivan", 30, 1.0).unwrap();

    let report = store.load(&path).unwrap();
    assert_eq!(report.accepted, 0);
    assert!(store.is_empty());
    assert_eq!(store.next_id(), 1);
}

/// A missing file is an I/O error and the store keeps its records.
#[test]
fn test_load_missing_file_leaves_store() {
    let temp_dir = create_temp_dir();
    let path = temp_dir.path().join("absent.txt");

    let mut store = RecordStore::new();
    store.add("Anna", 30, 1.0).unwrap();

    let err = store.load(&path).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert_eq!(store.len(), 1);
    assert_eq!(store.next_id(), 2);
}

/// After a load, new records get the smallest free id.
#[test]
fn test_add_after_load() {
    let temp_dir = create_temp_dir();
    let path = write_file(&temp_dir, "records.txt", "2 Anna 30 1.00\n5 Ivan 25 2.00\n");

    let mut store = RecordStore::new();
    store.load(&path).unwrap();

    assert_eq!(store.next_id(), 6);
    assert_eq!(store.add("Olga", 28, 3.0).unwrap(), 1);
    assert_eq!(store.add("Petr", 28, 3.0).unwrap(), 3);
    assert_eq!(store.next_id(), 6);
}
