//! Snapshot persistence against a real filesystem.

use std::fs;

use taskdeck::core::snapshot::{self, Snapshot};
use tempfile::tempdir;

#[test]
fn test_save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");

    let mut snap = Snapshot::default();
    snap.conform(2024, 10, 10);
    snap.ticks[0] = 3;
    snap.ticks[9] = 8;
    snap.tasks[2] = "physics revision".to_string();
    snap.notes[2] = "chapters 4 and 5".to_string();
    snap.calendar.months[0][0].slots[0] = "new year plans".to_string();
    snap.calendar.months[11][30].slots[5] = "party".to_string();

    snapshot::save(&path, &snap).unwrap();
    let loaded = snapshot::load(&path).unwrap();
    assert_eq!(loaded, snap);

    // No stray temp file left behind.
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("data.json");

    snapshot::save(&path, &Snapshot::default()).unwrap();
    assert!(path.exists());
}

#[test]
fn test_save_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");

    let mut first = Snapshot::default();
    first.conform(2024, 2, 2);
    first.tasks[0] = "old".to_string();
    snapshot::save(&path, &first).unwrap();

    let mut second = first.clone();
    second.tasks[0] = "new".to_string();
    snapshot::save(&path, &second).unwrap();

    assert_eq!(snapshot::load(&path).unwrap(), second);
}

#[test]
fn test_missing_file_loads_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never-written.json");
    assert_eq!(snapshot::load(&path).unwrap(), Snapshot::default());
}

#[test]
fn test_empty_file_loads_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "  \n").unwrap();
    assert_eq!(snapshot::load(&path).unwrap(), Snapshot::default());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "{ not json").unwrap();

    let err = snapshot::load(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
