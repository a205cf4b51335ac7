use serde_json::json;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

use vesper::store::{FileStore, KvStore};

#[test]
#[serial]
fn test_file_store_round_trip() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("vesper.json");

    let mut store = FileStore::open(&path);
    store.put("entries", json!([{"id": "a"}])).unwrap();
    store.put("streak_count", json!(3)).unwrap();

    // Reopening restores both keys
    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get("entries"), Some(&json!([{"id": "a"}])));
    assert_eq!(reopened.get("streak_count"), Some(&json!(3)));
}

#[test]
#[serial]
fn test_file_store_put_overwrites_wholesale() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("vesper.json");

    let mut store = FileStore::open(&path);
    store.put("entries", json!([1, 2])).unwrap();
    store.put("entries", json!([1, 2, 3])).unwrap();

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get("entries"), Some(&json!([1, 2, 3])));
}

#[test]
#[serial]
fn test_missing_file_opens_empty() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("does_not_exist.json");

    let store = FileStore::open(&path);
    assert!(store.get("entries").is_none());
}

#[test]
#[serial]
fn test_malformed_file_opens_empty() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("vesper.json");
    fs::write(&path, "definitely not json").unwrap();

    let store = FileStore::open(&path);
    assert!(store.get("entries").is_none());
    assert!(store.get("streak_count").is_none());
}

#[test]
#[serial]
fn test_writes_survive_a_malformed_predecessor() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("vesper.json");
    fs::write(&path, "definitely not json").unwrap();

    // The malformed file is replaced on the first write
    let mut store = FileStore::open(&path);
    store.put("streak_count", json!(1)).unwrap();

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get("streak_count"), Some(&json!(1)));
}
