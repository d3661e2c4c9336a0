use chrono::{TimeZone, Utc};
use sapkey_store::{FileKeyStore, KeyRecord, KeyStore, MemoryKeyStore, SharedKeyStore};
use std::sync::Arc;
use tempfile::TempDir;

fn record_at(key: &str, secs: i64) -> KeyRecord {
    KeyRecord::new(key).with_created_at(Utc.timestamp_opt(secs, 0).unwrap())
}

async fn assert_latest_is_newest(store: SharedKeyStore) {
    store.insert(record_at("VB900001", 100)).await.unwrap();
    store.insert(record_at("VB900003", 300)).await.unwrap();
    store.insert(record_at("VB900002", 200)).await.unwrap();

    let latest = store.latest().await.unwrap().unwrap();
    assert_eq!(latest.key, "VB900003");
    assert_eq!(store.len().await.unwrap(), 3);
}

#[tokio::test]
async fn test_memory_store_serves_newest() {
    assert_latest_is_newest(Arc::new(MemoryKeyStore::new())).await;
}

#[tokio::test]
async fn test_file_store_serves_newest() {
    let dir = TempDir::new().unwrap();
    let store = FileKeyStore::new(dir.path().join("keys.json"));
    assert_latest_is_newest(Arc::new(store)).await;
}

#[tokio::test]
async fn test_file_store_concurrent_inserts_are_all_kept() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileKeyStore::new(dir.path().join("keys.json")));

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.insert(KeyRecord::new(format!("K{i:02}"))).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.len().await.unwrap(), 16);
}

#[tokio::test]
async fn test_file_store_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keys.json");

    FileKeyStore::new(&path)
        .insert(record_at("K1", 42))
        .await
        .unwrap();

    let reopened = FileKeyStore::new(&path);
    let latest = reopened.latest().await.unwrap().unwrap();
    assert_eq!(latest, record_at("K1", 42));
}
