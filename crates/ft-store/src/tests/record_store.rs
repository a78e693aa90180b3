use crate::RecordStore;

use ft_core::FlagPatch;

use std::fs;

use tempfile::TempDir;

fn premium(value: bool) -> FlagPatch {
    FlagPatch {
        premium: Some(value),
        ..Default::default()
    }
}

#[tokio::test]
async fn given_empty_store_when_update_then_record_created_with_defaults() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::open(dir.path().join("db.json"));

    let outcome = store.update("u1", &premium(true)).await;

    assert!(outcome.is_durable());
    assert!(outcome.record.premium);
    assert!(!outcome.record.is_using_script);
    assert!(!outcome.record.owner);
    assert!(!outcome.record.admin);
    assert!(!outcome.record.banned);
    assert!(outcome.record.last_updated.is_some());
}

#[tokio::test]
async fn given_existing_record_when_partial_update_then_other_fields_retained() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::open(dir.path().join("db.json"));

    let first = store.update("u1", &premium(true)).await;
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    let second = store
        .update(
            "u1",
            &FlagPatch {
                banned: Some(true),
                ..Default::default()
            },
        )
        .await;

    assert!(second.record.premium, "prior value must survive the merge");
    assert!(second.record.banned);
    assert!(second.record.last_updated > first.record.last_updated);
}

#[tokio::test]
async fn given_update_when_get_then_returns_what_update_returned() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::open(dir.path().join("db.json"));

    let outcome = store.update("u1", &premium(true)).await;
    let fetched = store.get("u1").await.unwrap();

    assert_eq!(fetched, outcome.record);
}

#[tokio::test]
async fn given_unknown_identity_when_get_then_none() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::open(dir.path().join("db.json"));

    store.update("u1", &premium(true)).await;

    assert!(store.get("u2").await.is_none());
}

#[tokio::test]
async fn given_updates_when_reopened_then_state_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.json");

    let store = RecordStore::open(&path);
    store.update("u1", &premium(true)).await;
    store
        .update(
            "u2",
            &FlagPatch {
                banned: Some(true),
                ..Default::default()
            },
        )
        .await;
    let before = store.list().await;
    drop(store);

    let reopened = RecordStore::open(&path);

    assert_eq!(reopened.list().await, before);
}

#[tokio::test]
async fn given_missing_file_when_open_then_initial_snapshot_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.json");

    let store = RecordStore::open(&path);

    assert_eq!(store.count().await, 0);
    assert!(path.exists(), "open must seed an empty snapshot");
}

#[tokio::test]
async fn given_corrupt_file_when_open_then_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.json");
    fs::write(&path, "{{{ definitely not json").unwrap();

    let store = RecordStore::open(&path);

    assert_eq!(store.count().await, 0);

    // The store still functions; the next update replaces the bad file.
    store.update("u1", &premium(true)).await;
    let reopened = RecordStore::open(&path);
    assert!(reopened.get("u1").await.unwrap().premium);
}

#[tokio::test]
async fn given_unwritable_path_when_update_then_memory_ahead_of_disk() {
    let dir = TempDir::new().unwrap();
    // Parent directory never exists, so every snapshot write fails.
    let path = dir.path().join("missing").join("db.json");

    let store = RecordStore::open(&path);
    let outcome = store.update("u1", &premium(true)).await;

    assert!(!outcome.is_durable());
    assert!(outcome.persist_error.is_some());
    // The merge is kept regardless.
    assert!(store.get("u1").await.unwrap().premium);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn given_concurrent_updates_on_different_fields_then_all_apply() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::open(dir.path().join("db.json"));

    let patches = [
        FlagPatch {
            premium: Some(true),
            ..Default::default()
        },
        FlagPatch {
            banned: Some(true),
            ..Default::default()
        },
        FlagPatch {
            admin: Some(true),
            ..Default::default()
        },
        FlagPatch {
            owner: Some(true),
            ..Default::default()
        },
    ];

    let mut handles = Vec::new();
    for patch in patches {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.update("u1", &patch).await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let record = store.get("u1").await.unwrap();
    assert!(record.premium, "no writer's merge may be lost");
    assert!(record.banned);
    assert!(record.admin);
    assert!(record.owner);
    assert!(!record.is_using_script);

    // The durable snapshot holds the same final state.
    let reopened = RecordStore::open(dir.path().join("db.json"));
    assert_eq!(reopened.get("u1").await.unwrap(), record);
}

#[tokio::test]
async fn given_several_identities_when_list_then_all_present() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::open(dir.path().join("db.json"));

    store.update("u1", &premium(true)).await;
    store.update("u2", &premium(false)).await;
    store.update("u3", &FlagPatch::default()).await;

    let all = store.list().await;

    assert_eq!(all.len(), 3);
    assert!(all["u1"].premium);
    assert!(!all["u2"].premium);
    assert_eq!(store.count().await, 3);
}
