// ABOUTME: Integration tests for the state store's persistence behavior
// ABOUTME: Debounced save coalescing, immediate flush, load fallback, file round trips

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macrolog::models::{FoodItem, Settings};
use macrolog::state::{AppSnapshot, StateStore};
use macrolog::storage_plugins::{MemoryStorage, Storage, StorageProvider};
use serial_test::serial;
use std::time::Duration;
use tokio::time::sleep;

const STATE_KEY: &str = "macrolog.state";
const QUIET: Duration = Duration::from_millis(100);

fn memory_store() -> (StateStore, MemoryStorage) {
    let memory = MemoryStorage::new();
    let store = StateStore::new(Storage::Memory(memory.clone()), STATE_KEY, QUIET);
    (store, memory)
}

#[tokio::test]
#[serial]
async fn test_rapid_mutations_coalesce_into_one_write() {
    let (store, memory) = memory_store();

    for goal in [1800.0, 1900.0, 2000.0, 2100.0, 2200.0] {
        let settings = Settings {
            calorie_goal: goal,
            ..Settings::default()
        };
        store.set_settings(settings).await;
    }

    // Within the quiet window nothing has been persisted yet
    assert_eq!(memory.writes(), 0);

    sleep(QUIET * 3).await;
    assert_eq!(memory.writes(), 1);

    let raw = memory.get(STATE_KEY).await.unwrap().unwrap();
    let persisted: AppSnapshot = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.settings.calorie_goal, 2200.0);
}

#[tokio::test]
#[serial]
async fn test_flush_bypasses_the_debounce() {
    let (store, memory) = memory_store();

    store
        .upsert_food(FoodItem::new("Oats", 389.0, 16.9, 66.3, 6.9))
        .await;
    store.flush().await;
    assert_eq!(memory.writes(), 1);

    // The pending debounced write was cancelled; nothing fires later
    sleep(QUIET * 3).await;
    assert_eq!(memory.writes(), 1);
}

#[tokio::test]
#[serial]
async fn test_mutations_after_flush_schedule_again() {
    let (store, memory) = memory_store();

    store
        .upsert_food(FoodItem::new("Oats", 389.0, 16.9, 66.3, 6.9))
        .await;
    store.flush().await;

    store
        .upsert_food(FoodItem::new("Banana", 89.0, 1.1, 22.8, 0.3))
        .await;
    sleep(QUIET * 3).await;
    assert_eq!(memory.writes(), 2);

    let raw = memory.get(STATE_KEY).await.unwrap().unwrap();
    let persisted: AppSnapshot = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.foods.len(), 2);
}

#[tokio::test]
async fn test_malformed_state_falls_back_to_defaults() {
    let memory = MemoryStorage::new();
    memory.set(STATE_KEY, "{not valid json").await.unwrap();

    let store = StateStore::new(Storage::Memory(memory), STATE_KEY, QUIET);
    store.load().await;

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot, AppSnapshot::default());
    assert_eq!(snapshot.badges.len(), 4);
}

#[tokio::test]
async fn test_missing_state_falls_back_to_defaults() {
    let (store, _memory) = memory_store();
    store.load().await;
    assert_eq!(store.snapshot().await, AppSnapshot::default());
}

#[tokio::test]
async fn test_load_replaces_in_memory_state_entirely() {
    let (store, memory) = memory_store();

    store
        .upsert_food(FoodItem::new("Oats", 389.0, 16.9, 66.3, 6.9))
        .await;
    store.flush().await;

    store
        .upsert_food(FoodItem::new("Banana", 89.0, 1.1, 22.8, 0.3))
        .await;
    assert_eq!(store.foods().await.len(), 2);

    // Reloading from storage drops the unpersisted second food
    store.load().await;
    assert_eq!(store.foods().await.len(), 1);
    drop(memory);
}

#[tokio::test]
async fn test_file_backend_round_trips_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("file:{}", dir.path().display());

    let writer = StateStore::new(Storage::new(&url).await.unwrap(), STATE_KEY, QUIET);
    writer
        .upsert_food(FoodItem::new("Oats", 389.0, 16.9, 66.3, 6.9))
        .await;
    writer.add_water(chrono::NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(), 500)
        .await
        .unwrap();
    writer.flush().await;

    let reader = StateStore::new(Storage::new(&url).await.unwrap(), STATE_KEY, QUIET);
    reader.load().await;
    let snapshot = reader.snapshot().await;
    assert_eq!(snapshot.foods.len(), 1);
    assert_eq!(snapshot.foods[0].name, "Oats");
    assert_eq!(
        snapshot
            .water_intake
            .get(&chrono::NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()),
        Some(&500)
    );
}

#[tokio::test]
#[serial]
async fn test_rejected_action_schedules_no_write() {
    let (store, memory) = memory_store();

    assert!(store.remove_food("no-such-id").await.is_err());
    sleep(QUIET * 3).await;
    assert_eq!(memory.writes(), 0);
}
