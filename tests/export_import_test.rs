// ABOUTME: Integration tests for export/import round trips and per-key replacement
// ABOUTME: Equivalence excludes the export timestamp; absent keys stay untouched

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{NaiveDate, TimeZone, Utc};
use macrolog::models::{FoodItem, Settings};
use macrolog::state::{ExportDocument, StateStore};
use macrolog::storage_plugins::{MemoryStorage, Storage};
use std::time::Duration;

fn store() -> StateStore {
    StateStore::new(
        Storage::Memory(MemoryStorage::new()),
        "macrolog.state",
        Duration::from_millis(50),
    )
}

async fn populated_store() -> StateStore {
    let store = store();
    let mut chicken = FoodItem::new("Chicken breast", 165.0, 31.0, 0.0, 3.6);
    chicken.id = "chicken".into();
    store.upsert_food(chicken).await;

    let meal = store.create_meal("Lunch bowl").await;
    store.add_ingredient(&meal.id, "chicken", 150.0).await.unwrap();

    let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    store.log_food(date, "chicken", 150.0).await.unwrap();
    store.add_water(date, 750).await.unwrap();

    store
        .set_settings(Settings {
            calorie_goal: 1850.0,
            ..Settings::default()
        })
        .await;
    store
}

#[tokio::test]
async fn test_export_import_round_trip_is_equivalent() {
    let source = populated_store().await;
    let exported_at = Utc.with_ymd_and_hms(2025, 6, 16, 8, 0, 0).unwrap();
    let document = source.export_data(exported_at).await;

    // Through JSON, as a real backup file would travel
    let json = serde_json::to_string(&document).unwrap();
    let parsed: ExportDocument = serde_json::from_str(&json).unwrap();

    let target = store();
    target.import_data(parsed).await;

    let source_snapshot = source.snapshot().await;
    let target_snapshot = target.snapshot().await;
    assert_eq!(source_snapshot.foods, target_snapshot.foods);
    assert_eq!(source_snapshot.meals, target_snapshot.meals);
    assert_eq!(source_snapshot.daily_meals, target_snapshot.daily_meals);
    assert_eq!(source_snapshot.settings, target_snapshot.settings);
    assert_eq!(source_snapshot.badges, target_snapshot.badges);
    assert_eq!(source_snapshot.water_intake, target_snapshot.water_intake);
    assert_eq!(source_snapshot, target_snapshot);
}

#[tokio::test]
async fn test_import_replaces_only_present_keys() {
    let target = populated_store().await;
    let foods_before = target.foods().await;

    let exported_at = Utc.with_ymd_and_hms(2025, 6, 16, 8, 0, 0).unwrap();
    let payload = format!(
        "{{\"exportedAt\":\"{}\",\"settings\":{}}}",
        exported_at.to_rfc3339(),
        serde_json::to_string(&Settings::default()).unwrap()
    );
    let document: ExportDocument = serde_json::from_str(&payload).unwrap();
    target.import_data(document).await;

    assert_eq!(target.settings().await, Settings::default());
    assert_eq!(target.foods().await, foods_before);
}

#[tokio::test]
async fn test_export_document_contains_every_collection_key() {
    let source = populated_store().await;
    let exported_at = Utc.with_ymd_and_hms(2025, 6, 16, 8, 0, 0).unwrap();
    let document = source.export_data(exported_at).await;
    let value: serde_json::Value = serde_json::to_value(&document).unwrap();

    for key in [
        "exportedAt",
        "foods",
        "dailyMeals",
        "meals",
        "weeklyAssignments",
        "shoppingLists",
        "settings",
        "categories",
        "badges",
        "healthData",
        "waterIntake",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
}
