// ABOUTME: Integration tests for achievement evaluation through the state store
// ABOUTME: Streak windows, consistency bounds, perfect week, water goal, idempotence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration as ChronoDuration, NaiveDate, TimeZone, Utc};
use macrolog::constants::achievements;
use macrolog::models::FoodItem;
use macrolog::state::StateStore;
use macrolog::storage_plugins::{MemoryStorage, Storage};
use std::time::Duration;

fn store() -> StateStore {
    StateStore::new(
        Storage::Memory(MemoryStorage::new()),
        "macrolog.state",
        Duration::from_millis(50),
    )
}

fn goal_food() -> FoodItem {
    // Per 100g equal to the default goals: logging 100g hits every goal exactly
    let mut food = FoodItem::new("Goal meal", 2000.0, 150.0, 250.0, 65.0);
    food.id = "goal".into();
    food
}

fn day(today: NaiveDate, offset: i64) -> NaiveDate {
    today - ChronoDuration::days(offset)
}

#[tokio::test]
async fn test_streak_unlocks_on_seven_days_not_six() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 20, 0, 0).unwrap();

    let store6 = store();
    store6.upsert_food(goal_food()).await;
    for offset in 0..6 {
        store6.log_food(day(today, offset), "goal", 50.0).await.unwrap();
    }
    let unlocked = store6.evaluate_achievements(today, now).await;
    assert!(!unlocked.contains(&achievements::STREAK_WEEK.to_owned()));

    let store7 = store();
    store7.upsert_food(goal_food()).await;
    for offset in 0..7 {
        store7.log_food(day(today, offset), "goal", 50.0).await.unwrap();
    }
    let unlocked = store7.evaluate_achievements(today, now).await;
    assert!(unlocked.contains(&achievements::STREAK_WEEK.to_owned()));
}

#[tokio::test]
async fn test_perfect_week_requires_a_plus_every_day() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 20, 0, 0).unwrap();

    let store = store();
    store.upsert_food(goal_food()).await;
    // 100g of the goal food per day = exactly on goal = A+
    for offset in 0..7 {
        store.log_food(day(today, offset), "goal", 100.0).await.unwrap();
    }
    let unlocked = store.evaluate_achievements(today, now).await;
    assert!(unlocked.contains(&achievements::PERFECT_WEEK.to_owned()));
    assert!(unlocked.contains(&achievements::CONSISTENT_WEEK.to_owned()));
    assert!(unlocked.contains(&achievements::STREAK_WEEK.to_owned()));
}

#[tokio::test]
async fn test_consistency_rejects_out_of_band_days() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 20, 0, 0).unwrap();

    let store = store();
    store.upsert_food(goal_food()).await;
    for offset in 0..6 {
        store.log_food(day(today, offset), "goal", 100.0).await.unwrap();
    }
    // Seventh day at 50% of goals: outside the +/-10% band
    store.log_food(day(today, 6), "goal", 50.0).await.unwrap();

    let unlocked = store.evaluate_achievements(today, now).await;
    assert!(unlocked.contains(&achievements::STREAK_WEEK.to_owned()));
    assert!(!unlocked.contains(&achievements::CONSISTENT_WEEK.to_owned()));
    assert!(!unlocked.contains(&achievements::PERFECT_WEEK.to_owned()));
}

#[tokio::test]
async fn test_water_goal_today() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 20, 0, 0).unwrap();

    let store = store();
    store.add_water(today, 1500).await.unwrap();
    let unlocked = store.evaluate_achievements(today, now).await;
    assert!(!unlocked.contains(&achievements::WATER_GOAL.to_owned()));

    store.add_water(today, 500).await.unwrap();
    let unlocked = store.evaluate_achievements(today, now).await;
    assert!(unlocked.contains(&achievements::WATER_GOAL.to_owned()));
}

#[tokio::test]
async fn test_unlock_is_idempotent_and_keeps_first_timestamp() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let first = Utc.with_ymd_and_hms(2025, 6, 15, 20, 0, 0).unwrap();
    let later = Utc.with_ymd_and_hms(2025, 6, 16, 9, 0, 0).unwrap();

    let store = store();
    store.add_water(today, 2000).await.unwrap();

    let unlocked = store.evaluate_achievements(today, first).await;
    assert_eq!(unlocked, vec![achievements::WATER_GOAL.to_owned()]);

    // Re-running a satisfied check reports nothing new and keeps the stamp
    let unlocked = store.evaluate_achievements(today, later).await;
    assert!(unlocked.is_empty());

    let badges = store.badges().await;
    let badge = badges
        .iter()
        .find(|badge| badge.id == achievements::WATER_GOAL)
        .unwrap();
    assert!(badge.unlocked);
    assert_eq!(badge.unlocked_at, Some(first));
}

#[tokio::test]
async fn test_breaking_the_streak_does_not_relock() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 20, 0, 0).unwrap();

    let store = store();
    store.upsert_food(goal_food()).await;
    for offset in 0..7 {
        store.log_food(day(today, offset), "goal", 50.0).await.unwrap();
    }
    store.evaluate_achievements(today, now).await;

    // A week later with an empty diary window the badge stays unlocked
    let much_later = today + ChronoDuration::days(30);
    let later_now = Utc.with_ymd_and_hms(2025, 7, 15, 20, 0, 0).unwrap();
    store.evaluate_achievements(much_later, later_now).await;

    let badges = store.badges().await;
    let badge = badges
        .iter()
        .find(|badge| badge.id == achievements::STREAK_WEEK)
        .unwrap();
    assert!(badge.unlocked);
    assert_eq!(badge.unlocked_at, Some(now));
}
