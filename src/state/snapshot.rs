// ABOUTME: The full application-state snapshot persisted as one JSON blob
// ABOUTME: Default snapshot seeds the badge catalog and starter categories

//! Application snapshot
//!
//! One value holds every domain collection. The snapshot is the persistence
//! format: it serializes to a single JSON document stored under one
//! well-known key, with camelCase field names. There is no schema version
//! field; absent fields deserialize to their defaults.

use crate::constants::achievements;
use crate::models::{
    Badge, DailyMeal, FoodItem, HealthEntry, Meal, Settings, ShoppingList, WeeklyAssignment,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every domain collection owned by the application, in one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    /// Food catalog
    #[serde(default)]
    pub foods: Vec<FoodItem>,
    /// Diary entries keyed by date
    #[serde(default)]
    pub daily_meals: BTreeMap<NaiveDate, DailyMeal>,
    /// Composed meals
    #[serde(default)]
    pub meals: Vec<Meal>,
    /// Weekly planner assignments
    #[serde(default)]
    pub weekly_assignments: Vec<WeeklyAssignment>,
    /// Shopping lists
    #[serde(default)]
    pub shopping_lists: Vec<ShoppingList>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
    /// Known food categories
    #[serde(default)]
    pub categories: Vec<String>,
    /// Achievement badges
    #[serde(default)]
    pub badges: Vec<Badge>,
    /// Health records keyed by date
    #[serde(default)]
    pub health_data: BTreeMap<NaiveDate, HealthEntry>,
    /// Cumulative water intake (ml) keyed by date
    #[serde(default)]
    pub water_intake: BTreeMap<NaiveDate, u32>,
}

impl Default for AppSnapshot {
    fn default() -> Self {
        Self {
            foods: Vec::new(),
            daily_meals: BTreeMap::new(),
            meals: Vec::new(),
            weekly_assignments: Vec::new(),
            shopping_lists: Vec::new(),
            settings: Settings::default(),
            categories: default_categories(),
            badges: default_badges(),
            health_data: BTreeMap::new(),
            water_intake: BTreeMap::new(),
        }
    }
}

/// The badge catalog every fresh snapshot starts with
#[must_use]
pub fn default_badges() -> Vec<Badge> {
    vec![
        Badge::new(
            achievements::STREAK_WEEK,
            "Week Streak",
            "Logged at least one food every day for 7 days",
        ),
        Badge::new(
            achievements::CONSISTENT_WEEK,
            "Right on Target",
            "Stayed within 10% of every nutrition goal for 7 days",
        ),
        Badge::new(
            achievements::PERFECT_WEEK,
            "Perfect Week",
            "Earned an A+ grade every day for 7 days",
        ),
        Badge::new(
            achievements::WATER_GOAL,
            "Hydrated",
            "Reached the daily water target",
        ),
    ]
}

/// Starter category list for a fresh catalog
#[must_use]
pub fn default_categories() -> Vec<String> {
    [
        "Fruit",
        "Vegetables",
        "Grains",
        "Dairy",
        "Meat & Fish",
        "Snacks",
        "Beverages",
    ]
    .map(str::to_owned)
    .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_seeds_badges_locked() {
        let snapshot = AppSnapshot::default();
        assert_eq!(snapshot.badges.len(), 4);
        assert!(snapshot.badges.iter().all(|badge| !badge.unlocked));
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let snapshot = AppSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: AppSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, restored);
    }

    #[test]
    fn test_absent_fields_fall_back_to_defaults() {
        let restored: AppSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(restored.settings, crate::models::Settings::default());
        assert!(restored.foods.is_empty());
    }
}
