// ABOUTME: Export and import documents - a flat JSON view of every collection
// ABOUTME: Import replaces store slices per present key; absent keys are untouched

//! Export / import documents
//!
//! Export produces a flat JSON document aggregating every collection plus an
//! export timestamp. Import is additive-overwriting per top-level key: a key
//! present in the payload fully replaces the corresponding snapshot slice,
//! and absent keys leave the current slice alone.

use super::snapshot::AppSnapshot;
use crate::models::{
    Badge, DailyMeal, FoodItem, HealthEntry, Meal, Settings, ShoppingList, WeeklyAssignment,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat data document for backup and transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// When the export was produced
    pub exported_at: DateTime<Utc>,
    /// Food catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foods: Option<Vec<FoodItem>>,
    /// Diary entries keyed by date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_meals: Option<BTreeMap<NaiveDate, DailyMeal>>,
    /// Composed meals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals: Option<Vec<Meal>>,
    /// Weekly planner assignments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_assignments: Option<Vec<WeeklyAssignment>>,
    /// Shopping lists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopping_lists: Option<Vec<ShoppingList>>,
    /// Global settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    /// Known food categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// Achievement badges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<Badge>>,
    /// Health records keyed by date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_data: Option<BTreeMap<NaiveDate, HealthEntry>>,
    /// Cumulative water intake (ml) keyed by date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_intake: Option<BTreeMap<NaiveDate, u32>>,
}

impl ExportDocument {
    /// Build a complete export of the given snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: &AppSnapshot, exported_at: DateTime<Utc>) -> Self {
        Self {
            exported_at,
            foods: Some(snapshot.foods.clone()),
            daily_meals: Some(snapshot.daily_meals.clone()),
            meals: Some(snapshot.meals.clone()),
            weekly_assignments: Some(snapshot.weekly_assignments.clone()),
            shopping_lists: Some(snapshot.shopping_lists.clone()),
            settings: Some(snapshot.settings.clone()),
            categories: Some(snapshot.categories.clone()),
            badges: Some(snapshot.badges.clone()),
            health_data: Some(snapshot.health_data.clone()),
            water_intake: Some(snapshot.water_intake.clone()),
        }
    }

    /// Apply the document to a snapshot, replacing each present slice
    pub fn apply(self, snapshot: &mut AppSnapshot) {
        if let Some(foods) = self.foods {
            snapshot.foods = foods;
        }
        if let Some(daily_meals) = self.daily_meals {
            snapshot.daily_meals = daily_meals;
        }
        if let Some(meals) = self.meals {
            snapshot.meals = meals;
        }
        if let Some(weekly_assignments) = self.weekly_assignments {
            snapshot.weekly_assignments = weekly_assignments;
        }
        if let Some(shopping_lists) = self.shopping_lists {
            snapshot.shopping_lists = shopping_lists;
        }
        if let Some(settings) = self.settings {
            snapshot.settings = settings;
        }
        if let Some(categories) = self.categories {
            snapshot.categories = categories;
        }
        if let Some(badges) = self.badges {
            snapshot.badges = badges;
        }
        if let Some(health_data) = self.health_data {
            snapshot.health_data = health_data;
        }
        if let Some(water_intake) = self.water_intake {
            snapshot.water_intake = water_intake;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_partial_import_leaves_absent_keys_untouched() {
        let mut snapshot = AppSnapshot::default();
        snapshot.foods.push(FoodItem::new("Oats", 389.0, 16.9, 66.3, 6.9));

        let exported_at = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        let payload = format!(
            "{{\"exportedAt\":\"{}\",\"categories\":[\"Only\"]}}",
            exported_at.to_rfc3339()
        );
        let document: ExportDocument = serde_json::from_str(&payload).unwrap();
        document.apply(&mut snapshot);

        assert_eq!(snapshot.categories, vec!["Only".to_owned()]);
        assert_eq!(snapshot.foods.len(), 1);
    }
}
