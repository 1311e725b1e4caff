// ABOUTME: Common data models for the nutrition tracking domain
// ABOUTME: Foods, meals, diary entries, settings, badges, and auxiliary planning records

//! Common data models for nutrition tracking
//!
//! All records serialize with camelCase field names; that is the wire shape
//! of the persisted snapshot and of export documents. Nutrient values on a
//! `FoodItem` are per 100 g; values on a `DailyMealItem` are already scaled
//! to the logged gram quantity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A food in the catalog, with nutrient values per 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Unique identifier (immutable once assigned)
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional category (e.g. "Dairy", "Fruit")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Calories per 100 g (kcal)
    pub calories: f64,
    /// Protein per 100 g (g)
    pub protein: f64,
    /// Carbohydrates per 100 g (g)
    pub carbs: f64,
    /// Fat per 100 g (g)
    pub fat: f64,
    /// Fiber per 100 g (g), when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    /// Sugar per 100 g (g), when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    /// Sodium per 100 g (mg), when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    /// Marked as favorite by the user
    #[serde(default)]
    pub is_favorite: bool,
}

impl FoodItem {
    /// Create a new catalog entry with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category: None,
            calories: calories.max(0.0),
            protein: protein.max(0.0),
            carbs: carbs.max(0.0),
            fat: fat.max(0.0),
            fiber: None,
            sugar: None,
            sodium: None,
            is_favorite: false,
        }
    }

    /// Set the category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// One ingredient line of a composed meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealIngredient {
    /// Catalog reference; may dangle if the food was later deleted
    pub food_id: String,
    /// Denormalized display name
    pub name: String,
    /// Gram quantity (positive)
    pub grams: f64,
}

/// A composed meal with derived nutrition totals
///
/// The `total_*` fields and `ingredient_count` are derived: they must always
/// equal the aggregation of the ingredient list against the current catalog.
/// They are recomputed on every ingredient mutation and never hand-edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Ordered ingredient list
    pub ingredients: Vec<MealIngredient>,
    /// Marked as favorite by the user
    #[serde(default)]
    pub is_favorite: bool,
    /// Derived: total calories (kcal, whole number)
    pub total_calories: f64,
    /// Derived: total protein (g, one decimal)
    pub total_protein: f64,
    /// Derived: total carbohydrates (g, one decimal)
    pub total_carbs: f64,
    /// Derived: total fat (g, one decimal)
    pub total_fat: f64,
    /// Derived: number of ingredient lines
    pub ingredient_count: usize,
}

impl Meal {
    /// Create an empty meal with a fresh id and zeroed totals
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            ingredients: Vec::new(),
            is_favorite: false,
            total_calories: 0.0,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fat: 0.0,
            ingredient_count: 0,
        }
    }
}

/// One diary line: a food logged as consumed, nutrients pre-scaled to grams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMealItem {
    /// Catalog reference at logging time
    pub food_id: String,
    /// Denormalized display name
    pub name: String,
    /// Calories scaled to the logged quantity (kcal, whole number)
    pub calories: f64,
    /// Protein scaled to the logged quantity (g, one decimal)
    pub protein: f64,
    /// Carbohydrates scaled to the logged quantity (g, one decimal)
    pub carbs: f64,
    /// Fat scaled to the logged quantity (g, one decimal)
    pub fat: f64,
    /// Logged gram quantity
    pub grams: f64,
}

/// All diary items of one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMeal {
    /// Calendar date this entry belongs to (unique per date)
    pub date: NaiveDate,
    /// Ordered list of logged items
    pub items: Vec<DailyMealItem>,
}

impl DailyMeal {
    /// Create an empty diary entry for a date
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            items: Vec::new(),
        }
    }
}

/// Water reminder window configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterReminder {
    /// Reminders enabled
    pub enabled: bool,
    /// First reminder hour (24h clock)
    pub start_hour: u8,
    /// Last hour reminders may fire (24h clock)
    pub end_hour: u8,
    /// Minutes between reminders
    pub interval_minutes: u16,
}

/// Global user settings: nutrition goals, water targets, display options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Daily calorie goal (kcal)
    pub calorie_goal: f64,
    /// Daily protein goal (g)
    pub protein_goal: f64,
    /// Daily carbohydrate goal (g)
    pub carbs_goal: f64,
    /// Daily fat goal (g)
    pub fat_goal: f64,
    /// Daily water target (ml)
    pub water_target_ml: u32,
    /// Glass capacity used by one-tap water logging (ml)
    pub glass_size_ml: u32,
    /// Water reminder window
    pub water_reminder: WaterReminder,
    /// Page size for catalog list views
    pub items_per_page: u32,
}

impl Default for Settings {
    fn default() -> Self {
        use crate::constants::defaults;
        Self {
            calorie_goal: defaults::CALORIE_GOAL,
            protein_goal: defaults::PROTEIN_GOAL,
            carbs_goal: defaults::CARBS_GOAL,
            fat_goal: defaults::FAT_GOAL,
            water_target_ml: defaults::WATER_TARGET_ML,
            glass_size_ml: defaults::GLASS_SIZE_ML,
            water_reminder: WaterReminder {
                enabled: false,
                start_hour: defaults::REMINDER_START_HOUR,
                end_hour: defaults::REMINDER_END_HOUR,
                interval_minutes: defaults::REMINDER_INTERVAL_MINUTES,
            },
            items_per_page: defaults::ITEMS_PER_PAGE,
        }
    }
}

/// A persistent one-way achievement unlock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    /// Stable slug identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// What the user did to earn it
    pub description: String,
    /// Unlock flag; transitions false -> true exactly once
    #[serde(default)]
    pub unlocked: bool,
    /// Wall-clock time of the unlock evaluation, set once
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Badge {
    /// Create a locked badge
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            unlocked: false,
            unlocked_at: None,
        }
    }

    /// Unlock the badge, stamping `now` on the first transition only.
    ///
    /// Returns `true` when this call performed the unlock. An already
    /// unlocked badge keeps its original timestamp.
    pub fn unlock(&mut self, now: DateTime<Utc>) -> bool {
        if self.unlocked {
            return false;
        }
        self.unlocked = true;
        self.unlocked_at = Some(now);
        true
    }
}

/// One line of a shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Display text (e.g. "Oats 500g")
    pub name: String,
    /// Checked off by the user
    #[serde(default)]
    pub checked: bool,
}

/// A named shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Ordered items
    pub items: Vec<ShoppingItem>,
}

impl ShoppingList {
    /// Create an empty shopping list with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            items: Vec::new(),
        }
    }
}

/// A meal planned for a weekday in the weekly planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAssignment {
    /// Unique identifier
    pub id: String,
    /// Weekday index, 0 = Monday .. 6 = Sunday
    pub weekday: u8,
    /// Assigned meal reference
    pub meal_id: String,
    /// Denormalized meal name
    pub meal_name: String,
}

impl WeeklyAssignment {
    /// Assign a meal to a weekday
    #[must_use]
    pub fn new(weekday: u8, meal_id: impl Into<String>, meal_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            weekday: weekday.min(6),
            meal_id: meal_id.into(),
            meal_name: meal_name.into(),
        }
    }
}

/// Per-date health record (body metrics alongside the diary)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntry {
    /// Body weight (kg), when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
