// ABOUTME: Application state store - one in-memory snapshot with an action interface
// ABOUTME: Mutations apply synchronously and schedule debounced writes to storage

//! Application state store and persistence adapter
//!
//! The store owns a single [`AppSnapshot`] behind an async lock and is the
//! only writer to durable storage. Every mutating action replaces the
//! relevant slice synchronously, then schedules a durable write.
//!
//! Writes are debounced: a mutation inside the quiet window cancels the
//! previously scheduled write and reschedules, so only the final state of a
//! burst is persisted. [`StateStore::flush`] bypasses the debounce for
//! operations that must be durable immediately (e.g. before shutdown).
//! A persisted write always reflects a later-or-equal in-memory snapshot
//! than what was previously durable.
//!
//! Failure policy matches the rest of the engine: a failed load falls back
//! to the default snapshot, a failed save is logged and dropped (the next
//! mutation retries naturally). Neither surfaces to the user.

use crate::config::environment::AppConfig;
use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::intelligence::achievement_engine::{AchievementEngine, EvaluationContext};
use crate::intelligence::grade_calculator::{score_day, DayScore};
use crate::intelligence::nutrition_calculator::{diary_item, find_food, refresh_meal_totals};
use crate::intelligence::statistics::{trailing_series, window_summary, DailyPoint, WindowSummary};
use crate::models::{
    Badge, DailyMeal, DailyMealItem, FoodItem, HealthEntry, Meal, MealIngredient, Settings,
    ShoppingItem, ShoppingList, WeeklyAssignment,
};
use crate::storage_plugins::{Storage, StorageProvider};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub mod export;
pub mod snapshot;

pub use export::ExportDocument;
pub use snapshot::AppSnapshot;

/// The application state store
///
/// Cheap to clone; clones share the same snapshot and pending-write slot.
#[derive(Clone)]
pub struct StateStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    snapshot: RwLock<AppSnapshot>,
    storage: Storage,
    state_key: String,
    quiet_window: Duration,
    /// Single pending-write slot; scheduling aborts and replaces it
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl StoreInner {
    /// Serialize the current snapshot and hand it to storage.
    ///
    /// Save failures are logged and dropped; the next mutation reschedules.
    async fn persist(&self) {
        let payload = {
            let guard = self.snapshot.read().await;
            serde_json::to_string(&*guard)
        };
        match payload {
            Ok(payload) => {
                if let Err(error) = self.storage.set(&self.state_key, &payload).await {
                    warn!(%error, "state save failed; dropped, next mutation retries");
                } else {
                    debug!(bytes = payload.len(), "state persisted");
                }
            }
            Err(error) => warn!(%error, "state serialization failed; save skipped"),
        }
    }
}

impl StateStore {
    /// Create a store over the given storage backend, without loading
    #[must_use]
    pub fn new(storage: Storage, state_key: impl Into<String>, quiet_window: Duration) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                snapshot: RwLock::new(AppSnapshot::default()),
                storage,
                state_key: state_key.into(),
                quiet_window,
                pending: Mutex::new(None),
            }),
        }
    }

    /// Build storage from configuration, create the store, and load state
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be initialized. A
    /// missing or malformed persisted snapshot is not an error; it falls
    /// back to defaults.
    pub async fn open(config: &AppConfig) -> anyhow::Result<Self> {
        let storage = Storage::new(&config.storage_url).await?;
        info!(backend = storage.backend_info(), "storage ready");
        let store = Self::new(storage, config.state_key.clone(), config.save_debounce);
        store.load().await;
        Ok(store)
    }

    /// Load persisted state, replacing the in-memory snapshot entirely.
    ///
    /// Malformed or absent data silently falls back to the default
    /// snapshot; this never fails the application.
    pub async fn load(&self) {
        let loaded = match self.inner.storage.get(&self.inner.state_key).await {
            Ok(Some(raw)) => match serde_json::from_str::<AppSnapshot>(&raw) {
                Ok(snapshot) => {
                    info!("persisted state restored");
                    snapshot
                }
                Err(error) => {
                    warn!(%error, "persisted state malformed; starting from defaults");
                    AppSnapshot::default()
                }
            },
            Ok(None) => {
                info!("no persisted state; starting from defaults");
                AppSnapshot::default()
            }
            Err(error) => {
                warn!(%error, "storage read failed; starting from defaults");
                AppSnapshot::default()
            }
        };
        *self.inner.snapshot.write().await = loaded;
    }

    /// Cancel any pending debounced write and persist immediately
    pub async fn flush(&self) {
        let mut pending = self.inner.pending.lock().await;
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        drop(pending);
        self.inner.persist().await;
    }

    /// Schedule a debounced write, replacing any pending one
    async fn schedule_save(&self) {
        let mut pending = self.inner.pending.lock().await;
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        let inner = Arc::clone(&self.inner);
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.quiet_window).await;
            inner.persist().await;
        }));
    }

    /// Apply a mutation under the write lock, then schedule a save
    async fn mutate<R>(&self, apply: impl FnOnce(&mut AppSnapshot) -> R) -> R {
        let result = {
            let mut guard = self.inner.snapshot.write().await;
            apply(&mut guard)
        };
        self.schedule_save().await;
        result
    }

    /// Like [`Self::mutate`], but only schedules a save when the action
    /// succeeded (a rejected action leaves nothing new to persist)
    async fn try_mutate<R>(
        &self,
        apply: impl FnOnce(&mut AppSnapshot) -> AppResult<R>,
    ) -> AppResult<R> {
        let result = {
            let mut guard = self.inner.snapshot.write().await;
            apply(&mut guard)
        };
        if result.is_ok() {
            self.schedule_save().await;
        }
        result
    }

    // ================================
    // Readers
    // ================================

    /// Clone the full snapshot
    pub async fn snapshot(&self) -> AppSnapshot {
        self.inner.snapshot.read().await.clone()
    }

    /// Current settings
    pub async fn settings(&self) -> Settings {
        self.inner.snapshot.read().await.settings.clone()
    }

    /// Current food catalog
    pub async fn foods(&self) -> Vec<FoodItem> {
        self.inner.snapshot.read().await.foods.clone()
    }

    /// Current composed meals
    pub async fn meals(&self) -> Vec<Meal> {
        self.inner.snapshot.read().await.meals.clone()
    }

    /// Current badge states
    pub async fn badges(&self) -> Vec<Badge> {
        self.inner.snapshot.read().await.badges.clone()
    }

    /// Diary entry for a date, if any
    pub async fn day(&self, date: NaiveDate) -> Option<DailyMeal> {
        self.inner.snapshot.read().await.daily_meals.get(&date).cloned()
    }

    /// Cumulative water intake for a date (ml)
    pub async fn water_on(&self, date: NaiveDate) -> u32 {
        self.inner
            .snapshot
            .read()
            .await
            .water_intake
            .get(&date)
            .copied()
            .unwrap_or(0)
    }

    /// Score a date's diary against the current goals
    pub async fn day_score(&self, date: NaiveDate) -> DayScore {
        let guard = self.inner.snapshot.read().await;
        let items = guard
            .daily_meals
            .get(&date)
            .map_or(&[] as &[_], |day| day.items.as_slice());
        score_day(items, &guard.settings)
    }

    /// Trailing daily series ending today
    pub async fn series(&self, today: NaiveDate, days: u32) -> Vec<DailyPoint> {
        let guard = self.inner.snapshot.read().await;
        trailing_series(&guard.daily_meals, &guard.settings, today, days)
    }

    /// Window summary ending today
    pub async fn summary(&self, today: NaiveDate, days: u32) -> WindowSummary {
        let guard = self.inner.snapshot.read().await;
        window_summary(&guard.daily_meals, &guard.settings, today, days)
    }

    // ================================
    // Slice-replacing actions
    // ================================

    /// Replace the food catalog
    pub async fn set_foods(&self, foods: Vec<FoodItem>) {
        self.mutate(|snapshot| snapshot.foods = foods).await;
    }

    /// Replace the diary collection
    pub async fn set_daily_meals(
        &self,
        daily_meals: BTreeMap<NaiveDate, DailyMeal>,
    ) {
        self.mutate(|snapshot| snapshot.daily_meals = daily_meals)
            .await;
    }

    /// Replace the composed meals
    pub async fn set_meals(&self, meals: Vec<Meal>) {
        self.mutate(|snapshot| snapshot.meals = meals).await;
    }

    /// Replace the weekly planner assignments
    pub async fn set_weekly_assignments(&self, assignments: Vec<WeeklyAssignment>) {
        self.mutate(|snapshot| snapshot.weekly_assignments = assignments)
            .await;
    }

    /// Replace the shopping lists
    pub async fn set_shopping_lists(&self, lists: Vec<ShoppingList>) {
        self.mutate(|snapshot| snapshot.shopping_lists = lists).await;
    }

    /// Replace the settings
    pub async fn set_settings(&self, settings: Settings) {
        self.mutate(|snapshot| snapshot.settings = settings).await;
    }

    /// Replace the category list
    pub async fn set_categories(&self, categories: Vec<String>) {
        self.mutate(|snapshot| snapshot.categories = categories).await;
    }

    /// Replace the badge collection
    pub async fn set_badges(&self, badges: Vec<Badge>) {
        self.mutate(|snapshot| snapshot.badges = badges).await;
    }

    /// Replace the health records
    pub async fn set_health_data(
        &self,
        health_data: BTreeMap<NaiveDate, HealthEntry>,
    ) {
        self.mutate(|snapshot| snapshot.health_data = health_data)
            .await;
    }

    /// Replace the water intake records
    pub async fn set_water_intake(
        &self,
        water_intake: BTreeMap<NaiveDate, u32>,
    ) {
        self.mutate(|snapshot| snapshot.water_intake = water_intake)
            .await;
    }

    // ================================
    // Food catalog operations
    // ================================

    /// Insert or replace a catalog entry by id.
    ///
    /// Derived meal totals depend on the catalog, so they are refreshed
    /// after every catalog change.
    pub async fn upsert_food(&self, food: FoodItem) {
        self.mutate(|snapshot| {
            match snapshot.foods.iter_mut().find(|entry| entry.id == food.id) {
                Some(existing) => *existing = food,
                None => snapshot.foods.push(food),
            }
            refresh_all_meals(snapshot);
        })
        .await;
    }

    /// Remove a catalog entry. Diary lines and ingredients referencing it
    /// stay behind as dangling references that aggregate to zero.
    pub async fn remove_food(&self, food_id: &str) -> AppResult<()> {
        self.try_mutate(|snapshot| {
            let before = snapshot.foods.len();
            snapshot.foods.retain(|food| food.id != food_id);
            if snapshot.foods.len() == before {
                return Err(AppError::not_found(format!("food {food_id}")));
            }
            refresh_all_meals(snapshot);
            Ok(())
        })
        .await
    }

    /// Toggle a food's favorite flag, returning the new state
    pub async fn toggle_food_favorite(&self, food_id: &str) -> AppResult<bool> {
        self.try_mutate(|snapshot| {
            let food = snapshot
                .foods
                .iter_mut()
                .find(|food| food.id == food_id)
                .ok_or_else(|| AppError::not_found(format!("food {food_id}")))?;
            food.is_favorite = !food.is_favorite;
            Ok(food.is_favorite)
        })
        .await
    }

    // ================================
    // Meal composition operations
    // ================================

    /// Create an empty meal, returning it
    pub async fn create_meal(&self, name: impl Into<String>) -> Meal {
        let meal = Meal::new(name);
        let created = meal.clone();
        self.mutate(|snapshot| snapshot.meals.push(meal)).await;
        created
    }

    /// Append an ingredient to a meal and recompute its totals
    pub async fn add_ingredient(
        &self,
        meal_id: &str,
        food_id: &str,
        grams: f64,
    ) -> AppResult<Meal> {
        if grams <= 0.0 || grams > limits::MAX_PORTION_GRAMS {
            return Err(AppError::out_of_range(format!(
                "portion must be between 0 and {} g",
                limits::MAX_PORTION_GRAMS
            )));
        }
        self.try_mutate(|snapshot| {
            let name = find_food(&snapshot.foods, food_id)
                .map(|food| food.name.clone())
                .ok_or_else(|| AppError::not_found(format!("food {food_id}")))?;
            let foods = snapshot.foods.clone();
            let meal = snapshot
                .meals
                .iter_mut()
                .find(|meal| meal.id == meal_id)
                .ok_or_else(|| AppError::not_found(format!("meal {meal_id}")))?;
            meal.ingredients.push(MealIngredient {
                food_id: food_id.to_owned(),
                name,
                grams,
            });
            refresh_meal_totals(meal, &foods);
            Ok(meal.clone())
        })
        .await
    }

    /// Remove an ingredient line by index and recompute totals
    pub async fn remove_ingredient(&self, meal_id: &str, index: usize) -> AppResult<Meal> {
        self.try_mutate(|snapshot| {
            let foods = snapshot.foods.clone();
            let meal = snapshot
                .meals
                .iter_mut()
                .find(|meal| meal.id == meal_id)
                .ok_or_else(|| AppError::not_found(format!("meal {meal_id}")))?;
            if index >= meal.ingredients.len() {
                return Err(AppError::out_of_range(format!(
                    "ingredient index {index} out of range"
                )));
            }
            meal.ingredients.remove(index);
            refresh_meal_totals(meal, &foods);
            Ok(meal.clone())
        })
        .await
    }

    /// Toggle a meal's favorite flag, returning the new state
    pub async fn toggle_meal_favorite(&self, meal_id: &str) -> AppResult<bool> {
        self.try_mutate(|snapshot| {
            let meal = snapshot
                .meals
                .iter_mut()
                .find(|meal| meal.id == meal_id)
                .ok_or_else(|| AppError::not_found(format!("meal {meal_id}")))?;
            meal.is_favorite = !meal.is_favorite;
            Ok(meal.is_favorite)
        })
        .await
    }

    /// Delete a composed meal
    pub async fn remove_meal(&self, meal_id: &str) -> AppResult<()> {
        self.try_mutate(|snapshot| {
            let before = snapshot.meals.len();
            snapshot.meals.retain(|meal| meal.id != meal_id);
            if snapshot.meals.len() == before {
                return Err(AppError::not_found(format!("meal {meal_id}")));
            }
            Ok(())
        })
        .await
    }

    // ================================
    // Diary operations
    // ================================

    /// Log a portion of a catalog food to a date's diary
    pub async fn log_food(
        &self,
        date: NaiveDate,
        food_id: &str,
        grams: f64,
    ) -> AppResult<DailyMealItem> {
        if grams <= 0.0 || grams > limits::MAX_PORTION_GRAMS {
            return Err(AppError::out_of_range(format!(
                "portion must be between 0 and {} g",
                limits::MAX_PORTION_GRAMS
            )));
        }
        self.try_mutate(|snapshot| {
            let food = find_food(&snapshot.foods, food_id)
                .ok_or_else(|| AppError::not_found(format!("food {food_id}")))?;
            let item = diary_item(food, grams);
            snapshot
                .daily_meals
                .entry(date)
                .or_insert_with(|| DailyMeal::new(date))
                .items
                .push(item.clone());
            Ok(item)
        })
        .await
    }

    /// Log every resolvable ingredient of a composed meal to a date's diary
    ///
    /// Ingredients whose food was deleted are skipped, consistent with the
    /// aggregation rules. Returns the items actually logged.
    pub async fn log_meal(&self, date: NaiveDate, meal_id: &str) -> AppResult<Vec<DailyMealItem>> {
        self.try_mutate(|snapshot| {
            let meal = snapshot
                .meals
                .iter()
                .find(|meal| meal.id == meal_id)
                .ok_or_else(|| AppError::not_found(format!("meal {meal_id}")))?;
            let items: Vec<DailyMealItem> = meal
                .ingredients
                .iter()
                .filter_map(|ingredient| {
                    find_food(&snapshot.foods, &ingredient.food_id)
                        .map(|food| diary_item(food, ingredient.grams))
                })
                .collect();
            snapshot
                .daily_meals
                .entry(date)
                .or_insert_with(|| DailyMeal::new(date))
                .items
                .extend(items.iter().cloned());
            Ok(items)
        })
        .await
    }

    /// Remove one diary line by index
    pub async fn remove_diary_item(&self, date: NaiveDate, index: usize) -> AppResult<()> {
        self.try_mutate(|snapshot| {
            let day = snapshot
                .daily_meals
                .get_mut(&date)
                .ok_or_else(|| AppError::not_found(format!("diary entry for {date}")))?;
            if index >= day.items.len() {
                return Err(AppError::out_of_range(format!(
                    "diary index {index} out of range"
                )));
            }
            day.items.remove(index);
            Ok(())
        })
        .await
    }

    // ================================
    // Water and health operations
    // ================================

    /// Add water to a date's cumulative total (ml), returning the new total
    pub async fn add_water(&self, date: NaiveDate, ml: u32) -> AppResult<u32> {
        if ml == 0 || ml > limits::MAX_WATER_ADD_ML {
            return Err(AppError::out_of_range(format!(
                "water addition must be between 1 and {} ml",
                limits::MAX_WATER_ADD_ML
            )));
        }
        self.try_mutate(|snapshot| {
            let total = snapshot.water_intake.entry(date).or_insert(0);
            *total = total.saturating_add(ml);
            Ok(*total)
        })
        .await
    }

    /// Record or replace the health entry for a date
    pub async fn set_health_entry(&self, date: NaiveDate, entry: HealthEntry) {
        self.mutate(|snapshot| {
            snapshot.health_data.insert(date, entry);
        })
        .await;
    }

    // ================================
    // Shopping list and planner operations
    // ================================

    /// Create an empty shopping list, returning it
    pub async fn add_shopping_list(&self, name: impl Into<String>) -> ShoppingList {
        let list = ShoppingList::new(name);
        let created = list.clone();
        self.mutate(|snapshot| snapshot.shopping_lists.push(list))
            .await;
        created
    }

    /// Append an item to a shopping list
    pub async fn add_shopping_item(
        &self,
        list_id: &str,
        name: impl Into<String>,
    ) -> AppResult<()> {
        let name = name.into();
        self.try_mutate(|snapshot| {
            let list = snapshot
                .shopping_lists
                .iter_mut()
                .find(|list| list.id == list_id)
                .ok_or_else(|| AppError::not_found(format!("shopping list {list_id}")))?;
            list.items.push(ShoppingItem {
                name,
                checked: false,
            });
            Ok(())
        })
        .await
    }

    /// Toggle an item's checked flag, returning the new state
    pub async fn toggle_shopping_item(&self, list_id: &str, index: usize) -> AppResult<bool> {
        self.try_mutate(|snapshot| {
            let list = snapshot
                .shopping_lists
                .iter_mut()
                .find(|list| list.id == list_id)
                .ok_or_else(|| AppError::not_found(format!("shopping list {list_id}")))?;
            let item = list.items.get_mut(index).ok_or_else(|| {
                AppError::out_of_range(format!("shopping item index {index} out of range"))
            })?;
            item.checked = !item.checked;
            Ok(item.checked)
        })
        .await
    }

    /// Assign a composed meal to a weekday in the planner
    pub async fn assign_meal(&self, weekday: u8, meal_id: &str) -> AppResult<WeeklyAssignment> {
        self.try_mutate(|snapshot| {
            let meal = snapshot
                .meals
                .iter()
                .find(|meal| meal.id == meal_id)
                .ok_or_else(|| AppError::not_found(format!("meal {meal_id}")))?;
            let assignment = WeeklyAssignment::new(weekday, meal.id.clone(), meal.name.clone());
            snapshot.weekly_assignments.push(assignment.clone());
            Ok(assignment)
        })
        .await
    }

    /// Remove a planner assignment
    pub async fn clear_assignment(&self, assignment_id: &str) -> AppResult<()> {
        self.try_mutate(|snapshot| {
            let before = snapshot.weekly_assignments.len();
            snapshot
                .weekly_assignments
                .retain(|assignment| assignment.id != assignment_id);
            if snapshot.weekly_assignments.len() == before {
                return Err(AppError::not_found(format!(
                    "assignment {assignment_id}"
                )));
            }
            Ok(())
        })
        .await
    }

    // ================================
    // Achievements
    // ================================

    /// Evaluate every achievement check against the current history,
    /// unlocking badges whose condition holds.
    ///
    /// Returns the ids newly unlocked by this evaluation. Idempotent:
    /// already-unlocked badges keep their original timestamp.
    pub async fn evaluate_achievements(
        &self,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Vec<String> {
        let engine = AchievementEngine::new();
        let unlocked = {
            let mut guard = self.inner.snapshot.write().await;
            let snapshot = &mut *guard;
            let ctx = EvaluationContext {
                daily_meals: &snapshot.daily_meals,
                water_intake: &snapshot.water_intake,
                settings: &snapshot.settings,
                today,
            };
            engine.evaluate(&ctx, &mut snapshot.badges, now)
        };
        if !unlocked.is_empty() {
            self.schedule_save().await;
        }
        unlocked
    }

    // ================================
    // Export / import
    // ================================

    /// Produce a flat export of every collection
    pub async fn export_data(&self, now: DateTime<Utc>) -> ExportDocument {
        let guard = self.inner.snapshot.read().await;
        ExportDocument::from_snapshot(&guard, now)
    }

    /// Apply an export document: each present key replaces its slice,
    /// absent keys are left untouched
    pub async fn import_data(&self, document: ExportDocument) {
        self.mutate(|snapshot| document.apply(snapshot)).await;
    }
}

/// Recompute the derived totals of every composed meal against the catalog
fn refresh_all_meals(snapshot: &mut AppSnapshot) {
    let foods = snapshot.foods.clone();
    for meal in &mut snapshot.meals {
        refresh_meal_totals(meal, &foods);
    }
}
