// ABOUTME: Nutrition aggregation - ingredient scaling and meal total computation
// ABOUTME: Pure, deterministic arithmetic with fixed rounding semantics

//! Nutrition Calculator Module
//!
//! Computes nutrient contributions of ingredients scaled by gram quantity
//! and aggregates them into meal totals. All functions here are pure and
//! idempotent: the same inputs always produce the same outputs, including
//! when inputs were already rounded.
//!
//! Rounding semantics are fixed across the application:
//! - calories round to the nearest whole number (half rounds up)
//! - gram-based macros round to one decimal place (x10, round, /10)
//!
//! An ingredient whose `food_id` no longer resolves in the catalog
//! contributes zero and is skipped; a dangling reference is not an error.

use crate::models::{DailyMealItem, FoodItem, Meal, MealIngredient};
use serde::{Deserialize, Serialize};

/// Aggregated nutrient totals (calories whole, macros one decimal)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientTotals {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

/// Round a calorie value to the nearest whole number, half up
#[must_use]
pub fn round_calories(value: f64) -> f64 {
    value.round()
}

/// Round a gram-based macro value to one decimal place, half up
#[must_use]
pub fn round_macro(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Look up a food in the catalog by id
#[must_use]
pub fn find_food<'a>(catalog: &'a [FoodItem], food_id: &str) -> Option<&'a FoodItem> {
    catalog.iter().find(|food| food.id == food_id)
}

/// Scale a food's per-100g nutrients to a gram quantity, rounded
///
/// This is the contribution a single portion makes, and the shape a diary
/// item stores: 165 kcal / 31 g protein per 100 g at 150 g yields
/// 248 kcal / 46.5 g.
#[must_use]
pub fn scale_food(food: &FoodItem, grams: f64) -> NutrientTotals {
    let factor = grams / 100.0;
    NutrientTotals {
        calories: round_calories(food.calories * factor),
        protein: round_macro(food.protein * factor),
        carbs: round_macro(food.carbs * factor),
        fat: round_macro(food.fat * factor),
    }
}

/// Build a diary item for a logged portion of a catalog food
#[must_use]
pub fn diary_item(food: &FoodItem, grams: f64) -> DailyMealItem {
    let scaled = scale_food(food, grams);
    DailyMealItem {
        food_id: food.id.clone(),
        name: food.name.clone(),
        calories: scaled.calories,
        protein: scaled.protein,
        carbs: scaled.carbs,
        fat: scaled.fat,
        grams,
    }
}

/// Aggregate meal totals from an ingredient list and the current catalog
///
/// Contributions are summed unrounded, then the sums are rounded once.
/// Unresolved ingredient references are skipped.
#[must_use]
pub fn compute_meal_totals(
    ingredients: &[MealIngredient],
    catalog: &[FoodItem],
) -> NutrientTotals {
    let mut calories = 0.0;
    let mut protein = 0.0;
    let mut carbs = 0.0;
    let mut fat = 0.0;

    for ingredient in ingredients {
        let Some(food) = find_food(catalog, &ingredient.food_id) else {
            continue;
        };
        let factor = ingredient.grams / 100.0;
        calories += food.calories * factor;
        protein += food.protein * factor;
        carbs += food.carbs * factor;
        fat += food.fat * factor;
    }

    NutrientTotals {
        calories: round_calories(calories),
        protein: round_macro(protein),
        carbs: round_macro(carbs),
        fat: round_macro(fat),
    }
}

/// Recompute a meal's derived totals in place
///
/// Call after every ingredient mutation; the derived fields are never
/// edited directly anywhere else.
pub fn refresh_meal_totals(meal: &mut Meal, catalog: &[FoodItem]) {
    let totals = compute_meal_totals(&meal.ingredients, catalog);
    meal.total_calories = totals.calories;
    meal.total_protein = totals.protein;
    meal.total_carbs = totals.carbs;
    meal.total_fat = totals.fat;
    meal.ingredient_count = meal.ingredients.len();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicken() -> FoodItem {
        FoodItem {
            id: "chicken".into(),
            ..FoodItem::new("Chicken breast", 165.0, 31.0, 0.0, 3.6)
        }
    }

    #[test]
    fn test_scale_food_matches_reference_scenario() {
        let scaled = scale_food(&chicken(), 150.0);
        assert_eq!(scaled.calories, 248.0);
        assert_eq!(scaled.protein, 46.5);
    }

    #[test]
    fn test_rounding_is_half_up() {
        assert_eq!(round_calories(247.5), 248.0);
        assert_eq!(round_macro(46.45), 46.5);
        assert_eq!(round_macro(46.44), 46.4);
    }

    #[test]
    fn test_unresolved_ingredient_contributes_zero() {
        let catalog = vec![chicken()];
        let ingredients = vec![
            MealIngredient {
                food_id: "chicken".into(),
                name: "Chicken breast".into(),
                grams: 100.0,
            },
            MealIngredient {
                food_id: "deleted-food".into(),
                name: "Gone".into(),
                grams: 500.0,
            },
        ];
        let totals = compute_meal_totals(&ingredients, &catalog);
        assert_eq!(totals.calories, 165.0);
        assert_eq!(totals.protein, 31.0);
    }
}
