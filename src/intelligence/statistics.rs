// ABOUTME: Trailing daily intake series and window summaries
// ABOUTME: Averages and grade distribution over the recent diary history

//! Statistics Module
//!
//! Produces the data behind the simple statistics views: a trailing daily
//! series of totals and grades, and a window summary with averages and a
//! grade distribution. Pure over the snapshot collections.

use crate::intelligence::grade_calculator::{score_day, Grade};
use crate::intelligence::nutrition_calculator::NutrientTotals;
use crate::models::{DailyMeal, Settings};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One day of the trailing series
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    /// Calendar date
    pub date: NaiveDate,
    /// Summed intake for the date (zeros when nothing was logged)
    pub totals: NutrientTotals,
    /// Letter grade for the date
    pub grade: Grade,
    /// Number of diary items logged
    pub items_logged: usize,
}

/// Aggregate view over a trailing window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSummary {
    /// Window length in days
    pub days: u32,
    /// Days with at least one logged item
    pub days_logged: u32,
    /// Average calories over logged days (0 when none)
    pub avg_calories: f64,
    /// Average protein over logged days (0 when none)
    pub avg_protein: f64,
    /// Average carbohydrates over logged days (0 when none)
    pub avg_carbs: f64,
    /// Average fat over logged days (0 when none)
    pub avg_fat: f64,
    /// Grade occurrence counts over every day of the window
    pub grade_counts: BTreeMap<Grade, u32>,
}

/// Trailing daily series ending today (inclusive), oldest first
#[must_use]
pub fn trailing_series(
    daily_meals: &BTreeMap<NaiveDate, DailyMeal>,
    settings: &Settings,
    today: NaiveDate,
    days: u32,
) -> Vec<DailyPoint> {
    (0..i64::from(days))
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let items = daily_meals
                .get(&date)
                .map_or(&[] as &[_], |day| day.items.as_slice());
            let score = score_day(items, settings);
            DailyPoint {
                date,
                totals: score.totals,
                grade: score.grade,
                items_logged: items.len(),
            }
        })
        .collect()
}

/// Summarize a trailing window: averages over logged days plus the grade
/// distribution over every day of the window
#[must_use]
pub fn window_summary(
    daily_meals: &BTreeMap<NaiveDate, DailyMeal>,
    settings: &Settings,
    today: NaiveDate,
    days: u32,
) -> WindowSummary {
    let series = trailing_series(daily_meals, settings, today, days);

    let mut grade_counts = BTreeMap::new();
    let mut logged = 0u32;
    let mut sums = NutrientTotals::default();

    for point in &series {
        *grade_counts.entry(point.grade).or_insert(0) += 1;
        if point.items_logged > 0 {
            logged += 1;
            sums.calories += point.totals.calories;
            sums.protein += point.totals.protein;
            sums.carbs += point.totals.carbs;
            sums.fat += point.totals.fat;
        }
    }

    let divisor = if logged == 0 { 1.0 } else { f64::from(logged) };
    WindowSummary {
        days,
        days_logged: logged,
        avg_calories: sums.calories / divisor,
        avg_protein: sums.protein / divisor,
        avg_carbs: sums.carbs / divisor,
        avg_fat: sums.fat / divisor,
        grade_counts,
    }
}
