// ABOUTME: Integration tests for daily scoring and letter grade mapping
// ABOUTME: Exact-goal days, empty days, threshold boundaries, uncapped ratios

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macrolog::intelligence::grade_calculator::{score_day, sum_day, Grade};
use macrolog::models::{DailyMealItem, Settings};

fn item(calories: f64, protein: f64, carbs: f64, fat: f64) -> DailyMealItem {
    DailyMealItem {
        food_id: "food".into(),
        name: "Food".into(),
        calories,
        protein,
        carbs,
        fat,
        grams: 100.0,
    }
}

#[test]
fn test_exact_goal_day_grades_a_plus() {
    let settings = Settings::default();
    let items = vec![item(
        settings.calorie_goal,
        settings.protein_goal,
        settings.carbs_goal,
        settings.fat_goal,
    )];
    let score = score_day(&items, &settings);
    assert!((score.score - 1.0).abs() < 1e-9);
    assert_eq!(score.grade, Grade::APlus);
}

#[test]
fn test_zero_day_grades_f() {
    let score = score_day(&[], &Settings::default());
    assert_eq!(score.ratios, [0.0; 4]);
    assert_eq!(score.grade, Grade::F);
}

#[test]
fn test_sum_day_adds_per_item_values() {
    let items = vec![item(300.0, 20.0, 30.0, 10.0), item(200.0, 10.0, 15.0, 5.0)];
    let totals = sum_day(&items);
    assert_eq!(totals.calories, 500.0);
    assert_eq!(totals.protein, 30.0);
    assert_eq!(totals.carbs, 45.0);
    assert_eq!(totals.fat, 15.0);
}

#[test]
fn test_grade_ladder() {
    let cases = [
        (0.97, Grade::APlus),
        (0.92, Grade::A),
        (0.87, Grade::AMinus),
        (0.82, Grade::BPlus),
        (0.77, Grade::B),
        (0.72, Grade::BMinus),
        (0.65, Grade::CPlus),
        (0.55, Grade::C),
        (0.45, Grade::CMinus),
        (0.30, Grade::D),
        (0.10, Grade::F),
    ];
    for (score, expected) in cases {
        assert_eq!(Grade::from_score(score), expected, "score {score}");
    }
}

#[test]
fn test_overeating_still_grades_a_plus() {
    let settings = Settings::default();
    let items = vec![item(
        settings.calorie_goal * 3.0,
        settings.protein_goal * 3.0,
        settings.carbs_goal * 3.0,
        settings.fat_goal * 3.0,
    )];
    let score = score_day(&items, &settings);
    assert!(score.score > 1.0);
    assert_eq!(score.grade, Grade::APlus);
}

#[test]
fn test_partial_day_averages_ratios() {
    let settings = Settings::default();
    // Exactly half of every goal: score 0.5 sits on the C boundary
    let items = vec![item(
        settings.calorie_goal / 2.0,
        settings.protein_goal / 2.0,
        settings.carbs_goal / 2.0,
        settings.fat_goal / 2.0,
    )];
    let score = score_day(&items, &settings);
    assert_eq!(score.grade, Grade::C);
}
