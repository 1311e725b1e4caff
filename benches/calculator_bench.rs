// ABOUTME: Criterion benchmarks for the nutrition and grade calculators
// ABOUTME: Aggregation over a realistic catalog and daily scoring throughput

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use macrolog::intelligence::grade_calculator::score_day;
use macrolog::intelligence::nutrition_calculator::{compute_meal_totals, diary_item};
use macrolog::models::{DailyMealItem, FoodItem, MealIngredient, Settings};
use std::hint::black_box;

fn catalog(size: usize) -> Vec<FoodItem> {
    (0..size)
        .map(|index| {
            let mut food = FoodItem::new(
                format!("Food {index}"),
                100.0 + index as f64,
                10.0,
                20.0,
                5.0,
            );
            food.id = format!("food-{index}");
            food
        })
        .collect()
}

fn bench_meal_totals(c: &mut Criterion) {
    let foods = catalog(200);
    let ingredients: Vec<MealIngredient> = (0..30)
        .map(|index| MealIngredient {
            food_id: format!("food-{}", index * 6),
            name: format!("Food {}", index * 6),
            grams: 50.0 + index as f64,
        })
        .collect();

    c.bench_function("compute_meal_totals_30_ingredients", |b| {
        b.iter(|| compute_meal_totals(black_box(&ingredients), black_box(&foods)));
    });
}

fn bench_score_day(c: &mut Criterion) {
    let foods = catalog(10);
    let settings = Settings::default();
    let items: Vec<DailyMealItem> = foods
        .iter()
        .map(|food| diary_item(food, 150.0))
        .collect();

    c.bench_function("score_day_10_items", |b| {
        b.iter(|| score_day(black_box(&items), black_box(&settings)));
    });
}

criterion_group!(benches, bench_meal_totals, bench_score_day);
criterion_main!(benches);
