// ABOUTME: Diary commands - log foods, show a day's intake and grade, water, health
// ABOUTME: Dates default to today in the local timezone

use super::{resolve, today_or};
use crate::WaterCommand;
use anyhow::Result;
use chrono::NaiveDate;
use macrolog::models::HealthEntry;
use macrolog::state::StateStore;

/// Log a food portion to the diary
pub async fn log_food(
    store: &StateStore,
    food: &str,
    grams: f64,
    date: Option<NaiveDate>,
) -> Result<()> {
    let foods = store.foods().await;
    let food_id = resolve(
        foods.iter().map(|f| (f.id.as_str(), f.name.as_str())),
        food,
        "food",
    )?;
    let date = today_or(date);
    let item = store.log_food(date, &food_id, grams).await?;
    println!(
        "logged {:.0}g {} to {date}: {:.0} kcal  P {:.1}  C {:.1}  F {:.1}",
        item.grams, item.name, item.calories, item.protein, item.carbs, item.fat
    );
    Ok(())
}

/// Print a day's diary lines, totals, ratios, and grade
pub async fn show_day(store: &StateStore, date: Option<NaiveDate>) {
    let date = today_or(date);
    let day = store.day(date).await;
    let score = store.day_score(date).await;
    let water = store.water_on(date).await;
    let settings = store.settings().await;

    println!("{date}");
    match day {
        Some(day) if !day.items.is_empty() => {
            for (index, item) in day.items.iter().enumerate() {
                println!(
                    "  [{index}] {:.0}g {}  {:.0} kcal  P {:.1}  C {:.1}  F {:.1}",
                    item.grams, item.name, item.calories, item.protein, item.carbs, item.fat
                );
            }
        }
        _ => println!("  (nothing logged)"),
    }
    println!(
        "totals: {:.0} kcal  P {:.1}  C {:.1}  F {:.1}",
        score.totals.calories, score.totals.protein, score.totals.carbs, score.totals.fat
    );
    println!(
        "water: {water} / {} ml   grade: {} (score {:.2})",
        settings.water_target_ml, score.grade, score.score
    );
}

/// Dispatch a water subcommand
pub async fn water(store: &StateStore, action: WaterCommand) -> Result<()> {
    match action {
        WaterCommand::Add { ml, date } => {
            let date = today_or(date);
            let amount = match ml {
                Some(ml) => ml,
                None => store.settings().await.glass_size_ml,
            };
            let total = store.add_water(date, amount).await?;
            println!("{date}: {total} ml");
        }
        WaterCommand::Show { date } => {
            let date = today_or(date);
            let total = store.water_on(date).await;
            let target = store.settings().await.water_target_ml;
            println!("{date}: {total} / {target} ml");
        }
    }
    Ok(())
}

/// Record a health entry for a date
pub async fn record_health(
    store: &StateStore,
    weight: Option<f64>,
    note: Option<String>,
    date: Option<NaiveDate>,
) {
    let date = today_or(date);
    store
        .set_health_entry(
            date,
            HealthEntry {
                weight_kg: weight,
                note,
            },
        )
        .await;
    println!("recorded health entry for {date}");
}
