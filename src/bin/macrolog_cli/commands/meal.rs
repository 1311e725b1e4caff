// ABOUTME: Composed meal commands - create, add ingredients, list, favorite, log
// ABOUTME: Meal totals are derived by the engine; this module only displays them

use super::{resolve, today_or};
use crate::MealCommand;
use anyhow::Result;
use macrolog::state::StateStore;

/// Dispatch a meal subcommand
pub async fn run(store: &StateStore, action: MealCommand) -> Result<()> {
    match action {
        MealCommand::Create { name } => {
            let meal = store.create_meal(name).await;
            println!("created {} ({})", meal.name, meal.id);
        }
        MealCommand::Add { meal, food, grams } => {
            let meal_id = resolve_meal(store, &meal).await?;
            let foods = store.foods().await;
            let food_id = resolve(
                foods.iter().map(|f| (f.id.as_str(), f.name.as_str())),
                &food,
                "food",
            )?;
            let updated = store.add_ingredient(&meal_id, &food_id, grams).await?;
            println!(
                "{}: {} ingredients, {:.0} kcal  P {:.1}  C {:.1}  F {:.1}",
                updated.name,
                updated.ingredient_count,
                updated.total_calories,
                updated.total_protein,
                updated.total_carbs,
                updated.total_fat
            );
        }
        MealCommand::List => {
            for meal in store.meals().await {
                let marker = if meal.is_favorite { "*" } else { " " };
                println!(
                    "{marker} {}  {}  {} ingredients  {:.0} kcal  P {:.1}  C {:.1}  F {:.1}",
                    meal.id,
                    meal.name,
                    meal.ingredient_count,
                    meal.total_calories,
                    meal.total_protein,
                    meal.total_carbs,
                    meal.total_fat
                );
            }
        }
        MealCommand::Favorite { meal } => {
            let meal_id = resolve_meal(store, &meal).await?;
            let now_favorite = store.toggle_meal_favorite(&meal_id).await?;
            println!(
                "{meal_id} is {} a favorite",
                if now_favorite { "now" } else { "no longer" }
            );
        }
        MealCommand::Remove { meal } => {
            let meal_id = resolve_meal(store, &meal).await?;
            store.remove_meal(&meal_id).await?;
            println!("removed {meal_id}");
        }
        MealCommand::Log { meal, date } => {
            let meal_id = resolve_meal(store, &meal).await?;
            let date = today_or(date);
            let items = store.log_meal(date, &meal_id).await?;
            println!("logged {} items to {date}", items.len());
        }
    }
    Ok(())
}

async fn resolve_meal(store: &StateStore, needle: &str) -> Result<String> {
    let meals = store.meals().await;
    resolve(
        meals.iter().map(|m| (m.id.as_str(), m.name.as_str())),
        needle,
        "meal",
    )
}
