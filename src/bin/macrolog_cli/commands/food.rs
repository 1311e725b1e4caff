// ABOUTME: Food catalog commands - add, list, search, favorite, remove, scan
// ABOUTME: Catalog references accept an id or a unique name prefix

use super::resolve;
use crate::FoodCommand;
use anyhow::Result;
use macrolog::models::FoodItem;
use macrolog::platform::{BarcodeScanner, NoopScanner};
use macrolog::state::StateStore;

/// Dispatch a food catalog subcommand
pub async fn run(store: &StateStore, action: FoodCommand) -> Result<()> {
    match action {
        FoodCommand::Add {
            name,
            calories,
            protein,
            carbs,
            fat,
            category,
        } => {
            let mut food = FoodItem::new(name, calories, protein, carbs, fat);
            food.category = category;
            println!("added {} ({})", food.name, food.id);
            store.upsert_food(food).await;
        }
        FoodCommand::List { favorites, page } => {
            let foods = store.foods().await;
            let per_page = store.settings().await.items_per_page.max(1) as usize;
            let filtered: Vec<&FoodItem> = foods
                .iter()
                .filter(|food| !favorites || food.is_favorite)
                .collect();
            let start = (page.max(1) as usize - 1) * per_page;
            for food in filtered.iter().skip(start).take(per_page) {
                print_food(food);
            }
            println!(
                "page {} of {} ({} foods)",
                page.max(1),
                filtered.len().div_ceil(per_page).max(1),
                filtered.len()
            );
        }
        FoodCommand::Search { query } => {
            let needle = query.to_lowercase();
            let foods = store.foods().await;
            for food in foods
                .iter()
                .filter(|food| food.name.to_lowercase().contains(&needle))
            {
                print_food(food);
            }
        }
        FoodCommand::Favorite { food } => {
            let foods = store.foods().await;
            let id = resolve(
                foods.iter().map(|f| (f.id.as_str(), f.name.as_str())),
                &food,
                "food",
            )?;
            let now_favorite = store.toggle_food_favorite(&id).await?;
            println!(
                "{id} is {} a favorite",
                if now_favorite { "now" } else { "no longer" }
            );
        }
        FoodCommand::Remove { food } => {
            let foods = store.foods().await;
            let id = resolve(
                foods.iter().map(|f| (f.id.as_str(), f.name.as_str())),
                &food,
                "food",
            )?;
            store.remove_food(&id).await?;
            println!("removed {id}");
        }
        FoodCommand::Scan => {
            let scanner = NoopScanner;
            match scanner.scan().await? {
                Some(code) => println!("scanned barcode {code}; no catalog match"),
                None => println!("no barcode captured on this platform"),
            }
        }
    }
    Ok(())
}

fn print_food(food: &FoodItem) {
    let marker = if food.is_favorite { "*" } else { " " };
    println!(
        "{marker} {}  {}  {:.0} kcal  P {:.1}  C {:.1}  F {:.1} (per 100g)",
        food.id, food.name, food.calories, food.protein, food.carbs, food.fat
    );
}
