// ABOUTME: Demo food seeder for the macrolog catalog
// ABOUTME: Populates a starter set of everyday foods with per-100g nutrients

//! Demo food seeder for macrolog.
//!
//! Populates the catalog with a starter set of everyday foods so the diary
//! and grading features are usable out of the box.
//!
//! Usage:
//! ```bash
//! # Seed into the default storage location
//! cargo run --bin seed-demo-foods
//!
//! # Seed into a specific storage directory
//! cargo run --bin seed-demo-foods -- --storage-url file:/tmp/macrolog
//! ```

use anyhow::Result;
use clap::Parser;
use macrolog::config::environment::AppConfig;
use macrolog::logging::LoggingConfig;
use macrolog::models::FoodItem;
use macrolog::state::StateStore;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-demo-foods",
    about = "macrolog demo food seeder",
    long_about = "Populate the food catalog with a starter set of everyday foods"
)]
struct SeedArgs {
    /// Storage URL override (file:<dir> or memory:)
    #[arg(long)]
    storage_url: Option<String>,

    /// Replace existing foods with the same name
    #[arg(long)]
    force: bool,
}

/// Starter catalog: (name, category, kcal, protein, carbs, fat) per 100g
const STARTER_FOODS: &[(&str, &str, f64, f64, f64, f64)] = &[
    ("Chicken breast", "Meat & Fish", 165.0, 31.0, 0.0, 3.6),
    ("Salmon", "Meat & Fish", 208.0, 20.4, 0.0, 13.4),
    ("Egg", "Dairy", 155.0, 13.0, 1.1, 11.0),
    ("Greek yogurt", "Dairy", 59.0, 10.0, 3.6, 0.4),
    ("Whole milk", "Dairy", 61.0, 3.2, 4.8, 3.3),
    ("Oats", "Grains", 389.0, 16.9, 66.3, 6.9),
    ("Brown rice", "Grains", 111.0, 2.6, 23.0, 0.9),
    ("Whole wheat bread", "Grains", 247.0, 13.0, 41.0, 3.4),
    ("Banana", "Fruit", 89.0, 1.1, 22.8, 0.3),
    ("Apple", "Fruit", 52.0, 0.3, 13.8, 0.2),
    ("Blueberries", "Fruit", 57.0, 0.7, 14.5, 0.3),
    ("Broccoli", "Vegetables", 34.0, 2.8, 6.6, 0.4),
    ("Spinach", "Vegetables", 23.0, 2.9, 3.6, 0.4),
    ("Sweet potato", "Vegetables", 86.0, 1.6, 20.1, 0.1),
    ("Almonds", "Snacks", 579.0, 21.2, 21.6, 49.9),
    ("Peanut butter", "Snacks", 588.0, 25.1, 20.0, 50.4),
    ("Olive oil", "Snacks", 884.0, 0.0, 0.0, 100.0),
];

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();
    LoggingConfig::from_env().init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(storage_url) = args.storage_url {
        config.storage_url = storage_url;
    }

    let store = StateStore::open(&config).await?;
    let existing = store.foods().await;

    let mut seeded = 0usize;
    let mut skipped = 0usize;
    for &(name, category, calories, protein, carbs, fat) in STARTER_FOODS {
        let already = existing.iter().find(|food| food.name == name);
        match already {
            Some(food) if !args.force => {
                info!(name, id = %food.id, "already present; skipping");
                skipped += 1;
                continue;
            }
            Some(food) => {
                let mut replacement =
                    FoodItem::new(name, calories, protein, carbs, fat).with_category(category);
                replacement.id = food.id.clone();
                store.upsert_food(replacement).await;
            }
            None => {
                let food = FoodItem::new(name, calories, protein, carbs, fat).with_category(category);
                store.upsert_food(food).await;
            }
        }
        seeded += 1;
    }

    store.flush().await;
    info!(seeded, skipped, "demo foods ready");
    println!("seeded {seeded} foods ({skipped} already present)");
    Ok(())
}
