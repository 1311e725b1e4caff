// ABOUTME: macrolog CLI - command-line front end for the nutrition tracking engine
// ABOUTME: Drives the food catalog, diary, meals, water, achievements, and data transfer
//!
//! Usage:
//! ```bash
//! # Add a food to the catalog
//! macrolog food add --name "Chicken breast" --calories 165 --protein 31 --carbs 0 --fat 3.6
//!
//! # Log 150g of a food to today's diary
//! macrolog log <food-id> --grams 150
//!
//! # Show today's totals and grade
//! macrolog day
//!
//! # Log a glass of water, then check achievements
//! macrolog water add
//! macrolog badges --check
//!
//! # Export everything to a JSON file
//! macrolog export --output backup.json
//! ```

mod commands;

use clap::{Parser, Subcommand};
use macrolog::config::environment::AppConfig;
use macrolog::logging::LoggingConfig;
use macrolog::state::StateStore;
use chrono::NaiveDate;

#[derive(Parser)]
#[command(
    name = "macrolog",
    about = "Local-first nutrition tracker",
    long_about = "Track foods, meals, water, and daily nutrition grades - everything stored on this device."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Storage URL override (file:<dir> or memory:)
    #[arg(long, global = true)]
    storage_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Food catalog commands
    Food {
        #[command(subcommand)]
        action: FoodCommand,
    },

    /// Composed meal commands
    Meal {
        #[command(subcommand)]
        action: MealCommand,
    },

    /// Log a food portion to the diary
    Log {
        /// Food id (or unique name prefix)
        food: String,

        /// Portion size in grams
        #[arg(long)]
        grams: f64,

        /// Diary date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show a day's diary, totals, and grade
    Day {
        /// Diary date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Water intake commands
    Water {
        #[command(subcommand)]
        action: WaterCommand,
    },

    /// Record health data for a date
    Health {
        /// Body weight in kg
        #[arg(long)]
        weight: Option<f64>,

        /// Free-form note
        #[arg(long)]
        note: Option<String>,

        /// Date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show badges, optionally re-evaluating achievements first
    Badges {
        /// Evaluate achievement checks before listing
        #[arg(long)]
        check: bool,
    },

    /// Show trailing statistics
    Stats {
        /// Window length in days
        #[arg(long, default_value = "7")]
        days: u32,
    },

    /// Show today's water reminder slots
    Reminders,

    /// Shopping list commands
    Shopping {
        #[command(subcommand)]
        action: ShoppingCommand,
    },

    /// Weekly meal planner commands
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Settings commands
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },

    /// Export all data to a JSON document
    Export {
        /// Output path (stdout when omitted)
        #[arg(long)]
        output: Option<String>,
    },

    /// Import a previously exported JSON document
    Import {
        /// Input path
        input: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FoodCommand {
    /// Add a food to the catalog (nutrients per 100g)
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Calories per 100g (kcal)
        #[arg(long)]
        calories: f64,

        /// Protein per 100g (g)
        #[arg(long)]
        protein: f64,

        /// Carbohydrates per 100g (g)
        #[arg(long)]
        carbs: f64,

        /// Fat per 100g (g)
        #[arg(long)]
        fat: f64,

        /// Category
        #[arg(long)]
        category: Option<String>,
    },

    /// List catalog entries
    List {
        /// Only favorites
        #[arg(long)]
        favorites: bool,

        /// Page number (1-based)
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Search the catalog by name
    Search {
        /// Name fragment
        query: String,
    },

    /// Toggle a food's favorite flag
    Favorite {
        /// Food id (or unique name prefix)
        food: String,
    },

    /// Remove a food from the catalog
    Remove {
        /// Food id (or unique name prefix)
        food: String,
    },

    /// Capture a barcode and look it up in the catalog
    Scan,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum MealCommand {
    /// Create an empty meal
    Create {
        /// Display name
        #[arg(long)]
        name: String,
    },

    /// Add an ingredient to a meal
    Add {
        /// Meal id (or unique name prefix)
        meal: String,

        /// Food id (or unique name prefix)
        #[arg(long)]
        food: String,

        /// Quantity in grams
        #[arg(long)]
        grams: f64,
    },

    /// List composed meals with their totals
    List,

    /// Toggle a meal's favorite flag
    Favorite {
        /// Meal id (or unique name prefix)
        meal: String,
    },

    /// Delete a meal
    Remove {
        /// Meal id (or unique name prefix)
        meal: String,
    },

    /// Log every ingredient of a meal to the diary
    Log {
        /// Meal id (or unique name prefix)
        meal: String,

        /// Diary date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WaterCommand {
    /// Add water (one glass unless --ml is given)
    Add {
        /// Milliliters to add
        #[arg(long)]
        ml: Option<u32>,

        /// Date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show cumulative intake for a date
    Show {
        /// Date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ShoppingCommand {
    /// Create a shopping list
    Create {
        /// Display name
        #[arg(long)]
        name: String,
    },

    /// Add an item to a list
    Add {
        /// List id (or unique name prefix)
        list: String,

        /// Item text
        item: String,
    },

    /// Toggle an item's checked flag
    Toggle {
        /// List id (or unique name prefix)
        list: String,

        /// Item index (0-based)
        index: usize,
    },

    /// Show all lists
    Show,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Assign a meal to a weekday
    Assign {
        /// Weekday, 0 = Monday .. 6 = Sunday
        #[arg(long)]
        weekday: u8,

        /// Meal id (or unique name prefix)
        #[arg(long)]
        meal: String,
    },

    /// Remove an assignment
    Clear {
        /// Assignment id
        assignment: String,
    },

    /// Show the weekly plan
    Show,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SettingsCommand {
    /// Show current settings
    Show,

    /// Update goal and water settings (omitted fields keep their value)
    Set {
        /// Daily calorie goal (kcal)
        #[arg(long)]
        calorie_goal: Option<f64>,

        /// Daily protein goal (g)
        #[arg(long)]
        protein_goal: Option<f64>,

        /// Daily carbohydrate goal (g)
        #[arg(long)]
        carbs_goal: Option<f64>,

        /// Daily fat goal (g)
        #[arg(long)]
        fat_goal: Option<f64>,

        /// Daily water target (ml)
        #[arg(long)]
        water_target: Option<u32>,

        /// Glass size (ml)
        #[arg(long)]
        glass_size: Option<u32>,

        /// Enable or disable water reminders
        #[arg(long)]
        reminders: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(storage_url) = cli.storage_url {
        config.storage_url = storage_url;
    }

    let store = StateStore::open(&config).await?;

    match cli.command {
        Command::Food { action } => commands::food::run(&store, action).await?,
        Command::Meal { action } => commands::meal::run(&store, action).await?,
        Command::Log { food, grams, date } => {
            commands::diary::log_food(&store, &food, grams, date).await?;
        }
        Command::Day { date } => commands::diary::show_day(&store, date).await,
        Command::Water { action } => commands::diary::water(&store, action).await?,
        Command::Health { weight, note, date } => {
            commands::diary::record_health(&store, weight, note, date).await;
        }
        Command::Badges { check } => commands::insights::badges(&store, check).await,
        Command::Stats { days } => commands::insights::stats(&store, days).await,
        Command::Reminders => commands::insights::reminders(&store).await,
        Command::Shopping { action } => commands::data::shopping(&store, action).await?,
        Command::Plan { action } => commands::data::plan(&store, action).await?,
        Command::Settings { action } => commands::data::settings(&store, action).await,
        Command::Export { output } => commands::data::export(&store, output).await?,
        Command::Import { input } => commands::data::import(&store, &input).await?,
    }

    // One-shot process: make the final state durable before exiting.
    store.flush().await;
    Ok(())
}
