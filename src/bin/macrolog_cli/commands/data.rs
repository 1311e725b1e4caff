// ABOUTME: Data commands - shopping lists, weekly planner, settings, export/import
// ABOUTME: Export writes the flat JSON document; import replaces present slices

use super::resolve;
use crate::{PlanCommand, SettingsCommand, ShoppingCommand};
use anyhow::{Context, Result};
use chrono::Utc;
use macrolog::state::{ExportDocument, StateStore};
use tokio::fs;

/// Dispatch a shopping list subcommand
pub async fn shopping(store: &StateStore, action: ShoppingCommand) -> Result<()> {
    match action {
        ShoppingCommand::Create { name } => {
            let list = store.add_shopping_list(name).await;
            println!("created {} ({})", list.name, list.id);
        }
        ShoppingCommand::Add { list, item } => {
            let list_id = resolve_list(store, &list).await?;
            store.add_shopping_item(&list_id, item).await?;
            println!("added to {list_id}");
        }
        ShoppingCommand::Toggle { list, index } => {
            let list_id = resolve_list(store, &list).await?;
            let checked = store.toggle_shopping_item(&list_id, index).await?;
            println!("item {index} is now {}", if checked { "checked" } else { "unchecked" });
        }
        ShoppingCommand::Show => {
            for list in store.snapshot().await.shopping_lists {
                println!("{}  {}", list.id, list.name);
                for (index, item) in list.items.iter().enumerate() {
                    let marker = if item.checked { "[x]" } else { "[ ]" };
                    println!("  {marker} [{index}] {}", item.name);
                }
            }
        }
    }
    Ok(())
}

/// Dispatch a weekly planner subcommand
pub async fn plan(store: &StateStore, action: PlanCommand) -> Result<()> {
    const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    match action {
        PlanCommand::Assign { weekday, meal } => {
            let meals = store.meals().await;
            let meal_id = resolve(
                meals.iter().map(|m| (m.id.as_str(), m.name.as_str())),
                &meal,
                "meal",
            )?;
            let assignment = store.assign_meal(weekday, &meal_id).await?;
            println!(
                "{}: {} ({})",
                WEEKDAYS[usize::from(assignment.weekday)],
                assignment.meal_name,
                assignment.id
            );
        }
        PlanCommand::Clear { assignment } => {
            store.clear_assignment(&assignment).await?;
            println!("cleared {assignment}");
        }
        PlanCommand::Show => {
            let assignments = store.snapshot().await.weekly_assignments;
            for weekday in 0u8..7 {
                let planned: Vec<String> = assignments
                    .iter()
                    .filter(|a| a.weekday == weekday)
                    .map(|a| a.meal_name.clone())
                    .collect();
                println!(
                    "{}: {}",
                    WEEKDAYS[usize::from(weekday)],
                    if planned.is_empty() {
                        "-".to_owned()
                    } else {
                        planned.join(", ")
                    }
                );
            }
        }
    }
    Ok(())
}

/// Dispatch a settings subcommand
pub async fn settings(store: &StateStore, action: SettingsCommand) {
    match action {
        SettingsCommand::Show => {
            let settings = store.settings().await;
            println!(
                "goals: {:.0} kcal  P {:.0}  C {:.0}  F {:.0}",
                settings.calorie_goal,
                settings.protein_goal,
                settings.carbs_goal,
                settings.fat_goal
            );
            println!(
                "water: {} ml target, {} ml glass",
                settings.water_target_ml, settings.glass_size_ml
            );
            println!(
                "reminders: {} ({:02}:00-{:02}:00 every {} min)",
                if settings.water_reminder.enabled {
                    "on"
                } else {
                    "off"
                },
                settings.water_reminder.start_hour,
                settings.water_reminder.end_hour,
                settings.water_reminder.interval_minutes
            );
        }
        SettingsCommand::Set {
            calorie_goal,
            protein_goal,
            carbs_goal,
            fat_goal,
            water_target,
            glass_size,
            reminders,
        } => {
            let mut settings = store.settings().await;
            if let Some(value) = calorie_goal {
                settings.calorie_goal = value.max(0.0);
            }
            if let Some(value) = protein_goal {
                settings.protein_goal = value.max(0.0);
            }
            if let Some(value) = carbs_goal {
                settings.carbs_goal = value.max(0.0);
            }
            if let Some(value) = fat_goal {
                settings.fat_goal = value.max(0.0);
            }
            if let Some(value) = water_target {
                settings.water_target_ml = value;
            }
            if let Some(value) = glass_size {
                settings.glass_size_ml = value;
            }
            if let Some(value) = reminders {
                settings.water_reminder.enabled = value;
            }
            store.set_settings(settings).await;
            println!("settings updated");
        }
    }
}

/// Export all data to a file or stdout
pub async fn export(store: &StateStore, output: Option<String>) -> Result<()> {
    let document = store.export_data(Utc::now()).await;
    let json = serde_json::to_string_pretty(&document)?;
    match output {
        Some(path) => {
            fs::write(&path, &json)
                .await
                .with_context(|| format!("writing export to {path}"))?;
            println!("exported to {path}");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Import a previously exported document
pub async fn import(store: &StateStore, input: &str) -> Result<()> {
    let raw = fs::read_to_string(input)
        .await
        .with_context(|| format!("reading {input}"))?;
    let document: ExportDocument =
        serde_json::from_str(&raw).with_context(|| format!("parsing {input}"))?;
    store.import_data(document).await;
    println!("imported {input}");
    Ok(())
}

async fn resolve_list(store: &StateStore, needle: &str) -> Result<String> {
    let lists = store.snapshot().await.shopping_lists;
    resolve(
        lists.iter().map(|l| (l.id.as_str(), l.name.as_str())),
        needle,
        "shopping list",
    )
}
