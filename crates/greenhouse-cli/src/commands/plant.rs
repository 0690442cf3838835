//! Plant CLI commands
//!
//! Handles: greenhouse plant add/list/show/edit/delete/water

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::Subcommand;
use greenhouse_core::storage::{JournalStore, PlantStore};
use greenhouse_core::watering::today;
use greenhouse_core::{Database, PlantForm, WriteOutcome};

use super::{confirm, date_arg, format_entry, format_plant_list, PlantView};

/// Plant commands
#[derive(Subcommand)]
pub enum PlantCommands {
    /// Add a new plant
    Add {
        /// Plant name
        name: String,
        /// Date planted (YYYY-MM-DD)
        #[arg(long, value_parser = date_arg)]
        planted: Option<NaiveDate>,
        /// Care instructions
        #[arg(long)]
        care: Option<String>,
    },
    /// List all plants with watering status
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a plant and its journal
    Show {
        /// Plant ID
        id: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit a plant (omitted fields keep their current value)
    Edit {
        /// Plant ID
        id: i64,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New planting date (YYYY-MM-DD)
        #[arg(long, value_parser = date_arg)]
        planted: Option<NaiveDate>,
        /// New care instructions (empty to clear)
        #[arg(long)]
        care: Option<String>,
    },
    /// Delete a plant and its journal entries
    Delete {
        /// Plant ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Mark a plant as watered today
    Water {
        /// Plant ID
        id: i64,
    },
}

/// Execute plant command
pub fn execute(cmd: PlantCommands, db: &Database) -> anyhow::Result<()> {
    let plants = PlantStore::new(db.connection());

    match cmd {
        PlantCommands::Add {
            name,
            planted,
            care,
        } => {
            let form = PlantForm {
                name,
                date_planted: planted,
                care_plan: care,
            }
            .validated()?;

            let id = plants
                .add(&form.name, form.date_planted, form.care_plan.as_deref())
                .context("Failed to save plant")?;
            println!("Added plant '{}' (ID: {id})", form.name);
        }
        PlantCommands::List { json } => {
            let list = plants.list()?;
            let today = today();
            if json {
                let views: Vec<PlantView> = list.iter().map(|p| PlantView::new(p, today)).collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                print!("{}", format_plant_list(&list, today));
            }
        }
        PlantCommands::Show { id, json } => {
            let Some(plant) = plants.get(id)? else {
                bail!("Plant not found: {id}");
            };
            let entries = JournalStore::new(db.connection()).list_for_plant(id)?;
            let today = today();

            if json {
                let value = serde_json::json!({
                    "plant": PlantView::new(&plant, today),
                    "journal": entries,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }

            println!("{} (ID: {})", plant.name, plant.id);
            println!("{}", plant.watering_status_on(today).describe());
            println!(
                "Planted: {}",
                plant.date_planted.as_deref().unwrap_or("-")
            );
            match plant.care_plan.as_deref().filter(|c| !c.is_empty()) {
                Some(care) => println!("Care Instructions: {care}"),
                None => println!("Care Instructions: No care instructions added yet."),
            }
            println!("\nJournal Entries:");
            if entries.is_empty() {
                println!("  No journal entries yet.");
            }
            for entry in &entries {
                println!("{}", format_entry(entry));
            }
        }
        PlantCommands::Edit {
            id,
            name,
            planted,
            care,
        } => {
            let Some(current) = plants.get(id)? else {
                bail!("Plant not found: {id}");
            };

            let date_planted = planted.or_else(|| {
                let parsed = current.date_planted_parsed();
                if parsed.is_none() && current.date_planted.is_some() {
                    tracing::warn!(
                        plant_id = id,
                        raw = current.date_planted.as_deref(),
                        "dropping unreadable planting date"
                    );
                }
                parsed
            });

            let form = PlantForm {
                name: name.unwrap_or(current.name),
                date_planted,
                care_plan: care.or(current.care_plan),
            }
            .validated()?;

            let outcome = plants
                .update(id, &form.name, form.date_planted, form.care_plan.as_deref())
                .context("Failed to update plant")?;
            if outcome == WriteOutcome::NotFound {
                bail!("Plant not found: {id}");
            }
            println!("Updated plant '{}' (ID: {id})", form.name);
        }
        PlantCommands::Delete { id, force } => {
            let Some(plant) = plants.get(id)? else {
                bail!("Plant not found: {id}");
            };

            if !force && !confirm(&format!("Delete plant '{}' (ID: {id})?", plant.name))? {
                println!("Cancelled.");
                return Ok(());
            }

            plants.delete(id).context("Failed to delete plant")?;
            println!("Deleted plant: {}", plant.name);
        }
        PlantCommands::Water { id } => {
            let outcome = plants.water(id).context("Failed to water plant")?;
            if outcome == WriteOutcome::NotFound {
                bail!("Plant not found: {id}");
            }
            println!("Plant {id} marked as watered!");
        }
    }

    Ok(())
}
