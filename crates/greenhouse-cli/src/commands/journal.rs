//! Journal CLI commands
//!
//! Handles: greenhouse journal add/list/edit/delete

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::Subcommand;
use greenhouse_core::storage::{JournalStore, PlantStore};
use greenhouse_core::watering::today;
use greenhouse_core::{Database, JournalForm, WriteOutcome};

use super::{confirm, date_arg, format_entry};

/// Journal commands
#[derive(Subcommand)]
pub enum JournalCommands {
    /// Add a journal entry to a plant
    Add {
        /// Plant ID
        plant_id: i64,
        /// What you observed
        notes: String,
        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = date_arg)]
        date: Option<NaiveDate>,
    },
    /// List a plant's journal entries
    List {
        /// Plant ID
        plant_id: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replace a journal entry's notes and date
    Edit {
        /// Entry ID
        id: i64,
        /// New notes
        notes: String,
        /// New entry date (YYYY-MM-DD, defaults to the current one)
        #[arg(long, value_parser = date_arg)]
        date: Option<NaiveDate>,
    },
    /// Delete a journal entry
    Delete {
        /// Entry ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Execute journal command
pub fn execute(cmd: JournalCommands, db: &Database) -> anyhow::Result<()> {
    let journal = JournalStore::new(db.connection());
    let plants = PlantStore::new(db.connection());

    match cmd {
        JournalCommands::Add {
            plant_id,
            notes,
            date,
        } => {
            if plants.get(plant_id)?.is_none() {
                bail!("Plant not found: {plant_id}");
            }

            let form = JournalForm {
                entry_date: date.unwrap_or_else(today),
                notes,
            }
            .validated()?;

            let id = journal
                .add(plant_id, form.entry_date, &form.notes)
                .context("Failed to save journal entry")?;
            println!("Added journal entry (ID: {id})");
        }
        JournalCommands::List { plant_id, json } => {
            let entries = journal.list_for_plant(plant_id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("No journal entries yet.");
            } else {
                for entry in &entries {
                    println!("{}", format_entry(entry));
                }
            }
        }
        JournalCommands::Edit { id, notes, date } => {
            let Some(current) = journal.get(id)? else {
                bail!("Journal entry not found: {id}");
            };

            let Some(entry_date) = date.or_else(|| current.entry_date_parsed()) else {
                bail!("Journal entry {id} has no readable date; pass --date YYYY-MM-DD");
            };

            let form = JournalForm { entry_date, notes }.validated()?;

            let outcome = journal
                .update(id, form.entry_date, &form.notes)
                .context("Failed to update journal entry")?;
            if outcome == WriteOutcome::NotFound {
                bail!("Journal entry not found: {id}");
            }
            println!("Updated journal entry (ID: {id})");
        }
        JournalCommands::Delete { id, force } => {
            if journal.get(id)?.is_none() {
                bail!("Journal entry not found: {id}");
            }

            if !force && !confirm("Are you sure you want to delete this journal entry?")? {
                println!("Cancelled.");
                return Ok(());
            }

            journal.delete(id).context("Failed to delete journal entry")?;
            println!("Deleted journal entry (ID: {id})");
        }
    }

    Ok(())
}
