//! CLI command handlers
//!
//! Each entity (plant, journal) has its own module. Shared rendering and
//! prompting helpers live here.

pub mod journal;
pub mod plant;
pub mod watch;

use chrono::NaiveDate;
use greenhouse_core::{JournalEntry, Plant};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

/// clap value parser for `YYYY-MM-DD` arguments
pub fn date_arg(text: &str) -> Result<NaiveDate, String> {
    greenhouse_core::form::parse_date(text).map_err(|e| e.to_string())
}

/// Ask a yes/no question on stdin, defaulting to no
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// A plant with its watering state, for JSON output
#[derive(Serialize)]
pub struct PlantView<'a> {
    #[serde(flatten)]
    pub plant: &'a Plant,
    pub needs_watering: bool,
    pub status: String,
}

impl<'a> PlantView<'a> {
    pub fn new(plant: &'a Plant, today: NaiveDate) -> Self {
        let status = plant.watering_status_on(today);
        Self {
            plant,
            needs_watering: status.needs_watering(),
            status: status.describe(),
        }
    }
}

/// Render the plant list with watering status as of `today`
pub fn format_plant_list(plants: &[Plant], today: NaiveDate) -> String {
    if plants.is_empty() {
        return "No plants yet! Run 'greenhouse plant add <NAME>' to start.\n".to_string();
    }

    let mut out = String::from("My Plants:\n");
    for plant in plants {
        let _ = writeln!(out, "  [{}] {}", plant.id, plant.name);
        let _ = writeln!(
            out,
            "      Planted: {}",
            plant.date_planted.as_deref().unwrap_or("-")
        );
        let _ = writeln!(out, "      {}", plant.watering_status_on(today).describe());
        if let Some(care) = plant.care_plan.as_deref().filter(|c| !c.is_empty()) {
            let _ = writeln!(out, "      Care: {care}");
        }
    }
    out
}

/// Render a single journal entry line
pub fn format_entry(entry: &JournalEntry) -> String {
    format!(
        "  [{}] {}: {}",
        entry.id,
        entry.entry_date.as_deref().unwrap_or("-"),
        entry.notes
    )
}
