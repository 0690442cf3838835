//! Watch command
//!
//! Keeps the plant list on screen. Each tick checks whether the calendar day
//! rolled over or the stored plants changed, and re-renders only then.

use greenhouse_core::storage::PlantStore;
use greenhouse_core::watering::today;
use greenhouse_core::{Database, DayWatcher, Plant};
use std::thread;
use std::time::Duration;

use super::format_plant_list;

/// Execute watch command
pub fn execute(db: &Database, interval: u64, iterations: Option<u64>) -> anyhow::Result<()> {
    let plants = PlantStore::new(db.connection());
    let mut watcher = DayWatcher::new();
    let mut shown: Option<Vec<Plant>> = None;
    let mut tick: u64 = 0;

    loop {
        let today = today();
        let day_changed = watcher.day_changed(today);
        let list = plants.list()?;

        if day_changed || shown.as_ref() != Some(&list) {
            tracing::info!(%today, day_changed, plants = list.len(), "refreshing plant list");
            println!("--- {today} ---");
            print!("{}", format_plant_list(&list, today));
            shown = Some(list);
        }

        tick += 1;
        if iterations.is_some_and(|max| tick >= max) {
            return Ok(());
        }
        thread::sleep(Duration::from_secs(interval));
    }
}
