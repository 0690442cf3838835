//! Greenhouse Core - Plant records, watering rules, and storage
//!
//! This crate provides the plant and journal model, the "needs watering"
//! date rule, input forms for the presentation layer, and SQLite storage.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod form;
pub mod journal;
pub mod plant;
pub mod storage;
pub mod watch;
pub mod watering;

pub use form::{FormError, JournalForm, PlantForm};
pub use journal::JournalEntry;
pub use plant::Plant;
pub use storage::{Database, StoreError, WriteOutcome};
pub use watch::DayWatcher;
pub use watering::WateringStatus;
