//! Journal entries attached to plants

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::watering;

/// A dated note about a plant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Store-generated identifier
    pub id: i64,
    /// Owning plant, `None` for rows written without one
    pub plant_id: Option<i64>,
    /// Entry date (`YYYY-MM-DD`)
    pub entry_date: Option<String>,
    /// Free-text notes
    pub notes: String,
    /// Creation timestamp as written by the database
    pub created_at: String,
}

impl JournalEntry {
    /// Parsed entry date, if present and readable
    #[must_use]
    pub fn entry_date_parsed(&self) -> Option<NaiveDate> {
        self.entry_date.as_deref().and_then(watering::parse_date)
    }
}
