//! Plant records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::watering::{self, WateringStatus};

/// A tracked houseplant
///
/// Date columns are kept as the stored text so that rows written by other
/// tools can still be listed. Use the accessors to get parsed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    /// Store-generated identifier
    pub id: i64,
    /// Plant name
    pub name: String,
    /// Planting date (`YYYY-MM-DD`)
    pub date_planted: Option<String>,
    /// Free-text care instructions
    pub care_plan: Option<String>,
    /// Last watering date (`YYYY-MM-DD`), `None` if never watered
    pub last_watered: Option<String>,
    /// Creation timestamp as written by the database
    pub created_at: String,
}

impl Plant {
    /// Parsed planting date, if present and readable
    #[must_use]
    pub fn date_planted_parsed(&self) -> Option<NaiveDate> {
        self.date_planted.as_deref().and_then(watering::parse_date)
    }

    /// Parsed last watering date, if present and readable
    #[must_use]
    pub fn last_watered_date(&self) -> Option<NaiveDate> {
        self.last_watered.as_deref().and_then(watering::parse_date)
    }

    /// Watering status relative to `today`
    #[must_use]
    pub fn watering_status_on(&self, today: NaiveDate) -> WateringStatus {
        WateringStatus::classify(self.last_watered.as_deref(), today)
    }

    /// Whether the plant needs watering on `today`
    #[must_use]
    pub fn needs_watering_on(&self, today: NaiveDate) -> bool {
        watering::needs_watering(self.last_watered.as_deref(), today)
    }

    /// Whether the plant needs watering on the local calendar date
    #[must_use]
    pub fn needs_watering(&self) -> bool {
        self.needs_watering_on(watering::today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(last_watered: Option<&str>) -> Plant {
        Plant {
            id: 1,
            name: "Fern".to_string(),
            date_planted: Some("2024-01-01".to_string()),
            care_plan: None,
            last_watered: last_watered.map(str::to_string),
            created_at: "2024-01-01 10:00:00".to_string(),
        }
    }

    #[test]
    fn test_parsed_accessors() {
        let p = plant(Some("2024-02-10"));
        assert_eq!(
            p.date_planted_parsed(),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(
            p.last_watered_date(),
            NaiveDate::from_ymd_opt(2024, 2, 10)
        );
        assert_eq!(plant(Some("soon")).last_watered_date(), None);
    }

    #[test]
    fn test_needs_watering_on() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        assert!(plant(None).needs_watering_on(today));
        assert!(!plant(Some("2024-02-10")).needs_watering_on(today));
        assert!(plant(Some("2024-02-09")).needs_watering_on(today));
    }

    #[test]
    fn test_never_watered_needs_watering_today() {
        assert!(plant(None).needs_watering());
    }
}
