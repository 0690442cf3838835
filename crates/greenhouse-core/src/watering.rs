//! Watering rules
//!
//! A plant needs watering when its last watering date is missing, cannot be
//! read as a `YYYY-MM-DD` date, or falls strictly before today.

use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Storage format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's calendar date in the local timezone
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a calendar date the way it is stored
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a stored calendar date
///
/// Only the exact `YYYY-MM-DD` shape is accepted. Unpadded fields, signs and
/// surrounding whitespace are rejected.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Watering state of a plant relative to a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WateringStatus {
    /// No watering has been recorded
    NeverWatered,
    /// The stored date could not be parsed
    Unreadable { raw: String },
    /// Last watered before today
    Due { last: NaiveDate },
    /// Watered today (or on a later date)
    Watered { on: NaiveDate },
}

impl WateringStatus {
    /// Classify a stored `last_watered` value against `today`
    #[must_use]
    pub fn classify(last_watered: Option<&str>, today: NaiveDate) -> Self {
        let Some(raw) = last_watered else {
            return Self::NeverWatered;
        };

        match parse_date(raw) {
            None => Self::Unreadable {
                raw: raw.to_string(),
            },
            Some(last) if last < today => Self::Due { last },
            Some(on) => Self::Watered { on },
        }
    }

    /// Whether this status calls for watering
    #[must_use]
    pub fn needs_watering(&self) -> bool {
        !matches!(self, Self::Watered { .. })
    }

    /// One-line description for display
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Watered { on } => format!("Watered on {}", format_date(*on)),
            _ => "Needs watering today".to_string(),
        }
    }
}

/// Whether a plant with the given stored `last_watered` value needs watering on `today`
#[must_use]
pub fn needs_watering(last_watered: Option<&str>, today: NaiveDate) -> bool {
    WateringStatus::classify(last_watered, today).needs_watering()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_never_watered_is_due() {
        assert!(needs_watering(None, day(2024, 3, 1)));
        assert_eq!(
            WateringStatus::classify(None, day(2024, 3, 1)),
            WateringStatus::NeverWatered
        );
    }

    #[test]
    fn test_watered_today_is_not_due() {
        assert!(!needs_watering(Some("2024-03-01"), day(2024, 3, 1)));
    }

    #[test]
    fn test_watered_yesterday_is_due() {
        assert!(needs_watering(Some("2024-02-29"), day(2024, 3, 1)));
        assert_eq!(
            WateringStatus::classify(Some("2024-02-29"), day(2024, 3, 1)),
            WateringStatus::Due {
                last: day(2024, 2, 29)
            }
        );
    }

    #[test]
    fn test_unparseable_date_is_due() {
        for raw in ["", "yesterday", "2024/03/01", "2024-13-01", "20240301"] {
            assert!(needs_watering(Some(raw), day(2024, 3, 1)), "{raw:?}");
        }
    }

    #[test]
    fn test_loosely_formatted_today_is_due() {
        for raw in [
            "2024-3-1",
            "2024-03-1",
            " 2024-03-01",
            "2024-03-01 ",
            "2024-03- 1",
            "+2024-03-01",
            "2024-02-30",
        ] {
            assert_eq!(parse_date(raw), None, "{raw:?}");
            assert!(needs_watering(Some(raw), day(2024, 3, 1)), "{raw:?}");
        }
    }

    #[test]
    fn test_future_date_is_not_due() {
        assert!(!needs_watering(Some("2024-03-02"), day(2024, 3, 1)));
    }

    #[test]
    fn test_describe() {
        let watered = WateringStatus::classify(Some("2024-03-01"), day(2024, 3, 1));
        assert_eq!(watered.describe(), "Watered on 2024-03-01");
        assert_eq!(
            WateringStatus::NeverWatered.describe(),
            "Needs watering today"
        );
    }

    #[test]
    fn test_format_date_round_trip() {
        let d = day(2024, 1, 5);
        assert_eq!(format_date(d), "2024-01-05");
        assert_eq!(parse_date("2024-01-05"), Some(d));
    }
}
