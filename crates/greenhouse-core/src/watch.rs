//! Day-change detection for refreshing watering status

use chrono::NaiveDate;

/// Remembers the calendar day of the last render
#[derive(Debug, Default, Clone)]
pub struct DayWatcher {
    last_seen: Option<NaiveDate>,
}

impl DayWatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `today` and report whether it differs from the previous call
    ///
    /// The first call always reports a change.
    pub fn day_changed(&mut self, today: NaiveDate) -> bool {
        let changed = self.last_seen != Some(today);
        self.last_seen = Some(today);
        changed
    }

    #[must_use]
    pub fn last_seen(&self) -> Option<NaiveDate> {
        self.last_seen
    }
}
