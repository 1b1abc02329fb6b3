//! Firing times of the notifications.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Weekday};

/// Days looked ahead for the next firing, enough for any monthly schedule.
const MAX_LOOKAHEAD_DAYS: usize = 62;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Daily {
        hour: u32,
        minute: u32,
    },
    Weekly {
        weekday: Weekday,
        hour: u32,
        minute: u32,
    },
    /// Months without `day` are skipped
    Monthly {
        day: u32,
        hour: u32,
        minute: u32,
    },
}

impl Schedule {
    fn time(&self) -> (u32, u32) {
        match *self {
            Schedule::Daily { hour, minute }
            | Schedule::Weekly { hour, minute, .. }
            | Schedule::Monthly { hour, minute, .. } => (hour, minute),
        }
    }

    fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            Schedule::Daily { .. } => true,
            Schedule::Weekly { weekday, .. } => date.weekday() == weekday,
            Schedule::Monthly { day, .. } => date.day() == day,
        }
    }

    /// First firing strictly after `now`, in the offset of `now`.
    ///
    /// Returns `None` when the schedule never fires, like a monthly schedule
    /// on day 32 or an invalid hour.
    pub fn next_after(&self, now: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
        let offset = *now.offset();
        let (hour, minute) = self.time();

        now.date_naive()
            .iter_days()
            .take(MAX_LOOKAHEAD_DAYS)
            .filter(|date| self.matches(*date))
            .filter_map(|date| date.and_hms_opt(hour, minute, 0))
            .filter_map(|local| offset.from_local_datetime(&local).single())
            .find(|candidate| *candidate > now)
    }
}
