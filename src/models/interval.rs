use serde::{Deserialize, Serialize};

use super::weekday::{DayOfWeek, TimeOfDay};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A recurring weekly open/close interval.
///
/// Both endpoints live on a single linear 10080-minute week axis running from
/// Monday 00:00 to Sunday 24:00; there is no wraparound past Sunday. Fields
/// are optional because an interval is built up field-by-field while the
/// caller's user picks day and time; it only becomes a complete, comparable
/// interval once all four fields are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyInterval {
    pub open_day: Option<DayOfWeek>,
    pub open_time: Option<TimeOfDay>,
    pub close_day: Option<DayOfWeek>,
    pub close_time: Option<TimeOfDay>,
}

impl WeeklyInterval {
    /// Fully-specified interval.
    pub fn new(
        open_day: DayOfWeek,
        open_time: TimeOfDay,
        close_day: DayOfWeek,
        close_time: TimeOfDay,
    ) -> Self {
        Self {
            open_day: Some(open_day),
            open_time: Some(open_time),
            close_day: Some(close_day),
            close_time: Some(close_time),
        }
    }

    /// Whether all four fields are set.
    pub fn is_complete(&self) -> bool {
        self.open_day.is_some()
            && self.open_time.is_some()
            && self.close_day.is_some()
            && self.close_time.is_some()
    }

    /// Opening point projected to minutes from Monday 00:00, if set.
    pub fn open_minute(&self) -> Option<u32> {
        match (self.open_day, self.open_time) {
            (Some(day), Some(time)) => Some(to_minutes(day, time)),
            _ => None,
        }
    }

    /// Closing point projected to minutes from Monday 00:00, if set.
    pub fn close_minute(&self) -> Option<u32> {
        match (self.close_day, self.close_time) {
            (Some(day), Some(time)) => Some(to_minutes(day, time)),
            _ => None,
        }
    }
}

/// Project a weekday + hour to minutes from Monday 00:00.
pub fn to_minutes(day: DayOfWeek, time: TimeOfDay) -> u32 {
    day.ordinal() * MINUTES_PER_DAY + time.hour() as u32 * 60
}
