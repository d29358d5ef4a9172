use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week with a fixed ordinal, Monday = 0 .. Sunday = 6.
///
/// The ordinal anchors the linear week axis used by the schedule validator:
/// every weekly interval endpoint projects to `ordinal * 1440 + hour * 60`
/// minutes from Monday 00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days in week order, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Fixed ordinal, Monday = 0 through Sunday = 6.
    pub fn ordinal(&self) -> u32 {
        *self as u32
    }

    /// Day for a given ordinal, if in range.
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

/// Wall-clock time at hour granularity, 00:00 through 23:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(u8);

impl TimeOfDay {
    /// Create a new time of day.
    ///
    /// # Arguments
    /// * `hour` - Hour of day, 0 through 23
    ///
    /// # Returns
    /// * `Some(TimeOfDay)` if the hour is in range
    /// * `None` otherwise
    pub fn new(hour: u8) -> Option<Self> {
        if hour <= 23 {
            Some(Self(hour))
        } else {
            None
        }
    }

    /// Hour of day as u8.
    pub fn hour(&self) -> u8 {
        self.0
    }

    /// All 24 hours in ascending order.
    pub fn all_hours() -> Vec<TimeOfDay> {
        (0..=23).map(TimeOfDay).collect()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}
