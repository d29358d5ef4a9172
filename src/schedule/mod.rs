//! Weekly schedule validation.
//!
//! Pure interval algebra over the linear 10080-minute week axis. The
//! validator decides whether a candidate opening-hours row is well-formed
//! and conflict-free against the rest of a place's schedule, and derives the
//! legal option sets an editing UI offers next (close days, close hours).
//!
//! Everything here is synchronous, side-effect-free and total over valid
//! enum inputs; invalid input never panics, it comes back as a typed
//! [`ScheduleError`].

use serde::{Deserialize, Serialize};

use crate::models::{DayOfWeek, TimeOfDay, WeeklyInterval};

/// Validation failure for a candidate interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum ScheduleError {
    /// Close point does not come strictly after the open point.
    #[error("interval close point must come strictly after its open point")]
    BadOrdering,
    /// Candidate conflicts with an existing interval.
    #[error("interval overlaps an existing interval")]
    Overlap,
}

/// Half-open overlap test between two weekly intervals.
///
/// True iff `a.open < b.close && b.open < a.close`. Intervals that share
/// only a boundary point are adjacent, not overlapping, so a place can close
/// at 22:00 and have another row open at 22:00. An interval with any unset
/// field is not yet comparable and never reports as overlapping.
pub fn overlaps(a: &WeeklyInterval, b: &WeeklyInterval) -> bool {
    match (
        a.open_minute(),
        a.close_minute(),
        b.open_minute(),
        b.close_minute(),
    ) {
        (Some(a_open), Some(a_close), Some(b_open), Some(b_close)) => {
            a_open < b_close && b_open < a_close
        }
        _ => false,
    }
}

/// Validate a candidate interval against the rest of a schedule.
///
/// `others` must already exclude the candidate itself (exclusion is by
/// identity, i.e. by row index on the caller's side, not by value — two
/// identical rows are a genuine overlap).
///
/// A partially-specified candidate passes: it is still being edited and is
/// not comparable yet. Ordering is checked before conflicts, so a
/// zero-length or inverted interval reports `BadOrdering` even when it would
/// also collide with an existing row.
pub fn validate(
    candidate: &WeeklyInterval,
    others: &[WeeklyInterval],
) -> Result<(), ScheduleError> {
    let (open, close) = match (candidate.open_minute(), candidate.close_minute()) {
        (Some(open), Some(close)) => (open, close),
        _ => return Ok(()),
    };

    if open >= close {
        return Err(ScheduleError::BadOrdering);
    }

    if others.iter().any(|other| overlaps(candidate, other)) {
        return Err(ScheduleError::Overlap);
    }

    Ok(())
}

/// Legal close days for an interval opening on `open_day`.
///
/// The week does not wrap, so the close day runs from the open day itself
/// through Sunday, in week order.
pub fn legal_close_days(open_day: DayOfWeek) -> Vec<DayOfWeek> {
    DayOfWeek::ALL
        .into_iter()
        .filter(|day| day.ordinal() >= open_day.ordinal())
        .collect()
}

/// Legal close hours given the open point and the chosen close day.
///
/// Same-day closes must come strictly after the opening hour; any later day
/// allows all 24 hours. Callers recompute this whenever `open_day`,
/// `open_time` or `close_day` changes and clear a previously chosen close
/// time that fell out of the legal set — the validator only reports
/// legality, it never mutates a selection.
pub fn legal_close_times(
    open_day: DayOfWeek,
    open_time: TimeOfDay,
    close_day: DayOfWeek,
) -> Vec<TimeOfDay> {
    if close_day == open_day {
        TimeOfDay::all_hours()
            .into_iter()
            .filter(|t| t.hour() > open_time.hour())
            .collect()
    } else {
        TimeOfDay::all_hours()
    }
}
