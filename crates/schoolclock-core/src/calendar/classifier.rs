//! Day classification.
//!
//! Everything here works on [`NaiveDate`]: callers holding a date-time pass
//! `.date()`, so the time of day can never change how a day is classified.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use super::config::{HoursWindow, SchoolCalendar};

/// Why a date does or does not have instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayKind {
    BeforeStart,
    AfterEnd,
    Weekend,
    NonSchool,
    /// A weekday with no hours configured.
    NoHours,
    /// An effective school day, with its closing override applied.
    SchoolDay { window: HoursWindow },
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_non_school_day(calendar: &SchoolCalendar, date: NaiveDate) -> bool {
    calendar.non_school_dates().contains(&date)
}

/// Regular hours for the weekday of `date`, ignoring overrides.
pub fn school_hours(calendar: &SchoolCalendar, date: NaiveDate) -> Option<HoursWindow> {
    calendar.hours().get(date.weekday())
}

/// Effective school day test. Does not look at the year bounds.
pub fn is_school_day(calendar: &SchoolCalendar, date: NaiveDate) -> bool {
    !is_weekend(date) && !is_non_school_day(calendar, date) && school_hours(calendar, date).is_some()
}

/// The window in which instruction actually happens on `date`, or `None`
/// if `date` is not an effective school day.
pub fn session_window(calendar: &SchoolCalendar, date: NaiveDate) -> Option<HoursWindow> {
    if is_weekend(date) || is_non_school_day(calendar, date) {
        return None;
    }
    let window = school_hours(calendar, date)?;
    Some(match calendar.closing_override(date) {
        Some(close) => window.with_end(close),
        None => window,
    })
}

/// Full classification of a date, including the year bounds.
pub fn classify(calendar: &SchoolCalendar, date: NaiveDate) -> DayKind {
    if !calendar.contains_date(date) {
        if date < calendar.first_day() {
            DayKind::BeforeStart
        } else {
            DayKind::AfterEnd
        }
    } else if is_weekend(date) {
        DayKind::Weekend
    } else if is_non_school_day(calendar, date) {
        DayKind::NonSchool
    } else {
        match session_window(calendar, date) {
            Some(window) => DayKind::SchoolDay { window },
            None => DayKind::NoHours,
        }
    }
}
