pub mod calendar;
pub mod config;
pub mod status;
pub mod watch;

use chrono::NaiveDateTime;
use schoolclock_core::calendar::{parse_date_time, school_year_2025_26, SchoolCalendar};
use schoolclock_core::countdown::{enumerated_school_days, total_drift};
use schoolclock_core::error::CoreResult;

/// Build the built-in calendar, warning if its configured total disagrees
/// with the days it actually contains.
pub fn load_calendar() -> CoreResult<SchoolCalendar> {
    let calendar = school_year_2025_26()?;
    let drift = total_drift(&calendar);
    if drift != 0 {
        tracing::warn!(
            configured = calendar.total_school_days(),
            enumerated = enumerated_school_days(&calendar),
            drift,
            "configured school-day total disagrees with the calendar"
        );
    }
    tracing::debug!(
        start = %calendar.start(),
        end = %calendar.end(),
        "calendar loaded"
    );
    Ok(calendar)
}

/// clap value parser for `--at`.
pub fn parse_now(value: &str) -> Result<NaiveDateTime, String> {
    parse_date_time(value).map_err(|e| e.to_string())
}
