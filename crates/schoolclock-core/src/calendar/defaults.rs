//! The built-in 2025–26 school year.

use chrono::Weekday;

use super::config::SchoolCalendar;
use crate::error::CalendarError;

const SCHOOL_START: &str = "2025-09-02T12:30:00";
const SCHOOL_END: &str = "2026-06-11T11:30:00";
const TOTAL_SCHOOL_DAYS: u32 = 171;

const NON_SCHOOL_DATES: &[&str] = &[
    // 2025
    "2025-10-02", "2025-10-03",
    "2025-10-16", "2025-10-17",
    "2025-11-26", "2025-11-27", "2025-11-28",
    "2025-12-01",
    "2025-12-22", "2025-12-23", "2025-12-24", "2025-12-25", "2025-12-26",
    "2025-12-29", "2025-12-30", "2025-12-31",
    // 2026
    "2026-01-01", "2026-01-02",
    "2026-01-19",
    "2026-01-26",
    "2026-02-16",
    "2026-02-26", "2026-02-27",
    "2026-03-02",
    "2026-03-30", "2026-03-31", "2026-04-01", "2026-04-02", "2026-04-03",
    "2026-05-22",
    "2026-05-25",
];

const SCHOOL_HOURS: &[(Weekday, &str, &str)] = &[
    (Weekday::Mon, "08:05", "15:30"),
    (Weekday::Tue, "08:05", "15:30"),
    (Weekday::Wed, "08:05", "14:30"),
    (Weekday::Thu, "08:05", "15:30"),
    (Weekday::Fri, "08:05", "15:30"),
];

/// Build the built-in school year.
///
/// # Errors
///
/// Only fails if the tables above contain a malformed entry.
pub fn school_year_2025_26() -> Result<SchoolCalendar, CalendarError> {
    SCHOOL_HOURS
        .iter()
        .fold(
            SchoolCalendar::builder()
                .start(SCHOOL_START)
                .end(SCHOOL_END)
                .total_school_days(TOTAL_SCHOOL_DAYS)
                .non_school_dates(NON_SCHOOL_DATES.iter().copied()),
            |builder, (day, open, close)| builder.hours(*day, open, close),
        )
        .build()
}
