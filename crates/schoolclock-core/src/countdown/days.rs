//! School-day counting.

use chrono::NaiveDate;

use crate::calendar::{is_school_day, SchoolCalendar};

/// Effective school days from `from` through the last day, inclusive.
///
/// Dates before the first day of the year are never counted, and the time
/// of day plays no part: a day counts in full even late in the afternoon.
pub fn count_school_days_remaining(calendar: &SchoolCalendar, from: NaiveDate) -> u32 {
    from.max(calendar.first_day())
        .iter_days()
        .take_while(|date| *date <= calendar.last_day())
        .filter(|date| is_school_day(calendar, *date))
        .count() as u32
}

/// Configured total minus the days still ahead of `today`.
///
/// Not clamped: if the configured total disagrees with the calendar the
/// result can be negative or exceed the total.
pub fn school_days_passed(calendar: &SchoolCalendar, today: NaiveDate) -> i64 {
    i64::from(calendar.total_school_days()) - i64::from(count_school_days_remaining(calendar, today))
}

/// Every effective school day of the year, counted from the calendar itself.
pub fn enumerated_school_days(calendar: &SchoolCalendar) -> u32 {
    count_school_days_remaining(calendar, calendar.first_day())
}

/// Configured total minus the enumerated count. Zero when they agree.
pub fn total_drift(calendar: &SchoolCalendar) -> i64 {
    i64::from(calendar.total_school_days()) - i64::from(enumerated_school_days(calendar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::school_year_2025_26;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn final_week() {
        let cal = school_year_2025_26().unwrap();
        assert_eq!(count_school_days_remaining(&cal, date(2026, 6, 8)), 4);
        assert_eq!(count_school_days_remaining(&cal, date(2026, 6, 11)), 1);
        assert_eq!(count_school_days_remaining(&cal, date(2026, 6, 12)), 0);
    }

    #[test]
    fn before_start_is_clamped_to_first_day() {
        let cal = school_year_2025_26().unwrap();
        assert_eq!(
            count_school_days_remaining(&cal, date(2025, 8, 1)),
            count_school_days_remaining(&cal, date(2025, 9, 2))
        );
    }

    #[test]
    fn built_in_year_drifts_by_one() {
        let cal = school_year_2025_26().unwrap();
        assert_eq!(enumerated_school_days(&cal), 172);
        assert_eq!(total_drift(&cal), -1);
        // So the first day reports one day "passed" below zero.
        assert_eq!(school_days_passed(&cal, date(2025, 9, 2)), -1);
    }

    #[test]
    fn passed_on_final_day() {
        let cal = school_year_2025_26().unwrap();
        assert_eq!(school_days_passed(&cal, date(2026, 6, 11)), 170);
    }
}
