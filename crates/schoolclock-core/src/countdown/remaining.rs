//! Remaining in-session time.
//!
//! Walks every calendar day from `now` to the last day of the year and sums
//! the part of each school-day window that still lies ahead.

use chrono::{NaiveDateTime, NaiveTime};

use crate::calendar::{session_window, SchoolCalendar};

/// Seconds of instruction left between `now` and the end of the year.
///
/// Zero outside `[start, end]`. On the first day only the part of the window
/// after `now` counts; every later day counts its full window.
pub fn time_left_in_school(calendar: &SchoolCalendar, now: NaiveDateTime) -> u64 {
    if now < calendar.start() || now > calendar.end() {
        return 0;
    }

    let today = now.date();
    today
        .iter_days()
        .take_while(|date| *date <= calendar.last_day())
        .filter_map(|date| {
            let window = session_window(calendar, date)?;
            let cursor = if date == today {
                now
            } else {
                date.and_time(NaiveTime::MIN)
            };
            let open = date.and_time(window.start);
            let close = date.and_time(window.end);
            if cursor >= close {
                return Some(0);
            }
            Some((close - cursor.max(open)).num_seconds().max(0) as u64)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::school_year_2025_26;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn zero_outside_the_year() {
        let cal = school_year_2025_26().unwrap();
        assert_eq!(time_left_in_school(&cal, at(2025, 9, 2, 12, 29)), 0);
        assert_eq!(time_left_in_school(&cal, at(2026, 6, 11, 11, 31)), 0);
    }

    #[test]
    fn final_morning_counts_until_early_close() {
        let cal = school_year_2025_26().unwrap();
        assert_eq!(time_left_in_school(&cal, at(2026, 6, 11, 10, 0)), 5400);
        assert_eq!(time_left_in_school(&cal, at(2026, 6, 11, 7, 0)), 3 * 3600 + 25 * 60);
    }

    #[test]
    fn exactly_at_end_is_zero() {
        let cal = school_year_2025_26().unwrap();
        assert_eq!(time_left_in_school(&cal, cal.end()), 0);
    }

    #[test]
    fn last_two_days() {
        let cal = school_year_2025_26().unwrap();
        // Wednesday after school: only Thursday's short day remains.
        assert_eq!(time_left_in_school(&cal, at(2026, 6, 10, 16, 0)), 12_300);
        // Wednesday at noon: 2.5 h of Wednesday plus Thursday's 3h25m.
        assert_eq!(
            time_left_in_school(&cal, at(2026, 6, 10, 12, 0)),
            9000 + 12_300
        );
    }

    #[test]
    fn sub_second_now_truncates() {
        let cal = school_year_2025_26().unwrap();
        let now = at(2026, 6, 11, 10, 0) + chrono::Duration::milliseconds(500);
        assert_eq!(time_left_in_school(&cal, now), 5399);
    }
}
