//! Immutable school calendar definition.
//!
//! A [`SchoolCalendar`] is built once at startup through [`CalendarBuilder`],
//! which takes the same string tables a human would write down (ISO dates,
//! `HH:MM` times) and fails fast on anything malformed. After that the value
//! never changes and is passed by reference into every computation.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Serialize, Serializer};

use crate::error::CalendarError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Opening and closing time-of-day for one day of instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HoursWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl HoursWindow {
    /// Create a window. Returns `None` when it would not open before it closes.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// Same opening time, different closing time.
    ///
    /// The result is not re-validated: an override that closes before the
    /// day opens simply yields a window with no instruction time.
    pub fn with_end(self, end: NaiveTime) -> Self {
        Self { start: self.start, end }
    }
}

/// Per-weekday school hours. Weekdays without an entry have no school.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolHours {
    by_weekday: [Option<HoursWindow>; 7],
}

impl SchoolHours {
    pub fn get(&self, weekday: Weekday) -> Option<HoursWindow> {
        self.by_weekday[weekday.num_days_from_monday() as usize]
    }

    pub fn set(&mut self, weekday: Weekday, window: HoursWindow) {
        self.by_weekday[weekday.num_days_from_monday() as usize] = Some(window);
    }

    /// Weekdays that have a window, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, HoursWindow)> + '_ {
        self.by_weekday
            .iter()
            .enumerate()
            .filter_map(|(i, w)| w.map(|w| (weekday_from_index(i), w)))
    }
}

impl Serialize for SchoolHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(day, window)| (day.to_string(), window)))
    }
}

fn weekday_from_index(i: usize) -> Weekday {
    match i {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

/// A complete school year: bounds, declared days off, daily hours and
/// per-date closing overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolCalendar {
    start: NaiveDateTime,
    end: NaiveDateTime,
    /// Independently supplied count used for percent math only.
    total_school_days: u32,
    non_school_dates: BTreeSet<NaiveDate>,
    hours: SchoolHours,
    closing_overrides: BTreeMap<NaiveDate, NaiveTime>,
}

impl SchoolCalendar {
    pub fn builder() -> CalendarBuilder {
        CalendarBuilder::default()
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn total_school_days(&self) -> u32 {
        self.total_school_days
    }

    pub fn non_school_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.non_school_dates
    }

    pub fn hours(&self) -> &SchoolHours {
        &self.hours
    }

    pub fn closing_overrides(&self) -> &BTreeMap<NaiveDate, NaiveTime> {
        &self.closing_overrides
    }

    /// Explicit closing time for `date`, if one was declared.
    pub fn closing_override(&self, date: NaiveDate) -> Option<NaiveTime> {
        self.closing_overrides.get(&date).copied()
    }

    /// Whether `date` falls between the first and last day of the year, inclusive.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.first_day() <= date && date <= self.last_day()
    }
}

/// Validating builder for [`SchoolCalendar`].
///
/// Values are kept as raw strings until [`CalendarBuilder::build`], so a
/// hardcoded table with a typo is reported with the offending text.
#[derive(Debug, Clone, Default)]
pub struct CalendarBuilder {
    start: Option<String>,
    end: Option<String>,
    total_school_days: u32,
    non_school_dates: Vec<String>,
    hours: Vec<(Weekday, String, String)>,
    closing_overrides: Vec<(String, String)>,
}

impl CalendarBuilder {
    pub fn start(mut self, date_time: &str) -> Self {
        self.start = Some(date_time.to_string());
        self
    }

    pub fn end(mut self, date_time: &str) -> Self {
        self.end = Some(date_time.to_string());
        self
    }

    pub fn total_school_days(mut self, days: u32) -> Self {
        self.total_school_days = days;
        self
    }

    pub fn non_school_date(mut self, date: &str) -> Self {
        self.non_school_dates.push(date.to_string());
        self
    }

    pub fn non_school_dates<'a>(mut self, dates: impl IntoIterator<Item = &'a str>) -> Self {
        self.non_school_dates
            .extend(dates.into_iter().map(str::to_string));
        self
    }

    /// Set the window for one weekday. A later call for the same weekday wins.
    pub fn hours(mut self, weekday: Weekday, start: &str, end: &str) -> Self {
        self.hours
            .push((weekday, start.to_string(), end.to_string()));
        self
    }

    /// Declare an early (or late) closing time for a single date.
    pub fn closing_override(mut self, date: &str, close: &str) -> Self {
        self.closing_overrides
            .push((date.to_string(), close.to_string()));
        self
    }

    /// Validate every entry and produce the calendar.
    ///
    /// The final day of the year always closes at the end instant's
    /// time-of-day. An explicit override for that date must agree with it.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] for the first malformed or inconsistent entry.
    pub fn build(self) -> Result<SchoolCalendar, CalendarError> {
        let start = parse_date_time(
            self.start
                .as_deref()
                .ok_or(CalendarError::MissingBound("start"))?,
        )?;
        let end = parse_date_time(self.end.as_deref().ok_or(CalendarError::MissingBound("end"))?)?;
        if end < start {
            return Err(CalendarError::EndBeforeStart { start, end });
        }
        if self.total_school_days == 0 {
            return Err(CalendarError::ZeroTotalDays);
        }

        let non_school_dates = self
            .non_school_dates
            .iter()
            .map(|d| parse_date(d))
            .collect::<Result<BTreeSet<_>, _>>()?;

        let mut hours = SchoolHours::default();
        for (weekday, open, close) in &self.hours {
            let open = parse_time(open)?;
            let close = parse_time(close)?;
            let window = HoursWindow::new(open, close).ok_or(CalendarError::EmptyWindow {
                weekday: *weekday,
                start: open,
                end: close,
            })?;
            hours.set(*weekday, window);
        }

        let last_day = end.date();
        let mut closing_overrides = BTreeMap::new();
        for (date, close) in &self.closing_overrides {
            let date = parse_date(date)?;
            let close = parse_time(close)?;
            if date == last_day && close != end.time() {
                return Err(CalendarError::FinalDayOverride {
                    declared: close,
                    end: end.time(),
                });
            }
            closing_overrides.insert(date, close);
        }
        closing_overrides.insert(last_day, end.time());

        let last_is_weekend = matches!(last_day.weekday(), Weekday::Sat | Weekday::Sun);
        if !last_is_weekend && !non_school_dates.contains(&last_day) {
            if let Some(window) = hours.get(last_day.weekday()) {
                if end.time() <= window.start {
                    return Err(CalendarError::EndBeforeFinalOpening {
                        end,
                        opens: window.start,
                    });
                }
            }
        }

        Ok(SchoolCalendar {
            start,
            end,
            total_school_days: self.total_school_days,
            non_school_dates,
            hours,
            closing_overrides,
        })
    }
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| {
        CalendarError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

/// Parse an `HH:MM` time-of-day.
pub fn parse_time(value: &str) -> Result<NaiveTime, CalendarError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|source| {
        CalendarError::InvalidTime {
            value: value.to_string(),
            source,
        }
    })
}

/// Parse a local date-time such as `2026-06-11T11:30:00` or `2026-06-11T11:30`.
pub fn parse_date_time(value: &str) -> Result<NaiveDateTime, CalendarError> {
    let trimmed = value.trim();
    let source = match NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMATS[0]) {
        Ok(dt) => return Ok(dt),
        Err(e) => e,
    };
    for format in &DATE_TIME_FORMATS[1..] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }
    // A bare date means midnight.
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(CalendarError::InvalidDateTime {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> CalendarBuilder {
        SchoolCalendar::builder()
            .start("2025-09-02T12:30:00")
            .end("2026-06-11T11:30:00")
            .total_school_days(171)
            .hours(Weekday::Mon, "08:05", "15:30")
    }

    #[test]
    fn builds_and_seeds_final_day_override() {
        let cal = minimal().build().unwrap();
        let last = NaiveDate::from_ymd_opt(2026, 6, 11).unwrap();
        assert_eq!(cal.last_day(), last);
        assert_eq!(
            cal.closing_override(last),
            NaiveTime::from_hms_opt(11, 30, 0)
        );
    }

    #[test]
    fn final_day_override_must_match_year_end() {
        let err = minimal()
            .closing_override("2026-06-11", "12:15")
            .build()
            .unwrap_err();
        assert!(matches!(err, CalendarError::FinalDayOverride { .. }));

        // Restating the year-end time is harmless.
        let cal = minimal()
            .closing_override("2026-06-11", "11:30")
            .build()
            .unwrap();
        let last = NaiveDate::from_ymd_opt(2026, 6, 11).unwrap();
        assert_eq!(
            cal.closing_override(last),
            NaiveTime::from_hms_opt(11, 30, 0)
        );
    }

    #[test]
    fn overrides_on_other_dates_are_kept() {
        let cal = minimal()
            .closing_override("2025-12-19", "12:00")
            .build()
            .unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 12, 19).unwrap();
        assert_eq!(cal.closing_override(day), NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(cal.closing_overrides().len(), 2);
    }

    #[test]
    fn end_before_final_day_opens_is_rejected() {
        // 2026-06-11 is a Thursday; a bare date means midnight.
        let err = minimal()
            .end("2026-06-11")
            .hours(Weekday::Thu, "08:05", "15:30")
            .build()
            .unwrap_err();
        assert!(matches!(err, CalendarError::EndBeforeFinalOpening { .. }));

        // Fine when the final date has no instruction anyway.
        assert!(minimal()
            .end("2026-06-11")
            .hours(Weekday::Thu, "08:05", "15:30")
            .non_school_date("2026-06-11")
            .build()
            .is_ok());
    }

    #[test]
    fn malformed_non_school_date_fails_fast() {
        let err = minimal().non_school_date("2025-10-32").build().unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDate { ref value, .. } if value == "2025-10-32"));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let err = minimal()
            .hours(Weekday::Wed, "14:30", "08:05")
            .build()
            .unwrap_err();
        assert!(matches!(err, CalendarError::EmptyWindow { weekday: Weekday::Wed, .. }));
    }

    #[test]
    fn end_before_start_is_rejected() {
        let err = SchoolCalendar::builder()
            .start("2026-06-11T11:30:00")
            .end("2025-09-02T12:30:00")
            .total_school_days(1)
            .build()
            .unwrap_err();
        assert!(matches!(err, CalendarError::EndBeforeStart { .. }));
    }

    #[test]
    fn zero_total_and_missing_bounds() {
        assert!(matches!(
            minimal().total_school_days(0).build(),
            Err(CalendarError::ZeroTotalDays)
        ));
        assert!(matches!(
            SchoolCalendar::builder().total_school_days(1).build(),
            Err(CalendarError::MissingBound("start"))
        ));
    }

    #[test]
    fn parse_date_time_accepts_common_shapes() {
        let expected = NaiveDate::from_ymd_opt(2026, 6, 11)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(parse_date_time("2026-06-11T10:00:00").unwrap(), expected);
        assert_eq!(parse_date_time("2026-06-11T10:00").unwrap(), expected);
        assert_eq!(parse_date_time("2026-06-11 10:00:00").unwrap(), expected);
        assert_eq!(
            parse_date_time("2026-06-11").unwrap(),
            expected.date().and_time(NaiveTime::MIN)
        );
        assert!(parse_date_time("tomorrow").is_err());
    }

    #[test]
    fn school_hours_serializes_by_weekday_name() {
        let cal = minimal().build().unwrap();
        let json = serde_json::to_value(cal.hours()).unwrap();
        assert_eq!(json["Mon"]["start"], "08:05:00");
        assert!(json.get("Sat").is_none());
    }
}
