//! Phase state machine and display frames.
//!
//! Rendering is a pure function of the calendar and `now`. Nothing carries
//! over between frames, so the phase is re-derived from scratch each tick.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::calendar::SchoolCalendar;
use crate::countdown::{count_school_days_remaining, school_days_passed, time_left_in_school};
use crate::format::{format_percent, format_verbose, percent_complete, pluralize};

pub const NOT_STARTED_MESSAGE: &str = "School hasn’t started yet!";
pub const COMPLETE_MESSAGE: &str = "School is out! 🎉";

/// Where `now` sits relative to the school year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    PreStart,
    InSession,
    PostEnd,
}

impl Phase {
    pub fn at(calendar: &SchoolCalendar, now: NaiveDateTime) -> Self {
        if now < calendar.start() {
            Self::PreStart
        } else if now > calendar.end() {
            Self::PostEnd
        } else {
            Self::InSession
        }
    }
}

/// Everything a display surface needs for one refresh.
///
/// The four text slots are ready to show as-is; the numeric fields carry
/// the values they were built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub at: NaiveDateTime,
    pub phase: Phase,
    /// Countdown text.
    pub countdown: String,
    /// Days-remaining text.
    pub days_remaining: String,
    /// Progress bar width, e.g. `"54.4%"`.
    pub progress_width: String,
    /// Progress label text.
    pub progress_label: String,
    pub seconds_left: u64,
    pub school_days_remaining: u32,
    pub days_passed: i64,
    pub percent: f64,
}

/// Build the frame for `now`.
pub fn render(calendar: &SchoolCalendar, now: NaiveDateTime) -> Frame {
    let total = calendar.total_school_days();
    match Phase::at(calendar, now) {
        Phase::PreStart => Frame {
            at: now,
            phase: Phase::PreStart,
            countdown: NOT_STARTED_MESSAGE.to_string(),
            days_remaining: format!("{total} school days left"),
            progress_width: "0%".to_string(),
            progress_label: format!("0.0% complete — 0 of {total} days"),
            seconds_left: 0,
            school_days_remaining: total,
            days_passed: 0,
            percent: 0.0,
        },
        Phase::PostEnd => Frame {
            at: now,
            phase: Phase::PostEnd,
            countdown: COMPLETE_MESSAGE.to_string(),
            days_remaining: "0 school days remaining.".to_string(),
            progress_width: "100%".to_string(),
            progress_label: format!("100% complete — {total} of {total} days"),
            seconds_left: 0,
            school_days_remaining: 0,
            days_passed: i64::from(total),
            percent: 100.0,
        },
        Phase::InSession => {
            let seconds_left = time_left_in_school(calendar, now);
            let remaining = count_school_days_remaining(calendar, now.date());
            let passed = school_days_passed(calendar, now.date());
            let percent = percent_complete(passed, total);
            let pct = format_percent(percent);
            Frame {
                at: now,
                phase: Phase::InSession,
                countdown: format!("Time left in school: {}", format_verbose(seconds_left)),
                days_remaining: format!(
                    "{} remaining.",
                    pluralize(i64::from(remaining), "school day")
                ),
                progress_width: format!("{pct}%"),
                progress_label: format!("{pct}% complete — {passed} of {total} days"),
                seconds_left,
                school_days_remaining: remaining,
                days_passed: passed,
                percent,
            }
        }
    }
}
