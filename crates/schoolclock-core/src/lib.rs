//! # schoolclock core library
//!
//! Computes how much of a school year is left: seconds of instruction,
//! school days remaining, and percent complete. Every function takes the
//! calendar and "now" explicitly, so the whole crate is deterministic under
//! test and the only wall-clock read lives in [`render::SystemClock`].
//!
//! ## Architecture
//!
//! - **Calendar**: immutable [`SchoolCalendar`] built once at startup, plus
//!   the day classifier
//! - **Countdown**: remaining in-session seconds and school-day counts
//! - **Format**: verbose durations and percent figures
//! - **Render**: the pre-start / in-session / post-end state machine and the
//!   [`RenderLoop`] that drives a [`DisplaySurface`] on each tick
//! - **Storage**: TOML runtime configuration for the refresh loop and display

pub mod calendar;
pub mod countdown;
pub mod error;
pub mod format;
pub mod render;
pub mod storage;

pub use calendar::{school_year_2025_26, DayKind, HoursWindow, SchoolCalendar};
pub use countdown::{count_school_days_remaining, school_days_passed, time_left_in_school};
pub use error::{CalendarError, ConfigError, CoreError};
pub use render::{render, Clock, DisplaySurface, Frame, Phase, RenderLoop};
pub use storage::Config;
