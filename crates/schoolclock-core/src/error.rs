//! Core error types for schoolclock-core.
//!
//! Calendar errors are only produced while building a [`SchoolCalendar`]
//! at startup. Once a calendar exists, every countdown computation is
//! infallible.
//!
//! [`SchoolCalendar`]: crate::calendar::SchoolCalendar

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for schoolclock-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Calendar construction errors
    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while validating a school calendar definition.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// A date entry is not in `YYYY-MM-DD` form
    #[error("Invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A date-time entry is not in `YYYY-MM-DDTHH:MM[:SS]` form
    #[error("Invalid date-time '{value}': {source}")]
    InvalidDateTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A time-of-day entry is not in `HH:MM` form
    #[error("Invalid time '{value}': {source}")]
    InvalidTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A school-hours window that closes at or before it opens
    #[error("School hours for {weekday} close at {end} before opening at {start}")]
    EmptyWindow {
        weekday: chrono::Weekday,
        start: chrono::NaiveTime,
        end: chrono::NaiveTime,
    },

    /// The school year ends before it starts
    #[error("School year ends ({end}) before it starts ({start})")]
    EndBeforeStart {
        start: chrono::NaiveDateTime,
        end: chrono::NaiveDateTime,
    },

    /// An explicit closing time on the final date that disagrees with the year end
    #[error("Final day override closes at {declared}, but the school year ends at {end}")]
    FinalDayOverride {
        declared: chrono::NaiveTime,
        end: chrono::NaiveTime,
    },

    /// The year ends at or before the final date's opening time
    #[error("School year ends at {end}, before the final day opens at {opens}")]
    EndBeforeFinalOpening {
        end: chrono::NaiveDateTime,
        opens: chrono::NaiveTime,
    },

    /// Percent math needs a positive total
    #[error("Total school-day count must be positive")]
    ZeroTotalDays,

    /// Start or end of the school year was never supplied
    #[error("Missing school year {0}")]
    MissingBound(&'static str),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
