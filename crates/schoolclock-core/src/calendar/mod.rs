mod classifier;
mod config;
mod defaults;

pub use classifier::{
    classify, is_non_school_day, is_school_day, is_weekend, school_hours, session_window, DayKind,
};
pub use config::{
    parse_date, parse_date_time, parse_time, CalendarBuilder, HoursWindow, SchoolCalendar,
    SchoolHours,
};
pub use defaults::school_year_2025_26;
