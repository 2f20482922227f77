mod days;
mod remaining;

pub use days::{
    count_school_days_remaining, enumerated_school_days, school_days_passed, total_drift,
};
pub use remaining::time_left_in_school;
