//! Human-readable durations and progress figures.

/// `"1 hour"`, `"2 hours"`, `"0 hours"`.
pub fn pluralize(count: i64, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

/// Render seconds as `"H hours M minutes S seconds"`.
///
/// All three units are always present and pluralized independently.
pub fn format_verbose(seconds: u64) -> String {
    let hours = (seconds / 3600) as i64;
    let minutes = ((seconds % 3600) / 60) as i64;
    let secs = (seconds % 60) as i64;
    format!(
        "{} {} {}",
        pluralize(hours, "hour"),
        pluralize(minutes, "minute"),
        pluralize(secs, "second")
    )
}

/// Share of the configured total already passed, as a percentage.
///
/// Not clamped to `0..=100`.
pub fn percent_complete(days_passed: i64, total_school_days: u32) -> f64 {
    if total_school_days == 0 {
        return 0.0;
    }
    days_passed as f64 / f64::from(total_school_days) * 100.0
}

/// One decimal place, e.g. `"54.4"`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_zero() {
        assert_eq!(format_verbose(0), "0 hours 0 minutes 0 seconds");
    }

    #[test]
    fn verbose_singular_units() {
        assert_eq!(format_verbose(3661), "1 hour 1 minute 1 second");
    }

    #[test]
    fn verbose_mixed_units() {
        assert_eq!(format_verbose(23_100), "6 hours 25 minutes 0 seconds");
        assert_eq!(format_verbose(7322), "2 hours 2 minutes 2 seconds");
        assert_eq!(format_verbose(60), "0 hours 1 minute 0 seconds");
    }

    #[test]
    fn hours_are_not_rolled_into_days() {
        assert_eq!(format_verbose(100 * 3600), "100 hours 0 minutes 0 seconds");
    }

    #[test]
    fn percent_is_unclamped() {
        assert_eq!(format_percent(percent_complete(0, 171)), "0.0");
        assert_eq!(format_percent(percent_complete(171, 171)), "100.0");
        assert_eq!(format_percent(percent_complete(-1, 171)), "-0.6");
        assert!(percent_complete(180, 171) > 100.0);
    }

    #[test]
    fn percent_with_zero_total_is_zero() {
        assert_eq!(percent_complete(5, 0), 0.0);
    }
}
