use chrono::NaiveDate;
use clap::Subcommand;
use schoolclock_core::calendar::{classify, parse_date};
use schoolclock_core::countdown::{enumerated_school_days, total_drift};

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Print the built-in calendar as JSON
    Show,
    /// Compare the configured school-day total with the calendar
    Check {
        /// Exit with an error if they disagree
        #[arg(long)]
        strict: bool,
    },
    /// Classify a single date
    Day {
        /// Date to classify (YYYY-MM-DD)
        #[arg(value_parser = parse_day)]
        date: NaiveDate,
    },
}

fn parse_day(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

pub fn run(action: CalendarAction) -> Result<(), Box<dyn std::error::Error>> {
    let calendar = super::load_calendar()?;

    match action {
        CalendarAction::Show => {
            println!("{}", serde_json::to_string_pretty(&calendar)?);
        }
        CalendarAction::Check { strict } => {
            let enumerated = enumerated_school_days(&calendar);
            let drift = total_drift(&calendar);
            println!("configured total: {}", calendar.total_school_days());
            println!("enumerated school days: {enumerated}");
            println!("drift: {drift}");
            if strict && drift != 0 {
                return Err(format!(
                    "configured total {} does not match {enumerated} enumerated school days",
                    calendar.total_school_days()
                )
                .into());
            }
        }
        CalendarAction::Day { date } => {
            let kind = classify(&calendar, date);
            let json = serde_json::json!({
                "date": date,
                "weekday": date.format("%a").to_string(),
                "day": kind,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}
