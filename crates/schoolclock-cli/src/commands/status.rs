use chrono::NaiveDateTime;
use clap::Args;
use schoolclock_core::render::{Clock, DisplaySurface, SystemClock};
use schoolclock_core::storage::DisplayConfig;
use schoolclock_core::{render, Config};

use crate::surface::stdout_surface;

#[derive(Args)]
pub struct StatusArgs {
    /// Pretend it is this local time (e.g. 2026-06-11T10:00:00)
    #[arg(long, value_parser = super::parse_now)]
    pub at: Option<NaiveDateTime>,
    /// Print the frame as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let calendar = super::load_calendar()?;
    let now = args.at.unwrap_or_else(|| SystemClock.now());

    let display = DisplayConfig {
        json: args.json || config.display.json,
        clear_screen: false,
        ..config.display
    };
    let frame = render(&calendar, now);
    stdout_surface(&display).present(&frame)?;
    Ok(())
}
