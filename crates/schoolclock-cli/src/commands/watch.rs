use std::future::Future;
use std::time::Duration;

use chrono::NaiveDateTime;
use clap::Args;
use schoolclock_core::render::{Clock, DisplaySurface, FixedClock, RenderLoop, SystemClock};
use schoolclock_core::storage::DisplayConfig;
use schoolclock_core::{Config, SchoolCalendar};
use tokio::time::MissedTickBehavior;

use crate::surface::stdout_surface;

#[derive(Args)]
pub struct WatchArgs {
    /// Freeze the clock at this local time
    #[arg(long, value_parser = super::parse_now)]
    pub at: Option<NaiveDateTime>,
    /// Milliseconds between refreshes (overrides watch.interval_ms)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,
    /// Stop after this many refreshes
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub ticks: Option<u64>,
    /// Emit JSON lines instead of text
    #[arg(long)]
    pub json: bool,
    /// Append frames instead of redrawing in place
    #[arg(long)]
    pub no_clear: bool,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let calendar = super::load_calendar()?;

    let interval_ms = args.interval_ms.unwrap_or(config.watch.interval_ms);
    let display = DisplayConfig {
        json: args.json || config.display.json,
        clear_screen: config.display.clear_screen && !args.no_clear && !args.json,
        ..config.display
    };
    let surface = stdout_surface(&display);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let interval = Duration::from_millis(interval_ms);
    let shutdown = tokio::signal::ctrl_c();
    match args.at {
        Some(at) => runtime.block_on(drive(
            calendar,
            FixedClock(at),
            surface,
            interval,
            args.ticks,
            shutdown,
        )),
        None => runtime.block_on(drive(
            calendar,
            SystemClock,
            surface,
            interval,
            args.ticks,
            shutdown,
        )),
    };
    Ok(())
}

/// Tick immediately, then on every interval until `shutdown` resolves
/// successfully or the tick limit is reached. Returns the number of ticks.
///
/// If `shutdown` fails (no signal handler could be installed) the error is
/// logged and ticking carries on.
async fn drive<C, F>(
    calendar: SchoolCalendar,
    clock: C,
    surface: Box<dyn DisplaySurface>,
    interval: Duration,
    limit: Option<u64>,
    shutdown: F,
) -> u64
where
    C: Clock,
    F: Future<Output = std::io::Result<()>>,
{
    let mut render_loop = RenderLoop::new(calendar, clock, surface);
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tokio::pin!(shutdown);
    let mut listening = true;

    tracing::info!(interval_ms = interval.as_millis() as u64, "watch started");
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                render_loop.tick();
                if limit.is_some_and(|limit| render_loop.ticks() >= limit) {
                    break;
                }
            }
            result = &mut shutdown, if listening => {
                match result {
                    Ok(()) => break,
                    Err(e) => {
                        tracing::warn!(error = %e, "could not listen for Ctrl-C, continuing");
                        listening = false;
                    }
                }
            }
        }
    }
    tracing::info!(
        ticks = render_loop.ticks(),
        failed = render_loop.failed_presents(),
        "watch stopped"
    );
    render_loop.ticks()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::JsonSurface;
    use schoolclock_core::calendar::{parse_date_time, school_year_2025_26};

    fn frozen() -> FixedClock {
        FixedClock(parse_date_time("2026-03-04T09:00:00").unwrap())
    }

    #[tokio::test]
    async fn failed_shutdown_listener_keeps_ticking() {
        let calendar = school_year_2025_26().unwrap();
        let shutdown = std::future::ready(Err(std::io::Error::other("no signal support")));
        let ticks = drive(
            calendar,
            frozen(),
            Box::new(JsonSurface::new(std::io::sink())),
            Duration::from_millis(1),
            Some(3),
            shutdown,
        )
        .await;
        assert_eq!(ticks, 3);
    }

    #[tokio::test]
    async fn shutdown_stops_before_the_limit() {
        let calendar = school_year_2025_26().unwrap();
        let ticks = drive(
            calendar,
            frozen(),
            Box::new(JsonSurface::new(std::io::sink())),
            Duration::from_secs(3600),
            Some(10),
            std::future::pending::<std::io::Result<()>>(),
        );
        // A long interval with no shutdown would hang past the first tick, so
        // race it against a short timeout instead.
        let result = tokio::time::timeout(Duration::from_millis(50), ticks).await;
        assert!(result.is_err());

        let calendar = school_year_2025_26().unwrap();
        let ticks = drive(
            calendar,
            frozen(),
            Box::new(JsonSurface::new(std::io::sink())),
            Duration::from_secs(3600),
            Some(10),
            std::future::ready(Ok(())),
        )
        .await;
        assert!(ticks <= 1);
    }
}
