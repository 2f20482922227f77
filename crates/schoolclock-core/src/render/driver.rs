//! Tick driver.
//!
//! The render loop does not own a timer. The caller invokes [`RenderLoop::tick`]
//! once at startup and then on every interval; each tick samples the clock,
//! rebuilds the frame from scratch and hands it to the surface.

use super::clock::Clock;
use super::frame::{render, Frame};
use super::surface::DisplaySurface;
use crate::calendar::SchoolCalendar;

pub struct RenderLoop<C, S> {
    calendar: SchoolCalendar,
    clock: C,
    surface: S,
    ticks: u64,
    failed_presents: u64,
}

impl<C: Clock, S: DisplaySurface> RenderLoop<C, S> {
    pub fn new(calendar: SchoolCalendar, clock: C, surface: S) -> Self {
        Self {
            calendar,
            clock,
            surface,
            ticks: 0,
            failed_presents: 0,
        }
    }

    /// Run one compute-and-present cycle.
    ///
    /// Never fails: a surface error is logged and counted so the periodic
    /// timer keeps running.
    pub fn tick(&mut self) -> Frame {
        let now = self.clock.now();
        let frame = render(&self.calendar, now);
        self.ticks += 1;

        match self.surface.present(&frame) {
            Ok(()) => {
                tracing::trace!(tick = self.ticks, phase = ?frame.phase, "frame presented");
            }
            Err(e) => {
                self.failed_presents += 1;
                tracing::error!(tick = self.ticks, error = %e, "failed to present frame");
            }
        }
        frame
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn failed_presents(&self) -> u64 {
        self.failed_presents
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
