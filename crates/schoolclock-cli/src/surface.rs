//! Terminal display surfaces.

use std::io::{self, Write};

use schoolclock_core::render::{DisplaySurface, Frame};
use schoolclock_core::storage::DisplayConfig;

const CLEAR_AND_HOME: &str = "\x1b[2J\x1b[H";

/// Three lines of text with an ASCII progress bar.
pub struct TextSurface<W> {
    out: W,
    bar_width: usize,
    clear_screen: bool,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W, bar_width: usize, clear_screen: bool) -> Self {
        Self {
            out,
            bar_width,
            clear_screen,
        }
    }

    fn bar(&self, percent: f64) -> String {
        // Only the drawing is clamped; the label keeps the real figure.
        let filled = ((percent.clamp(0.0, 100.0) / 100.0) * self.bar_width as f64).round() as usize;
        let filled = filled.min(self.bar_width);
        format!(
            "[{}{}]",
            "#".repeat(filled),
            "-".repeat(self.bar_width - filled)
        )
    }
}

impl<W: Write> DisplaySurface for TextSurface<W> {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        let bar = self.bar(frame.percent);
        if self.clear_screen {
            write!(self.out, "{CLEAR_AND_HOME}")?;
        }
        writeln!(self.out, "{}", frame.countdown)?;
        writeln!(self.out, "{}", frame.days_remaining)?;
        writeln!(self.out, "{bar} {}", frame.progress_label)?;
        self.out.flush()
    }
}

/// One JSON object per frame, newline separated.
pub struct JsonSurface<W> {
    out: W,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> DisplaySurface for JsonSurface<W> {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Pick a stdout surface from the display settings.
pub fn stdout_surface(display: &DisplayConfig) -> Box<dyn DisplaySurface> {
    if display.json {
        Box::new(JsonSurface::new(io::stdout()))
    } else {
        Box::new(TextSurface::new(
            io::stdout(),
            display.bar_width as usize,
            display.clear_screen,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolclock_core::calendar::{parse_date_time, school_year_2025_26};
    use schoolclock_core::render::render;

    fn frame(at: &str) -> Frame {
        let cal = school_year_2025_26().unwrap();
        render(&cal, parse_date_time(at).unwrap())
    }

    #[test]
    fn text_surface_writes_three_lines() {
        let mut surface = TextSurface::new(Vec::new(), 10, false);
        surface.present(&frame("2026-06-12")).unwrap();
        let text = String::from_utf8(surface.out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "School is out! 🎉");
        assert_eq!(lines[2], "[##########] 100% complete — 171 of 171 days");
    }

    #[test]
    fn bar_is_clamped_for_negative_progress() {
        let surface = TextSurface::new(Vec::new(), 4, false);
        assert_eq!(surface.bar(-0.6), "[----]");
        assert_eq!(surface.bar(150.0), "[####]");
        assert_eq!(surface.bar(50.0), "[##--]");
    }

    #[test]
    fn clear_screen_prefixes_escape() {
        let mut surface = TextSurface::new(Vec::new(), 4, true);
        surface.present(&frame("2025-09-01")).unwrap();
        assert!(surface.out.starts_with(CLEAR_AND_HOME.as_bytes()));
    }

    #[test]
    fn json_surface_emits_one_line_per_frame() {
        let mut surface = JsonSurface::new(Vec::new());
        let f = frame("2026-06-11T10:00:00");
        surface.present(&f).unwrap();
        surface.present(&f).unwrap();
        let text = String::from_utf8(surface.out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: Frame = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed.phase, f.phase);
        assert_eq!(parsed.seconds_left, 5400);
        assert_eq!(parsed.progress_label, f.progress_label);
    }
}
