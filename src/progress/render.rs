// Progress line rendering
// Draws the scan counter and the delete-phase bar with elapsed time and ETA

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveTime;
use crossterm::{cursor::MoveToColumn, queue};

use crate::term::TerminalSize;

pub const DEFAULT_FILL_GLYPH: char = '█';

const SECONDS_PER_DAY: u64 = 86_400;

/// Renderer input, recomputed for every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSample {
    pub completed: u64,
    pub total: u64,
    pub elapsed: Duration,
}

impl ProgressSample {
    pub fn new(completed: u64, total: u64, elapsed: Duration) -> Self {
        Self {
            completed,
            total,
            elapsed,
        }
    }

    /// Projected total duration in whole seconds, extrapolated linearly from
    /// the throughput so far. Zero until something has completed.
    ///
    /// The product is widened to u128 and the result saturates at u64::MAX.
    pub fn eta_secs(&self) -> u64 {
        if self.completed == 0 {
            return 0;
        }
        let projected =
            self.total as u128 * self.elapsed.as_secs() as u128 / self.completed as u128;
        u64::try_from(projected).unwrap_or(u64::MAX)
    }

    /// ` {completed}/{total} Elapsed HH:MM:SS ETA HH:MM:SS`, with `completed`
    /// right-aligned to the digit count of `total`.
    pub fn status_text(&self) -> String {
        let width = digit_count(self.total);
        format!(
            " {:>width$}/{} Elapsed {} ETA {}",
            self.completed,
            self.total,
            format_clock(self.elapsed.as_secs()),
            format_clock(self.eta_secs()),
            width = width
        )
    }
}

fn digit_count(mut n: u64) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Format seconds as `HH:MM:SS`. Durations of a day or more wrap around.
pub fn format_clock(secs: u64) -> String {
    let of_day = (secs % SECONDS_PER_DAY) as u32;
    match NaiveTime::from_num_seconds_from_midnight_opt(of_day, 0) {
        Some(time) => time.format("%H:%M:%S").to_string(),
        None => String::from("00:00:00"),
    }
}

/// Build the full bar line for a terminal `columns` wide, without the leading
/// cursor movement.
pub fn bar_line(sample: &ProgressSample, columns: u16, glyph: char) -> String {
    let status = sample.status_text();
    let bar_width = (columns as usize).saturating_sub(2 + status.chars().count());
    let filled = if sample.total == 0 {
        0
    } else {
        let cells = sample.completed.min(sample.total) as u128 * bar_width as u128
            / sample.total as u128;
        cells as usize
    };

    let mut line = String::with_capacity(columns as usize * glyph.len_utf8());
    line.push('[');
    line.extend(std::iter::repeat(glyph).take(filled));
    line.extend(std::iter::repeat(' ').take(bar_width - filled));
    line.push(']');
    line.push_str(&status);
    line
}

/// Writes progress lines to a terminal-like sink, overwriting the current
/// line each time.
pub struct ProgressRenderer<W: Write> {
    out: W,
    size: Arc<TerminalSize>,
    glyph: char,
}

impl<W: Write> ProgressRenderer<W> {
    pub fn new(out: W, size: Arc<TerminalSize>) -> Self {
        Self {
            out,
            size,
            glyph: DEFAULT_FILL_GLYPH,
        }
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Scan-phase form: a bare running count, since the total is unknown.
    pub fn render_counter(&mut self, count: u64) -> io::Result<()> {
        write!(self.out, "\r{}...", count)?;
        self.out.flush()
    }

    /// Delete-phase form: bar, counts, elapsed and ETA.
    pub fn render(&mut self, sample: &ProgressSample) -> io::Result<()> {
        let line = bar_line(sample, self.size.columns(), self.glyph);
        queue!(self.out, MoveToColumn(0))?;
        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }

    /// Write free-form text through the same sink, e.g. phase headers.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
