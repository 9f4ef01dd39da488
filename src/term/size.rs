use std::sync::atomic::{AtomicU16, Ordering};

use log::debug;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub columns: u16,
    pub rows: u16,
}

impl Geometry {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(80, 25)
    }
}

/// Latest known terminal geometry, shared between the renderer and the
/// resize watcher.
///
/// Each dimension is stored in its own atomic. A render racing a resize may
/// see one stale dimension for a single frame, which only affects bar width.
#[derive(Debug)]
pub struct TerminalSize {
    columns: AtomicU16,
    rows: AtomicU16,
    fallback: Geometry,
}

impl TerminalSize {
    /// Fixed geometry, never queried from a terminal.
    pub fn fixed(geometry: Geometry) -> Self {
        Self {
            columns: AtomicU16::new(geometry.columns),
            rows: AtomicU16::new(geometry.rows),
            fallback: geometry,
        }
    }

    /// Query the attached terminal, using `fallback` when there is none.
    pub fn detect(fallback: Geometry) -> Self {
        let size = Self::fixed(fallback);
        size.refresh();
        size
    }

    pub fn columns(&self) -> u16 {
        self.columns.load(Ordering::Relaxed)
    }

    pub fn rows(&self) -> u16 {
        self.rows.load(Ordering::Relaxed)
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.columns(), self.rows())
    }

    pub fn set(&self, geometry: Geometry) {
        self.columns.store(geometry.columns, Ordering::Relaxed);
        self.rows.store(geometry.rows, Ordering::Relaxed);
    }

    /// Re-read the terminal geometry and publish it.
    pub fn refresh(&self) {
        let geometry = query_geometry(self.fallback);
        debug!("Terminal geometry {}x{}", geometry.columns, geometry.rows);
        self.set(geometry);
    }
}

/// Ask the controlling terminal for its size.
pub fn query_geometry(fallback: Geometry) -> Geometry {
    match crossterm::terminal::size() {
        Ok((columns, rows)) if columns > 0 && rows > 0 => Geometry::new(columns, rows),
        Ok(_) => fallback,
        Err(e) => {
            debug!(
                "Terminal size unavailable ({}), assuming {}x{}",
                e, fallback.columns, fallback.rows
            );
            fallback
        }
    }
}
