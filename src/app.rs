// Two-phase run: scan the whole tree, then delete it in plan order

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use log::{info, warn};

use crate::config::Config;
use crate::delete::{DeleteStats, Executor, LocalRemover};
use crate::progress::ProgressRenderer;
use crate::scan::Scanner;
use crate::term::TerminalSize;

/// Handle to the process stdout that can be cloned into the scan callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub planned: u64,
    pub stats: DeleteStats,
}

pub struct App {
    config: Config,
    size: Arc<TerminalSize>,
}

impl App {
    pub fn new(config: Config, size: Arc<TerminalSize>) -> Self {
        Self { config, size }
    }

    fn renderer<W: Write>(&self, out: W) -> ProgressRenderer<W> {
        ProgressRenderer::new(out, Arc::clone(&self.size)).with_glyph(self.config.fill_glyph)
    }

    /// Scan `root`, then remove everything under it and `root` itself,
    /// writing the progress UI to `out`.
    ///
    /// Scan and delete errors are returned as [`crate::error::ScanError`] and
    /// [`crate::error::DeleteError`] inside the `anyhow::Error`.
    pub fn run<W>(&self, root: &Path, out: W) -> Result<Summary>
    where
        W: Write + Clone + Send + 'static,
    {
        let mut console = self.renderer(out.clone());
        console.line(&format!("Scanning \"{}\"", root.display()))?;

        let mut counter = self.renderer(out.clone());
        let mut scanner = Scanner::new()
            .with_interval(self.config.progress_interval())
            .with_progress_callback(move |progress| {
                if let Err(e) = counter.render_counter(progress.entries) {
                    warn!("Failed to draw scan progress: {}", e);
                }
            });
        let plan = scanner.scan(root)?;
        let planned = plan.len() as u64;

        console.line("")?;
        console.line(&format!("Total files: {}", planned))?;
        console.line("")?;
        info!(
            "Planned {} removals ({} files, {} directories) under {}",
            planned,
            plan.files(),
            plan.directories(),
            root.display()
        );

        let mut executor = Executor::new(LocalRemover, self.renderer(out))
            .with_interval(self.config.progress_interval());
        let stats = executor.execute(plan)?;
        console.line("")?;

        info!(
            "Removed {} entries in {:.2}s",
            stats.removed(),
            stats.duration.as_secs_f64()
        );
        Ok(Summary { planned, stats })
    }
}
