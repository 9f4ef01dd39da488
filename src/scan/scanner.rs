// Tree scanner
// Depth-first walk that builds the deletion plan with every directory listed
// after its contents

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::debug;

use super::reader::{DirectoryReader, EntryKind, LocalReader};
use crate::error::ScanError;
use crate::plan::{DeletionPlan, PlannedRemoval};
use crate::progress::RenderGate;

/// Progress information emitted while scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    /// Removals planned so far
    pub entries: u64,
}

/// Type alias for progress callback function
pub type ProgressCallback = Box<dyn FnMut(ScanProgress) + Send>;

/// One directory being listed: its path and the remaining entries
struct Frame<I> {
    path: PathBuf,
    entries: I,
}

/// What the top frame asked for next
enum Step {
    Descend(PathBuf),
    Plan(PathBuf),
    Exhausted,
    Failed(ScanError),
}

pub struct Scanner<R: DirectoryReader = LocalReader> {
    reader: R,
    gate: RenderGate,
    progress_callback: Option<ProgressCallback>,
}

impl Scanner<LocalReader> {
    /// Scanner over the local filesystem
    pub fn new() -> Self {
        Self::with_reader(LocalReader)
    }
}

impl Default for Scanner<LocalReader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: DirectoryReader> Scanner<R> {
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader,
            gate: RenderGate::default(),
            progress_callback: None,
        }
    }

    /// Minimum spacing between two progress callbacks
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.gate = RenderGate::new(interval);
        self
    }

    /// Set a progress callback function
    pub fn with_progress_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(ScanProgress) + Send + 'static,
    {
        self.progress_callback = Some(Box::new(callback));
        self
    }

    /// Walk `root` and return the complete deletion plan.
    ///
    /// Files are planned as soon as they are seen. A directory is planned only
    /// once all of its entries have been, so the root always comes last.
    /// Order among siblings is whatever the reader yields.
    ///
    /// Traversal uses an explicit stack, so tree depth is bounded by memory
    /// rather than by the call stack. The first failure aborts the scan and
    /// the partial plan is dropped.
    pub fn scan(&mut self, root: &Path) -> Result<DeletionPlan, ScanError> {
        let start = Instant::now();
        let mut plan = DeletionPlan::new();
        let mut stack = vec![self.open_frame(root.to_path_buf())?];

        loop {
            let step = match stack.last_mut() {
                None => break,
                Some(frame) => Self::next_step(frame),
            };

            match step {
                Step::Descend(path) => {
                    let frame = self.open_frame(path)?;
                    stack.push(frame);
                    continue;
                }
                Step::Plan(path) => plan.push(PlannedRemoval::file(path)),
                Step::Exhausted => {
                    if let Some(frame) = stack.pop() {
                        plan.push(PlannedRemoval::directory(frame.path));
                    }
                }
                Step::Failed(e) => return Err(e),
            }

            self.report(&plan);
        }

        debug!(
            "Scanned {}: {} files, {} directories in {:.2}s",
            root.display(),
            plan.files(),
            plan.directories(),
            start.elapsed().as_secs_f64()
        );
        Ok(plan)
    }

    fn open_frame(&self, path: PathBuf) -> Result<Frame<R::Entries>, ScanError> {
        match self.reader.open(&path) {
            Ok(entries) => Ok(Frame { path, entries }),
            Err(source) => Err(ScanError::CannotOpen { path, source }),
        }
    }

    fn next_step(frame: &mut Frame<R::Entries>) -> Step {
        loop {
            let entry = match frame.entries.next() {
                None => return Step::Exhausted,
                Some(Err(source)) => {
                    return Step::Failed(ScanError::ReadEntry {
                        path: frame.path.clone(),
                        source,
                    })
                }
                Some(Ok(entry)) => entry,
            };
            if entry.is_self_or_parent() {
                continue;
            }

            let child = frame.path.join(&entry.name);
            return match entry.kind {
                EntryKind::Directory => Step::Descend(child),
                EntryKind::Other => Step::Plan(child),
            };
        }
    }

    fn report(&mut self, plan: &DeletionPlan) {
        let Some(callback) = self.progress_callback.as_mut() else {
            return;
        };
        if self.gate.try_open() {
            callback(ScanProgress {
                entries: plan.len() as u64,
            });
        }
    }
}
