// Deletion executor
// Walks the plan front-to-back and stops at the first failed removal

use std::io::Write;
use std::time::{Duration, Instant};

use log::{debug, warn};

use super::remover::Remover;
use crate::error::DeleteError;
use crate::plan::{DeletionPlan, RemovalKind};
use crate::progress::{ProgressRenderer, ProgressSample, RenderGate, DEFAULT_INTERVAL};

/// Statistics collected during the delete phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStats {
    pub files_removed: u64,
    pub dirs_removed: u64,
    pub duration: Duration,
}

impl DeleteStats {
    pub fn removed(&self) -> u64 {
        self.files_removed + self.dirs_removed
    }
}

pub struct Executor<M: Remover, W: Write> {
    remover: M,
    renderer: ProgressRenderer<W>,
    interval: Duration,
}

impl<M: Remover, W: Write> Executor<M, W> {
    pub fn new(remover: M, renderer: ProgressRenderer<W>) -> Self {
        Self {
            remover,
            renderer,
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Minimum spacing between two progress renders
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Remove every planned entry in order.
    ///
    /// Fails fast: the first removal error is returned and nothing after it
    /// is attempted. Entries already removed stay removed. On success a final
    /// 100% frame is rendered regardless of the sampling interval.
    pub fn execute(&mut self, plan: DeletionPlan) -> Result<DeleteStats, DeleteError> {
        let start = Instant::now();
        let gate = RenderGate::new(self.interval).primed();
        let total = plan.len() as u64;
        let mut files_removed = 0u64;
        let mut dirs_removed = 0u64;

        for removal in &plan {
            let path = removal.path();
            match removal.kind() {
                RemovalKind::Directory => {
                    self.remover
                        .remove_dir(path)
                        .map_err(|source| DeleteError::RemoveDirFailed {
                            path: path.to_path_buf(),
                            source,
                        })?;
                    dirs_removed += 1;
                }
                RemovalKind::File => {
                    self.remover
                        .remove_file(path)
                        .map_err(|source| DeleteError::RemoveFileFailed {
                            path: path.to_path_buf(),
                            source,
                        })?;
                    files_removed += 1;
                }
            }

            if gate.try_open() {
                let completed = files_removed + dirs_removed;
                self.draw(ProgressSample::new(completed, total, start.elapsed()));
            }
        }

        let duration = start.elapsed();
        self.draw(ProgressSample::new(total, total, duration));
        debug!(
            "Removed {} files and {} directories in {:.2}s",
            files_removed,
            dirs_removed,
            duration.as_secs_f64()
        );

        Ok(DeleteStats {
            files_removed,
            dirs_removed,
            duration,
        })
    }

    pub fn into_renderer(self) -> ProgressRenderer<W> {
        self.renderer
    }

    fn draw(&mut self, sample: ProgressSample) {
        if let Err(e) = self.renderer.render(&sample) {
            warn!("Failed to draw progress: {}", e);
        }
    }
}
