// Library module for purge
// Re-exports modules for use in integration tests and the binary

pub mod app;
pub mod config;
pub mod delete;
pub mod error;
pub mod plan;
pub mod progress;
pub mod scan;
pub mod term;

pub use app::{App, Console, Summary};
pub use config::Config;
pub use delete::{DeleteStats, Executor, LocalRemover, Remover};
pub use error::{DeleteError, ScanError};
pub use plan::{DeletionPlan, PlannedRemoval, RemovalKind};
pub use progress::{ProgressRenderer, ProgressSample, RenderGate};
pub use scan::{DirectoryReader, LocalReader, ScanProgress, Scanner};
pub use term::{Geometry, TerminalSize};
