//! Scan phase: walk a directory tree and build the deletion plan.

pub mod reader;
pub mod scanner;

pub use reader::{DirEntry, DirectoryReader, EntryKind, LocalReader};
pub use scanner::{ProgressCallback, ScanProgress, Scanner};
