// Error types for the scan and delete phases
// Every variant carries the offending path and the underlying OS error

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failure while building the deletion plan.
#[derive(Debug)]
pub enum ScanError {
    /// A directory could not be opened for listing
    CannotOpen { path: PathBuf, source: io::Error },
    /// An entry inside an opened directory could not be read or typed
    ReadEntry { path: PathBuf, source: io::Error },
}

impl ScanError {
    /// Name of the primitive that failed, as shown to the operator
    pub fn operation(&self) -> &'static str {
        match self {
            ScanError::CannotOpen { .. } => "opendir",
            ScanError::ReadEntry { .. } => "readdir",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ScanError::CannotOpen { path, .. } | ScanError::ReadEntry { path, .. } => path,
        }
    }

    fn io_error(&self) -> &io::Error {
        match self {
            ScanError::CannotOpen { source, .. } | ScanError::ReadEntry { source, .. } => source,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {} (path: \"{}\")",
            self.operation(),
            self.io_error(),
            self.path().display()
        )
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.io_error())
    }
}

/// Failure while executing the deletion plan.
#[derive(Debug)]
pub enum DeleteError {
    RemoveFileFailed { path: PathBuf, source: io::Error },
    RemoveDirFailed { path: PathBuf, source: io::Error },
}

impl DeleteError {
    pub fn operation(&self) -> &'static str {
        match self {
            DeleteError::RemoveFileFailed { .. } => "unlink",
            DeleteError::RemoveDirFailed { .. } => "rmdir",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            DeleteError::RemoveFileFailed { path, .. } | DeleteError::RemoveDirFailed { path, .. } => {
                path
            }
        }
    }

    /// Raw OS error code, when the failure came from the kernel
    pub fn raw_os_error(&self) -> Option<i32> {
        self.io_error().raw_os_error()
    }

    fn io_error(&self) -> &io::Error {
        match self {
            DeleteError::RemoveFileFailed { source, .. }
            | DeleteError::RemoveDirFailed { source, .. } => source,
        }
    }
}

impl fmt::Display for DeleteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {} (path: \"{}\")",
            self.operation(),
            self.io_error(),
            self.path().display()
        )
    }
}

impl std::error::Error for DeleteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.io_error())
    }
}
