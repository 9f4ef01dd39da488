use std::fs;
use std::io;
use std::path::Path;

/// The two removal primitives the executor needs.
pub trait Remover {
    /// Unlink a non-directory entry.
    fn remove_file(&mut self, path: &Path) -> io::Result<()>;

    /// Remove an empty directory.
    fn remove_dir(&mut self, path: &Path) -> io::Result<()>;
}

/// Removes entries from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalRemover;

impl Remover for LocalRemover {
    fn remove_file(&mut self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir(&mut self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path)
    }
}
