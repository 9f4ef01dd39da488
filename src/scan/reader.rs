// Directory listing seam
// The scanner only needs entry names and whether each entry is a directory

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// Entry kind as reported by the directory listing, without following links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// Regular files, symlinks, sockets, device nodes...
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// True for the `.` and `..` pseudo-entries.
    pub fn is_self_or_parent(&self) -> bool {
        self.name == "." || self.name == ".."
    }
}

/// Something that can list the entries of a directory.
pub trait DirectoryReader {
    type Entries: Iterator<Item = io::Result<DirEntry>>;

    fn open(&self, path: &Path) -> io::Result<Self::Entries>;
}

/// Reads the local filesystem through `std::fs::read_dir`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalReader;

impl DirectoryReader for LocalReader {
    type Entries = LocalEntries;

    fn open(&self, path: &Path) -> io::Result<LocalEntries> {
        Ok(LocalEntries {
            inner: fs::read_dir(path)?,
        })
    }
}

pub struct LocalEntries {
    inner: fs::ReadDir,
}

impl Iterator for LocalEntries {
    type Item = io::Result<DirEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.inner.next()? {
            Ok(entry) => entry,
            Err(e) => return Some(Err(e)),
        };
        // file_type() does not follow symlinks, so a link to a directory is
        // unlinked rather than descended into
        Some(entry.file_type().map(|file_type| {
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::Other
            };
            DirEntry::new(entry.file_name(), kind)
        }))
    }
}
