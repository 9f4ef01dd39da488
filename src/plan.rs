//! Deletion plan built by the scanner and consumed by the executor.
//!
//! The plan is append-only while scanning. Once handed to the executor it is
//! only ever read front-to-back.

use std::path::{Path, PathBuf};

/// What kind of removal primitive an entry needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalKind {
    File,
    Directory,
}

/// One file or directory slated for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRemoval {
    path: PathBuf,
    kind: RemovalKind,
}

impl PlannedRemoval {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: RemovalKind::File,
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: RemovalKind::Directory,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> RemovalKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == RemovalKind::Directory
    }
}

/// Ordered sequence of removals. For every directory, all of its descendants
/// appear before it, so the scanned root is always the last entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionPlan {
    entries: Vec<PlannedRemoval>,
    directories: usize,
}

impl DeletionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a removal. Only the scanner and tests build plans.
    pub fn push(&mut self, removal: PlannedRemoval) {
        if removal.is_dir() {
            self.directories += 1;
        }
        self.entries.push(removal);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn directories(&self) -> usize {
        self.directories
    }

    pub fn files(&self) -> usize {
        self.entries.len() - self.directories
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlannedRemoval> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&PlannedRemoval> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a DeletionPlan {
    type Item = &'a PlannedRemoval;
    type IntoIter = std::slice::Iter<'a, PlannedRemoval>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<PlannedRemoval> for DeletionPlan {
    fn from_iter<I: IntoIterator<Item = PlannedRemoval>>(iter: I) -> Self {
        let mut plan = DeletionPlan::new();
        for removal in iter {
            plan.push(removal);
        }
        plan
    }
}
