//! Fixture Diffs
//!
//! The classified, path-ordered result of comparing two fixture sets.

pub mod render;

pub use render::{DiffRenderer, LineDiffRenderer};

use serde::Serialize;
use std::fmt;

/// How a single path differs between the actual and expected sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Present in the actual set only; not on disk yet.
    Missing,
    /// Present on disk only.
    Unexpected,
    /// Present in both with different content.
    Changed,
}

impl DiffKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffKind::Missing => "missing",
            DiffKind::Unexpected => "unexpected",
            DiffKind::Changed => "changed",
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One differing path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub path: String,
    pub kind: DiffKind,
    /// Content of the expected (on-disk) file, if any.
    pub expected: Option<Vec<u8>>,
    /// Content of the actual (in-memory) file, if any.
    pub actual: Option<Vec<u8>>,
}

/// Ordered list of diff entries, ascending by path, at most one entry per path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    entries: Vec<DiffEntry>,
}

impl Diff {
    pub(crate) fn from_entries(mut entries: Vec<DiffEntry>) -> Self {
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Diff { entries }
    }

    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paths of all entries in ascending byte order.
    pub fn paths(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.path.as_str()).collect()
    }

    pub fn get(&self, path: &str) -> Option<&DiffEntry> {
        self.entries
            .binary_search_by(|e| e.path.as_str().cmp(path))
            .ok()
            .map(|i| &self.entries[i])
    }

    pub fn count(&self, kind: DiffKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// Drop every [`DiffKind::Unexpected`] entry, leaving the rest untouched.
    pub fn without_unexpected(self) -> Self {
        Diff {
            entries: self
                .entries
                .into_iter()
                .filter(|e| e.kind != DiffKind::Unexpected)
                .collect(),
        }
    }
}

impl IntoIterator for Diff {
    type Item = DiffEntry;
    type IntoIter = std::vec::IntoIter<DiffEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diff {
    type Item = &'a DiffEntry;
    type IntoIter = std::slice::Iter<'a, DiffEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
