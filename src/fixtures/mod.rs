//! Fixture Sets
//!
//! An in-memory mapping from relative path to file content. A set is filled by
//! the test body (or by the loader from disk) and then compared against another
//! set to produce a [`Diff`].

pub mod key;

pub use key::normalize_key;

use key::canonically_equal;

use crate::diff::{Diff, DiffEntry, DiffKind};
use crate::error::FixtureError;
use std::collections::BTreeMap;

/// Fixtures maps normalized relative paths to their file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixtures {
    files: BTreeMap<String, Vec<u8>>,
}

impl Fixtures {
    pub fn new() -> Self {
        Fixtures {
            files: BTreeMap::new(),
        }
    }

    /// Add a file under the path formed by joining `segments`.
    ///
    /// Returns [`FixtureError::DuplicatePath`] if the path is already present,
    /// or if it differs from a present path only in Unicode normalization;
    /// two artifacts must never be silently merged into one.
    pub fn add<S: AsRef<str>>(
        &mut self,
        content: impl Into<Vec<u8>>,
        segments: &[S],
    ) -> Result<(), FixtureError> {
        let key = normalize_key(segments)?;
        if !key.is_ascii() {
            if let Some(existing) = self
                .files
                .keys()
                .find(|existing| canonically_equal(existing.as_str(), &key))
            {
                return Err(FixtureError::DuplicatePath(existing.clone()));
            }
        }
        self.insert_key(key, content.into())
    }

    /// Insert under an already-normalized key.
    pub(crate) fn insert_key(&mut self, key: String, content: Vec<u8>) -> Result<(), FixtureError> {
        if self.files.contains_key(&key) {
            return Err(FixtureError::DuplicatePath(key));
        }
        self.files.insert(key, content);
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(|v| v.as_slice())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// All paths in ascending byte order.
    pub fn paths(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    /// Iterate over `(path, content)` pairs in ascending path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Compare `self` (the actual set) against `other` (the expected set).
    ///
    /// Paths only in `self` are [`DiffKind::Missing`], paths only in `other`
    /// are [`DiffKind::Unexpected`], and paths in both with different bytes are
    /// [`DiffKind::Changed`]. The result is sorted by path.
    pub fn diff(&self, other: &Fixtures) -> Diff {
        let mut entries = Vec::new();

        for (path, actual) in &self.files {
            match other.files.get(path) {
                None => entries.push(DiffEntry {
                    path: path.clone(),
                    kind: DiffKind::Missing,
                    expected: None,
                    actual: Some(actual.clone()),
                }),
                Some(expected) if expected != actual => entries.push(DiffEntry {
                    path: path.clone(),
                    kind: DiffKind::Changed,
                    expected: Some(expected.clone()),
                    actual: Some(actual.clone()),
                }),
                Some(_) => {}
            }
        }

        for (path, expected) in &other.files {
            if !self.files.contains_key(path) {
                entries.push(DiffEntry {
                    path: path.clone(),
                    kind: DiffKind::Unexpected,
                    expected: Some(expected.clone()),
                    actual: None,
                });
            }
        }

        Diff::from_entries(entries)
    }
}

impl<'a> IntoIterator for &'a Fixtures {
    type Item = (&'a String, &'a Vec<u8>);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
