//! Result DTOs for CLI formatting.

use crate::diff::{DiffEntry, DiffKind};
use serde::Serialize;

/// One differing path in a check result.
#[derive(Debug, Clone, Serialize)]
pub struct EntrySummary {
    pub path: String,
    pub kind: DiffKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_bytes: Option<usize>,
}

impl From<&DiffEntry> for EntrySummary {
    fn from(entry: &DiffEntry) -> Self {
        Self {
            path: entry.path.clone(),
            kind: entry.kind,
            expected_bytes: entry.expected.as_ref().map(|b| b.len()),
            actual_bytes: entry.actual.as_ref().map(|b| b.len()),
        }
    }
}

/// Result of the check command.
#[derive(Debug, Clone, Serialize)]
pub struct CheckSummary {
    pub golden_dir: String,
    pub actual_files: usize,
    pub updated: bool,
    pub entries: Vec<EntrySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One file in a list result.
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    pub path: String,
    pub bytes: usize,
    pub digest: String,
}

/// Result of the list command.
#[derive(Debug, Clone, Serialize)]
pub struct ListSummary {
    pub dir: String,
    pub files: Vec<FileSummary>,
}
