//! Human-readable rendering of changed fixture content.

use similar::{ChangeTag, TextDiff};
use std::fmt::Write as _;

/// Renders the difference between an expected and an actual blob as text.
pub trait DiffRenderer: Send + Sync {
    fn render(&self, expected: &[u8], actual: &[u8]) -> String;
}

impl<F> DiffRenderer for F
where
    F: Fn(&[u8], &[u8]) -> String + Send + Sync,
{
    fn render(&self, expected: &[u8], actual: &[u8]) -> String {
        self(expected, actual)
    }
}

/// Line-based renderer.
///
/// UTF-8 content gets a line diff with a few lines of context around each
/// change; anything else gets a size and digest summary.
#[derive(Debug, Clone)]
pub struct LineDiffRenderer {
    /// Unchanged lines shown around each change
    pub context: usize,
}

impl Default for LineDiffRenderer {
    fn default() -> Self {
        Self { context: 2 }
    }
}

impl DiffRenderer for LineDiffRenderer {
    fn render(&self, expected: &[u8], actual: &[u8]) -> String {
        let (Ok(expected_text), Ok(actual_text)) =
            (std::str::from_utf8(expected), std::str::from_utf8(actual))
        else {
            return summarize(expected, actual);
        };

        if expected_text.lines().eq(actual_text.lines()) {
            return "content differs only in line endings or trailing newline".to_string();
        }

        let diff = TextDiff::from_lines(expected_text, actual_text);
        let groups = diff.grouped_ops(self.context);
        let old_len = diff.old_slices().len();

        let mut out = String::from("--- expected\n+++ actual");
        let mut last_end = 0;
        for group in &groups {
            let (Some(first), Some(last)) = (group.first(), group.last()) else {
                continue;
            };
            if first.old_range().start > last_end {
                out.push_str("\n ...");
            }
            last_end = last.old_range().end;
            for op in group {
                for change in diff.iter_changes(op) {
                    let sign = match change.tag() {
                        ChangeTag::Equal => ' ',
                        ChangeTag::Delete => '-',
                        ChangeTag::Insert => '+',
                    };
                    let line = change.value().trim_end_matches(['\n', '\r']);
                    let _ = write!(out, "\n{}{}", sign, line);
                }
            }
        }
        if last_end < old_len {
            out.push_str("\n ...");
        }
        out
    }
}

fn summarize(expected: &[u8], actual: &[u8]) -> String {
    format!(
        "binary content differs: expected {} bytes (blake3 {}), actual {} bytes (blake3 {})",
        expected.len(),
        short_digest(expected),
        actual.len(),
        short_digest(actual)
    )
}

fn short_digest(data: &[u8]) -> String {
    hex::encode(&blake3::hash(data).as_bytes()[..6])
}
