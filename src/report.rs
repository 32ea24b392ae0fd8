//! Failure reports returned by [`GoldenFixtures::test`](crate::golden::GoldenFixtures::test).
//!
//! Both reports are descriptive only; their `Display` output is what a test
//! harness prints when a fixture test fails.

use crate::diff::DiffKind;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// One mismatching file in compare mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MismatchLine {
    pub kind: DiffKind,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_diff: Option<String>,
}

/// Fixtures on disk do not match the fixtures produced by the test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MismatchReport {
    pub lines: Vec<MismatchLine>,
    pub hint: String,
}

impl MismatchReport {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} errors:", self.lines.len())?;
        for line in &self.lines {
            write!(f, "\n{} file: {}", line.kind, line.path.display())?;
            if let Some(rendered) = &line.rendered_diff {
                for diff_line in rendered.lines() {
                    write!(f, "\n  {}", diff_line)?;
                }
            }
        }
        write!(
            f,
            "\n\nrun `{}` to automatically update all files above",
            self.hint
        )
    }
}

/// Filesystem operation attempted while updating fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateAction {
    Remove,
    Mkdir,
    Write,
}

impl fmt::Display for UpdateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UpdateAction::Remove => "remove",
            UpdateAction::Mkdir => "mkdir",
            UpdateAction::Write => "write",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateFailureEntry {
    pub action: UpdateAction,
    pub path: PathBuf,
    pub cause: String,
}

/// Every filesystem operation that failed during one update pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    pub failures: Vec<UpdateFailureEntry>,
}

impl UpdateReport {
    pub(crate) fn record(&mut self, action: UpdateAction, path: PathBuf, cause: &std::io::Error) {
        self.failures.push(UpdateFailureEntry {
            action,
            path,
            cause: cause.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for UpdateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} errors:", self.failures.len())?;
        for failure in &self.failures {
            write!(
                f,
                "\ncould not {}: {}: {}",
                failure.action,
                failure.path.display(),
                failure.cause
            )?;
        }
        Ok(())
    }
}
