//! Golden Fixtures
//!
//! Binds an in-memory fixture set produced by a test to one directory on disk.
//! [`GoldenFixtures::test`] either compares the two and reports every
//! difference, or, in update mode, rewrites the directory to match.

use crate::config::flags::parse_flags;
use crate::diff::{Diff, DiffKind, DiffRenderer, LineDiffRenderer};
use crate::error::FixtureError;
use crate::fixtures::Fixtures;
use crate::loader::{self, dotfile_exclude, ExcludeFn};
use crate::report::{MismatchLine, MismatchReport, UpdateAction, UpdateReport};
use std::fmt;
use std::fs::{DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct GoldenFixtures {
    dir: PathBuf,
    fixtures: Fixtures,
    flags: String,
    hint: String,
    ignore_unexpected: bool,
    exclude: ExcludeFn,
    renderer: Arc<dyn DiffRenderer>,
}

impl fmt::Debug for GoldenFixtures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoldenFixtures")
            .field("dir", &self.dir)
            .field("fixtures", &self.fixtures.paths())
            .field("flags", &self.flags)
            .field("ignore_unexpected", &self.ignore_unexpected)
            .finish_non_exhaustive()
    }
}

impl GoldenFixtures {
    /// Empty fixture set bound to `dir`, in compare mode, excluding dotfiles.
    ///
    /// Most callers should go through [`Config::golden_fixtures`](crate::config::Config::golden_fixtures).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fixtures: Fixtures::new(),
            flags: String::new(),
            hint: String::new(),
            ignore_unexpected: false,
            exclude: dotfile_exclude(),
            renderer: Arc::new(LineDiffRenderer::default()),
        }
    }

    /// Replace the in-memory set, e.g. with files loaded from another dir.
    pub fn with_fixtures(mut self, fixtures: Fixtures) -> Self {
        self.fixtures = fixtures;
        self
    }

    pub fn with_flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = flags.into();
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn with_ignore_unexpected(mut self, ignore: bool) -> Self {
        self.ignore_unexpected = ignore;
        self
    }

    pub fn with_exclude(mut self, exclude: ExcludeFn) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn DiffRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Replace the update-mode tokens, e.g. `"update"` or `""` for compare.
    pub fn set_flags(&mut self, flags: impl Into<String>) {
        self.flags = flags.into();
    }

    pub fn set_ignore_unexpected(&mut self, ignore: bool) {
        self.ignore_unexpected = ignore;
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Add a fixture file at `segments` relative to the fixture dir.
    ///
    /// Fails with [`FixtureError::DuplicatePath`] if the path was already added.
    pub fn add<S: AsRef<str>>(
        &mut self,
        content: impl Into<Vec<u8>>,
        segments: &[S],
    ) -> Result<(), FixtureError> {
        self.fixtures.add(content, segments)
    }

    /// Diff between the in-memory fixtures and those currently on disk.
    pub fn diff(&self) -> Result<Diff, FixtureError> {
        let on_disk = loader::load(&self.dir, self.exclude.as_ref())?;
        let diff = self.fixtures.diff(&on_disk);
        debug!(
            dir = %self.dir.display(),
            entries = diff.len(),
            ignore_unexpected = self.ignore_unexpected,
            "Computed fixture diff"
        );
        if self.ignore_unexpected {
            Ok(diff.without_unexpected())
        } else {
            Ok(diff)
        }
    }

    /// Compare against disk, or update disk when the `update` flag is set.
    ///
    /// Unknown flags are rejected before the disk is touched.
    pub fn test(&self) -> Result<(), FixtureError> {
        let flags = parse_flags(&self.flags)?;
        let diff = self.diff()?;
        if flags.update {
            self.apply_update(&diff)
        } else {
            self.compare(&diff, flags.diff)
        }
    }

    fn disk_path(&self, key: &str) -> PathBuf {
        key.split('/')
            .fold(self.dir.clone(), |path, segment| path.join(segment))
    }

    fn apply_update(&self, diff: &Diff) -> Result<(), FixtureError> {
        let mut report = UpdateReport::default();

        for entry in diff {
            let path = self.disk_path(&entry.path);
            match entry.kind {
                DiffKind::Unexpected => match std::fs::remove_file(&path) {
                    Ok(()) => info!(path = %path.display(), "Removed unexpected fixture"),
                    Err(e) => report.record(UpdateAction::Remove, path, &e),
                },
                DiffKind::Missing | DiffKind::Changed => {
                    let content = entry.actual.as_deref().unwrap_or_default();
                    let parent = path.parent().unwrap_or(&self.dir).to_path_buf();
                    if let Err(e) = create_fixture_dir(&parent) {
                        report.record(UpdateAction::Mkdir, parent, &e);
                    } else if let Err(e) = write_fixture(&path, content) {
                        report.record(UpdateAction::Write, path, &e);
                    } else {
                        info!(path = %path.display(), kind = %entry.kind, "Wrote fixture");
                    }
                }
            }
        }

        if report.is_empty() {
            Ok(())
        } else {
            warn!(
                dir = %self.dir.display(),
                failures = report.failures.len(),
                "Fixture update incomplete"
            );
            Err(FixtureError::UpdateFailure(report))
        }
    }

    fn compare(&self, diff: &Diff, show_diff: bool) -> Result<(), FixtureError> {
        if diff.is_empty() {
            return Ok(());
        }

        let lines = diff
            .iter()
            .map(|entry| {
                let rendered_diff = match (&entry.expected, &entry.actual) {
                    (Some(expected), Some(actual))
                        if show_diff && entry.kind == DiffKind::Changed =>
                    {
                        Some(self.renderer.render(expected, actual))
                    }
                    _ => None,
                };
                MismatchLine {
                    kind: entry.kind,
                    path: self.disk_path(&entry.path),
                    rendered_diff,
                }
            })
            .collect();

        Err(FixtureError::CompareMismatch(MismatchReport {
            lines,
            hint: self.hint.clone(),
        }))
    }
}

fn create_fixture_dir(dir: &Path) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(dir)
}

fn write_fixture(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(content)
}
