//! Fixture Loader
//!
//! Walks a directory tree and materializes every non-excluded regular file into
//! a [`Fixtures`] set keyed by its path relative to the walk root.

use crate::error::FixtureError;
use crate::fixtures::Fixtures;
use std::io::ErrorKind;
use std::path::{Component, Path};
use std::sync::Arc;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Predicate deciding whether a file found on disk is left out of a load.
///
/// Receives the full path of the file (walk root joined with the relative path).
pub type ExcludeFn = Arc<dyn Fn(&Path) -> bool + Send + Sync>;

/// Returns true if the final component of `path` starts with a `.`.
///
/// Useful for skipping editor and VCS artifacts such as vim swap files.
pub fn is_dotfile(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// The default exclusion predicate, [`is_dotfile`].
pub fn dotfile_exclude() -> ExcludeFn {
    Arc::new(is_dotfile)
}

/// Load all files under `dir` into a fixture set.
///
/// A directory that does not exist yields an empty set; any other I/O error
/// aborts the walk with [`FixtureError::LoadFailure`].
pub fn load(
    dir: &Path,
    exclude: &(dyn Fn(&Path) -> bool + Send + Sync),
) -> Result<Fixtures, FixtureError> {
    let mut fixtures = Fixtures::new();

    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(FixtureError::load(
                dir,
                std::io::Error::new(ErrorKind::Other, "not a directory"),
            ))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "Fixture directory does not exist, treating as empty");
            return Ok(fixtures);
        }
        Err(e) => return Err(FixtureError::load(dir, e)),
    }

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            let io = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::new(ErrorKind::Other, "filesystem loop detected"));
            FixtureError::load(path, io)
        })?;

        let path = entry.path();
        let is_file = if entry.file_type().is_symlink() {
            std::fs::metadata(path)
                .map_err(|e| FixtureError::load(path, e))?
                .is_file()
        } else {
            entry.file_type().is_file()
        };
        if !is_file || exclude(path) {
            continue;
        }

        let relative = path.strip_prefix(dir).map_err(|_| {
            FixtureError::invalid_path(path.display().to_string(), "outside of load root")
        })?;
        let Some(key) = relative_key(relative) else {
            warn!(path = %path.display(), "Skipping fixture with a non-UTF-8 name");
            continue;
        };
        let content = std::fs::read(path).map_err(|e| FixtureError::load(path, e))?;
        fixtures.insert_key(key, content)?;
    }

    debug!(dir = %dir.display(), files = fixtures.len(), "Loaded fixtures");
    Ok(fixtures)
}

/// The exact relative path as a `/`-joined key, or `None` if a component is
/// not valid UTF-8.
fn relative_key(relative: &Path) -> Option<String> {
    let segments = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_str()),
            _ => None,
        })
        .collect::<Option<Vec<&str>>>()?;
    Some(segments.join("/"))
}
