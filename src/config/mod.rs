//! Configuration
//!
//! A [`Config`] supplies the fixture root, the update-mode source, the hint
//! shown on compare failures, and the exclusion predicate to every
//! [`GoldenFixtures`] it creates. It is typically built once per test file.

pub mod facade;
pub mod flags;
pub mod registry;
pub mod settings;
pub mod sources;

pub use facade::ConfigLoader;
pub use flags::{parse_flags, Flag, Flags};
pub use settings::{Settings, DEFAULT_DIR, DEFAULT_ENV_NAME};

use crate::diff::{DiffRenderer, LineDiffRenderer};
use crate::error::FixtureError;
use crate::fixtures::Fixtures;
use crate::golden::GoldenFixtures;
use crate::loader::{self, dotfile_exclude, ExcludeFn};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Zero-argument query for the update-mode tokens (`update`, `diff`, ...).
///
/// Evaluated once when a [`GoldenFixtures`] is created, after argument
/// parsing and environment setup have completed.
pub trait UpdateSource: Send + Sync {
    fn mode_tokens(&self) -> String;
}

impl<F> UpdateSource for F
where
    F: Fn() -> String + Send + Sync,
{
    fn mode_tokens(&self) -> String {
        self()
    }
}

/// Reads tokens from an environment variable; unset means compare mode.
#[derive(Debug, Clone)]
pub struct EnvSource {
    pub name: String,
}

impl UpdateSource for EnvSource {
    fn mode_tokens(&self) -> String {
        std::env::var(&self.name).unwrap_or_default()
    }
}

/// Reads the boolean command-line flag `--{name}` through the flag registry.
#[derive(Debug, Clone)]
pub struct FlagSource {
    pub name: String,
}

impl UpdateSource for FlagSource {
    fn mode_tokens(&self) -> String {
        if registry::flag_value(&self.name) {
            "update".to_string()
        } else {
            String::new()
        }
    }
}

/// Tokens decided by the caller up front.
#[derive(Debug, Clone, Default)]
pub struct FixedSource(pub String);

impl UpdateSource for FixedSource {
    fn mode_tokens(&self) -> String {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct Config {
    /// Base dir for input and golden fixtures
    pub dir: PathBuf,
    pub update: Arc<dyn UpdateSource>,
    /// Shown when a comparison fails; should tell the user how to update fixtures
    pub hint: String,
    /// Inherited by every [`GoldenFixtures`] created from this config
    pub ignore_unexpected: bool,
    /// Called for every file found on disk; returning true leaves it out
    pub exclude: ExcludeFn,
    pub renderer: Arc<dyn DiffRenderer>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_DIR),
            update: Arc::new(FixedSource::default()),
            hint: String::new(),
            ignore_unexpected: false,
            exclude: dotfile_exclude(),
            renderer: Arc::new(LineDiffRenderer::default()),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("dir", &self.dir)
            .field("hint", &self.hint)
            .field("ignore_unexpected", &self.ignore_unexpected)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Config driven by the `GOLDEN` environment variable.
    pub fn default_env() -> Self {
        Self::env(DEFAULT_ENV_NAME)
    }

    /// Config driven by the environment variable `name`, e.g. `GOLDEN=update`.
    pub fn env(name: &str) -> Self {
        Self {
            update: Arc::new(EnvSource {
                name: name.to_string(),
            }),
            hint: format!("{}=update cargo test", name),
            ..Self::default()
        }
    }

    /// Config driven by the boolean flag `name`.
    ///
    /// The flag is registered process-wide on first use; see [`registry`].
    /// `--{name}` is read from the command line of `harness = false` test
    /// binaries; under the default harness set the environment variable
    /// named by [`registry::flag_env_name`] instead, as the hint says.
    pub fn flag(name: &str) -> Self {
        Self {
            update: Arc::new(FlagSource {
                name: name.to_string(),
            }),
            hint: format!("{}=1 cargo test", registry::flag_env_name(name)),
            ..Self::default()
        }
    }

    /// Config with update-mode tokens decided by the caller.
    pub fn fixed(tokens: impl Into<String>) -> Self {
        Self {
            update: Arc::new(FixedSource(tokens.into())),
            ..Self::default()
        }
    }

    /// Config built from loaded [`Settings`].
    pub fn from_settings(settings: &Settings) -> Self {
        let mut config = Self::env(&settings.env_name);
        config.dir = settings.dir.clone();
        config.ignore_unexpected = settings.ignore_unexpected;
        if let Some(hint) = &settings.hint {
            config.hint = hint.clone();
        }
        config.with_defaults()
    }

    /// Replace zero values with defaults.
    pub fn with_defaults(mut self) -> Self {
        if self.dir.as_os_str().is_empty() {
            self.dir = PathBuf::from(DEFAULT_DIR);
        }
        self
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
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

    pub fn with_exclude<F>(mut self, exclude: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        self.exclude = Arc::new(exclude);
        self
    }

    pub fn with_renderer<R: DiffRenderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }

    fn join<S: AsRef<str>>(&self, segments: &[S]) -> PathBuf {
        segments
            .iter()
            .fold(self.dir.clone(), |dir, segment| dir.join(segment.as_ref()))
    }

    /// Golden fixtures rooted at `segments` inside the config dir.
    pub fn golden_fixtures<S: AsRef<str>>(&self, segments: &[S]) -> GoldenFixtures {
        GoldenFixtures::new(self.join(segments))
            .with_flags(self.update.mode_tokens())
            .with_hint(self.hint.clone())
            .with_ignore_unexpected(self.ignore_unexpected)
            .with_exclude(self.exclude.clone())
            .with_renderer(self.renderer.clone())
    }

    /// Compare or update the single fixture file at `segments`.
    ///
    /// Sibling files next to the fixture are ignored.
    pub fn golden_fixture<S: AsRef<str>>(
        &self,
        data: impl Into<Vec<u8>>,
        segments: &[S],
    ) -> Result<(), FixtureError> {
        let Some((name, parents)) = segments.split_last() else {
            return Err(FixtureError::invalid_path("", "path is empty"));
        };
        let mut gf = self.golden_fixtures(parents).with_ignore_unexpected(true);
        gf.add(data, &[name.as_ref()])?;
        gf.test()
    }

    /// Load input fixtures from `segments` inside the config dir.
    pub fn input_fixtures<S: AsRef<str>>(&self, segments: &[S]) -> Result<Fixtures, FixtureError> {
        loader::load(&self.join(segments), self.exclude.as_ref())
    }

    /// Read the single input fixture file at `segments`.
    pub fn input_fixture<S: AsRef<str>>(&self, segments: &[S]) -> Result<Vec<u8>, FixtureError> {
        let path = self.join(segments);
        std::fs::read(&path).map_err(|e| FixtureError::load(path, e))
    }
}
