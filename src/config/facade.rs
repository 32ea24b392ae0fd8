//! ConfigLoader facade: builds [`Settings`] from the settings file and environment.

use super::settings::Settings;
use super::sources::{environment, file};
use crate::error::FixtureError;
use std::collections::HashMap;
use std::path::Path;

/// Settings loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings for a project rooted at `root`.
    ///
    /// Precedence: serde defaults (lowest) -> `golden-fixtures.toml` -> environment (highest).
    pub fn load(root: &Path) -> Result<Settings, FixtureError> {
        Self::load_with_env(root, None)
    }

    /// Like [`ConfigLoader::load`], with an explicit environment map in place of
    /// the process environment.
    pub fn load_with_env(
        root: &Path,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Settings, FixtureError> {
        let builder = config::Config::builder();
        let builder = file::add_to_builder(builder, root)?;
        let builder = environment::add_to_builder(builder, vars)?;

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Create default settings.
    pub fn default() -> Settings {
        Settings::default()
    }
}
