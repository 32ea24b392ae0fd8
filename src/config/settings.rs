//! Settings deserialized from the settings file and environment overlay.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default base directory for input and golden fixtures.
pub const DEFAULT_DIR: &str = "test-fixtures";

/// Default environment variable carrying update-mode tokens.
pub const DEFAULT_ENV_NAME: &str = "GOLDEN";

fn default_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DIR)
}

fn default_env_name() -> String {
    DEFAULT_ENV_NAME.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base directory for fixtures, relative to the test's working directory
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Environment variable read for update-mode tokens
    #[serde(default = "default_env_name")]
    pub env_name: String,

    /// Replaces the generated re-run hint when set
    #[serde(default)]
    pub hint: Option<String>,

    #[serde(default)]
    pub ignore_unexpected: bool,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            env_name: default_env_name(),
            hint: None,
            ignore_unexpected: false,
            logging: LoggingConfig::default(),
        }
    }
}
