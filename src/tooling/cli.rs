//! CLI Tooling
//!
//! Command-line access to the fixture engine: compare a directory of produced
//! artifacts against a golden directory, update it, or list its contents.

use super::format::{format_check_json, format_check_text, format_list_json, format_list_text};
use super::types::{CheckSummary, EntrySummary, FileSummary, ListSummary};
use crate::config::{ConfigLoader, Settings};
use crate::error::FixtureError;
use crate::golden::GoldenFixtures;
use crate::loader::{self, is_dotfile};
use crate::logging::{init_logging, LoggingConfig};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

/// Golden fixture comparison and update
#[derive(Parser)]
#[command(name = "golden-fixtures")]
#[command(about = "Compare produced artifacts against golden fixture files, or update them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root holding golden-fixtures.toml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compare a directory of produced files against golden fixtures
    Check {
        /// Directory holding the produced files
        #[arg(long)]
        actual: PathBuf,
        /// Golden fixture directory (default: dir from settings)
        #[arg(long)]
        golden: Option<PathBuf>,
        /// Rewrite the golden directory to match
        #[arg(long)]
        update: bool,
        /// Show text diffs for changed files
        #[arg(long)]
        diff: bool,
        /// Ignore golden files with no produced counterpart
        #[arg(long)]
        ignore_unexpected: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List fixture files in a directory
    List {
        dir: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Rendered command output.
#[derive(Debug, Clone)]
pub struct CliOutput {
    pub text: String,
    /// False when fixtures did not match or could not be updated
    pub success: bool,
}

/// CLI context holding the loaded settings
pub struct CliContext {
    root: PathBuf,
    settings: Settings,
}

impl CliContext {
    /// Create a new CLI context, loading settings from `root`
    pub fn new(root: PathBuf) -> Result<Self, FixtureError> {
        let settings = ConfigLoader::load(&root)?;
        Ok(Self { root, settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Install the global subscriber; CLI flags override settings.
    pub fn init_logging(
        &self,
        level: Option<String>,
        format: Option<String>,
    ) -> Result<(), FixtureError> {
        let mut config: LoggingConfig = self.settings.logging.clone();
        if config.output == "test" {
            config.output = "stderr".to_string();
        }
        if let Some(level) = level {
            config.level = level;
        }
        if let Some(format) = format {
            config.format = format;
        }
        init_logging(Some(&config))
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<CliOutput, FixtureError> {
        match command {
            Commands::Check {
                actual,
                golden,
                update,
                diff,
                ignore_unexpected,
                format,
            } => {
                let golden_dir = golden
                    .clone()
                    .unwrap_or_else(|| self.root.join(&self.settings.dir));
                let mut tokens = Vec::new();
                if *update {
                    tokens.push("update");
                }
                if *diff {
                    tokens.push("diff");
                }

                let hint = self.settings.hint.clone().unwrap_or_else(|| {
                    format!(
                        "golden-fixtures check --actual {} --golden {} --update",
                        actual.display(),
                        golden_dir.display()
                    )
                });
                require_dir(actual)?;
                let produced = loader::load(actual, &is_dotfile)?;
                let actual_files = produced.len();
                let gf = GoldenFixtures::new(golden_dir.clone())
                    .with_fixtures(produced)
                    .with_flags(tokens.join(","))
                    .with_hint(hint)
                    .with_ignore_unexpected(*ignore_unexpected || self.settings.ignore_unexpected);

                let entries: Vec<EntrySummary> = gf.diff()?.iter().map(EntrySummary::from).collect();
                let (error, success) = match gf.test() {
                    Ok(()) => (None, true),
                    Err(e @ FixtureError::CompareMismatch(_))
                    | Err(e @ FixtureError::UpdateFailure(_)) => (Some(e.to_string()), false),
                    Err(e) => return Err(e),
                };
                info!(
                    golden = %golden_dir.display(),
                    entries = entries.len(),
                    success,
                    "Checked fixtures"
                );

                let summary = CheckSummary {
                    golden_dir: golden_dir.display().to_string(),
                    actual_files,
                    updated: *update,
                    entries,
                    error,
                };
                let text = match format {
                    OutputFormat::Json => format_check_json(&summary),
                    OutputFormat::Text => format_check_text(&summary),
                };
                Ok(CliOutput { text, success })
            }
            Commands::List { dir, format } => {
                let fixtures = loader::load(dir, &is_dotfile)?;
                let summary = ListSummary {
                    dir: dir.display().to_string(),
                    files: fixtures
                        .iter()
                        .map(|(path, content)| FileSummary {
                            path: path.to_string(),
                            bytes: content.len(),
                            digest: hex::encode(&blake3::hash(content).as_bytes()[..8]),
                        })
                        .collect(),
                };
                let text = match format {
                    OutputFormat::Json => format_list_json(&summary),
                    OutputFormat::Text => format_list_text(&summary),
                };
                Ok(CliOutput {
                    text,
                    success: true,
                })
            }
        }
    }
}

/// Produced artifacts must exist; an absent dir would read as "no files" and
/// let an update wipe the golden dir.
fn require_dir(dir: &Path) -> Result<(), FixtureError> {
    let meta = std::fs::metadata(dir).map_err(|e| FixtureError::load(dir, e))?;
    if meta.is_dir() {
        Ok(())
    } else {
        Err(FixtureError::load(
            dir,
            std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
        ))
    }
}
