//! Update-mode tokens.
//!
//! The update signal is a comma-separated list such as `update` or
//! `update,diff`. An empty list means plain compare mode.

use crate::error::FixtureError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Flag {
    /// Overwrite fixtures on disk instead of comparing.
    Update,
    /// Render a text diff for every changed file in compare failures.
    Diff,
}

impl FromStr for Flag {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "update" => Ok(Flag::Update),
            "diff" => Ok(Flag::Diff),
            other => Err(FixtureError::ConfigError(format!("unknown flag: {:?}", other))),
        }
    }
}

/// Parsed set of update-mode flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub update: bool,
    pub diff: bool,
}

impl Flags {
    pub fn contains(&self, flag: Flag) -> bool {
        match flag {
            Flag::Update => self.update,
            Flag::Diff => self.diff,
        }
    }

    pub fn insert(&mut self, flag: Flag) {
        match flag {
            Flag::Update => self.update = true,
            Flag::Diff => self.diff = true,
        }
    }
}

/// Parse a comma-separated token list.
///
/// Surrounding whitespace and empty tokens are ignored; any unrecognised token
/// is a [`FixtureError::ConfigError`].
pub fn parse_flags(tokens: &str) -> Result<Flags, FixtureError> {
    let mut flags = Flags::default();
    for token in tokens.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        flags.insert(token.parse()?);
    }
    Ok(flags)
}
