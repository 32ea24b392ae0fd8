//! Tooling & Integration Layer
//!
//! CLI entry points over the fixture engine, for CI jobs and scripts that
//! produce artifacts outside of `cargo test`.

pub mod cli;
pub mod format;
pub mod types;

pub use cli::{Cli, CliContext, CliOutput, Commands};
