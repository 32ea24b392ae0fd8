//! Golden Fixtures: file-based snapshot testing
//!
//! Tests build an in-memory set of files, then compare it against a directory
//! of golden fixtures on disk. In update mode the directory is rewritten to
//! match, so the next compare passes.
//!
//! ```no_run
//! use golden_fixtures::Config;
//!
//! let config = Config::default_env();
//! let mut gf = config.golden_fixtures(&["render", "gradient"]);
//! gf.add("P3\n1 1\n255\n0 0 0\n", &["out.ppm"]).unwrap();
//! gf.test().unwrap();
//! ```

pub mod config;
pub mod diff;
pub mod error;
pub mod fixtures;
pub mod golden;
pub mod loader;
pub mod logging;
pub mod report;
pub mod tooling;

pub use config::{Config, ConfigLoader, Settings};
pub use diff::{Diff, DiffEntry, DiffKind, DiffRenderer, LineDiffRenderer};
pub use error::FixtureError;
pub use fixtures::{normalize_key, Fixtures};
pub use golden::GoldenFixtures;
pub use loader::{is_dotfile, load};
pub use report::{MismatchReport, UpdateReport};
