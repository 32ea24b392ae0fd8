//! Settings sources, lowest precedence first: settings file, then environment.

pub mod environment;
pub mod file;
