//! Environment variable source: GOLDEN_FIXTURES prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;
use std::collections::HashMap;

pub const ENV_PREFIX: &str = "GOLDEN_FIXTURES";

/// Add environment variable overlay to builder.
///
/// `vars` replaces the process environment when given, so callers can load
/// settings without touching global state.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    vars: Option<HashMap<String, String>>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .source(vars),
    );
    Ok(builder)
}
