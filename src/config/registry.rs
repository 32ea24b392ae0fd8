//! Process-wide registry of command-line update flags.
//!
//! Several test binaries or test threads may ask for the same flag at once.
//! Each flag name is resolved exactly once; later lookups return the cached
//! value.
//!
//! The default libtest harness rejects options it does not know, so `--{name}`
//! only reaches a test binary built with `harness = false`. Every flag can also
//! be set through its environment variable (see [`flag_env_name`]), which works
//! under any harness.

use parking_lot::Mutex;
use std::collections::BTreeMap;

static FLAG_VALUES: Mutex<BTreeMap<String, bool>> = parking_lot::const_mutex(BTreeMap::new());

/// Value of the boolean flag `--{name}`, registering it on first use.
///
/// A flag on the command line wins over the environment variable.
pub fn flag_value(name: &str) -> bool {
    let mut values = FLAG_VALUES.lock();
    if let Some(value) = values.get(name) {
        return *value;
    }
    let args = std::env::args_os()
        .skip(1)
        .filter_map(|arg| arg.into_string().ok());
    let value = scan_args(name, args)
        .or_else(|| {
            std::env::var(flag_env_name(name))
                .ok()
                .map(|raw| is_truthy(&raw))
        })
        .unwrap_or(false);
    values.insert(name.to_string(), value);
    value
}

/// Record a flag value parsed by the caller, replacing any registered value.
pub fn set_flag_value(name: &str, value: bool) {
    FLAG_VALUES.lock().insert(name.to_string(), value);
}

pub fn is_registered(name: &str) -> bool {
    FLAG_VALUES.lock().contains_key(name)
}

/// Environment variable backing the flag `name`: `golden-update` reads
/// `GOLDEN_UPDATE`.
pub fn flag_env_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect()
}

/// Scan `args` for `--{name}` or `--{name}=<bool>`. The last occurrence wins.
pub fn parse_flag_from_args<I, S>(name: &str, args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    scan_args(name, args).unwrap_or(false)
}

fn scan_args<I, S>(name: &str, args: I) -> Option<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let bare = format!("--{}", name);
    let with_value = format!("--{}=", name);
    let mut value = None;
    for arg in args {
        let arg = arg.as_ref();
        if arg == bare {
            value = Some(true);
        } else if let Some(raw) = arg.strip_prefix(&with_value) {
            value = Some(raw.is_empty() || is_truthy(raw));
        }
    }
    value
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim(), "1" | "true" | "yes")
}
