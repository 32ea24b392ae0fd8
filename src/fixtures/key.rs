//! Fixture path keys
//!
//! Keys are relative and `/`-separated. Their text is kept exactly as given, so
//! a key always names the same file on disk that it was read from or will be
//! written to.

use crate::error::FixtureError;
use unicode_normalization::UnicodeNormalization;

/// Join path segments into a fixture key.
///
/// Each segment may itself contain `/` or `\` separators. Empty and `.`
/// components are dropped; `..` components and absolute paths are rejected.
pub fn normalize_key<S: AsRef<str>>(segments: &[S]) -> Result<String, FixtureError> {
    let raw = segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join("/");

    if raw.starts_with('/') || raw.starts_with('\\') || has_drive_prefix(&raw) {
        return Err(FixtureError::invalid_path(raw, "absolute paths are not allowed"));
    }

    let mut parts = Vec::new();
    for component in raw.split(|c| c == '/' || c == '\\') {
        match component {
            "" | "." => {}
            ".." => {
                return Err(FixtureError::invalid_path(
                    raw.clone(),
                    "parent directory components are not allowed",
                ))
            }
            name => parts.push(name),
        }
    }

    if parts.is_empty() {
        return Err(FixtureError::invalid_path(raw.clone(), "path is empty"));
    }
    Ok(parts.join("/"))
}

/// True if `a` and `b` are the same path once both are NFC-normalized.
///
/// Such keys name one file on normalization-insensitive filesystems.
pub(crate) fn canonically_equal(a: &str, b: &str) -> bool {
    a.nfc().eq(b.nfc())
}

fn has_drive_prefix(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
