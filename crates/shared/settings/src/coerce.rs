//! Coercion of raw environment strings into declared field types.

use std::path::PathBuf;

use crate::constants::{FieldKind, FALSY_VALUES, TRUTHY_VALUES};
use crate::error::{ConfigError, ConfigResult};

/// Parse an unsigned integer, ignoring surrounding whitespace.
pub fn parse_integer(var: &str, raw: &str) -> ConfigResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::invalid_value(var, FieldKind::Integer.as_str(), raw))
}

/// Parse a boolean from the truthy/falsy vocabulary.
///
/// Accepts: 1, true, t, yes, y, on (for true)
///          0, false, f, no, n, off (for false)
pub fn parse_bool(var: &str, raw: &str) -> ConfigResult<bool> {
    let token = raw.trim().to_ascii_lowercase();
    if TRUTHY_VALUES.contains(&token.as_str()) {
        Ok(true)
    } else if FALSY_VALUES.contains(&token.as_str()) {
        Ok(false)
    } else {
        Err(ConfigError::invalid_value(
            var,
            "boolean (true/false/1/0/yes/no/on/off)",
            raw,
        ))
    }
}

/// An empty value counts as unset.
pub fn parse_optional(raw: String) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}

/// An empty path counts as unset.
pub fn parse_path(raw: String) -> Option<PathBuf> {
    parse_optional(raw).map(PathBuf::from)
}
