//! Line tokenization shared by the default and overlay parsing passes.

use super::constants::{ASSIGNMENT_CHARS, FALSE_TOKENS, TRUE_TOKENS, TYPE_TOKENS, WHITESPACE};
use super::types::{ConfigValue, ValueType};

/// Strips the whitespace set from both ends.
pub(super) fn trim(text: &str) -> &str {
    text.trim_matches(WHITESPACE)
}

/// Splits a line at its first `=` or `:`. A `:` directly followed by `=` is
/// consumed as the single operator `:=`. Returns `None` when the line carries
/// no assignment operator or nothing follows it.
pub(super) fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let index = line.find(ASSIGNMENT_CHARS)?;
    let mut value = &line[index + 1..];
    if line[index..].starts_with(':') && value.starts_with('=') {
        value = &value[1..];
    }
    if value.is_empty() {
        return None;
    }
    Some((&line[..index], value))
}

/// Detects a leading type keyword. The keyword must be followed by a space,
/// otherwise it is just the start of a key name.
pub(super) fn leading_type_token(line: &str) -> Option<ValueType> {
    TYPE_TOKENS
        .iter()
        .find(|token| line.starts_with(*token))
        .and_then(|token| ValueType::from_keyword(trim(token)))
}

/// Converts raw value text to `kind`, or `None` when it does not parse.
///
/// Integers and floats use locale-independent full-string parsing; strings
/// are taken verbatim; booleans must match one of the accepted spellings.
pub(super) fn convert(kind: ValueType, raw: &str) -> Option<ConfigValue> {
    match kind {
        ValueType::Integer => raw.parse().ok().map(ConfigValue::Integer),
        ValueType::Float => raw.parse().ok().map(ConfigValue::Float),
        ValueType::String => Some(ConfigValue::String(raw.to_string())),
        ValueType::Boolean => convert_bool(raw).map(ConfigValue::Boolean),
    }
}

fn convert_bool(raw: &str) -> Option<bool> {
    let lowered = raw.to_ascii_lowercase();
    if FALSE_TOKENS.contains(&lowered.as_str()) {
        Some(false)
    } else if TRUE_TOKENS.contains(&lowered.as_str()) {
        Some(true)
    } else {
        None
    }
}
