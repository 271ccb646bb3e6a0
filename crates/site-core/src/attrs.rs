//! Readers for `data-*` configuration attributes.
//!
//! Each reader leaves its slot at the default when the attribute is missing,
//! and records an error (also leaving the default) when it cannot be parsed.
//! Values that parse are taken as-is, even when out of range.

use crate::error::ConfigError;
use std::str::FromStr;

/// Parse a numeric attribute into `slot`, leaving it untouched on failure.
pub fn read_number<F, T>(attr: &F, name: &str, slot: &mut T, errors: &mut Vec<ConfigError>)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = attr(name) {
        match raw.trim().parse::<T>() {
            Ok(v) => *slot = v,
            Err(_) => errors.push(ConfigError::InvalidNumber {
                attr: name.to_string(),
                value: raw,
            }),
        }
    }
}

pub fn read_bool<F>(attr: &F, name: &str, slot: &mut bool, errors: &mut Vec<ConfigError>)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = attr(name) {
        match raw.trim() {
            // Bare attribute presence means true.
            "" | "true" | "1" => *slot = true,
            "false" | "0" => *slot = false,
            _ => errors.push(ConfigError::InvalidBool {
                attr: name.to_string(),
                value: raw,
            }),
        }
    }
}
