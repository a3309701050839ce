//! Prefix length decoding.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{CidrError, Field};

/// Only plain decimal digits are a length: no sign, no whitespace.
static DECIMAL_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_decimal_regex() -> &'static Regex {
    DECIMAL_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

/// Decode a prefix length within the closed interval `0..=max_value`.
///
/// # Returns
/// * `Ok(len)` - the length, `max_value` included
/// * `Err(MissingInput)` - `text` is `None`
/// * `Err(InvalidFormat)` - not a plain decimal integer, or too large for a `u64`
/// * `Err(OutOfRange)` - greater than `max_value`
pub fn parse_length(text: Option<&str>, max_value: u8) -> Result<u8, CidrError> {
    let text = text.ok_or_else(|| {
        log::warn!("Null string received, can't decode prefix length");
        CidrError::MissingInput {
            field: Field::PrefixLength,
        }
    })?;

    if !get_decimal_regex().is_match(text) {
        log::warn!("Invalid prefix length '{}': not a decimal number", text);
        return Err(CidrError::invalid(Field::PrefixLength, text));
    }

    let len: u64 = text.parse().map_err(|e| {
        log::warn!("Invalid prefix length '{}': {}", text, e);
        CidrError::invalid(Field::PrefixLength, text)
    })?;

    if len > u64::from(max_value) {
        log::warn!(
            "Prefix length ({}) is out of bounds (0-{}).",
            len,
            max_value
        );
        return Err(CidrError::OutOfRange {
            field: Field::PrefixLength,
            value: len,
            max: max_value.into(),
        });
    }

    // len <= max_value, so it fits
    Ok(len as u8)
}
