//! Decimal string parsing.

use alloy::primitives::{
    U256,
    utils::{ParseUnits, parse_units},
};

/// Parses a non-negative decimal string into a fixed-point integer with `decimals` fractional
/// digits.
///
/// Digits beyond `decimals` are truncated. Returns `None` for anything that is not a plain
/// decimal number or does not fit into 256 bits.
pub(crate) fn parse_fixed_point(value: &str, decimals: u8) -> Option<U256> {
    let value = value.trim();
    let (int, frac) = value.split_once('.').unwrap_or((value, ""));
    // `parse_units` accepts signs and `_` separators
    if (int.is_empty() && frac.is_empty()) || !is_digits(int) || !is_digits(frac) {
        return None;
    }

    match parse_units(value, decimals).ok()? {
        ParseUnits::U256(value) => Some(value),
        ParseUnits::I256(_) => None,
    }
}

/// Parses a non-negative base 10 integer.
pub(crate) fn parse_integer(value: &str) -> Option<U256> {
    let value = value.trim();
    if value.is_empty() || !is_digits(value) {
        return None;
    }
    U256::from_str_radix(value, 10).ok()
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
