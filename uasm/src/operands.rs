use crate::{new_parser_error, Result, Rule};
use pest::iterators::Pair;

/// Classifies a token as an integer literal: optional sign, `0x`/`0b`
/// prefix, decimal otherwise. `None` means the token may be a label.
///
/// A decimal literal with a leading zero (other than all zeros) is not a
/// number; the `address` directive relies on this to fall back to base 2.
pub fn parse_number(token: &str) -> Option<i64> {
    let token = token.trim();
    let (negative, digits) = match token.as_bytes().first()? {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };

    if digits.is_empty() {
        return None;
    }

    let lower = digits.to_ascii_lowercase();
    let magnitude = if lower.starts_with("0x") {
        i64::from_str_radix(&lower[2..], 16).ok()?
    } else if lower.starts_with("0b") {
        i64::from_str_radix(&lower[2..], 2).ok()?
    } else {
        if lower.len() > 1 && lower.starts_with('0') && lower.bytes().any(|b| b != b'0') {
            return None;
        }
        i64::from_str_radix(&lower, 10).ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Parses a register token `r<N>` (case-insensitive) into its index.
pub fn parse_register(pair: &Pair<Rule>) -> Result<u8> {
    let token = pair.as_str();
    let lower = token.to_ascii_lowercase();

    if !lower.starts_with('r') {
        return Err(new_parser_error(
            pair.as_span(),
            format!("A register must start with 'r': {}", token),
        ));
    }

    let digits = &lower[1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(new_parser_error(
            pair.as_span(),
            format!("Invalid register: {}", token),
        ));
    }

    let number: u32 = digits.parse().map_err(|_| {
        new_parser_error(pair.as_span(), format!("Invalid register: {}", token))
    })?;

    if number > 31 {
        return Err(new_parser_error(
            pair.as_span(),
            format!("Register out of range 0-31: {}", token),
        ));
    }

    Ok(number as u8)
}

/// Parses a token that must be a number (no label fallback).
pub fn process_const(pair: &Pair<Rule>) -> Result<i64> {
    parse_number(pair.as_str()).ok_or_else(|| {
        new_parser_error(
            pair.as_span(),
            format!("Invalid constant: {}", pair.as_str()),
        )
    })
}

/// Rejects values outside `[0, max]` with a span-annotated error.
pub fn check_range(pair: &Pair<Rule>, value: i64, max: i64, what: &str) -> Result<()> {
    if value < 0 || value > max {
        Err(new_parser_error(
            pair.as_span(),
            format!("{} out of range 0-{}: {}", what, max, value),
        ))
    } else {
        Ok(())
    }
}
