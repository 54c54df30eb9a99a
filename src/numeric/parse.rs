//! Leading-literal numeric parsing.
//!
//! Accepted (the `parseFloat` convention front ends already rely on):
//! - Leading blanks are skipped (see `normalize::trim`).
//! - Optional sign, then `Infinity` or a decimal literal with optional fraction and exponent.
//! - Only the longest valid prefix is read; anything after it is ignored (`"12px"` is 12).
//! - No thousands separators: `"1,234"` reads as 1.

use crate::normalize::trim::trim_leading_blank;

const INFINITY_LITERAL: &[u8] = b"Infinity";

/// Parse the numeric literal at the start of `input`.
///
/// Returns `None` when no literal is present. Magnitudes beyond `f64` range become infinite.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let token = trim_leading_blank(input).as_bytes();

    let (negative, rest) = match token.first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let magnitude = if rest.starts_with(INFINITY_LITERAL) {
        f64::INFINITY
    } else {
        let len = decimal_prefix_len(rest);
        if len == 0 {
            return None;
        }
        std::str::from_utf8(&rest[..len]).ok()?.parse::<f64>().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Length of the longest `digits [. digits] [e [sign] digits]` prefix.
fn decimal_prefix_len(bytes: &[u8]) -> usize {
    let int_digits = count_digits(bytes);
    let mut end = int_digits;
    let mut frac_digits = 0;

    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    end
}

#[inline]
fn count_digits(slice: &[u8]) -> usize {
    slice.iter().take_while(|b| b.is_ascii_digit()).count()
}
