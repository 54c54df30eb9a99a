//! Fixed-point rendering with half-away-from-zero rounding.
//!
//! Two roundings live here. `to_fixed` works on the exact binary value: `format!("{:.N}")`
//! is exact but resolves exact ties to even, so ties are detected on the binary value and
//! rounded up on the decimal string. `round_shortest` works on the shortest decimal that
//! reads back as the same double, so `1.005` rounds to `1.01` the way a locale number
//! formatter shows it.

/// Largest number of fraction digits any formatter renders.
pub const MAX_FRACTION_DIGITS: usize = 100;

/// Render `value` with exactly `digits` fraction digits.
///
/// Rounds the exact binary value half away from zero. Values below zero carry a `-`
/// even when they round to zero; negative zero does not. Non-finite values render as
/// `∞`, `-∞` or `NaN`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }

    let magnitude = value.abs();
    let body = if fraction_bits(magnitude) == digits + 1 {
        round_tie_away(format!("{magnitude:.prec$}", prec = digits + 1))
    } else {
        format!("{magnitude:.digits$}")
    };

    if value < 0.0 {
        let mut out = String::with_capacity(body.len() + 1);
        out.push('-');
        out.push_str(&body);
        out
    } else {
        body
    }
}

/// Render `value` with exactly `digits` fraction digits, rounding its shortest
/// round-trip decimal half away from zero.
///
/// Sign and non-finite handling match [`to_fixed`].
pub fn round_shortest(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }

    let magnitude = value.abs();
    let scientific = format!("{magnitude:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return to_fixed(value, digits);
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return to_fixed(value, digits);
    };
    let significand: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    // Digits left of the decimal point; zero or less for magnitudes below one.
    let point = exponent + 1;
    let (whole, fraction) = if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        ("0".to_string(), format!("{zeros}{significand}"))
    } else {
        let point = point as usize;
        if point >= significand.len() {
            let zeros = "0".repeat(point - significand.len());
            (format!("{significand}{zeros}"), String::new())
        } else {
            let (whole, fraction) = significand.split_at(point);
            (whole.to_string(), fraction.to_string())
        }
    };

    let body = if fraction.len() <= digits {
        let padding = "0".repeat(digits - fraction.len());
        join_point(&whole, &format!("{fraction}{padding}"))
    } else {
        let (kept, dropped) = fraction.split_at(digits);
        let truncated = join_point(&whole, kept);
        if dropped.as_bytes()[0] >= b'5' {
            carry_up(truncated.into_bytes())
        } else {
            truncated
        }
    };

    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

fn join_point(whole: &str, fraction: &str) -> String {
    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Text for values that have no decimal rendering.
pub fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_negative() {
        "-∞"
    } else {
        "∞"
    }
}

/// Drop trailing fraction zeros, keeping at least `min_digits` of them.
pub fn trim_fraction_zeros(mut fixed: String, min_digits: usize) -> String {
    let Some(dot) = fixed.find('.') else {
        return fixed;
    };
    while fixed.len() - dot - 1 > min_digits && fixed.ends_with('0') {
        fixed.pop();
    }
    if fixed.len() == dot + 1 {
        fixed.pop();
    }
    fixed
}

/// Number of binary digits after the point in the exact value of `magnitude`.
///
/// A finite double with `k` fraction bits has exactly `k` decimal fraction digits, the
/// last of them a 5, so rendering to `k - 1` digits is an exact tie.
fn fraction_bits(magnitude: f64) -> usize {
    if magnitude.fract() == 0.0 {
        return 0;
    }
    let bits = magnitude.to_bits();
    let biased = ((bits >> 52) & 0x7FF) as i64;
    let mut mantissa = bits & ((1_u64 << 52) - 1);
    let exponent = if biased == 0 {
        -1074
    } else {
        mantissa |= 1 << 52;
        biased - 1075
    };
    let exponent = exponent + i64::from(mantissa.trailing_zeros());
    if exponent >= 0 { 0 } else { (-exponent) as usize }
}

/// Drop the final `5` of an exact tie and round the remaining digits up.
fn round_tie_away(exact: String) -> String {
    let mut digits: Vec<u8> = exact.into_bytes();
    digits.pop();
    if digits.last() == Some(&b'.') {
        digits.pop();
    }
    carry_up(digits)
}

/// Add one unit in the last place of an unsigned decimal string.
fn carry_up(mut digits: Vec<u8>) -> String {
    let mut idx = digits.len();
    loop {
        if idx == 0 {
            digits.insert(0, b'1');
            break;
        }
        idx -= 1;
        match digits[idx] {
            b'.' => continue,
            b'9' => digits[idx] = b'0',
            d => {
                digits[idx] = d + 1;
                break;
            }
        }
    }

    digits.into_iter().map(char::from).collect()
}
