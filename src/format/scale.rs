//! Magnitude abbreviation (K/M/B/T).

use super::fixed::{non_finite, to_fixed};
use crate::numeric::input::NumericInput;

/// Smallest positive value rendered as a number; anything below shows as a bound.
pub const NEAR_ZERO: f64 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scale {
    suffix: char,
    power: i32,
}

/// Checked in order; the first scale whose digit threshold is met wins.
const SCALES: [Scale; 4] = [
    Scale { suffix: 'T', power: 12 },
    Scale { suffix: 'B', power: 9 },
    Scale { suffix: 'M', power: 6 },
    Scale { suffix: 'K', power: 3 },
];

/// Abbreviate a value by magnitude: `123456` -> `123.5K`, `1234567890123` -> `1.2T`.
///
/// The scale is picked from the width of the floored value, so a leading `-` counts as a
/// digit. Values below every scale render with two fraction digits, except zero (`"0"`)
/// and positive values under 0.0001 (`"< 0.0001"`). With `use_currency` the output is
/// `$`-prefixed and zero and invalid input render as `"$0.00"`.
pub fn format_scale<'a>(value: impl Into<NumericInput<'a>>, use_currency: bool) -> String {
    let prefix = if use_currency { "$" } else { "" };
    let zero = if use_currency { "$0.00" } else { "0" };

    let Some(number) = value.into().parse() else {
        return zero.to_string();
    };
    if !number.is_finite() {
        return format!("{prefix}{}", non_finite(number));
    }

    let width = whole_number_width(number);
    for scale in &SCALES {
        if width > scale.power as usize {
            let scaled = number / 10_f64.powi(scale.power);
            return format!("{prefix}{}{}", to_fixed(scaled, 1), scale.suffix);
        }
    }

    if number > 0.0 && number < NEAR_ZERO {
        return format!("< {prefix}0.0001");
    }
    if number == 0.0 {
        return zero.to_string();
    }
    format!("{prefix}{}", to_fixed(number, 2))
}

/// Characters in the decimal rendering of `floor(number)`, sign included.
fn whole_number_width(number: f64) -> usize {
    let floored = number.floor();
    if floored == 0.0 {
        return 1;
    }
    format!("{floored}").len()
}
