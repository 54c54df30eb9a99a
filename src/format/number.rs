//! Grouped decimal formatting.

use super::fixed::{MAX_FRACTION_DIGITS, non_finite, round_shortest, trim_fraction_zeros};
use super::grouping::group_fixed;
use crate::numeric::input::NumericInput;

pub const DEFAULT_MIN_PRECISION: usize = 0;
pub const DEFAULT_MAX_PRECISION: usize = 4;

const INVALID: &str = "0";

/// Format with grouping and up to four fraction digits: `1234.56789` -> `1,234.5679`.
pub fn format_number<'a>(value: impl Into<NumericInput<'a>>) -> String {
    format_number_with(value, DEFAULT_MIN_PRECISION, DEFAULT_MAX_PRECISION)
}

/// Format with grouping and between `min_precision` and `max_precision` fraction digits.
///
/// Rounds the shortest decimal form of the value half away from zero, so `1.005` with
/// two digits gives `1.01`. Invalid input renders as `"0"`. Precisions are clamped to `0..=100`, and a maximum
/// below the minimum is raised to it.
pub fn format_number_with<'a>(
    value: impl Into<NumericInput<'a>>,
    min_precision: usize,
    max_precision: usize,
) -> String {
    let Some(number) = value.into().parse() else {
        return INVALID.to_string();
    };
    if !number.is_finite() {
        return non_finite(number).to_string();
    }

    let min_precision = min_precision.min(MAX_FRACTION_DIGITS);
    let max_precision = max_precision.clamp(min_precision, MAX_FRACTION_DIGITS);
    let fixed = trim_fraction_zeros(round_shortest(number, max_precision), min_precision);
    group_fixed(&fixed)
}
