//! Percentage formatting.
//!
//! The input is already a percentage (`12.5` renders as `12.5%`). Zero and invalid input
//! render as the caller's fallback so an empty cell and a zero reading look the same.

use super::fixed::{MAX_FRACTION_DIGITS, to_fixed};
use super::grouping::group_fixed;
use super::scale::NEAR_ZERO;
use crate::numeric::input::NumericInput;

pub const DEFAULT_PRECISION: usize = 2;
pub const DEFAULT_FALLBACK: &str = "-";

const ZERO: &str = "0%";
const BELOW_NEAR_ZERO: &str = "< 0.0001%";

/// Format with two fraction digits and `-` as the fallback: `0.1234` -> `0.12%`.
pub fn format_percent<'a>(value: impl Into<NumericInput<'a>>) -> String {
    format_percent_with(value, DEFAULT_PRECISION, DEFAULT_FALLBACK)
}

/// Format rounded to `precision` digits, trailing zeros dropped.
///
/// - zero or invalid input returns `fallback`
/// - positive infinity and values that round to zero return `"0%"`
/// - values within 0.0001 of zero return `"< 0.0001%"` on either side of it
/// - values above 100 after rounding render as grouped integers
pub fn format_percent_with<'a>(
    value: impl Into<NumericInput<'a>>,
    precision: usize,
    fallback: &str,
) -> String {
    let number = match value.into().parse() {
        Some(number) if number != 0.0 => number,
        _ => return fallback.to_string(),
    };
    if number == f64::INFINITY {
        return ZERO.to_string();
    }
    if number == f64::NEG_INFINITY {
        return "-∞%".to_string();
    }
    if number.abs() < NEAR_ZERO {
        return BELOW_NEAR_ZERO.to_string();
    }

    let precision = precision.min(MAX_FRACTION_DIGITS);
    let rounded = to_fixed(number, precision).parse::<f64>().unwrap_or(0.0);
    if rounded == 0.0 {
        return ZERO.to_string();
    }
    if rounded > 100.0 {
        return format!("{}%", group_fixed(&to_fixed(number, 0)));
    }
    format!("{rounded}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_percentages() {
        assert_eq!(format_percent(0.1234), "0.12%");
        assert_eq!(format_percent("23.45122155"), "23.45%");
        assert_eq!(format_percent(50), "50%");
        assert_eq!(format_percent(12.5), "12.5%");
    }

    #[test]
    fn negative_percentages() {
        assert_eq!(format_percent(-0.1234), "-0.12%");
        assert_eq!(format_percent("-23.45122155"), "-23.45%");
        assert_eq!(format_percent(-250.5), "-250.5%");
    }

    #[test]
    fn custom_precision() {
        assert_eq!(format_percent_with(0.1234, 3, DEFAULT_FALLBACK), "0.123%");
        assert_eq!(format_percent_with("23.45122155", 4, DEFAULT_FALLBACK), "23.4512%");
        assert_eq!(format_percent_with(23.45, 0, DEFAULT_FALLBACK), "23%");
    }

    #[test]
    fn fallback_for_zero_and_invalid() {
        assert_eq!(format_percent("abc"), "-");
        assert_eq!(format_percent(""), "-");
        assert_eq!(format_percent(0), "-");
        assert_eq!(format_percent(None::<f64>), "-");
        assert_eq!(format_percent_with("abc", 2, "FALLBACK"), "FALLBACK");
        assert_eq!(format_percent_with(0, 2, "FALLBACK"), "FALLBACK");
    }

    #[test]
    fn near_zero_band_drops_sign() {
        assert_eq!(format_percent(0.00001), "< 0.0001%");
        assert_eq!(format_percent(-0.00001), "< 0.0001%");
    }

    #[test]
    fn rounds_to_zero() {
        assert_eq!(format_percent(0.001), "0%");
        assert_eq!(format_percent(-0.004), "0%");
    }

    #[test]
    fn large_values_are_grouped_integers() {
        assert_eq!(format_percent(12345.678), "12,346%");
        assert_eq!(format_percent(100.004), "100%");
        assert_eq!(format_percent(100.5), "101%");
    }

    #[test]
    fn infinities() {
        assert_eq!(format_percent(f64::INFINITY), "0%");
        assert_eq!(format_percent("-Infinity"), "-∞%");
    }
}
