use super::fixed::{non_finite, round_shortest};
use super::grouping::group_fixed;
use crate::numeric::input::NumericInput;

const SYMBOL: &str = "$";
const INVALID: &str = "$0.00";

/// Format as US dollars with grouping and two fraction digits: `-1234.5` -> `-$1,234.50`.
///
/// Cents are rounded half away from zero on the shortest decimal form, so `2.675`
/// gives `$2.68`. Invalid input renders as `"$0.00"`.
pub fn format_usd<'a>(value: impl Into<NumericInput<'a>>) -> String {
    let Some(number) = value.into().parse() else {
        return INVALID.to_string();
    };

    let body = if number.is_finite() {
        group_fixed(&round_shortest(number, 2))
    } else {
        non_finite(number).to_string()
    };
    match body.strip_prefix('-') {
        Some(unsigned) => format!("-{SYMBOL}{unsigned}"),
        None => format!("{SYMBOL}{body}"),
    }
}
