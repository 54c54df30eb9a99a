// en-US digit grouping.

use thousands::Separable;

/// Insert comma separators into the integer part of a fixed-point string.
///
/// Accepts the output of `to_fixed` or `round_shortest`: an optional `-`, integer
/// digits, and an optional fraction. The fraction is left untouched.
pub fn group_fixed(fixed: &str) -> String {
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let grouped = int_part.separate_with_commas();
    let mut out = String::with_capacity(fixed.len() + grouped.len() - int_part.len());
    out.push_str(sign);
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_part() {
        assert_eq!(group_fixed("0"), "0");
        assert_eq!(group_fixed("12"), "12");
        assert_eq!(group_fixed("1234"), "1,234");
        assert_eq!(group_fixed("1234567890123"), "1,234,567,890,123");
    }

    #[test]
    fn leaves_fraction_alone() {
        assert_eq!(group_fixed("1234.56789"), "1,234.56789");
        assert_eq!(group_fixed("999.1234"), "999.1234");
    }

    #[test]
    fn keeps_sign_outside_groups() {
        assert_eq!(group_fixed("-123456.5"), "-123,456.5");
        assert_eq!(group_fixed("-123"), "-123");
    }
}
