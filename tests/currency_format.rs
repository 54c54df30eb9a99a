use figures::format_usd;

#[test]
fn formats_dollars_with_cents() {
    assert_eq!(format_usd(1234567890123_u64), "$1,234,567,890,123.00");
    assert_eq!(format_usd("2345678901234"), "$2,345,678,901,234.00");
    assert_eq!(format_usd(1234.5), "$1,234.50");
    assert_eq!(format_usd(0.004), "$0.00");
    assert_eq!(format_usd(0.005), "$0.01");
}

#[test]
fn invalid_input_renders_zero_dollars() {
    assert_eq!(format_usd("abc"), "$0.00");
    assert_eq!(format_usd(""), "$0.00");
    assert_eq!(format_usd(0), "$0.00");
    assert_eq!(format_usd(None::<f64>), "$0.00");
}

#[test]
fn negative_amounts() {
    assert_eq!(format_usd(-1234.56), "-$1,234.56");
    assert_eq!(format_usd("-0.5"), "-$0.50");
}

#[test]
fn cent_ties_round_away_from_zero() {
    assert_eq!(format_usd(1.005), "$1.01");
    assert_eq!(format_usd(2.675), "$2.68");
    assert_eq!(format_usd("1.005"), "$1.01");
    assert_eq!(format_usd(-2.675), "-$2.68");
    assert_eq!(format_usd(1e23), "$100,000,000,000,000,000,000,000.00");
}
