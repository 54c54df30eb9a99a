use figures::NumericInput;
use figures::numeric::parse::parse_leading_float;

#[test]
fn parses_leading_literals() {
    assert_eq!(parse_leading_float("1234567890123"), Some(1234567890123.0));
    assert_eq!(parse_leading_float("-23.45122155"), Some(-23.45122155));
    assert_eq!(parse_leading_float("  0.000001"), Some(0.000001));
    assert_eq!(parse_leading_float("2.5e3 units"), Some(2500.0));
    assert_eq!(parse_leading_float("42%"), Some(42.0));
    assert_eq!(parse_leading_float("1,234"), Some(1.0));
}

#[test]
fn rejects_text_without_a_literal() {
    assert!(parse_leading_float("").is_none());
    assert!(parse_leading_float("abc").is_none());
    assert!(parse_leading_float("$1").is_none());
    assert!(parse_leading_float("NaN").is_none());
    assert!(parse_leading_float("e5").is_none());
    assert!(parse_leading_float("+-1").is_none());
}

#[test]
fn input_variants_resolve_uniformly() {
    assert_eq!(NumericInput::from(7_u8).parse(), Some(7.0));
    assert_eq!(NumericInput::from(-7_i64).parse(), Some(-7.0));
    assert_eq!(NumericInput::from(0.5_f32).parse(), Some(0.5));
    assert_eq!(NumericInput::from("7").parse(), Some(7.0));
    assert_eq!(NumericInput::from(Some(7.0)).parse(), Some(7.0));
    assert_eq!(NumericInput::from(None::<&str>).parse(), None);
    assert_eq!(NumericInput::from(f64::NAN).parse(), None);
    assert_eq!(NumericInput::Missing.parse(), None);
}
