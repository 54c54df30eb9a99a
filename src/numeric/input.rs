//! Numeric input accepted by every formatter.

use super::parse::parse_leading_float;

/// A value handed to a formatter: a native number, its textual form, or nothing.
///
/// Built at the call boundary through `From`, so callers pass `1234.5`, `"1234.5"`,
/// `&some_string` or an `Option` of any of those directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericInput<'a> {
    Number(f64),
    Text(&'a str),
    Missing,
}

impl NumericInput<'_> {
    /// Resolve the input to a number.
    ///
    /// Returns `None` for missing values, NaN, empty text, and text without a leading
    /// numeric literal. Native negative zero reads as zero.
    pub fn parse(self) -> Option<f64> {
        match self {
            NumericInput::Number(value) if value.is_nan() => None,
            NumericInput::Number(value) if value == 0.0 => Some(0.0),
            NumericInput::Number(value) => Some(value),
            NumericInput::Text(text) => parse_leading_float(text),
            NumericInput::Missing => None,
        }
    }
}

macro_rules! impl_from_native {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for NumericInput<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    NumericInput::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_native!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<'a> From<&'a str> for NumericInput<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        NumericInput::Text(value)
    }
}

impl<'a> From<&'a String> for NumericInput<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        NumericInput::Text(value.as_str())
    }
}

impl<'a, T> From<Option<T>> for NumericInput<'a>
where
    T: Into<NumericInput<'a>>,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(NumericInput::Missing, Into::into)
    }
}
