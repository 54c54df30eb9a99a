/// Leading-blank trim applied before a numeric literal is scanned.
///
/// Blanks are the ECMAScript white space and line terminator characters, so text that
/// arrives from a web front end parses the same way it did there. U+0085 (NEL) is not
/// a blank even though `char::is_whitespace` accepts it.
#[inline]
pub fn trim_leading_blank(input: &str) -> &str {
    input.trim_start_matches(is_blank)
}

/// Returns true if the character is skipped ahead of a numeric literal.
#[inline]
pub const fn is_blank(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
