//! Character classification for the query scanner.
//!
//! Every predicate here is a pure function of its argument. The scanner
//! dispatches on exactly one of them at each cursor position.

/// Opens and closes a phrase.
pub const QUOTE: char = '"';

/// Escapes the character that follows it inside a phrase.
pub const ESCAPE: char = '\\';

/// Separates a field name from its value.
pub const FIELD_SEPARATOR: char = ':';

/// Checks if a character opens or closes a phrase.
#[inline]
pub fn is_quote(c: char) -> bool {
    c == QUOTE
}

/// Checks if a character is the phrase escape character.
#[inline]
pub fn is_escape(c: char) -> bool {
    c == ESCAPE
}

/// Checks if a character is the field separator.
#[inline]
pub fn is_field_separator(c: char) -> bool {
    c == FIELD_SEPARATOR
}

/// Checks if a character is blank.
///
/// The blank set is the ASCII controls tab, line feed, vertical tab, form
/// feed and carriage return, every Unicode space separator (`Zs`), the line
/// and paragraph separators, and the byte order mark.
///
/// # Example
///
/// ```
/// use qlex_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\t'));
/// assert!(is_whitespace('\u{3000}'));  // ideographic space
/// assert!(is_whitespace('\u{FEFF}'));
/// assert!(!is_whitespace('\u{0085}'));
/// assert!(!is_whitespace('x'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
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

/// Checks if a character may appear in a term.
///
/// Anything that is not a quote, blank, or field separator belongs to a term,
/// including `.`, digits, and the escape character.
///
/// # Example
///
/// ```
/// use qlex_lex::chars::is_term_char;
///
/// assert!(is_term_char('.'));
/// assert!(is_term_char('\\'));
/// assert!(!is_term_char(':'));
/// assert!(!is_term_char('"'));
/// ```
#[inline]
pub fn is_term_char(c: char) -> bool {
    !is_quote(c) && !is_whitespace(c) && !is_field_separator(c)
}
