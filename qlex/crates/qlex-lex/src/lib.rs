//! qlex-lex - First-stage lexical scanner for the qlex query language
//!
//! This crate turns raw query text into an ordered sequence of classified
//! tokens with exact byte offsets. It is the input stage for a parser that
//! builds query expression trees; it knows nothing about operators, ranges,
//! or field types.
//!
//! # Example Usage
//!
//! ```
//! use qlex_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("title:\"rust lexer\" fast");
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Term,
//!         TokenKind::FieldSeparator,
//!         TokenKind::Phrase,
//!         TokenKind::Whitespace,
//!         TokenKind::Term,
//!     ]
//! );
//! assert_eq!(tokens[2].lexeme, "\"rust lexer\"");
//! assert_eq!((tokens[2].start, tokens[2].end), (6, 18));
//! ```
//!
//! # Guarantees
//!
//! - The scanner is total: every input, including unterminated phrases and a
//!   trailing backslash, produces a token sequence.
//! - Tokens are contiguous: the first starts at 0, each starts where the
//!   previous ended, the last ends at `input.len()`, and concatenating the
//!   lexemes reproduces the input.
//! - `input[token.start..token.end] == token.lexeme` for every token.
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - Scanner implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classification predicates

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
mod edge_cases;
pub mod lexer;
pub mod token;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{Lexer, PhraseState};
pub use token::{OwnedToken, Token, TokenKind};

/// Scans `input` into its full token sequence.
///
/// Pure and deterministic; an empty input yields an empty vector.
///
/// # Example
///
/// ```
/// use qlex_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("hello");
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].kind, TokenKind::Term);
/// assert_eq!((tokens[0].start, tokens[0].end), (0, 5));
///
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(kind: TokenKind, lexeme: &str, start: usize, end: usize) -> Token<'_> {
        Token {
            kind,
            lexeme,
            start,
            end,
        }
    }

    #[test]
    fn test_simple_term() {
        assert_eq!(tokenize("hello"), [tok(TokenKind::Term, "hello", 0, 5)]);
    }

    #[test]
    fn test_simple_phrase() {
        assert_eq!(
            tokenize("\"foo bar\""),
            [tok(TokenKind::Phrase, "\"foo bar\"", 0, 9)]
        );
    }

    #[test]
    fn test_escaped_quotes() {
        assert_eq!(
            tokenize(r#""a\"b""#),
            [tok(TokenKind::Phrase, r#""a\"b""#, 0, 6)]
        );
    }

    #[test]
    fn test_escaped_quote_at_end_of_phrase() {
        assert_eq!(
            tokenize(r#""a\"""#),
            [tok(TokenKind::Phrase, r#""a\"""#, 0, 5)]
        );
    }

    #[test]
    fn test_escaped_backslashes_in_phrase() {
        assert_eq!(
            tokenize(r#""a\\""#),
            [tok(TokenKind::Phrase, r#""a\\""#, 0, 5)]
        );
    }

    #[test]
    fn test_unterminated_phrase_consumes_to_end() {
        assert_eq!(
            tokenize(r#""a\\\""#),
            [tok(TokenKind::Phrase, r#""a\\\""#, 0, 6)]
        );
    }

    #[test]
    fn test_escaped_backslash_and_escaped_quote_in_phrase() {
        assert_eq!(
            tokenize(r#""a\\\" abc""#),
            [tok(TokenKind::Phrase, r#""a\\\" abc""#, 0, 11)]
        );
    }

    #[test]
    fn test_just_whitespace() {
        assert_eq!(
            tokenize(" \n\t "),
            [tok(TokenKind::Whitespace, " \n\t ", 0, 4)]
        );
    }

    #[test]
    fn test_terms_and_phrases() {
        assert_eq!(
            tokenize("foo \"bar\""),
            [
                tok(TokenKind::Term, "foo", 0, 3),
                tok(TokenKind::Whitespace, " ", 3, 4),
                tok(TokenKind::Phrase, "\"bar\"", 4, 9),
            ]
        );
    }

    #[test]
    fn test_fielded_data() {
        assert_eq!(
            tokenize("foo.bar:42"),
            [
                tok(TokenKind::Term, "foo.bar", 0, 7),
                tok(TokenKind::FieldSeparator, ":", 7, 8),
                tok(TokenKind::Term, "42", 8, 10),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokens_serialize_as_records() {
        let json = serde_json::to_string(&tokenize("a:b")).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"[{"kind":"term","lexeme":"a","start":0,"end":1},"#,
                r#"{"kind":"fieldSeparator","lexeme":":","start":1,"end":2},"#,
                r#"{"kind":"term","lexeme":"b","start":2,"end":3}]"#
            )
        );
    }
}
