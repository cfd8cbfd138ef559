//! Term and field separator lexing.

use crate::chars::{is_term_char, FIELD_SEPARATOR};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a term: the longest run of characters that are not blank, `"`,
    /// or `:`.
    ///
    /// The cursor must be on a term character, so the run is never empty.
    pub(crate) fn lex_term(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        let consumed = self.cursor.advance_while(is_term_char);
        debug_assert!(consumed > 0);
        self.token_from(TokenKind::Term, start)
    }

    /// Lexes the single `:` under the cursor.
    pub(crate) fn lex_field_separator(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        let matched = self.cursor.eat(FIELD_SEPARATOR);
        debug_assert!(matched);
        self.token_from(TokenKind::FieldSeparator, start)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;

    fn first(source: &str) -> (TokenKind, &str) {
        let token = crate::Lexer::new(source).next_token().unwrap();
        (token.kind, token.lexeme)
    }

    #[test]
    fn test_simple_term() {
        assert_eq!(first("hello"), (TokenKind::Term, "hello"));
    }

    #[test]
    fn test_term_includes_dots_and_punctuation() {
        assert_eq!(first("foo.bar-baz*"), (TokenKind::Term, "foo.bar-baz*"));
    }

    #[test]
    fn test_term_stops_at_separator() {
        assert_eq!(first("foo.bar:42"), (TokenKind::Term, "foo.bar"));
    }

    #[test]
    fn test_term_stops_at_quote() {
        assert_eq!(first("ab\"cd\""), (TokenKind::Term, "ab"));
    }

    #[test]
    fn test_term_keeps_backslashes() {
        assert_eq!(first("a\\b\\"), (TokenKind::Term, "a\\b\\"));
    }

    #[test]
    fn test_field_separator_is_one_character() {
        assert_eq!(first("::"), (TokenKind::FieldSeparator, ":"));
    }

    #[test]
    fn test_unicode_term() {
        assert_eq!(first("café au"), (TokenKind::Term, "café"));
    }
}
