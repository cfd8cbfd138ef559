//! Quoted phrase lexing.
//!
//! A phrase opens on `"` and closes on the first unescaped `"`. A backslash
//! escapes whatever character follows it, so the pair is consumed as one unit
//! and can never close the phrase. Input that ends first yields a phrase
//! running to end of input; this is not an error.

use crate::chars::{is_escape, is_quote};
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// How a phrase scan finished, or that it is still in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhraseState {
    /// Between the delimiters.
    Inside,
    /// Closed by an unescaped quote.
    Terminated,
    /// Reached end of input first.
    Unterminated,
}

impl PhraseState {
    /// Returns true for the two terminal states.
    #[inline]
    pub fn is_done(self) -> bool {
        self != PhraseState::Inside
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a phrase starting at the opening quote under the cursor.
    ///
    /// # Returns
    ///
    /// A `TokenKind::Phrase` token, delimiters included
    pub(crate) fn lex_phrase(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        self.scan_phrase();
        self.token_from(TokenKind::Phrase, start)
    }

    /// Consumes a phrase and reports how it finished.
    ///
    /// The cursor must be on the opening quote.
    pub(crate) fn scan_phrase(&mut self) -> PhraseState {
        debug_assert!(self.cursor.current_char().is_some_and(is_quote));
        self.cursor.advance();

        let mut state = PhraseState::Inside;
        while !state.is_done() {
            state = self.phrase_step();
        }
        state
    }

    /// Advances the phrase scan by one character or one escape pair.
    fn phrase_step(&mut self) -> PhraseState {
        let Some(c) = self.cursor.advance() else {
            return PhraseState::Unterminated;
        };

        if is_escape(c) {
            // A trailing backslash has nothing to escape and ends the input.
            return match self.cursor.advance() {
                Some(_) => PhraseState::Inside,
                None => PhraseState::Unterminated,
            };
        }

        if is_quote(c) {
            PhraseState::Terminated
        } else {
            PhraseState::Inside
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_phrase(source: &str) -> (Token<'_>, PhraseState) {
        let token = crate::Lexer::new(source).lex_phrase();
        let state = token.phrase_state().unwrap();
        (token, state)
    }

    #[test]
    fn test_simple_phrase() {
        let (token, state) = lex_phrase("\"foo bar\"");
        assert_eq!(token.lexeme, "\"foo bar\"");
        assert_eq!((token.start, token.end), (0, 9));
        assert_eq!(state, PhraseState::Terminated);
    }

    #[test]
    fn test_empty_phrase() {
        let (token, state) = lex_phrase("\"\"");
        assert_eq!(token.end, 2);
        assert_eq!(state, PhraseState::Terminated);
    }

    #[test]
    fn test_phrase_stops_at_closing_quote() {
        let (token, _) = lex_phrase("\"a\" b");
        assert_eq!(token.lexeme, "\"a\"");
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let (token, state) = lex_phrase(r#""a\"b""#);
        assert_eq!(token.end, 6);
        assert_eq!(state, PhraseState::Terminated);
    }

    #[test]
    fn test_escaped_quote_before_closing_quote() {
        let (token, state) = lex_phrase(r#""a\"""#);
        assert_eq!(token.end, 5);
        assert_eq!(state, PhraseState::Terminated);
    }

    #[test]
    fn test_backslash_pair_then_closing_quote() {
        let (token, state) = lex_phrase(r#""a\\""#);
        assert_eq!(token.end, 5);
        assert_eq!(state, PhraseState::Terminated);
    }

    #[test]
    fn test_odd_backslash_run_escapes_final_quote() {
        let (token, state) = lex_phrase(r#""a\\\""#);
        assert_eq!(token.end, 6);
        assert_eq!(state, PhraseState::Unterminated);
    }

    #[test]
    fn test_odd_backslash_run_then_later_quote() {
        let (token, state) = lex_phrase(r#""a\\\" abc""#);
        assert_eq!(token.end, 11);
        assert_eq!(state, PhraseState::Terminated);
    }

    #[test]
    fn test_lone_trailing_backslash() {
        let (token, state) = lex_phrase(r#""ab\"#);
        assert_eq!(token.lexeme, r#""ab\"#);
        assert_eq!(state, PhraseState::Unterminated);
    }

    #[test]
    fn test_escape_covers_any_character() {
        let (token, state) = lex_phrase(r#""\a\:\ ""#);
        assert_eq!(token.end, 8);
        assert_eq!(state, PhraseState::Terminated);
    }

    #[test]
    fn test_escaped_multibyte_character() {
        let source = "\"\\é\"";
        let (token, state) = lex_phrase(source);
        assert_eq!(token.end, source.len());
        assert_eq!(state, PhraseState::Terminated);
    }

    #[test]
    fn test_lone_quote() {
        let (token, state) = lex_phrase("\"");
        assert_eq!(token.end, 1);
        assert_eq!(state, PhraseState::Unterminated);
    }
}
