//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use crate::chars::{is_field_separator, is_quote, is_whitespace};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Scanner for query text.
///
/// The lexer holds nothing but its cursor. Each call to
/// [`next_token`](Lexer::next_token) inspects the current character, picks
/// exactly one token class, and consumes the longest run valid for it.
///
/// # Example
///
/// ```
/// use qlex_lex::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::new("title:rust").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Term, TokenKind::FieldSeparator, TokenKind::Term]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token, or `None` once the whole input is consumed.
    ///
    /// Every returned token starts where the previous one ended.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        let c = self.cursor.current_char()?;

        let token = if is_quote(c) {
            self.lex_phrase()
        } else if is_whitespace(c) {
            self.lex_whitespace()
        } else if is_field_separator(c) {
            self.lex_field_separator()
        } else {
            self.lex_term()
        };
        Some(token)
    }

    /// Builds a token of `kind` covering `start` up to the cursor.
    pub(crate) fn token_from(&self, kind: TokenKind, start: usize) -> Token<'a> {
        Token::new(kind, self.cursor.slice_from(start), start)
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the unscanned remainder of the source.
    pub fn remaining(&self) -> &'a str {
        self.cursor.remaining()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining().len();
        ((remaining > 0) as usize, Some(remaining))
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
