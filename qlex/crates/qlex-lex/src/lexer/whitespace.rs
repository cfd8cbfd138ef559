//! Whitespace run lexing.

use crate::chars::is_whitespace;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the longest run of blank characters under the cursor.
    ///
    /// Whitespace is kept as a token so the token sequence covers the input.
    pub(crate) fn lex_whitespace(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        self.cursor.advance_while(is_whitespace);
        self.token_from(TokenKind::Whitespace, start)
    }
}
