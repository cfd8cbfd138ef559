//! Token definitions for the query scanner.
//!
//! A [`Token`] borrows its lexeme from the scanned query. [`OwnedToken`] is
//! the same record with an owned lexeme, for callers that outlive the input.
//! Both serialize to the shape a downstream parser consumes:
//!
//! ```text
//! { "kind": "term" | "phrase" | "whitespace" | "fieldSeparator",
//!   "lexeme": string, "start": integer, "end": integer }
//! ```

use std::borrow::Cow;
use std::fmt;

use qlex_util::Span;
use serde::{Deserialize, Serialize};

use crate::chars::{is_escape, QUOTE};
use crate::lexer::{Lexer, PhraseState};

/// The lexical class of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    /// A maximal run of characters that are not blank, `"`, or `:`.
    Term,
    /// A `"`-delimited phrase, possibly running to end of input.
    Phrase,
    /// A maximal run of blank characters.
    Whitespace,
    /// The single `:` character.
    FieldSeparator,
}

impl TokenKind {
    /// Returns the serialized name of this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Term => "term",
            TokenKind::Phrase => "phrase",
            TokenKind::Whitespace => "whitespace",
            TokenKind::FieldSeparator => "fieldSeparator",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified slice of the query.
///
/// `lexeme` is exactly `input[start..end]`, offsets are byte offsets into the
/// scanned `str`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'a> {
    /// Lexical class.
    pub kind: TokenKind,
    /// Exact text consumed, delimiters included.
    pub lexeme: &'a str,
    /// Offset of the first byte of the lexeme.
    pub start: usize,
    /// Offset one past the last byte of the lexeme.
    pub end: usize,
}

impl<'a> Token<'a> {
    /// Creates a token for `lexeme` found at offset `start`.
    #[inline]
    pub fn new(kind: TokenKind, lexeme: &'a str, start: usize) -> Self {
        Self {
            kind,
            lexeme,
            start,
            end: start + lexeme.len(),
        }
    }

    /// Returns the source range of this token.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Returns the lexeme length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.span().len()
    }

    /// Returns true for a zero-length token. The scanner never produces one.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span().is_empty()
    }

    /// Runs the phrase scanner over this token's lexeme and reports how it
    /// finished.
    ///
    /// `None` for tokens that are not phrases, and for phrase tokens whose
    /// lexeme is not exactly one scanned phrase (no opening quote, or text
    /// left after the closing quote).
    pub fn phrase_state(&self) -> Option<PhraseState> {
        self.scan_lexeme().map(|(state, _)| state)
    }

    /// Returns true for a phrase that reached end of input without an
    /// unescaped closing quote.
    ///
    /// # Example
    ///
    /// ```
    /// use qlex_lex::tokenize;
    ///
    /// assert!(!tokenize(r#""closed""#)[0].is_unterminated_phrase());
    /// assert!(tokenize(r#""open"#)[0].is_unterminated_phrase());
    /// assert!(tokenize(r#""a\""#)[0].is_unterminated_phrase());
    /// ```
    pub fn is_unterminated_phrase(&self) -> bool {
        self.phrase_state() == Some(PhraseState::Unterminated)
    }

    /// Returns the text between a phrase's delimiters with escapes resolved.
    ///
    /// A backslash stands for the character after it, whatever that is. A
    /// backslash with nothing after it is dropped. Returns `None` whenever
    /// [`phrase_state`](Token::phrase_state) does.
    ///
    /// # Example
    ///
    /// ```
    /// use qlex_lex::tokenize;
    ///
    /// let tokens = tokenize(r#""say \"hi\"""#);
    /// assert_eq!(tokens[0].phrase_text().unwrap(), r#"say "hi""#);
    /// ```
    pub fn phrase_text(&self) -> Option<Cow<'a, str>> {
        let (_, inner) = self.scan_lexeme()?;

        if !inner.chars().any(is_escape) {
            return Some(Cow::Borrowed(inner));
        }

        let mut text = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if is_escape(c) {
                if let Some(escaped) = chars.next() {
                    text.push(escaped);
                }
            } else {
                text.push(c);
            }
        }
        Some(Cow::Owned(text))
    }

    /// Scans the lexeme as a phrase, returning the final state and the text
    /// between the delimiters.
    fn scan_lexeme(&self) -> Option<(PhraseState, &'a str)> {
        if self.kind != TokenKind::Phrase {
            return None;
        }
        let lexeme: &'a str = self.lexeme;
        let body = lexeme.strip_prefix(QUOTE)?;

        let mut lexer = Lexer::new(lexeme);
        let state = lexer.scan_phrase();
        if lexer.position() != lexeme.len() {
            return None;
        }

        let inner = match state {
            PhraseState::Terminated => body.strip_suffix(QUOTE)?,
            _ => body,
        };
        Some((state, inner))
    }

    /// Copies the token into an [`OwnedToken`].
    pub fn to_owned_token(&self) -> OwnedToken {
        OwnedToken {
            kind: self.kind,
            lexeme: self.lexeme.to_string(),
            start: self.start,
            end: self.end,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {}..{}", self.kind, self.lexeme, self.start, self.end)
    }
}

/// A [`Token`] that owns its lexeme.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnedToken {
    /// Lexical class.
    pub kind: TokenKind,
    /// Exact text consumed, delimiters included.
    pub lexeme: String,
    /// Offset of the first byte of the lexeme.
    pub start: usize,
    /// Offset one past the last byte of the lexeme.
    pub end: usize,
}

impl OwnedToken {
    /// Borrows this token as a [`Token`].
    pub fn as_token(&self) -> Token<'_> {
        Token {
            kind: self.kind,
            lexeme: &self.lexeme,
            start: self.start,
            end: self.end,
        }
    }
}

impl From<Token<'_>> for OwnedToken {
    fn from(token: Token<'_>) -> Self {
        token.to_owned_token()
    }
}
