//! Character cursor for traversing query text.
//!
//! This module provides the `Cursor` struct which maintains the byte position
//! while iterating through query characters. It steps over whole UTF-8
//! characters, so every position it reports is a character boundary.

/// A cursor for traversing query text character by character.
///
/// # Example
///
/// ```
/// use qlex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.current_char(), Some('a'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('b'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the character at the cursor position, or `None` at the end.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;

        // Fast path for ASCII (most common case)
        if b < 128 {
            return Some(b as char);
        }

        self.remaining().chars().next()
    }

    /// Consumes the current character and returns it.
    ///
    /// Returns `None` and leaves the position unchanged at the end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use qlex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("::x");
    /// assert!(cursor.eat(':'));
    /// assert!(cursor.eat(':'));
    /// assert!(!cursor.eat(':'));
    /// assert_eq!(cursor.current_char(), Some('x'));
    /// ```
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds.
    ///
    /// Returns the number of bytes consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use qlex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("foo bar");
    /// assert_eq!(cursor.advance_while(|c| c != ' '), 3);
    /// assert_eq!(cursor.remaining(), " bar");
    /// ```
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let start = self.position;
        let consumed = self
            .remaining()
            .char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(self.source.len() - start, |(i, _)| i);
        self.position += consumed;
        consumed
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from `start` to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use qlex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("title:rust");
    /// let start = cursor.position();
    /// cursor.advance_while(|c| c != ':');
    /// assert_eq!(cursor.slice_from(start), "title");
    /// ```
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
