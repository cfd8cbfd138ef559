//! Span module - Source offset tracking.
//!
//! This module provides the half-open byte range type shared by every stage
//! that consumes query text, plus a [`LineIndex`] for turning offsets into
//! human-readable positions.
//!
//! # Examples
//!
//! ```
//! use qlex_util::span::Span;
//!
//! let span = Span::new(4, 9);
//! assert_eq!(span.len(), 5);
//! assert_eq!(span.to_string(), "4..9");
//! ```

mod line_index;

pub use line_index::{LineCol, LineIndex};

use serde::{Deserialize, Serialize};

/// Half-open byte range `[start, end)` into a source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use qlex_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    ///
    /// An inverted span has length zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
