//! Line index for computing human-readable positions from byte offsets.

use serde::Serialize;

/// A 1-based line and column pair.
///
/// The column counts characters, not bytes, from the start of the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LineCol {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, in characters)
    pub column: usize,
}

impl std::fmt::Display for LineCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Precomputed line start offsets over a borrowed source text
///
/// # Examples
///
/// ```
/// use qlex_util::span::{LineCol, LineIndex};
///
/// let index = LineIndex::new("title:rust\nbody:\"open");
/// assert_eq!(index.line_count(), 2);
/// assert_eq!(index.line_col(16), LineCol { line: 2, column: 6 });
/// ```
#[derive(Clone, Debug)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// Build the index for `source`
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            source,
            line_starts,
        }
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where a line starts (0-indexed line number)
    #[inline]
    fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to 1-based line and column
    ///
    /// Offsets past the end are clamped to the end of the source.
    pub fn line_col(&self, offset: usize) -> LineCol {
        let offset = offset.min(self.source.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            // line_starts[0] == 0, so insert_point is at least 1
            Err(insert_point) => insert_point - 1,
        };
        let line_start = self.line_starts[line];
        let column = self.source[line_start..]
            .char_indices()
            .take_while(|&(i, _)| line_start + i < offset)
            .count()
            + 1;
        LineCol {
            line: line + 1,
            column,
        }
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use qlex_util::span::LineIndex;
    ///
    /// let index = LineIndex::new("a:b\r\nc");
    /// assert_eq!(index.line(1), Some("a:b"));
    /// assert_eq!(index.line(2), Some("c"));
    /// assert_eq!(index.line(3), None);
    /// ```
    pub fn line(&self, line: usize) -> Option<&'a str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.source.len());
        Some(self.source[start..end].trim_end_matches(['\n', '\r']))
    }
}
