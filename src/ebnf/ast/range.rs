//! Source positions
//!
//! The logos lexer reports byte ranges. Diagnostics want line and column, so byte offsets are
//! translated once through a [SourceLocation] table of line starts. Lines and columns are
//! 1-based, columns count characters (not bytes).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a position in source code (line and column, both 1-based)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
#[derive(Debug, Clone)]
pub struct SourceLocation<'src> {
    source: &'src str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'src> SourceLocation<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a line/column position
    ///
    /// Offsets past the end of the source clamp to the end.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(self.source.len());
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..byte_offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(byte_offset - line_start);

        Position::new(line + 1, column + 1)
    }

    /// Position just past the last character
    pub fn end(&self) -> Position {
        self.byte_to_position(self.source.len())
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_single_line() {
        let loc = SourceLocation::new("Hello");
        assert_eq!(loc.byte_to_position(0), Position::new(1, 1));
        assert_eq!(loc.byte_to_position(4), Position::new(1, 5));
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("Hello\nworld\ntest");

        assert_eq!(loc.byte_to_position(0), Position::new(1, 1));
        assert_eq!(loc.byte_to_position(5), Position::new(1, 6));
        assert_eq!(loc.byte_to_position(6), Position::new(2, 1));
        assert_eq!(loc.byte_to_position(10), Position::new(2, 5));
        assert_eq!(loc.byte_to_position(12), Position::new(3, 1));
    }

    #[test]
    fn test_byte_to_position_counts_characters() {
        let loc = SourceLocation::new("a = \"ö\" ;");
        // 'ö' takes two bytes, the closing quote sits at byte 7 but column 7
        assert_eq!(loc.byte_to_position(7), Position::new(1, 7));
    }

    #[test]
    fn test_end_and_line_count() {
        let loc = SourceLocation::new("a\nbc");
        assert_eq!(loc.end(), Position::new(2, 3));
        assert_eq!(loc.line_count(), 2);
        assert_eq!(SourceLocation::new("").end(), Position::new(1, 1));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
    }
}
