//! Line and column information of matches.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A line and column in the input, both 1-based.
///
/// Columns count characters, not bytes. Positions order by line first, then by column.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// The line number.
    pub line: usize,
    /// The column number.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        debug_assert!(line > 0 && column > 0, "positions are 1-based");
        Self { line, column }
    }

    /// Get the line number.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the column number.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Translates byte offsets of the input into positions.
pub trait PositionProvider {
    /// Returns the position of the given byte offset.
    fn position(&self, offset: usize) -> Position;

    /// Moves the read cursor to the given byte offset. Matching continues there.
    fn set_offset(&mut self, offset: usize);
}
