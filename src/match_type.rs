#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Position, Span, SymbolID};

/// A match of a lexical rule in the input.
///
/// It is handed to the [`crate::ActionHook`] for every attempted symbol and returned by a
/// successful scan.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Match {
    /// The symbol (lexical rule) that matched.
    symbol: SymbolID,
    /// The underlying match span.
    span: Span,
}

impl Match {
    /// Create a new match.
    pub fn new(symbol: SymbolID, span: Span) -> Self {
        Self { symbol, span }
    }

    /// Get the start of the match.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Get the end of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Get the span of the match.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the span as range
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.span.range()
    }

    /// Get the length of the match.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if the match is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Get the symbol of the match.
    #[inline]
    pub fn symbol(&self) -> SymbolID {
        self.symbol
    }
}

/// A match with start and end positions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchExt {
    /// The symbol (lexical rule) that matched.
    symbol: SymbolID,
    /// The underlying match span.
    span: Span,
    /// The position of the start of the match.
    start_location: Position,
    /// The position of the end of the match.
    /// The end position is exclusive.
    end_location: Position,
}

impl MatchExt {
    pub(crate) fn new(matched: Match, start_location: Position, end_location: Position) -> Self {
        Self {
            symbol: matched.symbol,
            span: matched.span,
            start_location,
            end_location,
        }
    }

    /// Get the symbol of the match.
    #[inline]
    pub fn symbol(&self) -> SymbolID {
        self.symbol
    }

    /// Get the span of the match.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the line and column of the first character of the match.
    #[inline]
    pub fn start_location(&self) -> Position {
        self.start_location
    }

    /// Get the line and column behind the last character of the match.
    #[inline]
    pub fn end_location(&self) -> Position {
        self.end_location
    }
}
