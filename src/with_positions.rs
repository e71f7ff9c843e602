use crate::{Match, MatchExt, ModeSwitcher, Position, PositionProvider, Result};

/// An iterator over all tokens with line and column positions.
#[derive(Debug)]
pub struct WithPositions<I> {
    iter: I,
}

impl<I> WithPositions<I>
where
    I: Iterator<Item = Result<Match>> + PositionProvider + Sized,
{
    /// Create a new `WithPositions` iterator.
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }

    /// The wrapped iterator.
    pub fn inner(&self) -> &I {
        &self.iter
    }
}

impl<I> Iterator for WithPositions<I>
where
    I: Iterator<Item = Result<Match>> + PositionProvider + Sized,
{
    type Item = Result<MatchExt>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|result| {
            result.map(|m| {
                let start_position = self.iter.position(m.start());
                let end_position = self.iter.position(m.end());
                MatchExt::new(m, start_position, end_position)
            })
        })
    }
}

impl<I> ModeSwitcher for WithPositions<I>
where
    I: ModeSwitcher,
{
    fn set_mode(&mut self, mode: usize) {
        self.iter.set_mode(mode);
    }

    fn current_mode(&self) -> usize {
        self.iter.current_mode()
    }

    fn mode_name(&self, index: usize) -> Option<&str> {
        self.iter.mode_name(index)
    }
}

/// An extension trait for iterators over matches.
pub trait MatchExtIterator: Iterator<Item = Result<Match>> + PositionProvider + Sized {
    /// An iterator that yields matches with positions.
    fn with_positions(self) -> WithPositions<Self> {
        WithPositions::new(self)
    }
}

// Implement the trait for all types that implement the required traits.
impl<I: Iterator<Item = Result<Match>> + PositionProvider + Sized> MatchExtIterator for I {}

impl<I> PositionProvider for WithPositions<I>
where
    I: Iterator<Item = Result<Match>> + PositionProvider,
{
    fn position(&self, offset: usize) -> Position {
        self.iter.position(offset)
    }

    fn set_offset(&mut self, offset: usize) {
        self.iter.set_offset(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AcceptAll, DfaTableBuilder, MatcherBuilder, StrSource};

    #[test]
    fn test_with_positions() {
        // Words [a-z]+ (0) and newlines (1).
        let table = DfaTableBuilder::new()
            .add_symbols(&["Word", "Newline"])
            .add_state(&[])
            .add_state(&[0])
            .add_state(&[1])
            .add_transition(0, 'a'..='z', 1)
            .add_transition(1, 'a'..='z', 1)
            .add_transition(0, '\n', 2)
            .build()
            .unwrap();
        let matches: Vec<MatchExt> = MatcherBuilder::new(&table)
            .build(StrSource::new("ab\ncd"), AcceptAll)
            .find_iter()
            .with_positions()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].start_location(), Position::new(1, 1));
        assert_eq!(matches[0].end_location(), Position::new(1, 3));
        assert_eq!(matches[1].start_location(), Position::new(1, 3));
        assert_eq!(matches[1].end_location(), Position::new(2, 1));
        assert_eq!(matches[2].start_location(), Position::new(2, 1));
        assert_eq!(matches[2].end_location(), Position::new(2, 3));
    }
}
