//! The character source consumed by the matchers.

use crate::{Position, PositionProvider};

/// A seekable stream of characters.
///
/// Matchers read ahead of the match they finally accept and rewind afterwards, so a source must
/// support setting the position back to any position it has reported during the current scan.
/// Positions are opaque to the matchers, they are only read and restored.
pub trait CharSource {
    /// Reads the next character and advances the position behind it.
    /// Returns `None` at the end of the input. The position is not changed in that case.
    fn read_next(&mut self) -> Option<char>;

    /// Returns the current position of the read cursor.
    fn cursor(&self) -> usize;

    /// Moves the read cursor to a previously reported position.
    fn set_cursor(&mut self, position: usize);
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    #[inline]
    fn read_next(&mut self) -> Option<char> {
        (**self).read_next()
    }

    #[inline]
    fn cursor(&self) -> usize {
        (**self).cursor()
    }

    #[inline]
    fn set_cursor(&mut self, position: usize) {
        (**self).set_cursor(position)
    }
}

/// A [`CharSource`] over a string slice. Positions are byte offsets into the string.
#[derive(Debug, Clone)]
pub struct StrSource<'h> {
    input: &'h str,
    offset: usize,
    // Byte offsets of the first character of each line. Always starts with 0.
    line_starts: Vec<usize>,
}

impl<'h> StrSource<'h> {
    /// Creates a new source positioned at the start of the input.
    pub fn new(input: &'h str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(input.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            input,
            offset: 0,
            line_starts,
        }
    }

    /// The complete input.
    #[inline]
    pub fn input(&self) -> &'h str {
        self.input
    }

    /// The not yet consumed part of the input.
    #[inline]
    pub fn remaining(&self) -> &'h str {
        &self.input[self.offset..]
    }

    /// Returns true if every character has been read.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// The text covered by the given byte range, if it is valid for this input.
    #[inline]
    pub fn text(&self, range: std::ops::Range<usize>) -> Option<&'h str> {
        self.input.get(range)
    }
}

impl CharSource for StrSource<'_> {
    #[inline]
    fn read_next(&mut self) -> Option<char> {
        let c = self.input[self.offset..].chars().next()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    #[inline]
    fn cursor(&self) -> usize {
        self.offset
    }

    /// Positions behind the input are clamped to its end. A position inside a multibyte
    /// character is moved back to the start of that character.
    #[inline]
    fn set_cursor(&mut self, position: usize) {
        let mut position = position.min(self.input.len());
        while !self.input.is_char_boundary(position) {
            position -= 1;
        }
        self.offset = position;
    }
}

impl PositionProvider for StrSource<'_> {
    /// Returns the line and column numbers of the given offset.
    /// The line number is the index of the line start in the vector plus one.
    /// The column number is the number of characters between the line start and the offset plus
    /// one. Offsets behind the input are clamped to its end.
    fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.input.len());
        let line_index = self.line_starts.partition_point(|start| *start <= offset) - 1;
        let line_start = self.line_starts[line_index];
        let column = self
            .input
            .get(line_start..offset)
            .map_or(offset - line_start, |s| s.chars().count());
        Position::new(line_index + 1, column + 1)
    }

    fn set_offset(&mut self, offset: usize) {
        self.set_cursor(offset);
    }
}
