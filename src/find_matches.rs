use log::{debug, trace};

use crate::{
    ActionHook, Automaton, CharSource, LexReaderError, LexReaderErrorKind, Match, Matcher,
    Position, PositionProvider, Result, ScanOutcome, TokenMatcher,
};

/// A trait to switch between the modes (start conditions) of an automaton.
pub trait ModeSwitcher {
    /// Sets the current mode.
    fn set_mode(&mut self, mode: usize);

    /// Returns the current mode.
    fn current_mode(&self) -> usize;

    /// Returns the name of the mode with the given index.
    fn mode_name(&self, index: usize) -> Option<&str>;
}

/// An iterator over all tokens of the input of a matcher.
///
/// The iterator yields `Ok(Match)` for every produced token. Input that no rule matches, or
/// whose matches were all rejected, is skipped one character at a time; each skipped character is
/// reported as [`LexReaderErrorKind::UnrecognizedCharacter`]. The iteration ends at the end of
/// the input, after an empty match (only possible through an end-of-input transition) or after
/// a switch to an unknown mode was reported.
///
/// This iterator can be created with the [`crate::Matcher::find_iter`] method.
#[derive(Debug)]
pub struct FindMatches<'a, A: ?Sized, S, H> {
    matcher: Matcher<'a, A, S, H>,
    mode: usize,
    finished: bool,
}

impl<'a, A, S, H> FindMatches<'a, A, S, H>
where
    A: Automaton + ?Sized,
    S: CharSource,
    H: ActionHook,
{
    /// Creates a new `FindMatches` iterator.
    pub(crate) fn new(matcher: Matcher<'a, A, S, H>) -> Self {
        Self {
            matcher,
            mode: 0,
            finished: false,
        }
    }

    /// Retrieve the current position of the character source.
    #[inline]
    pub fn offset(&self) -> usize {
        self.matcher.source().cursor()
    }

    /// The underlying matcher.
    pub fn matcher(&self) -> &Matcher<'a, A, S, H> {
        &self.matcher
    }

    /// The underlying matcher, mutable, e.g. to access the action hook between tokens.
    pub fn matcher_mut(&mut self) -> &mut Matcher<'a, A, S, H> {
        &mut self.matcher
    }

    /// Ends the iteration and returns the matcher.
    pub fn into_matcher(self) -> Matcher<'a, A, S, H> {
        self.matcher
    }

    /// Returns the next token in the input.
    ///
    /// If the matcher fails at the current position, the character there is consumed and
    /// reported as error, so that the next call continues behind it.
    pub fn next_match(&mut self) -> Option<Result<Match>> {
        if self.finished {
            return None;
        }
        let Some(start_state) = self.matcher.automaton().start_state(self.mode) else {
            self.finished = true;
            return Some(Err(LexReaderError::new(LexReaderErrorKind::UnknownMode(
                self.mode,
            ))));
        };

        let start = self.matcher.source().cursor();
        match self.matcher.scan(start_state) {
            ScanOutcome::Emitted(matched) => {
                trace!("Token {:?}", matched);
                if matched.is_empty() {
                    self.finished = true;
                }
                Some(Ok(matched))
            }
            outcome => {
                let source = self.matcher.source_mut();
                source.set_cursor(start);
                match source.read_next() {
                    Some(character) => {
                        debug!("{:?} at {}, skipping {:?}", outcome, start, character);
                        Some(Err(LexReaderError::new(
                            LexReaderErrorKind::UnrecognizedCharacter {
                                character,
                                offset: start,
                            },
                        )))
                    }
                    None => {
                        self.finished = true;
                        None
                    }
                }
            }
        }
    }
}

impl<A, S, H> Iterator for FindMatches<'_, A, S, H>
where
    A: Automaton + ?Sized,
    S: CharSource,
    H: ActionHook,
{
    type Item = Result<Match>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_match()
    }
}

impl<A, S, H> ModeSwitcher for FindMatches<'_, A, S, H>
where
    A: Automaton + ?Sized,
    S: CharSource,
    H: ActionHook,
{
    /// Sets the mode from whose start state the next token is scanned.
    /// Switching to a mode the automaton does not know is reported by the next call to
    /// [`FindMatches::next_match`]. Setting a mode after that error resumes the iteration.
    fn set_mode(&mut self, mode: usize) {
        trace!("Set mode to {}", mode);
        // With an unknown current mode nothing was scanned, the iteration was stopped by the
        // mode error only.
        if self.matcher.automaton().start_state(self.mode).is_none() {
            self.finished = false;
        }
        self.mode = mode;
    }

    #[inline]
    fn current_mode(&self) -> usize {
        self.mode
    }

    fn mode_name(&self, index: usize) -> Option<&str> {
        self.matcher.automaton().mode_name(index)
    }
}

impl<A, S, H> PositionProvider for FindMatches<'_, A, S, H>
where
    A: Automaton + ?Sized,
    S: CharSource + PositionProvider,
    H: ActionHook,
{
    fn position(&self, offset: usize) -> Position {
        self.matcher.source().position(offset)
    }

    /// Moves the source to `offset` and resumes a finished iteration.
    fn set_offset(&mut self, offset: usize) {
        self.matcher.source_mut().set_offset(offset);
        self.finished = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AcceptAll, ActionID, ActionOutcome, DfaTable, DfaTableBuilder, MatcherBuilder,
        StrSource, Symbol, SymbolID,
    };

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // Mode INITIAL: identifiers [a-z]+ (0), whitespace (1) and '"' (2).
    // Mode STRING: string content [^"]+ (3) and '"' (2).
    fn two_mode_table() -> DfaTable {
        DfaTableBuilder::new()
            .add_symbols(&["Identifier", "Whitespace", "Quote", "Content"])
            .add_state(&[])
            .add_state(&[0])
            .add_state(&[1])
            .add_state(&[2])
            .add_state(&[])
            .add_state(&[3])
            .add_transition(0, 'a'..='z', 1)
            .add_transition(1, 'a'..='z', 1)
            .add_transition(0, ' ', 2)
            .add_transition(2, ' ', 2)
            .add_transition(0, '"', 3)
            .add_transition(4, '"', 3)
            .add_transition(4, '\0'..='!', 5)
            .add_transition(4, '#'..=char::MAX, 5)
            .add_transition(5, '\0'..='!', 5)
            .add_transition(5, '#'..=char::MAX, 5)
            .add_mode("INITIAL", 0)
            .add_mode("STRING", 4)
            .build()
            .unwrap()
    }

    #[test]
    fn test_find_matches_with_mode_switch() {
        init();
        let table = two_mode_table();
        const INPUT: &str = r#"ab "c d" e"#;
        let mut find_iter = MatcherBuilder::new(&table)
            .build(StrSource::new(INPUT), AcceptAll)
            .find_iter();
        assert_eq!(find_iter.mode_name(1), Some("STRING"));

        let mut tokens = Vec::new();
        while let Some(matched) = find_iter.next_match() {
            let matched = matched.unwrap();
            if matched.symbol() == SymbolID::new(2) {
                let next_mode = 1 - find_iter.current_mode();
                find_iter.set_mode(next_mode);
            }
            tokens.push((matched.symbol().id(), &INPUT[matched.range()]));
        }
        assert_eq!(
            tokens,
            vec![
                (0, "ab"),
                (1, " "),
                (2, "\""),
                (3, "c d"),
                (2, "\""),
                (1, " "),
                (0, "e"),
            ]
        );
        assert_eq!(find_iter.current_mode(), 0);
        assert_eq!(find_iter.offset(), INPUT.len());
    }

    #[test]
    fn test_unrecognized_characters_are_skipped() {
        init();
        let table = two_mode_table();
        let find_iter = MatcherBuilder::new(&table)
            .build(StrSource::new("ab12c"), AcceptAll)
            .find_iter();
        let results: Vec<_> = find_iter
            .map(|result| match result {
                Ok(matched) => Ok((matched.symbol().id(), matched.range())),
                Err(err) => match *err.source {
                    LexReaderErrorKind::UnrecognizedCharacter { character, offset } => {
                        Err((character, offset))
                    }
                    other => panic!("unexpected error {other}"),
                },
            })
            .collect();
        assert_eq!(
            results,
            vec![Ok((0, 0..2)), Err(('1', 2)), Err(('2', 3)), Ok((0, 4..5))]
        );
    }

    #[test]
    fn test_rejected_input_is_skipped() {
        init();
        let table = DfaTableBuilder::new()
            .add_symbol(Symbol::new("Word").rejectable())
            .add_state(&[])
            .add_state(&[0])
            .add_transition(0, 'a'..='z', 1)
            .add_transition(1, 'a'..='z', 1)
            .build()
            .unwrap();
        const INPUT: &str = "xab";
        // Words must not start with 'x'.
        let hook = |_: ActionID, matched: &Match| {
            ActionOutcome::from(INPUT[matched.range()].starts_with('x'))
        };
        let results: Vec<_> = MatcherBuilder::new(&table)
            .build(StrSource::new(INPUT), hook)
            .find_iter()
            .map(|result| result.map(|matched| matched.range()).map_err(|_| ()))
            .collect();
        assert_eq!(results, vec![Err(()), Ok(1..3)]);
    }

    #[test]
    fn test_unknown_mode_ends_iteration() {
        init();
        let table = two_mode_table();
        let mut find_iter = MatcherBuilder::new(&table)
            .build(StrSource::new("abc"), AcceptAll)
            .find_iter();
        find_iter.set_mode(7);
        let err = find_iter.next().unwrap().unwrap_err();
        assert!(matches!(err.kind(), LexReaderErrorKind::UnknownMode(7)));
        assert!(find_iter.next().is_none());

        // Switching back to a known mode resumes at the same offset.
        find_iter.set_mode(0);
        let matched = find_iter.next().unwrap().unwrap();
        assert_eq!((matched.symbol().id(), matched.range()), (0, 0..3));
        assert!(find_iter.next().is_none());

        // At the end of the input a mode switch does not produce further tokens.
        find_iter.set_mode(1);
        assert!(find_iter.next().is_none());
    }

    #[test]
    fn test_set_offset_inside_character() {
        init();
        let table = two_mode_table();
        let mut find_iter = MatcherBuilder::new(&table)
            .build(StrSource::new("äb"), AcceptAll)
            .find_iter();
        // Offset 1 lies inside 'ä', scanning resumes at its start.
        find_iter.set_offset(1);
        assert_eq!(find_iter.offset(), 0);
        let err = find_iter.next().unwrap().unwrap_err();
        assert!(matches!(
            err.kind(),
            LexReaderErrorKind::UnrecognizedCharacter {
                character: 'ä',
                offset: 0
            }
        ));
        let matched = find_iter.next().unwrap().unwrap();
        assert_eq!(matched.range(), 2..3);
        assert!(find_iter.next().is_none());
    }

    #[test]
    fn test_end_of_input_token() {
        init();
        // "a" (0) and an end-of-input rule (1).
        let table = DfaTableBuilder::new()
            .add_symbols(&["A", "Eof"])
            .add_state(&[])
            .add_state(&[0])
            .add_state(&[1])
            .add_transition(0, 'a', 1)
            .add_eof_transition(0, 2)
            .build()
            .unwrap();
        let matches: Vec<Match> = MatcherBuilder::new(&table)
            .build(StrSource::new("aa"), AcceptAll)
            .find_iter()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(
            matches
                .iter()
                .map(|m| (m.symbol().id(), m.range()))
                .collect::<Vec<_>>(),
            vec![(0, 0..1), (0, 1..2), (1, 2..2)]
        );
    }
}
