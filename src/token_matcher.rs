use crate::{CharSource, Match, StateID};

/// The outcome of one scan-and-accept cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A token was produced: the action of the match did not reject it.
    Emitted(Match),
    /// No accepting state was reached from the start state.
    NoMatch,
    /// Accepting states were reached, but the actions rejected every alternative.
    Rejected,
}

impl ScanOutcome {
    /// Returns true if a token was produced.
    #[inline]
    pub fn is_emitted(&self) -> bool {
        matches!(self, ScanOutcome::Emitted(_))
    }

    /// Returns the produced match, if any.
    #[inline]
    pub fn matched(&self) -> Option<Match> {
        match self {
            ScanOutcome::Emitted(matched) => Some(*matched),
            _ => None,
        }
    }
}

/// The protocol of the matcher strategies.
///
/// A matcher is bound to one automaton, one character source and one action hook. Each call
/// runs a forward scan from the current position of the source, resolves the best acceptable
/// match, rewinds the source to the end of that match and invokes the action hook for it.
pub trait TokenMatcher {
    /// The character source the matcher reads from.
    type Source: CharSource;

    /// Reads the next token starting in `start_state` and reports the detailed outcome.
    ///
    /// On success the source is positioned at the end of the returned match.
    /// `start_state` must be a state of the bound automaton.
    fn scan(&mut self, start_state: StateID) -> ScanOutcome;

    /// Reads the next token starting in `start_state`.
    ///
    /// Returns `true` if a token was produced. The reasons of a failure are not distinguished,
    /// use [`TokenMatcher::scan`] for them.
    #[inline]
    fn read_token(&mut self, start_state: StateID) -> bool {
        self.scan(start_state).is_emitted()
    }

    /// The bound character source.
    fn source(&self) -> &Self::Source;

    /// The bound character source, mutable. A driver uses it to skip unrecognized input.
    fn source_mut(&mut self) -> &mut Self::Source;
}
