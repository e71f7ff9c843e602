use log::{debug, trace};

use crate::{
    internal::{AcceptState, AcceptingHistory, MatcherCore},
    ActionHook, Automaton, CharSource, ScanOutcome, StateID, TokenMatcher,
};

/// The backtracking matcher. It supports actions that reject their match.
///
/// The forward scan records every accepting state entered, not only the last one. Resolution
/// then offers the candidates to the actions longest match first and, at the same length, in
/// symbol priority order, until one action accepts:
///
/// ```text
/// input "ab", rules "ab" (1) and "a" (2)
/// history: [ ([2], 1), ([1], 2) ]   <- top
/// tries:   1 at 2, then 2 at 1
/// ```
///
/// If every candidate is rejected the scan fails and the source stays where the last candidate
/// left it.
#[derive(Debug)]
pub struct RejectableMatcher<'a, A: ?Sized, S, H> {
    core: MatcherCore<'a, A, S, H>,
    history: AcceptingHistory<'a>,
}

impl<'a, A, S, H> RejectableMatcher<'a, A, S, H>
where
    A: Automaton + ?Sized,
    S: CharSource,
    H: ActionHook,
{
    /// Creates a matcher bound to the given automaton, source and hook.
    pub fn new(automaton: &'a A, source: S, hook: H) -> Self {
        Self {
            core: MatcherCore::new(automaton, source, hook),
            history: AcceptingHistory::new(),
        }
    }

    pub(crate) fn core(&self) -> &MatcherCore<'a, A, S, H> {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut MatcherCore<'a, A, S, H> {
        &mut self.core
    }

    pub(crate) fn into_core(self) -> MatcherCore<'a, A, S, H> {
        self.core
    }
}

impl<A, S, H> TokenMatcher for RejectableMatcher<'_, A, S, H>
where
    A: Automaton + ?Sized,
    S: CharSource,
    H: ActionHook,
{
    type Source = S;

    fn scan(&mut self, start_state: StateID) -> ScanOutcome {
        self.history.clear();
        let start = self.core.source.cursor();

        let history = &mut self.history;
        self.core.scan_forward(start_state, |symbols, position| {
            history.push(AcceptState::new(symbols, position));
        });

        if self.history.is_empty() {
            trace!("No match at {}", start);
            self.core.restore(start);
            return ScanOutcome::NoMatch;
        }
        trace!(
            "{} accepting states recorded from {}",
            self.history.len(),
            start
        );

        while let Some(accept_state) = self.history.pop() {
            for symbol in accept_state.symbols() {
                let (matched, outcome) =
                    self.core
                        .try_accept(*symbol, start, accept_state.position());
                if !outcome.is_reject() {
                    self.history.clear();
                    return ScanOutcome::Emitted(matched);
                }
                debug!("Symbol {} rejected {:?}", symbol, matched);
            }
        }
        debug!("All alternatives from {} were rejected", start);
        ScanOutcome::Rejected
    }

    #[inline]
    fn source(&self) -> &S {
        &self.core.source
    }

    #[inline]
    fn source_mut(&mut self) -> &mut S {
        &mut self.core.source
    }
}
