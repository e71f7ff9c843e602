use log::{trace, warn};

use crate::{
    internal::MatcherCore, ActionHook, Automaton, CharSource, ScanOutcome, StateID, SymbolID,
    TokenMatcher,
};

/// The greedy matcher. It does not support rejecting actions.
///
/// During the scan only the longest accepting position and its highest priority symbol are
/// kept. An action rejecting its match has no effect besides a warning: the token is produced
/// anyway.
#[derive(Debug)]
pub struct SimpleMatcher<'a, A: ?Sized, S, H> {
    core: MatcherCore<'a, A, S, H>,
}

impl<'a, A, S, H> SimpleMatcher<'a, A, S, H>
where
    A: Automaton + ?Sized,
    S: CharSource,
    H: ActionHook,
{
    /// Creates a matcher bound to the given automaton, source and hook.
    pub fn new(automaton: &'a A, source: S, hook: H) -> Self {
        Self {
            core: MatcherCore::new(automaton, source, hook),
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

impl<A, S, H> TokenMatcher for SimpleMatcher<'_, A, S, H>
where
    A: Automaton + ?Sized,
    S: CharSource,
    H: ActionHook,
{
    type Source = S;

    fn scan(&mut self, start_state: StateID) -> ScanOutcome {
        let start = self.core.source.cursor();
        let mut last_accept: Option<SymbolID> = None;
        let mut last_position = start;

        self.core.scan_forward(start_state, |symbols, position| {
            last_accept = Some(symbols[0]);
            last_position = position;
        });

        let Some(symbol) = last_accept else {
            trace!("No match at {}", start);
            self.core.restore(start);
            return ScanOutcome::NoMatch;
        };
        let (matched, outcome) = self.core.try_accept(symbol, start, last_position);
        if outcome.is_reject() {
            warn!(
                "Action of symbol {} rejected {:?}, but the greedy matcher cannot backtrack",
                symbol, matched
            );
        }
        ScanOutcome::Emitted(matched)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActionID, ActionOutcome, DfaTable, DfaTableBuilder, Match, StrSource};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // "ab" (0) and "a" (1)
    fn table() -> DfaTable {
        DfaTableBuilder::new()
            .add_symbols(&["AB", "A"])
            .add_state(&[])
            .add_state(&[1])
            .add_state(&[0])
            .add_transition(0, 'a', 1)
            .add_transition(1, 'b', 2)
            .build()
            .unwrap()
    }

    #[test]
    fn test_hook_is_invoked_once_per_scan() {
        init();
        let table = table();
        for outcome in [ActionOutcome::Accept, ActionOutcome::Reject] {
            let mut invoked = Vec::new();
            let hook = |action: ActionID, matched: &Match| {
                invoked.push((action.id(), matched.range()));
                outcome
            };
            let mut matcher = SimpleMatcher::new(&table, StrSource::new("aba"), hook);
            let matched = matcher.scan(StateID::new(0)).matched().unwrap();
            assert_eq!(matched.range(), 0..2);
            assert!(matcher.read_token(StateID::new(0)));
            assert_eq!(matcher.source().cursor(), 3);
            drop(matcher);
            assert_eq!(invoked, vec![(0, 0..2), (1, 2..3)], "{outcome:?}");
        }
    }

    #[test]
    fn test_no_match_does_not_invoke_hook() {
        init();
        let table = table();
        let mut invoked = 0;
        let hook = |_: ActionID, _: &Match| {
            invoked += 1;
            ActionOutcome::Accept
        };
        let mut matcher = SimpleMatcher::new(&table, StrSource::new("ba"), hook);
        assert_eq!(matcher.scan(StateID::new(0)), ScanOutcome::NoMatch);
        assert_eq!(matcher.source().cursor(), 0);
        drop(matcher);
        assert_eq!(invoked, 0);
    }
}
