use log::trace;

use crate::{
    ActionHook, ActionOutcome, Automaton, CharSource, Match, Span, StateID, SymbolID,
};

/// The parts of a matching session shared by both matcher strategies: the automaton, the
/// character source and the action hook, together with the forward scan loop.
#[derive(Debug)]
pub(crate) struct MatcherCore<'a, A: ?Sized, S, H> {
    pub(crate) automaton: &'a A,
    pub(crate) source: S,
    pub(crate) hook: H,
}

impl<'a, A, S, H> MatcherCore<'a, A, S, H>
where
    A: Automaton + ?Sized,
    S: CharSource,
    H: ActionHook,
{
    pub(crate) fn new(automaton: &'a A, source: S, hook: H) -> Self {
        Self {
            automaton,
            source,
            hook,
        }
    }

    /// Runs the automaton from `start_state` as long as there are transitions.
    ///
    /// `on_accept` is called for every accepting state entered, with its symbols and the position
    /// of the source behind the consumed characters. The end of the input is fed to the
    /// automaton at most once. When the function returns the source is positioned somewhere
    /// behind the last accepting state; the caller has to rewind it.
    #[inline]
    pub(crate) fn scan_forward<F>(&mut self, start_state: StateID, mut on_accept: F)
    where
        F: FnMut(&'a [SymbolID], usize),
    {
        let automaton: &'a A = self.automaton;
        let mut state = start_state;
        loop {
            let input = self.source.read_next();
            let Some(next_state) = automaton.transition(state, input) else {
                break;
            };
            state = next_state;
            let symbols = automaton.accepting_symbols(state);
            if !symbols.is_empty() {
                on_accept(symbols, self.source.cursor());
            }
            if input.is_none() {
                break;
            }
        }
    }

    /// Rewinds the source to `end` and lets the action of `symbol` decide on the match
    /// `start..end`.
    #[inline]
    pub(crate) fn try_accept(
        &mut self,
        symbol: SymbolID,
        start: usize,
        end: usize,
    ) -> (Match, ActionOutcome) {
        self.source.set_cursor(end);
        let matched = Match::new(symbol, Span::new(start, end));
        let action = self.automaton.symbol_action(symbol);
        let outcome = self.hook.invoke(action, &matched);
        trace!("Action {} on {:?}: {:?}", action, matched, outcome);
        (matched, outcome)
    }

    /// Puts the source back to `start` after a scan without any acceptable match.
    #[inline]
    pub(crate) fn restore(&mut self, start: usize) {
        self.source.set_cursor(start);
    }
}
