use log::debug;

use crate::{
    ActionHook, Automaton, CharSource, Matcher, RejectableMatcher, SimpleMatcher, Strategy,
};

/// A builder for creating a matcher session.
///
/// Unless a strategy is forced, the backtracking strategy is chosen if any symbol of the
/// automaton may reject its match, the greedy strategy otherwise.
#[derive(Debug)]
pub struct MatcherBuilder<'a, A: ?Sized> {
    automaton: &'a A,
    strategy: Option<Strategy>,
}

impl<'a, A> MatcherBuilder<'a, A>
where
    A: Automaton + ?Sized,
{
    /// Creates a new matcher builder for the given automaton.
    pub fn new(automaton: &'a A) -> Self {
        Self {
            automaton,
            strategy: None,
        }
    }

    /// Forces the given strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Builds the matcher bound to the given source and action hook.
    pub fn build<S, H>(self, source: S, hook: H) -> Matcher<'a, A, S, H>
    where
        S: CharSource,
        H: ActionHook,
    {
        let strategy = self.strategy.unwrap_or_else(|| {
            if self.automaton.has_reject_actions() {
                Strategy::Backtracking
            } else {
                Strategy::Greedy
            }
        });
        debug!("Using the {:?} matcher", strategy);
        match strategy {
            Strategy::Greedy => Matcher::Simple(SimpleMatcher::new(self.automaton, source, hook)),
            Strategy::Backtracking => {
                Matcher::Rejectable(RejectableMatcher::new(self.automaton, source, hook))
            }
        }
    }
}
