use crate::{
    internal::MatcherCore, ActionHook, Automaton, CharSource, FindMatches, RejectableMatcher,
    ScanOutcome, SimpleMatcher, StateID, TokenMatcher,
};

/// The matching strategy of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Longest match with priority, actions cannot reject. See [`SimpleMatcher`].
    Greedy,
    /// Longest match with priority and backtracking on rejection. See [`RejectableMatcher`].
    Backtracking,
}

/// A matcher whose strategy was chosen once at session setup.
///
/// Use the [`crate::MatcherBuilder`] to create one.
#[derive(Debug)]
pub enum Matcher<'a, A: ?Sized, S, H> {
    /// The greedy matcher.
    Simple(SimpleMatcher<'a, A, S, H>),
    /// The backtracking matcher.
    Rejectable(RejectableMatcher<'a, A, S, H>),
}

impl<'a, A, S, H> Matcher<'a, A, S, H>
where
    A: Automaton + ?Sized,
    S: CharSource,
    H: ActionHook,
{
    /// The strategy of the matcher.
    pub fn strategy(&self) -> Strategy {
        match self {
            Matcher::Simple(_) => Strategy::Greedy,
            Matcher::Rejectable(_) => Strategy::Backtracking,
        }
    }

    /// The bound automaton.
    pub fn automaton(&self) -> &'a A {
        self.core().automaton
    }

    /// The action hook.
    pub fn hook(&self) -> &H {
        &self.core().hook
    }

    /// The action hook, mutable.
    pub fn hook_mut(&mut self) -> &mut H {
        match self {
            Matcher::Simple(matcher) => &mut matcher.core_mut().hook,
            Matcher::Rejectable(matcher) => &mut matcher.core_mut().hook,
        }
    }

    /// Ends the session and returns the source and the hook.
    pub fn into_parts(self) -> (S, H) {
        let core = match self {
            Matcher::Simple(matcher) => matcher.into_core(),
            Matcher::Rejectable(matcher) => matcher.into_core(),
        };
        (core.source, core.hook)
    }

    /// Returns an iterator over all tokens of the remaining input.
    /// See [`FindMatches`] for the handling of unrecognized input.
    pub fn find_iter(self) -> FindMatches<'a, A, S, H> {
        FindMatches::new(self)
    }

    fn core(&self) -> &MatcherCore<'a, A, S, H> {
        match self {
            Matcher::Simple(matcher) => matcher.core(),
            Matcher::Rejectable(matcher) => matcher.core(),
        }
    }
}

impl<A, S, H> TokenMatcher for Matcher<'_, A, S, H>
where
    A: Automaton + ?Sized,
    S: CharSource,
    H: ActionHook,
{
    type Source = S;

    #[inline]
    fn scan(&mut self, start_state: StateID) -> ScanOutcome {
        match self {
            Matcher::Simple(matcher) => matcher.scan(start_state),
            Matcher::Rejectable(matcher) => matcher.scan(start_state),
        }
    }

    #[inline]
    fn source(&self) -> &S {
        match self {
            Matcher::Simple(matcher) => matcher.source(),
            Matcher::Rejectable(matcher) => matcher.source(),
        }
    }

    #[inline]
    fn source_mut(&mut self) -> &mut S {
        match self {
            Matcher::Simple(matcher) => matcher.source_mut(),
            Matcher::Rejectable(matcher) => matcher.source_mut(),
        }
    }
}
