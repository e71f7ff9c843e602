use crate::{ActionID, Match};

/// The verdict of a semantic action on a candidate match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionOutcome {
    /// The match is taken, the token is produced.
    #[default]
    Accept,
    /// The action vetoes its own match (the REJECT action of lexer generators).
    /// A backtracking matcher then tries the next best alternative.
    Reject,
}

impl ActionOutcome {
    /// Returns true if the action rejected the match.
    #[inline]
    pub fn is_reject(self) -> bool {
        self == ActionOutcome::Reject
    }
}

impl From<bool> for ActionOutcome {
    /// Converts a "did reject" flag.
    fn from(did_reject: bool) -> Self {
        if did_reject {
            ActionOutcome::Reject
        } else {
            ActionOutcome::Accept
        }
    }
}

/// The dispatch hook through which the matchers execute semantic actions.
///
/// The hook is invoked once per attempted symbol, after the character source has been rewound to
/// the end of the candidate match. What it does with the match, e.g. building a token value, is
/// opaque to the matchers.
pub trait ActionHook {
    /// Executes the action `action` for the candidate `matched`.
    fn invoke(&mut self, action: ActionID, matched: &Match) -> ActionOutcome;
}

impl<F> ActionHook for F
where
    F: FnMut(ActionID, &Match) -> ActionOutcome,
{
    #[inline]
    fn invoke(&mut self, action: ActionID, matched: &Match) -> ActionOutcome {
        self(action, matched)
    }
}

/// A hook that accepts every match and has no side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ActionHook for AcceptAll {
    #[inline]
    fn invoke(&mut self, _action: ActionID, _matched: &Match) -> ActionOutcome {
        ActionOutcome::Accept
    }
}
