use crate::{ActionID, StateID, SymbolID};

/// The automaton table consumed by the matchers.
///
/// It is a deterministic automaton whose states may accept several symbols at once. The accepting
/// symbols of a state are ordered by priority, the first one has the highest priority.
///
/// The matchers trust the table. Passing state or symbol ids the table does not know is a contract
/// violation that is allowed to panic.
pub trait Automaton {
    /// Returns the state reached from `state` on `input`, or `None` if there is no transition.
    /// An `input` of `None` stands for the end of the input.
    fn transition(&self, state: StateID, input: Option<char>) -> Option<StateID>;

    /// Returns the symbols accepted in `state` in priority order.
    /// The slice is empty if the state is not accepting.
    fn accepting_symbols(&self, state: StateID) -> &[SymbolID];

    /// Returns the action handle of `symbol`.
    fn symbol_action(&self, symbol: SymbolID) -> ActionID;

    /// Returns true if any symbol's action may reject its match.
    /// This decides which matcher strategy is chosen by default.
    fn has_reject_actions(&self) -> bool {
        true
    }

    /// Returns the start state of the given mode, or `None` if the mode does not exist.
    fn start_state(&self, mode: usize) -> Option<StateID> {
        (mode == 0).then_some(StateID::new(0))
    }

    /// Returns the name of the given mode.
    fn mode_name(&self, _mode: usize) -> Option<&str> {
        None
    }
}
