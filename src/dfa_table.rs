//! A dense, validated automaton table.
//!
//! The table is produced by an external automaton construction step. It can be assembled with
//! the [`DfaTableBuilder`] or, with the `serde` feature, loaded from JSON.

use log::trace;
use rustc_hash::FxHashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::DfaError, ActionID, Automaton, Result, StateID, StateIDBase, SymbolID, SymbolIDBase,
};

/// An inclusive range of characters that triggers a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CharRange {
    /// The first character of the range.
    pub start: char,
    /// The last character of the range, inclusive.
    pub end: char,
}

impl CharRange {
    /// Creates a new character range.
    pub fn new(start: char, end: char) -> Self {
        Self { start, end }
    }

    /// Returns true if the range contains `c`.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}

impl From<char> for CharRange {
    fn from(c: char) -> Self {
        CharRange::new(c, c)
    }
}

impl From<std::ops::RangeInclusive<char>> for CharRange {
    fn from(range: std::ops::RangeInclusive<char>) -> Self {
        CharRange::new(*range.start(), *range.end())
    }
}

/// A state of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DfaState {
    /// The transitions on characters, sorted by range start. The ranges do not overlap.
    #[cfg_attr(feature = "serde", serde(default))]
    transitions: Vec<(CharRange, StateID)>,
    /// The transition taken on the end of the input.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    eof_transition: Option<StateID>,
    /// The accepted symbols in priority order.
    #[cfg_attr(feature = "serde", serde(default))]
    accepting: Vec<SymbolID>,
}

impl DfaState {
    /// The transitions on characters, sorted by range start.
    pub fn transitions(&self) -> &[(CharRange, StateID)] {
        &self.transitions
    }

    /// The transition on the end of the input.
    pub fn eof_transition(&self) -> Option<StateID> {
        self.eof_transition
    }

    /// The accepted symbols in priority order.
    pub fn accepting(&self) -> &[SymbolID] {
        &self.accepting
    }

    /// Returns true if the state accepts at least one symbol.
    pub fn is_accepting(&self) -> bool {
        !self.accepting.is_empty()
    }
}

/// A lexical rule as known to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbol {
    /// The name of the symbol. Used for lookups and debugging.
    pub name: String,
    /// The action handle. If not given, the symbol index is used.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub action: Option<ActionID>,
    /// True if the symbol's action may reject its match.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rejectable: bool,
}

impl Symbol {
    /// Creates a new symbol whose action handle is its own index.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            action: None,
            rejectable: false,
        }
    }

    /// Sets an explicit action handle.
    pub fn with_action(mut self, action: ActionID) -> Self {
        self.action = Some(action);
        self
    }

    /// Marks the symbol's action as able to reject.
    pub fn rejectable(mut self) -> Self {
        self.rejectable = true;
        self
    }
}

/// A mode is a named start state, known from flex as *start condition*.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mode {
    /// The name of the mode.
    pub name: String,
    /// The state scanning starts from in this mode.
    pub start_state: StateID,
}

// The unvalidated table data. It is the storage of the builder and the serialization format.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct TableData {
    states: Vec<DfaState>,
    #[cfg_attr(feature = "serde", serde(default))]
    symbols: Vec<Symbol>,
    #[cfg_attr(feature = "serde", serde(default))]
    modes: Vec<Mode>,
}

/// A validated automaton table.
///
/// Invariants established on construction:
/// * all referenced states and symbols exist
/// * the character transitions of each state are sorted and do not overlap
/// * the accepting symbols of each state are sorted by priority, i.e. ascending
/// * there is at least one mode
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "TableData", into = "TableData")
)]
pub struct DfaTable {
    states: Vec<DfaState>,
    symbols: Vec<Symbol>,
    modes: Vec<Mode>,
    symbol_ids: FxHashMap<String, SymbolID>,
    has_reject_actions: bool,
}

impl DfaTable {
    /// The states of the table.
    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    /// The symbols of the table.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The modes of the table.
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    /// Looks up a symbol by name.
    pub fn symbol_id(&self, name: &str) -> Option<SymbolID> {
        self.symbol_ids.get(name).copied()
    }

    /// Returns the name of a symbol.
    pub fn symbol_name(&self, symbol: SymbolID) -> Option<&str> {
        self.symbols
            .get(symbol.as_usize())
            .map(|symbol| symbol.name.as_str())
    }

    /// Reads a table in JSON format and validates it.
    #[cfg(feature = "serde")]
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let data: TableData = serde_json::from_reader(reader)?;
        Ok(DfaTable::try_from(data)?)
    }

    /// Writes the table in JSON format.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Renders the table in graphviz dot format.
    #[cfg(feature = "dot_writer")]
    pub fn render_dot<W: std::io::Write>(&self, label: &str, output: &mut W) -> Result<()> {
        crate::internal::dot::table_render(self, label, output)
    }
}

impl Automaton for DfaTable {
    #[inline]
    fn transition(&self, state: StateID, input: Option<char>) -> Option<StateID> {
        let state = &self.states[state];
        match input {
            Some(c) => {
                let index = state
                    .transitions
                    .partition_point(|(range, _)| range.start <= c);
                let (range, target) = state.transitions.get(index.checked_sub(1)?)?;
                range.contains(c).then_some(*target)
            }
            None => state.eof_transition,
        }
    }

    #[inline]
    fn accepting_symbols(&self, state: StateID) -> &[SymbolID] {
        &self.states[state].accepting
    }

    #[inline]
    fn symbol_action(&self, symbol: SymbolID) -> ActionID {
        self.symbols[symbol]
            .action
            .unwrap_or_else(|| ActionID::new(symbol.id()))
    }

    fn has_reject_actions(&self) -> bool {
        self.has_reject_actions
    }

    fn start_state(&self, mode: usize) -> Option<StateID> {
        self.modes.get(mode).map(|mode| mode.start_state)
    }

    fn mode_name(&self, mode: usize) -> Option<&str> {
        self.modes.get(mode).map(|mode| mode.name.as_str())
    }
}

impl TryFrom<TableData> for DfaTable {
    type Error = DfaError;

    fn try_from(data: TableData) -> std::result::Result<Self, Self::Error> {
        let TableData {
            mut states,
            symbols,
            mut modes,
        } = data;

        if states.is_empty() {
            return Err(DfaError::NoStates);
        }
        let state_count = states.len();
        let check_state = |target: StateID, context: &dyn Fn() -> String| {
            if target.as_usize() < state_count {
                Ok(())
            } else {
                Err(DfaError::InvalidState {
                    state: target.as_usize(),
                    context: context(),
                })
            }
        };

        for (index, state) in states.iter_mut().enumerate() {
            state.transitions.sort_by_key(|(range, _)| range.start);
            for (range, target) in &state.transitions {
                if range.start > range.end {
                    return Err(DfaError::InvalidRange {
                        state: index,
                        start: range.start,
                        end: range.end,
                    });
                }
                check_state(*target, &|| format!("state {index}"))?;
            }
            if let Some(overlap) = state
                .transitions
                .windows(2)
                .find(|pair| pair[1].0.start <= pair[0].0.end)
            {
                return Err(DfaError::OverlappingTransitions {
                    state: index,
                    at: overlap[1].0.start,
                });
            }
            if let Some(target) = state.eof_transition {
                check_state(target, &|| format!("the end-of-input transition of state {index}"))?;
            }

            state.accepting.sort();
            state.accepting.dedup();
            if let Some(symbol) = state
                .accepting
                .iter()
                .find(|symbol| symbol.as_usize() >= symbols.len())
            {
                return Err(DfaError::InvalidSymbol {
                    symbol: symbol.as_usize(),
                    state: index,
                });
            }
        }

        if modes.is_empty() {
            modes.push(Mode {
                name: "INITIAL".to_string(),
                start_state: StateID::new(0),
            });
        }
        for mode in &modes {
            check_state(mode.start_state, &|| format!("mode {}", mode.name))?;
        }

        let mut symbol_ids = FxHashMap::default();
        for (index, symbol) in symbols.iter().enumerate() {
            let id = SymbolID::new(index as SymbolIDBase);
            if symbol_ids.insert(symbol.name.clone(), id).is_some() {
                return Err(DfaError::DuplicateSymbol(symbol.name.clone()));
            }
        }
        let has_reject_actions = symbols.iter().any(|symbol| symbol.rejectable);

        trace!(
            "Validated table with {} states, {} symbols and {} modes",
            states.len(),
            symbols.len(),
            modes.len()
        );

        Ok(Self {
            states,
            symbols,
            modes,
            symbol_ids,
            has_reject_actions,
        })
    }
}

impl From<DfaTable> for TableData {
    fn from(table: DfaTable) -> Self {
        TableData {
            states: table.states,
            symbols: table.symbols,
            modes: table.modes,
        }
    }
}

/// A builder for an automaton table.
///
/// States and symbols are numbered in the order they are added, starting with 0.
/// Validation happens in [`DfaTableBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct DfaTableBuilder {
    data: TableData,
    // Number of states added with `add_state`. States behind it are placeholders created by
    // transitions from states not added yet.
    added_states: usize,
}

impl DfaTableBuilder {
    /// Creates a new table builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a symbol. Its index is the number of symbols added before.
    pub fn add_symbol(mut self, symbol: Symbol) -> Self {
        self.data.symbols.push(symbol);
        self
    }

    /// Adds multiple plain symbols by name.
    pub fn add_symbols(mut self, names: &[&str]) -> Self {
        self.data
            .symbols
            .extend(names.iter().map(|name| Symbol::new(name)));
        self
    }

    /// Adds a state accepting the given symbol indices. Its index is the number of states added
    /// before. The order of `accepting` is irrelevant, priority is given by the symbol index.
    /// Transitions already given for this index are kept.
    pub fn add_state(mut self, accepting: &[SymbolIDBase]) -> Self {
        let accepting = accepting.iter().map(|s| SymbolID::new(*s)).collect();
        match self.data.states.get_mut(self.added_states) {
            Some(placeholder) => placeholder.accepting = accepting,
            None => self.data.states.push(DfaState {
                accepting,
                ..Default::default()
            }),
        }
        self.added_states += 1;
        self
    }

    /// Adds a transition from state `from` to state `to` on the characters in `range`.
    /// If `from` has not been added yet, a non-accepting placeholder is created for it, which a
    /// later [`DfaTableBuilder::add_state`] with the same index completes.
    pub fn add_transition(
        mut self,
        from: StateIDBase,
        range: impl Into<CharRange>,
        to: StateIDBase,
    ) -> Self {
        self.state_mut(from)
            .transitions
            .push((range.into(), StateID::new(to)));
        self
    }

    /// Adds a transition from state `from` to state `to` on the end of the input.
    pub fn add_eof_transition(mut self, from: StateIDBase, to: StateIDBase) -> Self {
        self.state_mut(from).eof_transition = Some(StateID::new(to));
        self
    }

    /// Adds a mode starting in state `start_state`.
    /// If no mode is added, a mode `INITIAL` starting in state 0 is created.
    pub fn add_mode(mut self, name: &str, start_state: StateIDBase) -> Self {
        self.data.modes.push(Mode {
            name: name.to_string(),
            start_state: StateID::new(start_state),
        });
        self
    }

    /// Validates the data and builds the table.
    pub fn build(self) -> Result<DfaTable> {
        Ok(DfaTable::try_from(self.data)?)
    }

    fn state_mut(&mut self, state: StateIDBase) -> &mut DfaState {
        let index = state as usize;
        if self.data.states.len() <= index {
            self.data.states.resize_with(index + 1, DfaState::default);
        }
        &mut self.data.states[index]
    }
}
