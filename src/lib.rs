#![forbid(missing_docs)]
//! # `lexreader`
//! The `lexreader` crate is the token matching engine of a lexer runtime.
//! Given a prebuilt deterministic automaton that encodes a set of lexical rules, it reads
//! characters from a seekable source and produces the next token by the longest match rule.
//! Among rules matching the same length, the rule with the lowest symbol index wins.
//!
//! The semantic action of a rule may reject its own match, a feature known from lex and flex as
//! `REJECT`. The matcher then offers the next best alternative to the actions: first the other
//! rules accepting at the same position, then the shorter matches, longest first.
//!
//! Two strategies implement the [`TokenMatcher`] protocol:
//! - [`SimpleMatcher`] keeps only the longest match seen so far and ignores rejections.
//! - [`RejectableMatcher`] keeps the full history of accepting states of a scan and backtracks
//!   through it on rejection.
//!
//! The [`MatcherBuilder`] selects the strategy once per session, depending on whether the
//! automaton has rules that may reject.
//!
//! # Example
//! ```rust
//! use lexreader::{
//!     ActionID, ActionOutcome, CharSource, DfaTableBuilder, Match, MatcherBuilder, StateID,
//!     StrSource, Symbol, TokenMatcher,
//! };
//!
//! // Rules: "ab" (symbol 1) and "a" (symbol 2). Symbol 0 is not used by any state.
//! let table = DfaTableBuilder::new()
//!     .add_symbols(&["Unused"])
//!     .add_symbol(Symbol::new("AB").rejectable())
//!     .add_symbol(Symbol::new("A"))
//!     .add_state(&[])
//!     .add_state(&[2])
//!     .add_state(&[1])
//!     .add_transition(0, 'a', 1)
//!     .add_transition(1, 'b', 2)
//!     .build()
//!     .expect("DfaTableBuilder error");
//!
//! // The action of "ab" always rejects.
//! let mut tokens = Vec::new();
//! let hook = |_: ActionID, matched: &Match| {
//!     if matched.symbol().id() == 1 {
//!         ActionOutcome::Reject
//!     } else {
//!         tokens.push(*matched);
//!         ActionOutcome::Accept
//!     }
//! };
//!
//! let mut matcher = MatcherBuilder::new(&table).build(StrSource::new("ab"), hook);
//! assert!(matcher.read_token(StateID::new(0)));
//! assert_eq!(matcher.source().cursor(), 1);
//! drop(matcher);
//! assert_eq!(tokens[0].symbol().id(), 2);
//! ```
//!
//! # Crate features
//! - `serde`: Enabled by default. Serialization of tables, matches and positions. Tables can
//!   be loaded from JSON with [`DfaTable::from_reader`].
//! - `dot_writer`: Enabled by default. Rendering of tables in graphviz dot format with
//!   [`DfaTable::render_dot`].

/// Module that provides the action hook
mod action;
pub use action::{AcceptAll, ActionHook, ActionOutcome};

/// Module that provides the automaton trait
mod automaton;
pub use automaton::Automaton;

/// Module that provides the character source trait and a string source
mod char_source;
pub use char_source::{CharSource, StrSource};

/// Module that provides a validated automaton table
mod dfa_table;
pub use dfa_table::{CharRange, DfaState, DfaTable, DfaTableBuilder, Mode, Symbol};

/// Module with error definitions
mod errors;
pub use errors::{DfaError, LexReaderError, LexReaderErrorKind, Result};

/// Module that provides a FindMatches type
mod find_matches;
pub use find_matches::{FindMatches, ModeSwitcher};

/// Module with the ID types
mod ids;
pub use ids::{ActionID, ActionIDBase, StateID, StateIDBase, SymbolID, SymbolIDBase};

/// The module with internal implementation details.
mod internal;

/// Module that provides a Match type
mod match_type;
pub use match_type::{Match, MatchExt};

/// The module with the strategy selected matcher.
mod matcher;
pub use matcher::{Matcher, Strategy};

/// The module with the matcher builder.
mod matcher_builder;
pub use matcher_builder::MatcherBuilder;

/// Module that provides a position type
mod position;
pub use position::{Position, PositionProvider};

/// The module with the backtracking matcher.
mod rejectable_matcher;
pub use rejectable_matcher::RejectableMatcher;

/// The module with the greedy matcher.
mod simple_matcher;
pub use simple_matcher::SimpleMatcher;

/// Module that provides a Span type
mod span;
pub use span::Span;

/// The module with the matcher protocol.
mod token_matcher;
pub use token_matcher::{ScanOutcome, TokenMatcher};

/// Module that provides a WithPositions type
mod with_positions;
pub use with_positions::{MatchExtIterator, WithPositions};
