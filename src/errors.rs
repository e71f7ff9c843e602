use thiserror::Error;

/// The result type for the `lexreader` crate.
pub type Result<T> = std::result::Result<T, LexReaderError>;

/// The error type for the `lexreader` crate.
#[derive(Error, Debug)]
pub struct LexReaderError {
    /// The source of the error.
    pub source: Box<LexReaderErrorKind>,
}

impl LexReaderError {
    /// Create a new `LexReaderError`.
    pub fn new(kind: LexReaderErrorKind) -> Self {
        LexReaderError {
            source: Box::new(kind),
        }
    }

    /// Returns the kind of the error.
    #[inline]
    pub fn kind(&self) -> &LexReaderErrorKind {
        &self.source
    }
}

impl std::fmt::Display for LexReaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum LexReaderErrorKind {
    /// A std::io error occurred.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// A table could not be read from or written to JSON.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// The automaton table is malformed.
    #[error(transparent)]
    DfaError(DfaError),

    /// No rule matched the input at the given offset.
    #[error("Unrecognized character {character:?} at offset {offset}")]
    UnrecognizedCharacter {
        /// The character that could not be matched.
        character: char,
        /// The byte offset of the character.
        offset: usize,
    },

    /// A mode was selected that the automaton does not define.
    #[error("Unknown mode {0}")]
    UnknownMode(usize),
}

impl From<std::io::Error> for LexReaderError {
    fn from(error: std::io::Error) -> Self {
        LexReaderError::new(LexReaderErrorKind::IoError(error))
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for LexReaderError {
    fn from(error: serde_json::Error) -> Self {
        LexReaderError::new(LexReaderErrorKind::JsonError(error))
    }
}

impl From<DfaError> for LexReaderError {
    fn from(error: DfaError) -> Self {
        LexReaderError::new(LexReaderErrorKind::DfaError(error))
    }
}

/// An error type for malformed automaton tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DfaError {
    /// The table has no states at all.
    #[error("The automaton has no states")]
    NoStates,

    /// A transition or a mode refers to a state that does not exist.
    #[error("State {state} referenced from {context} does not exist")]
    InvalidState {
        /// The referenced state.
        state: usize,
        /// Where the reference was found.
        context: String,
    },

    /// An accepting state refers to a symbol that does not exist.
    #[error("Symbol {symbol} accepted by state {state} does not exist")]
    InvalidSymbol {
        /// The referenced symbol.
        symbol: usize,
        /// The accepting state.
        state: usize,
    },

    /// A character range with its start behind its end.
    #[error("Invalid character range {start:?}..={end:?} in state {state}")]
    InvalidRange {
        /// The state the transition belongs to.
        state: usize,
        /// Start of the range.
        start: char,
        /// End of the range.
        end: char,
    },

    /// Two transitions of one state share characters, the table is not deterministic.
    #[error("Overlapping transitions in state {state} at {at:?}")]
    OverlappingTransitions {
        /// The state with the overlapping transitions.
        state: usize,
        /// The first character that is covered twice.
        at: char,
    },

    /// Two symbols share a name.
    #[error("Duplicate symbol name '{0}'")]
    DuplicateSymbol(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LexReaderError::new(LexReaderErrorKind::UnrecognizedCharacter {
            character: 'c',
            offset: 3,
        });
        assert_eq!(err.to_string(), "Unrecognized character 'c' at offset 3");

        let err: LexReaderError = DfaError::InvalidState {
            state: 7,
            context: "mode INITIAL".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "State 7 referenced from mode INITIAL does not exist"
        );
        assert!(matches!(err.kind(), LexReaderErrorKind::DfaError(_)));
    }
}
