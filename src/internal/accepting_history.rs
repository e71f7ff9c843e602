use crate::SymbolID;

/// An accepting state entered during the forward scan of one token.
///
/// It holds the accepted symbols in priority order and the position of the character source
/// right behind the characters consumed to reach the state. It is never changed after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AcceptState<'a> {
    symbols: &'a [SymbolID],
    position: usize,
}

impl<'a> AcceptState<'a> {
    #[inline]
    pub(crate) fn new(symbols: &'a [SymbolID], position: usize) -> Self {
        debug_assert!(!symbols.is_empty(), "an accept state needs symbols");
        Self { symbols, position }
    }

    #[inline]
    pub(crate) fn symbols(&self) -> &'a [SymbolID] {
        self.symbols
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.position
    }
}

/// The accepting states of one scan, the longest match on top.
///
/// Records are only pushed during the forward scan and only popped during resolution.
#[derive(Debug, Default)]
pub(crate) struct AcceptingHistory<'a> {
    stack: Vec<AcceptState<'a>>,
}

impl<'a> AcceptingHistory<'a> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn push(&mut self, accept_state: AcceptState<'a>) {
        debug_assert!(
            self.stack
                .last()
                .map_or(true, |top| top.position() <= accept_state.position()),
            "accepting positions must not decrease"
        );
        self.stack.push(accept_state);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<AcceptState<'a>> {
        self.stack.pop()
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.stack.clear();
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_is_popped_first() {
        let short = [SymbolID::new(2)];
        let long = [SymbolID::new(0), SymbolID::new(1)];
        let mut history = AcceptingHistory::new();
        history.push(AcceptState::new(&short, 1));
        history.push(AcceptState::new(&long, 3));
        assert_eq!(history.len(), 2);

        let top = history.pop().unwrap();
        assert_eq!(top.position(), 3);
        assert_eq!(top.symbols(), &long);
        let next = history.pop().unwrap();
        assert_eq!(next.position(), 1);
        assert_eq!(next.symbols(), &short);
        assert!(history.pop().is_none());
        assert!(history.is_empty());
    }

    #[test]
    #[should_panic(expected = "accepting positions must not decrease")]
    #[cfg(debug_assertions)]
    fn test_decreasing_position_is_detected() {
        let symbols = [SymbolID::new(0)];
        let mut history = AcceptingHistory::new();
        history.push(AcceptState::new(&symbols, 4));
        history.push(AcceptState::new(&symbols, 2));
    }
}
