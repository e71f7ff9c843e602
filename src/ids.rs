#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! impl_id {
    ($(#[$meta:meta])* $name:ident, $tp:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
        pub struct $name($tp);

        impl $name {
            /// Create a new id.
            #[inline]
            pub const fn new(index: $tp) -> Self {
                $name(index)
            }

            /// Get the id as usize.
            #[inline]
            pub fn as_usize(&self) -> usize {
                self.0 as usize
            }

            /// Get the raw id.
            #[inline]
            pub fn id(&self) -> $tp {
                self.0
            }
        }

        impl<T> std::ops::Index<$name> for [T] {
            type Output = T;

            #[inline]
            fn index(&self, index: $name) -> &Self::Output {
                &self[index.0 as usize]
            }
        }

        impl<T> std::ops::Index<$name> for Vec<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: $name) -> &Self::Output {
                &self[index.0 as usize]
            }
        }

        impl<T> std::ops::IndexMut<$name> for Vec<T> {
            #[inline]
            fn index_mut(&mut self, index: $name) -> &mut T {
                &mut self[index.0 as usize]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$tp> for $name {
            fn from(index: $tp) -> Self {
                $name::new(index)
            }
        }
    };
}

/// The raw type of [`StateID`].
pub type StateIDBase = u32;
impl_id!(
    /// The ID type for automaton states.
    /// A missing transition is expressed as `None` instead of a dedicated dead state id.
    StateID,
    StateIDBase
);

/// The raw type of [`SymbolID`].
pub type SymbolIDBase = u32;
impl_id!(
    /// The ID type for lexical rules (symbols). It determines the priority of the rule, i.e. lower
    /// indices have higher priority if several rules accept at the same input position.
    SymbolID,
    SymbolIDBase
);

/// The raw type of [`ActionID`].
pub type ActionIDBase = u32;
impl_id!(
    /// An opaque handle of the semantic action attached to a symbol. The matcher only passes it
    /// on to the [`crate::ActionHook`].
    ActionID,
    ActionIDBase
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_ordering_and_indexing() {
        let data = vec!["a", "b", "c"];
        let id = SymbolID::new(1);
        assert_eq!(data[id], "b");
        assert!(SymbolID::new(0) < id);
        assert_eq!(StateID::from(4).as_usize(), 4);
        assert_eq!(ActionID::new(9).to_string(), "9");
    }
}
