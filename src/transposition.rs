//! # Transposition Cache
//!
//! Maps previously searched states to their computed values so the search
//! can reuse work when the same position is reached through different move
//! orders.
//!
//! The table is keyed by the full state value - board *and* side to move -
//! because the value of a position depends on who moves next; a key that
//! ignored the side to move could hand a value computed for one side to the
//! other.
//!
//! The table is an explicitly owned resource: the caller constructs it,
//! passes it `&mut` into each search, and may keep it alive across
//! sequential searches within one game session. The search is
//! single-threaded with exactly one writer, so a plain `HashMap` suffices
//! and no locking is involved.

use std::collections::HashMap;
use std::hash::Hash;

use crate::player::Utility;

/// Cache of state values, keyed by the full state (board + side to move).
#[derive(Debug, Default)]
pub struct TranspositionTable<S> {
    table: HashMap<S, Utility>,
}

impl<S: Clone + Eq + Hash> TranspositionTable<S> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Value previously stored for this state, if any.
    pub fn lookup(&self, state: &S) -> Option<Utility> {
        self.table.get(state).copied()
    }

    /// Store (or overwrite) the value computed for a state.
    pub fn store(&mut self, state: S, value: Utility) {
        self.table.insert(state, value);
    }

    /// Drop all cached values.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Number of cached states.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
