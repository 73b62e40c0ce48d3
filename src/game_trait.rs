//! # Game Trait
//!
//! Core trait that all searchable games must implement.
//!
//! The search algorithms treat states and actions as opaque values - they
//! never inspect or interpret them. All game-specific logic (move
//! generation, transitions, terminal detection, evaluation) is delegated to
//! trait methods, so the engine is generic over any rule set rather than
//! over a class hierarchy.
//!
//! ## Contract
//!
//! - `legal_actions` must be deterministic: same state, same order. The
//!   search breaks ties by keeping the first extremal action, so move
//!   ordering decides which of several equally good actions is returned.
//! - `transition` is pure: the input state is never mutated, and an invalid
//!   action yields an explicit error rather than a corrupted state.
//! - `exact_utility` is defined only for terminal states; calling it on a
//!   live position is a programming error, never silently substituted with
//!   a heuristic.
//! - `heuristic_value` must agree with `exact_utility` on terminal states
//!   so that shortening the horizon never changes the value of a finished
//!   game.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;
use crate::player::{Player, Utility};

/// Capability set the search engine requires from a rule engine.
pub trait Game {
    /// Full game state, including which side is to move.
    ///
    /// `Eq`/`Hash` key the transposition cache, so they must cover the side
    /// to move as well as the board: the value of a position depends on who
    /// moves next.
    type State: Clone + Eq + Hash + Debug;

    /// A move. Opaque to the search; only the game interprets it.
    type Action: Clone + PartialEq + Debug;

    /// Role of the side to move in the given state.
    fn side_to_move(&self, state: &Self::State) -> Player;

    /// All legal actions for the side to move, in a deterministic order.
    ///
    /// Empty only when the side to move cannot act (normally that means the
    /// state is terminal).
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// State resulting from taking the action, leaving the input untouched.
    fn transition(&self, state: &Self::State, action: &Self::Action) -> Result<Self::State>;

    /// True when the game is over in the given state.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// True when the search should stop recursing at this depth.
    ///
    /// Terminal states are always cutoffs; games with a depth horizon also
    /// cut off once `depth` reaches it. The default is terminal-only, which
    /// turns the cutoff search into an exact one.
    fn is_cutoff(&self, state: &Self::State, depth: usize) -> bool {
        let _ = depth;
        self.is_terminal(state)
    }

    /// Exact game-theoretic value of a terminal state.
    ///
    /// Fails with [`crate::Error::NonTerminalState`] on live positions.
    fn exact_utility(&self, state: &Self::State) -> Result<Utility>;

    /// Heuristic estimate of the state's value.
    ///
    /// Exactly equals `exact_utility` on terminal states; strictly between
    /// the loss and win values everywhere else.
    fn heuristic_value(&self, state: &Self::State) -> Utility;
}
