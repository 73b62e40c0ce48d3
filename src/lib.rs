//! # adugo-search
//!
//! A generic adversarial game-tree search engine (minimax, alpha-beta, and
//! a depth-bounded heuristic variant with a transposition cache), exercised
//! by a rule engine for Adugo, the jaguar-and-dogs capture game played on
//! an irregular graph.
//!
//! The search in `minimax` is generic over the [`Game`] capability trait;
//! all game knowledge lives behind it. Concrete games sit under `games/`.

// Generic search infrastructure
mod error; // Crate error type
mod game_trait; // Game trait abstraction
mod metrics; // Per-search counters
mod minimax; // Minimax / alpha-beta / heuristic cutoff search
mod transposition; // Generic transposition cache

#[cfg(test)]
mod transposition_tests;

// Game implementations
pub mod games; // Game implementations module (contains adugo/, tictactoe/)
pub mod player; // Maximizer/minimizer roles and the utility domain

pub use error::{Error, Result};
pub use game_trait::Game;
pub use metrics::SearchMetrics;
pub use minimax::{
    find_best_action, heuristic_minimax_search, minimax_search, minimax_search_with_pruning,
    SearchOutcome,
};
pub use player::{Player, Utility, DRAW, LOSS, WIN};
pub use transposition::TranspositionTable;
