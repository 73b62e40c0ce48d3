//! # Adversarial Search
//!
//! Minimax search in three strengths, generic over any [`Game`]:
//!
//! 1. [`minimax_search`] - exhaustive minimax; recursion ends only at
//!    terminal states. Tractable for toy games, used as the ground truth in
//!    cross-check tests.
//! 2. [`minimax_search_with_pruning`] - alpha-beta. Visits fewer nodes but
//!    returns exactly the value and action of the exhaustive search.
//! 3. [`heuristic_minimax_search`] - alpha-beta plus a depth cutoff with a
//!    heuristic fallback and a caller-owned transposition cache. This is
//!    the variant a driver runs every turn; [`find_best_action`] is its
//!    thin entry point.
//!
//! ## Architecture
//!
//! This module owns only the algorithms. All game knowledge - move
//! generation, transitions, terminal detection, evaluation - sits behind
//! the [`Game`] trait, so the same search runs Adugo, tic-tac-toe, or any
//! other two-player zero-sum rule set.
//!
//! Each algorithm is a single recursion parameterized by the role of the
//! side to move rather than a pair of mutually recursive max/min routines;
//! the pruning and caching logic exists once.
//!
//! ## Determinism
//!
//! Results are fully deterministic given the game's action order and the
//! cache contents at entry. Among equally valued actions the first one in
//! generation order wins.

use log::debug;

use crate::error::{Error, Result};
use crate::game_trait::Game;
use crate::metrics::SearchMetrics;
use crate::player::Utility;
use crate::transposition::TranspositionTable;

/// Result of one heuristic search invocation.
#[derive(Clone, Debug)]
pub struct SearchOutcome<A> {
    /// Best action found, or `None` when the root is terminal or has no
    /// legal actions.
    pub action: Option<A>,
    /// Value backed up to the root.
    pub value: Utility,
    /// Counters collected during this invocation.
    pub metrics: SearchMetrics,
}

// ============================================================================
// EXHAUSTIVE MINIMAX
// ============================================================================

/// Full-depth minimax without pruning.
///
/// Returns the optimal action for the side to move, or `Ok(None)` when the
/// state is terminal or offers no actions.
pub fn minimax_search<G: Game>(game: &G, state: &G::State) -> Result<Option<G::Action>> {
    if game.is_terminal(state) {
        return Ok(None);
    }
    let actions = game.legal_actions(state);
    if actions.is_empty() {
        return Ok(None);
    }

    let maximizing = game.side_to_move(state).is_maximizer();
    let mut best_action = None;
    let mut best_value = worst_for(maximizing);
    for action in actions {
        let child = game.transition(state, &action)?;
        let value = exhaustive_value(game, &child)?;
        if best_action.is_none() || improves(maximizing, value, best_value) {
            best_value = value;
            best_action = Some(action);
        }
    }
    Ok(best_action)
}

/// Exact minimax value of a state, no pruning, no horizon.
pub(crate) fn exhaustive_value<G: Game>(game: &G, state: &G::State) -> Result<Utility> {
    if game.is_terminal(state) {
        return game.exact_utility(state);
    }
    let actions = game.legal_actions(state);
    if actions.is_empty() {
        return Err(Error::NoLegalActions);
    }

    let maximizing = game.side_to_move(state).is_maximizer();
    let mut best = worst_for(maximizing);
    for action in &actions {
        let child = game.transition(state, action)?;
        let value = exhaustive_value(game, &child)?;
        if improves(maximizing, value, best) {
            best = value;
        }
    }
    Ok(best)
}

// ============================================================================
// ALPHA-BETA
// ============================================================================

/// Full-depth minimax with alpha-beta pruning.
///
/// Skips subtrees that provably cannot change the decision; the returned
/// value and action are identical to [`minimax_search`] on the same state.
pub fn minimax_search_with_pruning<G: Game>(
    game: &G,
    state: &G::State,
) -> Result<Option<G::Action>> {
    if game.is_terminal(state) {
        return Ok(None);
    }
    let actions = game.legal_actions(state);
    if actions.is_empty() {
        return Ok(None);
    }

    let maximizing = game.side_to_move(state).is_maximizer();
    let mut alpha = f32::NEG_INFINITY;
    let mut beta = f32::INFINITY;
    let mut best_action = None;
    let mut best_value = worst_for(maximizing);
    for action in actions {
        let child = game.transition(state, &action)?;
        let value = pruned_value(game, &child, alpha, beta)?;
        if best_action.is_none() || improves(maximizing, value, best_value) {
            best_value = value;
            best_action = Some(action);
        }
        // The root itself never cuts off; it only tightens the window.
        if maximizing {
            alpha = alpha.max(best_value);
        } else {
            beta = beta.min(best_value);
        }
    }
    Ok(best_action)
}

/// Minimax value under an (alpha, beta) window.
///
/// `alpha` is the best value the maximizer can already guarantee on the
/// path to this node, `beta` the minimizer's counterpart. Once the running
/// best meets the opposing bound the remaining siblings cannot matter and
/// the loop stops early.
pub(crate) fn pruned_value<G: Game>(
    game: &G,
    state: &G::State,
    mut alpha: Utility,
    mut beta: Utility,
) -> Result<Utility> {
    if game.is_terminal(state) {
        return game.exact_utility(state);
    }
    let actions = game.legal_actions(state);
    if actions.is_empty() {
        return Err(Error::NoLegalActions);
    }

    let maximizing = game.side_to_move(state).is_maximizer();
    let mut best = worst_for(maximizing);
    for action in &actions {
        let child = game.transition(state, action)?;
        let value = pruned_value(game, &child, alpha, beta)?;
        if maximizing {
            if value > best {
                best = value;
            }
            if best >= beta {
                break;
            }
            alpha = alpha.max(best);
        } else {
            if value < best {
                best = value;
            }
            if best <= alpha {
                break;
            }
            beta = beta.min(best);
        }
    }
    Ok(best)
}

// ============================================================================
// HEURISTIC CUTOFF + TRANSPOSITION CACHE
// ============================================================================

/// Depth-bounded alpha-beta with heuristic cutoff values and a
/// transposition cache.
///
/// Every resulting child state is looked up in `table` first; on a miss the
/// recursion runs at `depth + 1` and the returned value is stored under the
/// child's key before the action loop continues. The cache belongs to the
/// caller and may be carried across the searches of one game session.
pub fn heuristic_minimax_search<G: Game>(
    game: &G,
    state: &G::State,
    table: &mut TranspositionTable<G::State>,
) -> Result<SearchOutcome<G::Action>> {
    let mut metrics = SearchMetrics::new();

    if game.is_terminal(state) {
        let value = game.exact_utility(state)?;
        return Ok(SearchOutcome {
            action: None,
            value,
            metrics,
        });
    }
    let actions = game.legal_actions(state);
    if actions.is_empty() {
        return Ok(SearchOutcome {
            action: None,
            value: game.heuristic_value(state),
            metrics,
        });
    }

    let maximizing = game.side_to_move(state).is_maximizer();
    let mut alpha = f32::NEG_INFINITY;
    let mut beta = f32::INFINITY;
    let mut best_action = None;
    let mut best_value = worst_for(maximizing);
    for action in actions {
        let child = game.transition(state, &action)?;
        let value = cached_child_value(game, child, 1, alpha, beta, table, &mut metrics)?;
        if best_action.is_none() || improves(maximizing, value, best_value) {
            best_value = value;
            best_action = Some(action);
        }
        if maximizing {
            alpha = alpha.max(best_value);
        } else {
            beta = beta.min(best_value);
        }
    }

    debug!(
        "search done: value={:.4} nodes={} cache_hit_rate={:.2} prunes={} max_depth={}",
        best_value,
        metrics.nodes_visited,
        metrics.cache_hit_rate(),
        metrics.prunes,
        metrics.max_depth_reached,
    );

    Ok(SearchOutcome {
        action: best_action,
        value: best_value,
        metrics,
    })
}

/// Driver entry point: best action under the heuristic search, or `None`
/// when the state is terminal or offers no legal actions.
pub fn find_best_action<G: Game>(
    game: &G,
    state: &G::State,
    table: &mut TranspositionTable<G::State>,
) -> Result<Option<G::Action>> {
    let outcome = heuristic_minimax_search(game, state, table)?;
    Ok(outcome.action)
}

/// Cache-through evaluation of a child state.
fn cached_child_value<G: Game>(
    game: &G,
    child: G::State,
    depth: usize,
    alpha: Utility,
    beta: Utility,
    table: &mut TranspositionTable<G::State>,
    metrics: &mut SearchMetrics,
) -> Result<Utility> {
    if let Some(value) = table.lookup(&child) {
        metrics.record_cache_hit();
        return Ok(value);
    }
    metrics.record_cache_miss();
    let value = cutoff_value(game, &child, depth, alpha, beta, table, metrics)?;
    table.store(child, value);
    Ok(value)
}

/// Depth-bounded alpha-beta value with heuristic fallback at the horizon.
fn cutoff_value<G: Game>(
    game: &G,
    state: &G::State,
    depth: usize,
    mut alpha: Utility,
    mut beta: Utility,
    table: &mut TranspositionTable<G::State>,
    metrics: &mut SearchMetrics,
) -> Result<Utility> {
    metrics.record_node();
    metrics.record_depth(depth);

    if game.is_cutoff(state, depth) {
        return if game.is_terminal(state) {
            game.exact_utility(state)
        } else {
            Ok(game.heuristic_value(state))
        };
    }
    let actions = game.legal_actions(state);
    if actions.is_empty() {
        return Err(Error::NoLegalActions);
    }

    let maximizing = game.side_to_move(state).is_maximizer();
    let mut best = worst_for(maximizing);
    for action in &actions {
        let child = game.transition(state, action)?;
        let value = cached_child_value(game, child, depth + 1, alpha, beta, table, metrics)?;
        if maximizing {
            if value > best {
                best = value;
            }
            if best >= beta {
                metrics.record_prune();
                break;
            }
            alpha = alpha.max(best);
        } else {
            if value < best {
                best = value;
            }
            if best <= alpha {
                metrics.record_prune();
                break;
            }
            beta = beta.min(best);
        }
    }
    Ok(best)
}

#[inline]
fn worst_for(maximizing: bool) -> Utility {
    if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    }
}

#[inline]
fn improves(maximizing: bool, value: Utility, best: Utility) -> bool {
    if maximizing {
        value > best
    } else {
        value < best
    }
}
