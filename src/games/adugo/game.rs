//! Adugo configuration and the [`Game`] trait implementation.
//!
//! All rule logic lives in `logic.rs`; this file only carries the tunable
//! parameters and wires the rules into the search engine's trait.

use crate::error::Result;
use crate::game_trait::Game;
use crate::player::{Player, Utility};

use super::logic;
use super::{AdugoAction, AdugoState};

/// Non-negative weights of the two heuristic terms.
///
/// The defaults heavily favor capture progress over jaguar mobility: a
/// capture outweighs any mobility swing the jaguar can achieve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeuristicWeights {
    pub capture: f32,
    pub mobility: f32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        HeuristicWeights {
            capture: 100.0,
            mobility: 1.0,
        }
    }
}

/// Search-facing game parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdugoConfig {
    /// Horizon at which the heuristic search stops recursing.
    pub max_depth: usize,
    pub weights: HeuristicWeights,
}

impl AdugoConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 10;
}

impl Default for AdugoConfig {
    fn default() -> Self {
        AdugoConfig {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            weights: HeuristicWeights::default(),
        }
    }
}

/// The Adugo rule engine.
#[derive(Clone, Debug, Default)]
pub struct AdugoGame {
    config: AdugoConfig,
}

impl AdugoGame {
    /// Game with the default depth and heuristic weights.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AdugoConfig) -> Self {
        AdugoGame { config }
    }

    /// Game with the default weights and a custom search horizon.
    pub fn with_max_depth(max_depth: usize) -> Self {
        AdugoGame {
            config: AdugoConfig {
                max_depth,
                ..AdugoConfig::default()
            },
        }
    }

    pub fn config(&self) -> &AdugoConfig {
        &self.config
    }
}

impl Game for AdugoGame {
    type State = AdugoState;
    type Action = AdugoAction;

    fn side_to_move(&self, state: &AdugoState) -> Player {
        state.to_move.role()
    }

    fn legal_actions(&self, state: &AdugoState) -> Vec<AdugoAction> {
        logic::legal_actions(state)
    }

    fn transition(&self, state: &AdugoState, action: &AdugoAction) -> Result<AdugoState> {
        logic::apply_action(state, action)
    }

    fn is_terminal(&self, state: &AdugoState) -> bool {
        logic::is_terminal(state)
    }

    fn is_cutoff(&self, state: &AdugoState, depth: usize) -> bool {
        depth >= self.config.max_depth || logic::is_terminal(state)
    }

    fn exact_utility(&self, state: &AdugoState) -> Result<Utility> {
        logic::exact_utility(state)
    }

    fn heuristic_value(&self, state: &AdugoState) -> Utility {
        logic::heuristic_value(state, &self.config.weights)
    }
}
