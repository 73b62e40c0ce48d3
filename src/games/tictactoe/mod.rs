//! # Tic-Tac-Toe
//!
//! A minimal [`Game`] implementation for the classic 3x3 game.
//!
//! Small enough for exhaustive minimax, which makes it the cross-check
//! instance for the search engine: the cutoff variants must agree with the
//! brute-force value on it. `X` plays the maximizer role and `O` the
//! minimizer; `is_cutoff` stays terminal-only (the trait default), so the
//! heuristic search degenerates to an exact one here.

#[cfg(test)]
mod tictactoe_tests;

use std::fmt;

use crate::error::{Error, Result};
use crate::game_trait::Game;
use crate::player::{Player, Utility, DRAW, LOSS, WIN};

/// Number of board cells.
pub const CELLS: usize = 9;

/// The eight winning lines: rows, columns, diagonals.
static LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark. `X` maximizes, `O` minimizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn role(self) -> Player {
        match self {
            Mark::X => Player::Maximizer,
            Mark::O => Player::Minimizer,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Board contents plus the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TicTacToeState {
    pub cells: [Option<Mark>; CELLS],
    pub to_move: Mark,
}

impl TicTacToeState {
    /// Empty board, `X` to move.
    pub fn initial() -> Self {
        TicTacToeState {
            cells: [None; CELLS],
            to_move: Mark::X,
        }
    }

    /// Mark owning a full line, if any.
    pub fn winner(&self) -> Option<Mark> {
        for line in &LINES {
            if let Some(mark) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(mark) && self.cells[line[2]] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }
}

/// Place the side-to-move's mark on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TicTacToeAction {
    pub mark: Mark,
    pub cell: usize,
}

/// Tic-tac-toe rule engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToeGame;

impl TicTacToeGame {
    pub fn new() -> Self {
        TicTacToeGame
    }
}

impl Game for TicTacToeGame {
    type State = TicTacToeState;
    type Action = TicTacToeAction;

    fn side_to_move(&self, state: &TicTacToeState) -> Player {
        state.to_move.role()
    }

    fn legal_actions(&self, state: &TicTacToeState) -> Vec<TicTacToeAction> {
        if state.winner().is_some() {
            return Vec::new();
        }
        state
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(cell, _)| TicTacToeAction {
                mark: state.to_move,
                cell,
            })
            .collect()
    }

    fn transition(
        &self,
        state: &TicTacToeState,
        action: &TicTacToeAction,
    ) -> Result<TicTacToeState> {
        if action.mark != state.to_move {
            return Err(Error::WrongSideToMove);
        }
        if state.cells[action.cell].is_some() {
            return Err(Error::OccupiedCell { cell: action.cell });
        }
        let mut next = state.clone();
        next.cells[action.cell] = Some(action.mark);
        next.to_move = state.to_move.opponent();
        Ok(next)
    }

    fn is_terminal(&self, state: &TicTacToeState) -> bool {
        state.winner().is_some() || state.is_full()
    }

    fn exact_utility(&self, state: &TicTacToeState) -> Result<Utility> {
        match state.winner() {
            Some(Mark::X) => Ok(WIN),
            Some(Mark::O) => Ok(LOSS),
            None if state.is_full() => Ok(DRAW),
            None => Err(Error::NonTerminalState),
        }
    }

    fn heuristic_value(&self, state: &TicTacToeState) -> Utility {
        // Terminal states keep their exact value; anything else counts as
        // balanced, which is enough for a game this small.
        self.exact_utility(state).unwrap_or(DRAW)
    }
}
