//! # Adugo (Jaguar and Dogs)
//!
//! A capture game on an irregular 31-cell graph: fourteen dogs try to
//! immobilize a lone jaguar, while the jaguar wins by capturing five dogs.
//! The jaguar moves one step along a board edge, or jumps over an adjacent
//! dog onto the empty cell straight behind it, removing the dog; the dogs
//! only ever step. The jaguar moves first.
//!
//! Submodules:
//! - `board`: static adjacency and line/alignment data
//! - `logic`: move generation, transitions, terminal test, evaluation
//! - `game`: configuration and the [`Game`](crate::Game) trait impl
//!
//! The dogs play the maximizer role and the jaguar the minimizer, matching
//! the utility domain: a dogs win is [`WIN`](crate::player::WIN), a jaguar
//! win is [`LOSS`](crate::player::LOSS).

pub mod board;
pub mod game;
pub mod logic;


pub use board::{BOARD_WIDTH, GRID_DIMENSION};
pub use game::{AdugoConfig, AdugoGame, HeuristicWeights};
pub use logic::{CAPTURE_THRESHOLD, MAX_JAGUAR_MOBILITY, STARTING_DOGS};

use std::fmt;

use crate::player::Player;

/// Content of one board slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    /// Permanently unplayable slot (the layout filler around the triangle).
    Blocked,
    Dog,
    Jaguar,
}

impl Cell {
    /// Protocol character for this cell, as the game server prints boards.
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Blocked => '@',
            Cell::Dog => 'c',
            Cell::Jaguar => 'o',
        }
    }
}

/// One of the two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Dogs,
    Jaguar,
}

impl Side {
    /// The piece symbol this side moves.
    pub fn piece(self) -> Cell {
        match self {
            Side::Dogs => Cell::Dog,
            Side::Jaguar => Cell::Jaguar,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Dogs => Side::Jaguar,
            Side::Jaguar => Side::Dogs,
        }
    }

    /// Search role of this side: dogs maximize, the jaguar minimizes.
    pub fn role(self) -> Player {
        match self {
            Side::Dogs => Player::Maximizer,
            Side::Jaguar => Player::Minimizer,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.piece().as_char())
    }
}

/// Full game state: board contents plus the side to move.
///
/// `Eq`/`Hash` cover both fields, which is what keys the transposition
/// cache. Blocked slots never change after construction; new states are
/// only ever produced by [`logic::apply_action`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AdugoState {
    pub cells: [Cell; GRID_DIMENSION],
    pub to_move: Side,
}

impl AdugoState {
    /// Starting position: dogs fill the first three rows, the jaguar sits
    /// on the center cell, and the jaguar moves first.
    pub fn initial() -> Self {
        let mut cells = [Cell::Empty; GRID_DIMENSION];
        for cell in cells.iter_mut().take(15) {
            *cell = Cell::Dog;
        }
        cells[12] = Cell::Jaguar;
        for blocked in [25, 29, 31, 33] {
            cells[blocked] = Cell::Blocked;
        }
        AdugoState {
            cells,
            to_move: Side::Jaguar,
        }
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }
}

impl fmt::Display for AdugoState {
    /// Bordered board text in the game server's format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#######")?;
        for row in 0..5 {
            write!(f, "#")?;
            for col in 0..BOARD_WIDTH {
                write!(f, "{}", self.cells[row * BOARD_WIDTH + col].as_char())?;
            }
            writeln!(f, "#")?;
        }
        writeln!(
            f,
            "# {}{}{} #",
            self.cells[26].as_char(),
            self.cells[27].as_char(),
            self.cells[28].as_char()
        )?;
        writeln!(
            f,
            "#{} {} {}#",
            self.cells[30].as_char(),
            self.cells[32].as_char(),
            self.cells[34].as_char()
        )?;
        writeln!(f, "#######")
    }
}

/// A move: which side, from which slot, to which slot.
///
/// The move is a capture exactly when origin and destination are not
/// direct neighbors; the jumped dog is recovered from the board geometry,
/// never stored in the action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AdugoAction {
    pub side: Side,
    pub from: usize,
    pub to: usize,
}

impl AdugoAction {
    pub fn new(side: Side, from: usize, to: usize) -> Self {
        AdugoAction { side, from, to }
    }

    /// True iff this move jumps (and removes) a dog.
    pub fn is_capture(&self) -> bool {
        !board::is_neighbor(self.from, self.to)
    }
}

impl fmt::Display for AdugoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.side, self.from, self.to)
    }
}
