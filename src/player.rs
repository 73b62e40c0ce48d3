//! # Player Roles and Utility Domain
//!
//! The search engine only ever reasons about two abstract roles: the
//! maximizer and the minimizer. Which concrete game side plays which role is
//! decided by the game implementation (in Adugo the dogs maximize, the
//! jaguar minimizes).
//!
//! Utilities are bounded scalars in `[LOSS, WIN]`. Exact (terminal) values
//! are one of `WIN`, `LOSS`, `DRAW`; heuristic estimates lie strictly
//! between `LOSS` and `WIN`.

use std::fmt;

/// The two-sided identity a game state hands to the search engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Maximizer,
    Minimizer,
}

impl Player {
    /// The opposing role.
    pub fn opponent(self) -> Player {
        match self {
            Player::Maximizer => Player::Minimizer,
            Player::Minimizer => Player::Maximizer,
        }
    }

    pub fn is_maximizer(self) -> bool {
        self == Player::Maximizer
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Maximizer => write!(f, "MAX"),
            Player::Minimizer => write!(f, "MIN"),
        }
    }
}

/// Scalar game value from the maximizer's perspective.
///
/// Must be a floating-point type so heuristic estimates can fall between
/// the exact terminal values.
pub type Utility = f32;

/// Terminal value of a maximizer win.
pub const WIN: Utility = 1.0;

/// Terminal value of a maximizer loss (minimizer win).
pub const LOSS: Utility = -1.0;

/// Terminal value of a drawn game.
pub const DRAW: Utility = 0.0;
