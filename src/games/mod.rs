//! # Game Implementations
//!
//! Concrete rule engines implementing the [`Game`](crate::Game) trait.
//!
//! - **Adugo**: the jaguar-and-dogs capture game on an irregular graph
//!   (see `adugo/`)
//! - **TicTacToe**: classic 3x3 game, the minimal example and search
//!   cross-check instance

pub mod adugo;
pub mod tictactoe;

pub use adugo::{AdugoAction, AdugoConfig, AdugoGame, AdugoState};
pub use tictactoe::{TicTacToeAction, TicTacToeGame, TicTacToeState};
