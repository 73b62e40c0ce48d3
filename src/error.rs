//! Error types for the adugo-search crate

use thiserror::Error;

/// Main error type for the adugo-search crate
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("action symbol does not match the side to move")]
    WrongSideToMove,

    #[error("destination cell {cell} is blocked")]
    BlockedDestination { cell: usize },

    #[error("cell {cell} is already occupied")]
    OccupiedCell { cell: usize },

    #[error("exact utility requested for a non-terminal state")]
    NonTerminalState,

    #[error("capture {origin} -> {destination} has no unique middle cell")]
    InconsistentCapture { origin: usize, destination: usize },

    #[error("no legal actions available in a non-terminal state")]
    NoLegalActions,

    #[error("no response from the game server within {seconds} seconds")]
    ServerTimeout { seconds: u64 },
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
