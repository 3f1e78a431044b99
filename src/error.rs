//! Error types shared across the engine.
//!
//! Two kinds cover the whole core: [`IllegalMove`] for rejected board
//! mutations and [`InvalidQuery`] for reads or loads that cannot be
//! answered. Both are synchronous and non-retryable; the engine never
//! retries internally or substitutes a different move or value.

use crate::board::Player;

/// A move request the rules engine rejected. The game state is left
/// untouched (all-or-nothing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("it is not {player}'s turn")]
    NotYourTurn { player: Player },

    #[error("placing at ({row}, {col}) flips no discs")]
    NoFlips { row: usize, col: usize },
}

/// A query or load the core cannot answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidQuery {
    #[error("winner requested before the game is terminal")]
    GameInProgress,

    #[error("tuple {tuple} has coordinate ({row}, {col}) off the board")]
    TupleOutOfBounds { tuple: usize, row: usize, col: usize },

    #[error("tuple {tuple} is empty")]
    EmptyTuple { tuple: usize },

    #[error("expected {expected} weight tables, found {found}")]
    TableCountMismatch { expected: usize, found: usize },

    #[error("table {tuple} has {found} entries, expected 3^{tuple_len} = {expected}")]
    TableSizeMismatch {
        tuple: usize,
        tuple_len: usize,
        expected: usize,
        found: usize,
    },
}
