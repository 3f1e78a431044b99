//! Board representation and game-state types.
//!
//! Contains the core data structures for cells, players, outcomes, and
//! the fixed 8x8 grid.

pub mod cell;
pub mod grid;

pub use cell::{Cell, Outcome, Player};
pub use grid::{Board, BOARD_SIZE};

/// A board coordinate as `(row, col)`, zero-indexed from the top-left.
pub type Coord = (usize, usize);
