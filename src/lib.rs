//! Flipstone engine library.
//!
//! Exposes the board and rules engine, move generation, the n-tuple
//! value network, move-selection policies, the match store, and the
//! self-play trainer for use by integration tests and the binary
//! entry point.

pub mod board;
pub mod error;
pub mod game;
pub mod matches;
pub mod movegen;
pub mod nn;
pub mod policy;
pub mod selfplay;

pub use board::{Board, Cell, Coord, Outcome, Player, BOARD_SIZE};
pub use error::{IllegalMove, InvalidQuery};
pub use game::Game;
pub use nn::{NTupleNetwork, TupleSet};
