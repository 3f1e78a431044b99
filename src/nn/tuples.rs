//! Feature tuple catalog.
//!
//! A tuple is an ordered, fixed-length list of board coordinates. The
//! standard catalog enumerates every adjacent pair along the four line
//! directions of the 8x8 grid, in family order:
//!
//!   horizontal  (r, c)-(r, c+1)   7 per row x 8 rows  = 56
//!   vertical    (r, c)-(r+1, c)   8 per row x 7 rows  = 56
//!   down-right  (r, c)-(r+1, c+1) 7 x 7               = 49
//!   down-left   (r, c)-(r+1, c-1) 7 x 7               = 49
//!
//! for 210 tuples total. The catalog is generated once, is order-stable,
//! and is shared read-only by every network that does not supply its own.

use serde::{Deserialize, Serialize};

use crate::board::{Coord, BOARD_SIZE};
use crate::error::InvalidQuery;

/// An ordered catalog of feature tuples. Every coordinate is validated
/// to lie on the board; tuples may have any positive length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TupleSet {
    tuples: Vec<Vec<Coord>>,
}

impl TupleSet {
    /// The standard catalog: all axis-aligned and diagonal adjacent
    /// pairs, 210 tuples of length 2.
    pub fn adjacent_pairs() -> Self {
        let mut tuples = Vec::with_capacity(210);
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE - 1 {
                tuples.push(vec![(r, c), (r, c + 1)]);
            }
        }
        for r in 0..BOARD_SIZE - 1 {
            for c in 0..BOARD_SIZE {
                tuples.push(vec![(r, c), (r + 1, c)]);
            }
        }
        for r in 0..BOARD_SIZE - 1 {
            for c in 0..BOARD_SIZE - 1 {
                tuples.push(vec![(r, c), (r + 1, c + 1)]);
            }
        }
        for r in 0..BOARD_SIZE - 1 {
            for c in 1..BOARD_SIZE {
                tuples.push(vec![(r, c), (r + 1, c - 1)]);
            }
        }
        TupleSet { tuples }
    }

    /// Builds a custom catalog, rejecting empty tuples and off-board
    /// coordinates.
    pub fn from_tuples(tuples: Vec<Vec<Coord>>) -> Result<Self, InvalidQuery> {
        for (i, tuple) in tuples.iter().enumerate() {
            if tuple.is_empty() {
                return Err(InvalidQuery::EmptyTuple { tuple: i });
            }
            for &(row, col) in tuple {
                if row >= BOARD_SIZE || col >= BOARD_SIZE {
                    return Err(InvalidQuery::TupleOutOfBounds { tuple: i, row, col });
                }
            }
        }
        Ok(TupleSet { tuples })
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<Coord>> {
        self.tuples.iter()
    }

    /// The `i`-th tuple's coordinates, in order.
    pub fn tuple(&self, i: usize) -> &[Coord] {
        &self.tuples[i]
    }

    /// Table size for the `i`-th tuple: one slot per trinary encoding
    /// of its cells.
    pub fn table_size(&self, i: usize) -> usize {
        3usize.pow(self.tuples[i].len() as u32)
    }
}
