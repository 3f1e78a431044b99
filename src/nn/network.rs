//! N-tuple value network: encoding, evaluation, update, persistence.
//!
//! Each cell is encoded as a trit relative to the evaluating player:
//! own disc = 2, empty = 0, opponent = 1. Note the asymmetry -- empty
//! is not the midpoint, and swapping the evaluating player changes
//! which trit stands for which physical color. A tuple's table index is
//! the base-3 positional encoding of its cells, coordinate `i`
//! contributing `trit_i * 3^i` within that tuple.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Player};
use crate::error::InvalidQuery;

use super::tuples::TupleSet;

/// Errors when loading a serialized network.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("malformed network JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Schema(#[from] InvalidQuery),
}

/// On-disk form of a network. Tables are meaningless without the
/// catalog that produced them, so the two always travel together.
#[derive(Serialize, Deserialize)]
struct SavedNetwork {
    tuples: TupleSet,
    tables: Vec<Vec<f64>>,
}

/// A linear value function over tuple lookup tables.
///
/// One dense table per tuple, sized `3^len`, zero-initialized. The
/// tables are owned exclusively by this instance and mutated only
/// through [`NTupleNetwork::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct NTupleNetwork {
    tuples: TupleSet,
    tables: Vec<Vec<f64>>,
}

/// Maps a cell to its trit from `player`'s perspective.
fn cell_trit(cell: Cell, player: Player) -> usize {
    match cell.owner() {
        Some(owner) if owner == player => 2,
        Some(_) => 1,
        None => 0,
    }
}

impl NTupleNetwork {
    /// A network over the standard adjacent-pair catalog.
    pub fn new() -> Self {
        Self::with_tuples(TupleSet::adjacent_pairs())
    }

    /// A network over a custom catalog, tables zero-initialized.
    pub fn with_tuples(tuples: TupleSet) -> Self {
        let tables = (0..tuples.len())
            .map(|i| vec![0.0; tuples.table_size(i)])
            .collect();
        NTupleNetwork { tuples, tables }
    }

    pub fn tuples(&self) -> &TupleSet {
        &self.tuples
    }

    /// Encodes the board into one table index per tuple, from `player`'s
    /// perspective. Pure; identical boards yield identical indices.
    pub fn indices_for(&self, board: &Board, player: Player) -> Vec<usize> {
        self.tuples
            .iter()
            .map(|tuple| {
                let mut index = 0;
                let mut power = 1;
                for &(row, col) in tuple {
                    index += cell_trit(board.get(row, col), player) * power;
                    power *= 3;
                }
                index
            })
            .collect()
    }

    /// Sums the table entries at previously computed indices.
    pub fn value_from_indices(&self, indices: &[usize]) -> f64 {
        self.tables
            .iter()
            .zip(indices)
            .map(|(table, &idx)| table[idx])
            .sum()
    }

    /// Evaluates a board from `player`'s perspective. Linear in the
    /// number of tuples; no search.
    pub fn value(&self, board: &Board, player: Player) -> f64 {
        self.value_from_indices(&self.indices_for(board, player))
    }

    /// Moves the value at `indices` toward `target`, spreading
    /// `learning_rate * delta / n_tuples` into each touched table slot.
    /// Returns the pre-update error `delta` so callers can track
    /// convergence. This is the only mutator of the tables.
    pub fn update(&mut self, indices: &[usize], target: f64, learning_rate: f64) -> f64 {
        let delta = target - self.value_from_indices(indices);
        let step = learning_rate * delta / self.tables.len() as f64;
        for (table, &idx) in self.tables.iter_mut().zip(indices) {
            table[idx] += step;
        }
        delta
    }

    /// Serializes the catalog and tables together as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&SavedNetwork {
            tuples: self.tuples.clone(),
            tables: self.tables.clone(),
        })
    }

    /// Loads a network saved by [`NTupleNetwork::to_json`], validating
    /// that each table matches its tuple's `3^len` size.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let saved: SavedNetwork = serde_json::from_str(json)?;
        // Re-validate coordinates: the transparent TupleSet encoding
        // bypasses from_tuples on the wire.
        let tuples = TupleSet::from_tuples(saved.tuples.iter().cloned().collect())
            .map_err(LoadError::Schema)?;

        if saved.tables.len() != tuples.len() {
            return Err(InvalidQuery::TableCountMismatch {
                expected: tuples.len(),
                found: saved.tables.len(),
            }
            .into());
        }
        for (i, table) in saved.tables.iter().enumerate() {
            let expected = tuples.table_size(i);
            if table.len() != expected {
                return Err(InvalidQuery::TableSizeMismatch {
                    tuple: i,
                    tuple_len: tuples.tuple(i).len(),
                    expected,
                    found: table.len(),
                }
                .into());
            }
        }
        Ok(NTupleNetwork {
            tuples,
            tables: saved.tables,
        })
    }
}

impl Default for NTupleNetwork {
    fn default() -> Self {
        NTupleNetwork::new()
    }
}
