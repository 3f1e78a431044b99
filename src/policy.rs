//! Move-selection policies.
//!
//! A policy is anything that can pick a coordinate for the side to
//! move. The engine stays agnostic to which policy drives it; failures
//! are typed so the caller decides any fallback explicitly rather than
//! a policy silently substituting another move.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Coord;
use crate::game::Game;
use crate::movegen;
use crate::nn::NTupleNetwork;

/// Why a policy could not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("no legal move for the side to move")]
    NoLegalMove,
}

/// Selects the next move for the game's current player.
pub trait MovePolicy {
    fn select_move(&mut self, game: &Game) -> Result<Coord, PolicyError>;
}

/// Picks uniformly at random among the legal moves.
pub struct RandomPolicy {
    rng: SmallRng,
}

impl RandomPolicy {
    /// Seed 0 means entropy.
    pub fn new(seed: u64) -> Self {
        let rng = if seed != 0 {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_entropy()
        };
        RandomPolicy { rng }
    }
}

impl MovePolicy for RandomPolicy {
    fn select_move(&mut self, game: &Game) -> Result<Coord, PolicyError> {
        movegen::random_move(game.board(), game.current_player(), &mut self.rng)
            .ok_or(PolicyError::NoLegalMove)
    }
}

/// Greedy one-ply policy over the value network: tries each legal move
/// and keeps the one whose after-state evaluates highest for the mover.
/// With probability `epsilon` it explores randomly instead.
pub struct ValuePolicy<'n> {
    network: &'n NTupleNetwork,
    epsilon: f64,
    rng: SmallRng,
}

impl<'n> ValuePolicy<'n> {
    pub fn new(network: &'n NTupleNetwork, seed: u64) -> Self {
        Self::with_epsilon(network, 0.0, seed)
    }

    pub fn with_epsilon(network: &'n NTupleNetwork, epsilon: f64, seed: u64) -> Self {
        let rng = if seed != 0 {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_entropy()
        };
        ValuePolicy {
            network,
            epsilon,
            rng,
        }
    }
}

impl MovePolicy for ValuePolicy<'_> {
    fn select_move(&mut self, game: &Game) -> Result<Coord, PolicyError> {
        let player = game.current_player();
        let moves = game.legal_moves(player);
        if moves.is_empty() {
            return Err(PolicyError::NoLegalMove);
        }
        if self.epsilon > 0.0 && self.rng.gen::<f64>() < self.epsilon {
            return Ok(moves[self.rng.gen_range(0..moves.len())]);
        }

        let mut best = moves[0];
        let mut best_value = f64::NEG_INFINITY;
        for &(row, col) in &moves {
            let mut after = *game;
            // Legal by construction.
            after
                .play(row, col, player)
                .unwrap_or_else(|e| unreachable!("legal move rejected: {e}"));
            let value = self.network.value(after.board(), player);
            if value > best_value {
                best_value = value;
                best = (row, col);
            }
        }
        Ok(best)
    }
}
