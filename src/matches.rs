//! In-memory match registry.
//!
//! An explicit, owned store keyed by match id. Callers inject the store
//! where they need it; there is no ambient global. Lifecycle is
//! create / lookup / play / evict, with typed failures.

use std::collections::HashMap;

use crate::board::Player;
use crate::error::IllegalMove;
use crate::game::Game;

/// Opaque match identifier, unique within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchId(u64);

impl MatchId {
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// What the human (or caller) side is playing against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    Random,
    Agent,
    Pvp,
}

/// One tracked match: a game plus its opponent tag.
#[derive(Debug, Clone)]
pub struct Match {
    pub id: MatchId,
    pub game: Game,
    pub opponent: Opponent,
}

/// Errors from store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("match {} not found", .0.raw())]
    NotFound(MatchId),

    #[error(transparent)]
    Illegal(#[from] IllegalMove),
}

/// Registry of live matches.
#[derive(Debug, Default)]
pub struct MatchStore {
    next_id: u64,
    matches: HashMap<MatchId, Match>,
}

impl MatchStore {
    pub fn new() -> Self {
        MatchStore::default()
    }

    /// Starts a new match against `opponent` and returns its id.
    pub fn create(&mut self, opponent: Opponent) -> MatchId {
        let id = MatchId(self.next_id);
        self.next_id += 1;
        self.matches.insert(
            id,
            Match {
                id,
                game: Game::new(),
                opponent,
            },
        );
        id
    }

    pub fn get(&self, id: MatchId) -> Result<&Match, MatchError> {
        self.matches.get(&id).ok_or(MatchError::NotFound(id))
    }

    /// Applies one move to a match's game. Illegal moves propagate and
    /// leave the match untouched.
    pub fn play(
        &mut self,
        id: MatchId,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<&Match, MatchError> {
        let m = self.matches.get_mut(&id).ok_or(MatchError::NotFound(id))?;
        m.game.play(row, col, player)?;
        Ok(m)
    }

    /// Removes a finished (or abandoned) match, returning it if present.
    pub fn evict(&mut self, id: MatchId) -> Option<Match> {
        self.matches.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
