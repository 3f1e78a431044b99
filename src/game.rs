//! The game state machine.
//!
//! Holds the board plus the side to move and advances one move at a
//! time. Passes are implicit: if the opponent of a successful move has
//! no reply but the mover does, the turn stays with the mover. A
//! rejected move leaves the state untouched.

use crate::board::{Board, Coord, Outcome, Player};
use crate::error::{IllegalMove, InvalidQuery};
use crate::movegen;

/// A Reversi game in progress (or finished; a terminal game stays
/// queryable until dropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
}

impl Game {
    /// Starts a new game from the canonical cross, Black to move.
    pub fn new() -> Self {
        Game {
            board: Board::initial(),
            current_player: Player::Black,
        }
    }

    /// Builds a game from an arbitrary position. Used by tests and by
    /// callers replaying recorded states.
    pub fn from_position(board: Board, current_player: Player) -> Self {
        Game {
            board,
            current_player,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Legal destinations for `player` in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Coord> {
        movegen::legal_moves(&self.board, player)
    }

    /// Plays `player`'s disc at `(row, col)`.
    ///
    /// Validates everything before mutating: bounds, turn, emptiness,
    /// and that the placement captures at least one disc. On success
    /// the bracketed runs are flipped and the turn advances, retaining
    /// the mover's turn when the opponent must pass.
    pub fn play(&mut self, row: usize, col: usize, player: Player) -> Result<(), IllegalMove> {
        if !Board::in_bounds(row as isize, col as isize) {
            return Err(IllegalMove::OutOfBounds { row, col });
        }
        if player != self.current_player {
            return Err(IllegalMove::NotYourTurn { player });
        }
        if !self.board.get(row, col).is_empty() {
            return Err(IllegalMove::Occupied { row, col });
        }
        let flips = movegen::flips_for(&self.board, row, col, player);
        if flips.is_empty() {
            return Err(IllegalMove::NoFlips { row, col });
        }

        self.board.set(row, col, player.disc());
        for (r, c) in flips {
            self.board.set(r, c, player.disc());
        }

        let opponent = player.opponent();
        if movegen::has_legal_move(&self.board, opponent) {
            self.current_player = opponent;
        } else if movegen::has_legal_move(&self.board, player) {
            // Implicit pass: opponent is stuck, mover goes again.
        } else {
            // Neither side can move; the game is terminal and the
            // side-to-move marker no longer matters.
            self.current_player = opponent;
        }
        Ok(())
    }

    /// True iff the board is full or neither side has a legal move.
    pub fn terminal(&self) -> bool {
        if self.board.is_full() {
            return true;
        }
        !movegen::has_legal_move(&self.board, Player::Black)
            && !movegen::has_legal_move(&self.board, Player::White)
    }

    /// The final outcome by disc count. Only answerable once the game
    /// is terminal.
    pub fn winner(&self) -> Result<Outcome, InvalidQuery> {
        if !self.terminal() {
            return Err(InvalidQuery::GameInProgress);
        }
        let score = self.board.score();
        Ok(match score.cmp(&0) {
            std::cmp::Ordering::Greater => Outcome::Win(Player::Black),
            std::cmp::Ordering::Less => Outcome::Win(Player::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }

    /// Disc differential `#Black - #White`, valid at any state.
    pub fn score(&self) -> i32 {
        self.board.score()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
