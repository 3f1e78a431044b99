//! The 8x8 playing grid.
//!
//! Uses a fixed-size array of cells for O(1) lookup. This avoids heap
//! allocation and makes the board trivially copyable, which matters for
//! the one-ply lookahead in move selection.

use super::cell::{Cell, Player};

/// Side length of the board.
pub const BOARD_SIZE: usize = 8;

/// An 8x8 grid of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates the canonical starting position: the four center cells
    /// hold two discs of each color on the diagonals, Black on the
    /// anti-diagonal.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        let mid = BOARD_SIZE / 2;
        board.cells[mid - 1][mid - 1] = Cell::White;
        board.cells[mid - 1][mid] = Cell::Black;
        board.cells[mid][mid - 1] = Cell::Black;
        board.cells[mid][mid] = Cell::White;
        board
    }

    /// Returns true if `(row, col)` is on the board.
    pub const fn in_bounds(row: isize, col: isize) -> bool {
        row >= 0 && row < BOARD_SIZE as isize && col >= 0 && col < BOARD_SIZE as isize
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Counts (black, white, empty) discs.
    pub fn counts(&self) -> (u32, u32, u32) {
        let mut black = 0;
        let mut white = 0;
        let mut empty = 0;
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::Black => black += 1,
                    Cell::White => white += 1,
                    Cell::Empty => empty += 1,
                }
            }
        }
        (black, white, empty)
    }

    /// Disc differential: `#Black - #White`. Valid at any state.
    pub fn score(&self) -> i32 {
        self.cells
            .iter()
            .flatten()
            .map(|c| c.value())
            .sum()
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Fills the whole board with one player's discs. Test scaffolding
    /// for terminal positions.
    pub fn fill_with(&mut self, player: Player) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = player.disc();
            }
        }
    }

    /// Returns a copy with Black and White swapped everywhere.
    pub fn color_swapped(&self) -> Board {
        let mut swapped = *self;
        for row in swapped.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = match cell {
                    Cell::Black => Cell::White,
                    Cell::White => Cell::Black,
                    Cell::Empty => Cell::Empty,
                };
            }
        }
        swapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_census() {
        let board = Board::empty();
        assert_eq!(board.counts(), (0, 0, 64));
        assert_eq!(board.score(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn initial_board_has_center_cross() {
        let board = Board::initial();
        assert_eq!(board.counts(), (2, 2, 60));
        assert_eq!(board.get(3, 3), Cell::White);
        assert_eq!(board.get(3, 4), Cell::Black);
        assert_eq!(board.get(4, 3), Cell::Black);
        assert_eq!(board.get(4, 4), Cell::White);
        assert_eq!(board.score(), 0);
    }

    #[test]
    fn score_tracks_counts() {
        let mut board = Board::initial();
        board.set(0, 0, Cell::Black);
        board.set(0, 1, Cell::Black);
        board.set(7, 7, Cell::White);
        let (black, white, _) = board.counts();
        assert_eq!(board.score(), black as i32 - white as i32);
    }

    #[test]
    fn bounds_check() {
        assert!(Board::in_bounds(0, 0));
        assert!(Board::in_bounds(7, 7));
        assert!(!Board::in_bounds(-1, 0));
        assert!(!Board::in_bounds(0, 8));
    }

    #[test]
    fn fill_makes_board_full() {
        let mut board = Board::empty();
        board.fill_with(Player::Black);
        assert!(board.is_full());
        assert_eq!(board.counts(), (64, 0, 0));
        assert_eq!(board.score(), 64);
    }

    #[test]
    fn color_swap_negates_score() {
        let mut board = Board::initial();
        board.set(0, 0, Cell::Black);
        let swapped = board.color_swapped();
        assert_eq!(swapped.score(), -board.score());
        assert_eq!(swapped.get(0, 0), Cell::White);
        assert_eq!(swapped.get(3, 3), Cell::Black);
    }
}
