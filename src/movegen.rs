//! Legal move generation.
//!
//! A placement is legal iff the target cell is empty and, in at least
//! one of the eight compass directions, a contiguous run of opposing
//! discs is immediately followed by one of the mover's own discs.
//! `legal_moves` enumerates destinations in row-major order so callers
//! get a stable, reproducible ordering.

use rand::Rng;

use crate::board::{Board, Coord, Player, BOARD_SIZE};

/// The eight scan directions as `(d_row, d_col)` steps.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Collects the discs along one direction that a placement at
/// `(row, col)` would flip: a run of one-or-more opposing discs closed
/// by one of `player`'s discs. Returns an empty vec if the run is open
/// (edge or empty cell) or absent.
fn run_in_direction(
    board: &Board,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
    player: Player,
) -> Vec<Coord> {
    let opponent = player.opponent().disc();
    let own = player.disc();
    let mut run = Vec::new();

    let mut r = row as isize + d_row;
    let mut c = col as isize + d_col;
    while Board::in_bounds(r, c) {
        let cell = board.get(r as usize, c as usize);
        if cell == opponent {
            run.push((r as usize, c as usize));
        } else if cell == own {
            return run;
        } else {
            break;
        }
        r += d_row;
        c += d_col;
    }
    Vec::new()
}

/// All discs a placement at `(row, col)` by `player` would flip, across
/// every direction. Empty iff the placement captures nothing. Does not
/// check that the target cell itself is empty.
pub fn flips_for(board: &Board, row: usize, col: usize, player: Player) -> Vec<Coord> {
    let mut flips = Vec::new();
    for (d_row, d_col) in DIRECTIONS {
        flips.extend(run_in_direction(board, row, col, d_row, d_col, player));
    }
    flips
}

/// Returns true if `(row, col)` is a legal destination for `player`.
///
/// Allocation-free early-exit scan; `legal_moves` uses this rather than
/// materializing flip lists for all 60 candidate cells.
pub fn is_legal(board: &Board, row: usize, col: usize, player: Player) -> bool {
    if !board.get(row, col).is_empty() {
        return false;
    }
    let opponent = player.opponent().disc();
    let own = player.disc();

    for (d_row, d_col) in DIRECTIONS {
        let mut r = row as isize + d_row;
        let mut c = col as isize + d_col;
        let mut seen_opponent = false;
        while Board::in_bounds(r, c) {
            let cell = board.get(r as usize, c as usize);
            if cell == opponent {
                seen_opponent = true;
            } else if cell == own {
                if seen_opponent {
                    return true;
                }
                break;
            } else {
                break;
            }
            r += d_row;
            c += d_col;
        }
    }
    false
}

/// Enumerates every legal destination for `player`, row-major.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Coord> {
    let mut moves = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board.get(row, col).is_empty() && is_legal(board, row, col, player) {
                moves.push((row, col));
            }
        }
    }
    moves
}

/// Returns true if `player` has at least one legal move.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board.get(row, col).is_empty() && is_legal(board, row, col, player) {
                return true;
            }
        }
    }
    false
}

/// Picks a uniformly random legal move for `player`, or None if the
/// player has no legal move.
pub fn random_move(board: &Board, player: Player, rng: &mut impl Rng) -> Option<Coord> {
    let moves = legal_moves(board, player);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.gen_range(0..moves.len())])
}
