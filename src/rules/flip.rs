//! Move application
//!
//! Placing a disc flips, in every direction independently, the maximal run of
//! opponent discs that is closed off by one of the mover's discs. Directions
//! without a closing disc are left alone.

use crate::board::{Board, Pos, Stone};

use super::moves::flips_in_direction;
use super::DIRECTIONS;

/// Squares that placing `color` at `pos` would flip, grouped by direction in
/// [`DIRECTIONS`] order.
#[must_use]
pub fn flipped_squares(board: &Board, pos: Pos, color: Stone) -> Vec<Pos> {
    let mut flipped = Vec::new();
    for &(dx, dy) in &DIRECTIONS {
        let run = flips_in_direction(board, pos, color, dx, dy);
        for step in 1..=run as i32 {
            if let Some(p) = pos.offset(dx, dy, step) {
                flipped.push(p);
            }
        }
    }
    flipped
}

/// Apply a move in place and return the number of flipped discs.
///
/// Callers should only pass legal moves: an illegal square still receives
/// the disc but nothing flips.
pub fn make_move(board: &mut Board, pos: Pos, color: Stone) -> u32 {
    let flipped = flipped_squares(board, pos, color);
    board.place_stone(pos, color);
    for &p in &flipped {
        board.place_stone(p, color);
    }
    flipped.len() as u32
}

/// Return the board that results from `color` playing at `pos`.
/// The input board is left untouched.
///
/// ```
/// use othello::{Board, Pos, Stone};
/// use othello::rules::apply_move;
///
/// let start = Board::initial();
/// let next = apply_move(&start, Pos::new(2, 3), Stone::Black);
/// assert_eq!(next.get(Pos::new(3, 3)), Stone::Black);
/// assert_eq!(start.get(Pos::new(3, 3)), Stone::White);
/// ```
#[must_use]
pub fn apply_move(board: &Board, pos: Pos, color: Stone) -> Board {
    let mut next = *board;
    make_move(&mut next, pos, color);
    next
}
