//! Legal move generation
//!
//! A square is legal for `color` when it is empty and at least one direction
//! holds a run of opponent discs closed off by a disc of `color`. The run
//! length in that direction is its flip count.

use crate::board::{Board, Pos, Stone};

use super::DIRECTIONS;

/// Number of opponent discs that placing `color` at `pos` would flip in
/// direction `(dx, dy)`. Zero when the run is empty, hits an empty square,
/// or runs off the board.
#[must_use]
pub fn flips_in_direction(board: &Board, pos: Pos, color: Stone, dx: i32, dy: i32) -> u32 {
    let opponent = color.opponent();
    let mut count = 0u32;
    let mut step = 1;

    while let Some(p) = pos.offset(dx, dy, step) {
        let s = board.get(p);
        if s == opponent {
            count += 1;
            step += 1;
        } else if s == color {
            return count;
        } else {
            return 0;
        }
    }
    0
}

/// Total flip count over all 8 directions. Zero for occupied squares.
#[must_use]
pub fn flip_count(board: &Board, pos: Pos, color: Stone) -> u32 {
    if !board.is_empty(pos) {
        return 0;
    }
    DIRECTIONS
        .iter()
        .map(|&(dx, dy)| flips_in_direction(board, pos, color, dx, dy))
        .sum()
}

/// Check if `color` may place a disc at `pos`.
#[inline]
#[must_use]
pub fn is_legal_move(board: &Board, pos: Pos, color: Stone) -> bool {
    board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&(dx, dy)| flips_in_direction(board, pos, color, dx, dy) > 0)
}

/// All legal squares for `color`, in x-major order.
///
/// ```
/// use othello::{Board, Stone};
/// use othello::rules::legal_moves;
///
/// assert_eq!(legal_moves(&Board::initial(), Stone::Black).len(), 4);
/// ```
#[must_use]
pub fn legal_moves(board: &Board, color: Stone) -> Vec<Pos> {
    Pos::all().filter(|&p| is_legal_move(board, p, color)).collect()
}

/// All legal squares for `color` with their flip counts, in x-major order.
#[must_use]
pub fn legal_moves_with_flips(board: &Board, color: Stone) -> Vec<(Pos, u32)> {
    Pos::all()
        .filter_map(|p| {
            let flips = flip_count(board, p, color);
            (flips > 0).then_some((p, flips))
        })
        .collect()
}

/// Check if `color` has at least one legal move.
#[must_use]
pub fn has_legal_move(board: &Board, color: Stone) -> bool {
    Pos::all().any(|p| is_legal_move(board, p, color))
}

/// Number of legal moves for `color`.
#[must_use]
pub fn mobility(board: &Board, color: Stone) -> u32 {
    Pos::all().filter(|&p| is_legal_move(board, p, color)).count() as u32
}
