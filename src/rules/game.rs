//! Pass and game-over rules
//!
//! A side with no legal move passes if the opponent can still move. The game
//! is over when neither side can move.

use crate::board::{Board, Stone};

use super::moves::has_legal_move;

/// What the side to move may do on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// The side to move has at least one legal move
    Move,
    /// No legal move, but the opponent has one: turn passes, board unchanged
    Pass,
    /// Neither side can move
    GameOver,
}

/// Classify the position for `color` to move.
#[must_use]
pub fn turn_state(board: &Board, color: Stone) -> TurnState {
    if has_legal_move(board, color) {
        TurnState::Move
    } else if has_legal_move(board, color.opponent()) {
        TurnState::Pass
    } else {
        TurnState::GameOver
    }
}

/// Check if neither side has a legal move.
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    !has_legal_move(board, Stone::Black) && !has_legal_move(board, Stone::White)
}

/// Disc count of `color` minus disc count of its opponent.
#[must_use]
pub fn disc_difference(board: &Board, color: Stone) -> i32 {
    board.count(color) as i32 - board.count(color.opponent()) as i32
}

/// Color with more discs, `None` on a draw. Does not check that the game is over.
#[must_use]
pub fn winner(board: &Board) -> Option<Stone> {
    match disc_difference(board, Stone::Black) {
        d if d > 0 => Some(Stone::Black),
        d if d < 0 => Some(Stone::White),
        _ => None,
    }
}
