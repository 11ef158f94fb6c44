//! Heuristic evaluation function for Othello board positions
//!
//! Evaluated at every leaf of the search, so it stays cheap: one pass over
//! the discs plus two mobility counts.

use crate::board::{Board, Stone};
use crate::rules::mobility;

use super::weights::{square_weight, MOBILITY_WEIGHT};

/// The three evaluation terms, each already relative to the queried color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalBreakdown {
    /// Sum of square weights for own discs minus opponent discs
    pub positional: i32,
    /// `(own moves - opponent moves) * MOBILITY_WEIGHT`
    pub mobility: i32,
    /// Own disc count minus opponent disc count
    pub disc_diff: i32,
}

impl EvalBreakdown {
    /// Sum of all terms.
    #[inline]
    #[must_use]
    pub fn total(&self) -> i32 {
        self.positional + self.mobility + self.disc_diff
    }
}

/// Evaluate the board from the perspective of the given color.
///
/// Positive values favor `color`. `color` must be `Black` or `White`.
///
/// ```
/// use othello::{Board, Stone};
/// use othello::eval::evaluate;
///
/// // The opening position is balanced.
/// assert_eq!(evaluate(&Board::initial(), Stone::Black), 0);
/// ```
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    evaluate_breakdown(board, color).total()
}

/// Evaluate and keep the individual terms.
#[must_use]
pub fn evaluate_breakdown(board: &Board, color: Stone) -> EvalBreakdown {
    let opponent = color.opponent();
    let (Some(own), Some(opp)) = (board.stones(color), board.stones(opponent)) else {
        return EvalBreakdown::default();
    };

    let positional = own.iter_ones().map(square_weight).sum::<i32>()
        - opp.iter_ones().map(square_weight).sum::<i32>();

    let mobility_diff = mobility(board, color) as i32 - mobility(board, opponent) as i32;

    let disc_diff = own.count() as i32 - opp.count() as i32;

    EvalBreakdown {
        positional,
        mobility: mobility_diff * MOBILITY_WEIGHT,
        disc_diff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::rules::{apply_move, legal_moves};

    fn sample_board() -> Board {
        let mut board = Board::initial();
        board = apply_move(&board, Pos::new(2, 3), Stone::Black);
        board = apply_move(&board, Pos::new(2, 2), Stone::White);
        board = apply_move(&board, Pos::new(3, 2), Stone::Black);
        board
    }

    #[test]
    fn test_initial_position_is_balanced() {
        let b = evaluate_breakdown(&Board::initial(), Stone::Black);
        assert_eq!(b, EvalBreakdown::default());
    }

    #[test]
    fn test_formula_matches_hand_computation() {
        let board = sample_board();
        let color = Stone::Black;

        let mut positional = 0;
        for pos in Pos::all() {
            match board.get(pos) {
                s if s == color => positional += square_weight(pos),
                Stone::Empty => {}
                _ => positional -= square_weight(pos),
            }
        }
        let mob = legal_moves(&board, color).len() as i32
            - legal_moves(&board, color.opponent()).len() as i32;
        let discs = board.count(color) as i32 - board.count(color.opponent()) as i32;

        assert_eq!(evaluate(&board, color), positional + mob * 5 + discs);
    }

    #[test]
    fn test_swapping_color_negates_each_term() {
        let board = sample_board();
        let black = evaluate_breakdown(&board, Stone::Black);
        let white = evaluate_breakdown(&board, Stone::White);

        assert_eq!(black.positional, -white.positional);
        assert_eq!(black.mobility, -white.mobility);
        assert_eq!(black.disc_diff, -white.disc_diff);
    }

    #[test]
    fn test_corner_disc_scores_high() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::Black);
        board.place_stone(Pos::new(1, 1), Stone::White);
        let b = evaluate_breakdown(&board, Stone::Black);
        assert_eq!(b.positional, 120 + 40);
        assert_eq!(b.disc_diff, 0);
    }
}
