//! Static weights for Othello evaluation
//!
//! Corners are worth the most; the squares next to a corner are the worst,
//! since they tend to hand the corner to the opponent.

use crate::board::{Pos, BOARD_SIZE};

/// Square weights indexed `[x][y]`. The table is symmetric under all 8
/// board symmetries.
pub const SQUARE_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];

/// Multiplier for the legal-move count difference
pub const MOBILITY_WEIGHT: i32 = 5;

/// Weight of a single square.
#[inline]
#[must_use]
pub fn square_weight(pos: Pos) -> i32 {
    SQUARE_WEIGHTS[pos.x as usize][pos.y as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_best_and_x_squares_worst() {
        let max = Pos::all().map(square_weight).max();
        let min = Pos::all().map(square_weight).min();
        assert_eq!(max, Some(120));
        assert_eq!(min, Some(-40));
        assert_eq!(square_weight(Pos::new(7, 0)), 120);
        assert_eq!(square_weight(Pos::new(6, 6)), -40);
    }

    #[test]
    fn test_table_is_symmetric() {
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let w = SQUARE_WEIGHTS[x][y];
                assert_eq!(w, SQUARE_WEIGHTS[y][x]);
                assert_eq!(w, SQUARE_WEIGHTS[7 - x][y]);
                assert_eq!(w, SQUARE_WEIGHTS[x][7 - y]);
            }
        }
    }
}
