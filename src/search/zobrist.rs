//! Zobrist hashing for position identification
//!
//! The key of a position is the XOR of one random value per occupied
//! (square, color) pair plus one value for the side to move, so it never
//! depends on the move order that reached the position.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Stone};
//! use othello::search::ZobristTable;
//!
//! let zt = ZobristTable::new();
//! let board = Board::initial();
//! assert_ne!(zt.hash(&board, Stone::Black), zt.hash(&board, Stone::White));
//! ```

use rand::{RngCore, SeedableRng};
use rand_xoshiro::SplitMix64;

use crate::board::{Board, Stone, TOTAL_CELLS};

/// Default seed for the feature table.
pub const DEFAULT_ZOBRIST_SEED: u64 = 0x0632_3041;

/// Zobrist hash table for position hashing.
///
/// Built once from a fixed seed and immutable afterwards. Engines share one
/// table through an `Arc`, so every search in a process hashes identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristTable {
    /// Random values per square: `[black, white]`
    squares: [[u64; 2]; TOTAL_CELLS],
    /// Random value XORed when black is to move
    black_to_move: u64,
    /// Random value XORed when white is to move
    white_to_move: u64,
}

impl ZobristTable {
    /// Create a table from [`DEFAULT_ZOBRIST_SEED`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_ZOBRIST_SEED)
    }

    /// Create a table from an explicit seed.
    ///
    /// Values are drawn square by square (black, then white) in index order,
    /// followed by the black-to-move and white-to-move values.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = SplitMix64::seed_from_u64(seed);

        let mut squares = [[0u64; 2]; TOTAL_CELLS];
        for square in &mut squares {
            square[0] = rng.next_u64();
            square[1] = rng.next_u64();
        }
        let black_to_move = rng.next_u64();
        let white_to_move = rng.next_u64();

        Self {
            squares,
            black_to_move,
            white_to_move,
        }
    }

    #[inline]
    fn side_value(&self, side_to_move: Stone) -> u64 {
        match side_to_move {
            Stone::Black => self.black_to_move,
            Stone::White => self.white_to_move,
            Stone::Empty => 0,
        }
    }

    /// Compute the full hash for a board position.
    #[must_use]
    pub fn hash(&self, board: &Board, side_to_move: Stone) -> u64 {
        let mut h = 0u64;

        for pos in board.black.iter_ones() {
            h ^= self.squares[pos.to_index()][0];
        }

        for pos in board.white.iter_ones() {
            h ^= self.squares[pos.to_index()][1];
        }

        h ^ self.side_value(side_to_move)
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}
