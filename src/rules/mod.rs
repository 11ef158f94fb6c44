//! Othello rules
//!
//! This module implements:
//! - Legal move generation with flip counts
//! - Move application (placing a disc and flipping bracketed runs)
//! - Pass and game-over detection

pub mod flip;
pub mod game;
pub mod moves;

/// The 8 compass directions as `(dx, dy)`.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, 0),
    (1, -1),
];

// Re-exports for convenient access
pub use flip::{apply_move, flipped_squares, make_move};
pub use game::{disc_difference, is_game_over, turn_state, winner, TurnState};
pub use moves::{
    flip_count, flips_in_direction, has_legal_move, is_legal_move, legal_moves,
    legal_moves_with_flips, mobility,
};
