//! Evaluation module for Othello positions
//!
//! The static evaluation combines three terms, all relative to the queried color:
//! - Positional score from a fixed square-weight table
//! - Mobility (legal-move count difference)
//! - Disc count difference

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, evaluate_breakdown, EvalBreakdown};
pub use weights::{square_weight, MOBILITY_WEIGHT, SQUARE_WEIGHTS};
