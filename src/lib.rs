//! Othello (Reversi) AI Engine
//!
//! A move-search engine for standard 8x8 Othello:
//! - Legal moves are placements that bracket at least one opponent run
//! - A side with no legal move passes; the game ends when neither side can move
//! - Black is `1`, white is `-1`, coordinates are `(x, y)` with `x` outer
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and the payload codec
//! - [`rules`]: Move generation, flipping, pass and game-over rules
//! - [`eval`]: Static evaluation (square weights, mobility, disc count)
//! - [`search`]: Zobrist hashing, symmetry canonicalization, transposition
//!   table and alpha-beta search
//! - [`engine`]: Main AI engine and the [`Agent`] trait
//! - [`config`]: Search configuration and its loader
//!
//! # Quick Start
//!
//! ```
//! use othello::{AIEngine, Board, SearchConfig, SearchMode, Stone};
//! use othello::rules::apply_move;
//!
//! let mut board = Board::initial();
//! let mut engine = AIEngine::with_config(SearchConfig {
//!     mode: SearchMode::Fixed,
//!     max_depth: 4,
//!     ..SearchConfig::default()
//! });
//!
//! if let Some(pos) = engine.get_move(&board, Stone::Black) {
//!     board = apply_move(&board, pos, Stone::Black);
//!     println!("AI plays at ({}, {})", pos.x, pos.y);
//! }
//! ```
//!
//! # Search
//!
//! Each decision clears the transposition table, then runs iterative
//! deepening alpha-beta until the time budget runs out. The move returned
//! always comes from a fully completed depth.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::{Preset, SearchConfig, SearchMode};
pub use engine::{AIEngine, Agent, MoveResult};
pub use error::{BoardError, ConfigError};
