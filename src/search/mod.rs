//! Search module for the Othello AI
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Symmetry canonicalization of table keys
//! - Transposition table for caching search results
//! - Alpha-Beta search with iterative deepening

pub mod alphabeta;
pub mod symmetry;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF, MAX_SEARCH_DEPTH};
pub use symmetry::{canonical_key, canonicalize, CanonicalKey, Transform};
pub use tt::{
    ClearOnOverflow, EntryType, EvictionPolicy, ShallowestFirst, TTEntry, TTStats,
    TranspositionTable, DEFAULT_TT_CAPACITY,
};
pub use zobrist::{ZobristTable, DEFAULT_ZOBRIST_SEED};
