//! Alpha-Beta search with iterative deepening and transposition table
//!
//! This module implements the core search algorithm for the Othello AI.
//! Values are always from the root color's perspective: the root color
//! maximizes, its opponent minimizes.
//!
//! # Features
//!
//! - Iterative deepening with a wall-clock deadline
//! - Transposition table with exact/lower/upper bounds
//! - Optional symmetry canonicalization of table keys
//! - Move ordering by square weight, with the table's best move tried first
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use othello::board::{Board, Stone};
//! use othello::search::{Searcher, TranspositionTable, ZobristTable};
//!
//! let zobrist = Arc::new(ZobristTable::new());
//! let mut searcher = Searcher::new(zobrist, Some(TranspositionTable::default()), true);
//! let board = Board::initial();
//!
//! let result = searcher.search(&board, Stone::Black, 4);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.x, best_move.y);
//! }
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, square_weight};
use crate::rules::{apply_move, has_legal_move, legal_moves};

use super::symmetry::{canonical_key, Transform};
use super::{EntryType, TTStats, TranspositionTable, ZobristTable};

/// Infinity score for alpha-beta bounds
pub const INF: i32 = 1_000_000_000;

/// Deepest iteration the iterative-deepening loop will start
pub const MAX_SEARCH_DEPTH: i32 = 60;

/// The deadline passed while a depth iteration was in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Aborted;

type SearchOutcome<T> = Result<T, Aborted>;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited (every call of the recursive search)
    pub nodes: u64,
    /// Total TT probes
    pub tt_probes: u64,
    /// TT probes that found an entry searched deep enough
    pub tt_hits: u64,
    /// TT hits whose bound emptied the window
    pub tt_cutoffs: u64,
    /// Alpha/beta cutoffs during move expansion
    pub beta_cutoffs: u64,
}

impl SearchStats {
    /// TT hit rate in percent
    pub fn tt_hit_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the side to move has no legal move
    pub best_move: Option<Pos>,
    /// Score of the best move, from the searching color's perspective
    pub score: i32,
    /// Deepest fully completed iteration
    pub depth: i32,
    /// Total nodes searched across all iterations
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

impl SearchResult {
    fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }
}

/// Sort moves by square weight, highest first, then try `preferred` first.
///
/// The sort is stable, so equal weights keep generation order.
fn order_moves(moves: &mut [Pos], preferred: Option<Pos>) {
    moves.sort_by_key(|&m| std::cmp::Reverse(square_weight(m)));
    if let Some(p) = preferred {
        promote(moves, p);
    }
}

/// Move `mov` to the front, keeping the others in order. No-op if absent.
fn promote(moves: &mut [Pos], mov: Pos) {
    if let Some(idx) = moves.iter().position(|&m| m == mov) {
        moves[..=idx].rotate_right(1);
    }
}

/// Alpha-Beta searcher.
///
/// Owns its transposition table; the table is cleared at the start of every
/// search, so nothing carries over between decisions. The Zobrist table is
/// shared and never mutated.
pub struct Searcher {
    zobrist: Arc<ZobristTable>,
    tt: Option<TranspositionTable>,
    use_symmetry: bool,
    stats: SearchStats,
    deadline: Option<Instant>,
    /// Treat the deadline as passed once this many nodes have been searched.
    #[cfg(test)]
    node_limit: Option<u64>,
}

impl Searcher {
    /// Create a searcher.
    ///
    /// # Arguments
    ///
    /// * `zobrist` - Shared hash feature table
    /// * `tt` - Transposition table, or `None` for plain alpha-beta
    /// * `use_symmetry` - Key the table by the canonical symmetric reading
    #[must_use]
    pub fn new(zobrist: Arc<ZobristTable>, tt: Option<TranspositionTable>, use_symmetry: bool) -> Self {
        Self {
            zobrist,
            tt,
            use_symmetry,
            stats: SearchStats::default(),
            deadline: None,
            #[cfg(test)]
            node_limit: None,
        }
    }

    /// Search to exactly `depth` plies with no deadline.
    #[must_use]
    pub fn search(&mut self, board: &Board, color: Stone, depth: i32) -> SearchResult {
        let Some(moves) = self.begin(board, color) else {
            return SearchResult::no_move();
        };

        let depth = depth.max(1);
        self.deadline = None;
        let mut result = SearchResult::no_move();
        if let Ok((mov, score)) = self.search_root(board, color, &moves, depth) {
            result.best_move = Some(mov);
            result.score = score;
            result.depth = depth;
        }
        self.finish(result)
    }

    /// Iterative deepening up to `max_depth`, bounded by `time_limit`.
    ///
    /// Depth 1 always runs to completion. From depth 2 on, an iteration that
    /// runs past the deadline is thrown away and the previous depth's move is
    /// returned.
    #[must_use]
    pub fn search_timed(
        &mut self,
        board: &Board,
        color: Stone,
        max_depth: i32,
        time_limit: Duration,
    ) -> SearchResult {
        let Some(mut moves) = self.begin(board, color) else {
            return SearchResult::no_move();
        };

        let deadline = Instant::now() + time_limit;
        let mut result = SearchResult::no_move();

        for depth in 1..=max_depth.max(1) {
            self.deadline = (depth > 1).then_some(deadline);
            match self.search_root(board, color, &moves, depth) {
                Ok((mov, score)) => {
                    result.best_move = Some(mov);
                    result.score = score;
                    result.depth = depth;
                    promote(&mut moves, mov);
                    debug!(
                        "depth {} done: move {} score {} nodes {} tt_hits {}/{}",
                        depth, mov, score, self.stats.nodes, self.stats.tt_hits, self.stats.tt_probes
                    );
                }
                Err(Aborted) => {
                    debug!("depth {} abandoned at deadline after {} nodes", depth, self.stats.nodes);
                    break;
                }
            }
            if Instant::now() >= deadline {
                break;
            }
        }

        self.deadline = None;
        self.finish(result)
    }

    /// Get statistics about the transposition table, if one is in use.
    #[must_use]
    pub fn tt_stats(&self) -> Option<TTStats> {
        self.tt.as_ref().map(TranspositionTable::stats)
    }

    /// Clear the transposition table.
    pub fn clear_tt(&mut self) {
        if let Some(tt) = self.tt.as_mut() {
            tt.clear();
        }
    }

    /// Reset per-search state and produce the ordered root moves.
    fn begin(&mut self, board: &Board, color: Stone) -> Option<Vec<Pos>> {
        self.clear_tt();
        self.stats = SearchStats::default();

        let mut moves = legal_moves(board, color);
        if moves.is_empty() {
            return None;
        }
        order_moves(&mut moves, None);
        Some(moves)
    }

    fn finish(&self, mut result: SearchResult) -> SearchResult {
        result.nodes = self.stats.nodes;
        result.stats = self.stats;
        result
    }

    #[inline]
    fn check_time(&self) -> SearchOutcome<()> {
        #[cfg(test)]
        if self.deadline.is_some() && self.node_limit.is_some_and(|n| self.stats.nodes > n) {
            return Err(Aborted);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(Aborted),
            _ => Ok(()),
        }
    }

    /// One full-width pass over the root moves. The root only raises alpha;
    /// on equal scores the earlier move is kept.
    fn search_root(
        &mut self,
        board: &Board,
        color: Stone,
        moves: &[Pos],
        depth: i32,
    ) -> SearchOutcome<(Pos, i32)> {
        let mut alpha = -INF;
        let mut best: Option<(Pos, i32)> = None;

        for &mov in moves {
            self.check_time()?;
            let child = apply_move(board, mov, color);
            let value = self.alpha_beta(&child, color.opponent(), depth - 1, alpha, INF, color)?;
            if best.map_or(true, |(_, score)| value > score) {
                best = Some((mov, value));
            }
            alpha = alpha.max(value);
        }

        best.ok_or(Aborted)
    }

    /// Table key for a node and the transform from canonical to board coordinates.
    fn node_key(&self, board: &Board, side: Stone) -> (u64, Transform) {
        if self.use_symmetry {
            let ck = canonical_key(&self.zobrist, board, side);
            (ck.key, ck.transform)
        } else {
            (self.zobrist.hash(board, side), Transform::IDENTITY)
        }
    }

    fn store(
        &mut self,
        node: Option<(u64, Transform)>,
        depth: i32,
        score: i32,
        entry_type: EntryType,
        best_move: Option<Pos>,
    ) {
        if let (Some(tt), Some((key, transform))) = (self.tt.as_mut(), node) {
            let stored_move = best_move.map(|m| transform.to_canonical(m));
            tt.store(key, depth, score, entry_type, stored_move);
        }
    }

    /// Recursive min/max alpha-beta from `root`'s perspective, with `current` to move.
    fn alpha_beta(
        &mut self,
        board: &Board,
        current: Stone,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        root: Stone,
    ) -> SearchOutcome<i32> {
        self.stats.nodes += 1;
        self.check_time()?;

        if depth <= 0 {
            return Ok(evaluate(board, root));
        }

        let (alpha_orig, beta_orig) = (alpha, beta);

        let node = self.tt.is_some().then(|| self.node_key(board, current));
        let mut tt_move = None;
        if let (Some(tt), Some((key, transform))) = (self.tt.as_ref(), node) {
            self.stats.tt_probes += 1;
            if let Some(entry) = tt.probe(key).copied() {
                tt_move = entry.best_move.map(|m| transform.to_original(m));
                if entry.depth >= depth {
                    self.stats.tt_hits += 1;
                    if let Some(score) = entry.cutoff(depth, &mut alpha, &mut beta) {
                        if entry.entry_type != EntryType::Exact {
                            self.stats.tt_cutoffs += 1;
                        }
                        return Ok(score);
                    }
                }
            }
        }

        let mut moves = legal_moves(board, current);
        if moves.is_empty() {
            let score = if has_legal_move(board, current.opponent()) {
                // Pass: same board, other side, one ply used.
                self.alpha_beta(board, current.opponent(), depth - 1, alpha, beta, root)?
            } else {
                evaluate(board, root)
            };
            self.store(node, depth, score, EntryType::Exact, None);
            return Ok(score);
        }
        order_moves(&mut moves, tt_move);

        let maximizing = current == root;
        let mut best = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for &mov in &moves {
            self.check_time()?;
            let child = apply_move(board, mov, current);
            let value = self.alpha_beta(&child, current.opponent(), depth - 1, alpha, beta, root)?;

            if maximizing {
                if best_move.is_none() || value > best {
                    best = value;
                    best_move = Some(mov);
                }
                alpha = alpha.max(best);
            } else {
                if best_move.is_none() || value < best {
                    best = value;
                    best_move = Some(mov);
                }
                beta = beta.min(best);
            }

            if alpha >= beta {
                self.stats.beta_cutoffs += 1;
                break;
            }
        }

        let entry_type = EntryType::from_window(best, alpha_orig, beta_orig);
        self.store(node, depth, best, entry_type, best_move);
        Ok(best)
    }
}
