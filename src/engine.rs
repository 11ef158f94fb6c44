//! Main AI Engine integrating all search components
//!
//! This module provides the engine a game client talks to. Each decision
//! starts from a clean transposition table, runs the configured search and
//! remembers the statistics of that one decision.
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, Board, Stone, SearchConfig, SearchMode};
//!
//! // Use a small fixed depth for a fast example
//! let config = SearchConfig {
//!     mode: SearchMode::Fixed,
//!     max_depth: 3,
//!     ..SearchConfig::default()
//! };
//! let mut engine = AIEngine::with_config(config);
//! let board = Board::initial();
//!
//! let result = engine.get_move_with_stats(&board, Stone::Black);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::info;

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::config::{Preset, SearchConfig, SearchMode};
use crate::error::{BoardError, BoardResult};
use crate::search::{SearchResult, SearchStats, Searcher, TTStats, TranspositionTable, ZobristTable};

/// A move-choosing player.
///
/// `choose_move` returns `None` when the side to move has no legal move; the
/// caller decides what that means for its protocol (pass, forfeit, ...).
pub trait Agent {
    /// Short display name
    fn nickname(&self) -> &str;

    /// Pick a move for `color` on `board`.
    fn choose_move(&mut self, board: &Board, color: Stone) -> Option<Pos>;

    /// Nodes visited by the most recent `choose_move`.
    fn last_search_nodes(&self) -> u64;

    /// Per-move time budget for subsequent calls. Values below 1 are raised to 1.
    fn set_time_limit_millis(&mut self, millis: u64);
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the move from the mover's perspective
    pub score: i32,
    /// Deepest completed search depth
    pub depth: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
            stats: result.stats,
        }
    }
}

/// Main AI Engine for Othello.
///
/// One engine serves one player. Decisions run one at a time; the
/// transposition table and statistics belong to the decision in progress.
///
/// # Configuration
///
/// See [`SearchConfig`]. The [`Preset`]s reproduce the three standard agents:
/// `tt` (iterative deepening, TT, symmetry), `my` (fixed depth 10, TT) and
/// `ab` (fixed depth 5, plain alpha-beta).
pub struct AIEngine {
    searcher: Searcher,
    config: SearchConfig,
    last: Option<MoveResult>,
}

impl AIEngine {
    /// Create an AI engine with the default configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use othello::{AIEngine, Agent};
    ///
    /// let engine = AIEngine::new();
    /// assert_eq!(engine.nickname(), "ABTT");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create an AI engine with a custom configuration.
    ///
    /// Builds its own Zobrist table from `config.zobrist_seed`.
    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        let zobrist = Arc::new(ZobristTable::with_seed(config.zobrist_seed));
        Self::with_zobrist(config, zobrist)
    }

    /// Create an AI engine that shares an existing Zobrist table.
    #[must_use]
    pub fn with_zobrist(config: SearchConfig, zobrist: Arc<ZobristTable>) -> Self {
        let config = config.normalized();
        let tt = config
            .use_tt
            .then(|| TranspositionTable::with_policy(config.tt_capacity, config.tt_eviction.policy()));
        Self {
            searcher: Searcher::new(zobrist, tt, config.use_symmetry),
            config,
            last: None,
        }
    }

    /// Create one of the standard agents.
    #[must_use]
    pub fn preset(preset: Preset) -> Self {
        Self::with_config(preset.config())
    }

    /// Get the best move for the given position.
    ///
    /// Use `get_move_with_stats` if you need search statistics.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the best move with detailed search statistics.
    ///
    /// Iterative mode deepens until `max_depth` or the time limit, whichever
    /// comes first; fixed mode searches exactly `max_depth` plies.
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();

        let result = match self.config.mode {
            SearchMode::Iterative => self.searcher.search_timed(
                board,
                color,
                self.config.max_depth,
                Duration::from_millis(self.config.time_limit_ms),
            ),
            SearchMode::Fixed => self.searcher.search(board, color, self.config.max_depth),
        };

        let result = MoveResult::from_search(result, start.elapsed().as_millis() as u64);
        match result.best_move {
            Some(mov) => info!(
                "{} {:?}: {} score {} depth {} nodes {} tt_hit {:.1}% in {}ms",
                self.nickname(),
                color,
                mov,
                result.score,
                result.depth,
                result.nodes,
                result.stats.tt_hit_rate(),
                result.time_ms
            ),
            None => info!("{} {:?}: no legal move", self.nickname(), color),
        }

        self.last = Some(result.clone());
        result
    }

    /// Choose a move from a raw `cells[x][y]` grid and a color of `1` or `-1`.
    pub fn choose_move_cells(
        &mut self,
        cells: &[[i8; BOARD_SIZE]; BOARD_SIZE],
        color: i8,
    ) -> BoardResult<Option<Pos>> {
        let board = Board::from_cells(cells)?;
        let stone = Stone::from_value(color)
            .filter(|s| *s != Stone::Empty)
            .ok_or(BoardError::InvalidColor(i64::from(color)))?;
        Ok(self.get_move(&board, stone))
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Result of the most recent decision.
    #[must_use]
    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last.as_ref()
    }

    /// Statistics of the most recent decision.
    #[must_use]
    pub fn last_stats(&self) -> SearchStats {
        self.last.as_ref().map(|r| r.stats).unwrap_or_default()
    }

    /// Get transposition table statistics, if the table is enabled.
    #[must_use]
    pub fn tt_stats(&self) -> Option<TTStats> {
        self.searcher.tt_stats()
    }
}

impl Agent for AIEngine {
    fn nickname(&self) -> &str {
        self.config.nickname()
    }

    fn choose_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move(board, color)
    }

    fn last_search_nodes(&self) -> u64 {
        self.last.as_ref().map_or(0, |r| r.nodes)
    }

    fn set_time_limit_millis(&mut self, millis: u64) {
        self.config.time_limit_ms = millis.max(1);
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{apply_move, legal_moves};

    fn fast_config() -> SearchConfig {
        SearchConfig {
            mode: SearchMode::Fixed,
            max_depth: 3,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.config(), &SearchConfig::default());
        assert!(engine.last_result().is_none());
        assert_eq!(engine.last_search_nodes(), 0);
    }

    #[test]
    fn test_preset_nicknames() {
        assert_eq!(AIEngine::preset(Preset::Tt).nickname(), "ABTT");
        assert_eq!(AIEngine::preset(Preset::My).nickname(), "ABTT-FIXED");
        assert_eq!(AIEngine::preset(Preset::Ab).nickname(), "AB");
        assert!(AIEngine::preset(Preset::Ab).tt_stats().is_none());
    }

    #[test]
    fn test_opening_move_is_legal() {
        let mut engine = AIEngine::with_config(fast_config());
        let board = Board::initial();
        let mov = engine.get_move(&board, Stone::Black).unwrap();
        assert!(legal_moves(&board, Stone::Black).contains(&mov));
        assert!(engine.last_search_nodes() > 0);
        assert_eq!(engine.last_result().map(|r| r.depth), Some(3));
    }

    #[test]
    fn test_last_stats_follow_the_table() {
        let board = Board::initial();

        let mut with_tt = AIEngine::with_config(fast_config());
        assert_eq!(with_tt.last_stats(), SearchStats::default());
        assert!(with_tt.get_move(&board, Stone::Black).is_some());
        let stats = with_tt.last_stats();
        assert_eq!(stats.nodes, with_tt.last_search_nodes());
        assert!(stats.tt_probes > 0);
        assert!((0.0..=100.0).contains(&stats.tt_hit_rate()));

        let mut plain = AIEngine::preset(Preset::Ab);
        assert!(plain.get_move(&board, Stone::Black).is_some());
        assert_eq!(plain.last_stats().tt_probes, 0);
        assert_eq!(plain.last_stats().tt_hit_rate(), 0.0);
    }

    #[test]
    fn test_no_move_reports_zero_nodes() {
        let mut engine = AIEngine::with_config(fast_config());
        assert!(engine.get_move(&Board::initial(), Stone::Black).is_some());
        assert!(engine.last_search_nodes() > 0);

        let mut board = Board::new();
        board.place_stone(Pos::new(2, 2), Stone::White);
        assert_eq!(engine.choose_move(&board, Stone::Black), None);
        assert_eq!(engine.last_search_nodes(), 0);
    }

    #[test]
    fn test_time_limit_is_clamped() {
        let mut engine = AIEngine::new();
        engine.set_time_limit_millis(0);
        assert_eq!(engine.config().time_limit_ms, 1);
        engine.set_time_limit_millis(250);
        assert_eq!(engine.config().time_limit_ms, 250);
    }

    #[test]
    fn test_tiny_budget_still_returns_a_move() {
        let mut engine = AIEngine::new();
        engine.set_time_limit_millis(1);
        let board = apply_move(&Board::initial(), Pos::new(2, 3), Stone::Black);
        let result = engine.get_move_with_stats(&board, Stone::White);
        let mov = result.best_move.unwrap();
        assert!(legal_moves(&board, Stone::White).contains(&mov));
        assert!(result.depth >= 1);
    }

    #[test]
    fn test_choose_move_cells() {
        let mut engine = AIEngine::with_config(fast_config());
        let cells = Board::initial().to_cells();

        let mov = engine.choose_move_cells(&cells, 1).unwrap();
        assert!(mov.is_some());
        assert_eq!(engine.choose_move_cells(&cells, 0), Err(BoardError::InvalidColor(0)));

        let mut bad = cells;
        bad[0][0] = 3;
        assert!(matches!(
            engine.choose_move_cells(&bad, 1),
            Err(BoardError::InvalidCell { value: 3, .. })
        ));
    }

    #[test]
    fn test_agents_behind_trait_objects() {
        let mut agents: Vec<Box<dyn Agent>> = vec![
            Box::new(AIEngine::with_config(fast_config())),
            Box::new(AIEngine::with_config(SearchConfig {
                use_tt: false,
                ..fast_config()
            })),
        ];
        let board = Board::initial();
        let moves: Vec<Option<Pos>> = agents
            .iter_mut()
            .map(|a| a.choose_move(&board, Stone::Black))
            .collect();
        assert!(moves.iter().all(Option::is_some));
        assert!(agents.iter().all(|a| a.last_search_nodes() > 0));
    }

    #[test]
    fn test_shared_zobrist_gives_same_decisions() {
        let zobrist = Arc::new(ZobristTable::new());
        let mut a = AIEngine::with_zobrist(fast_config(), Arc::clone(&zobrist));
        let mut b = AIEngine::with_zobrist(fast_config(), zobrist);
        let board = apply_move(&Board::initial(), Pos::new(2, 3), Stone::Black);
        assert_eq!(
            a.get_move_with_stats(&board, Stone::White).best_move,
            b.get_move_with_stats(&board, Stone::White).best_move
        );
    }
}
