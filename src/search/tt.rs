//! Transposition Table for caching search results
//!
//! The transposition table stores search results indexed by position key,
//! enabling reuse of results for positions reached through different move
//! orders (or, with canonicalization, through symmetric positions).
//!
//! # Example
//!
//! ```
//! use othello::board::Pos;
//! use othello::search::{TranspositionTable, EntryType};
//!
//! let mut tt = TranspositionTable::new(1024);
//!
//! let key = 0x123456789ABCDEF0;
//! tt.store(key, 5, 100, EntryType::Exact, Some(Pos::new(2, 3)));
//!
//! if let Some(entry) = tt.probe(key) {
//!     println!("Found cached result: score={}, move={:?}", entry.score, entry.best_move);
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use log::trace;

use crate::board::Pos;

/// Entry count above which the table makes room before the next store
pub const DEFAULT_TT_CAPACITY: usize = 200_000;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - true score >= stored value (fail high)
    LowerBound,
    /// Upper bound - true score <= stored value (fail low)
    UpperBound,
}

impl EntryType {
    /// Classify a search result against the window it was searched with.
    #[inline]
    #[must_use]
    pub fn from_window(score: i32, alpha: i32, beta: i32) -> Self {
        if score <= alpha {
            EntryType::UpperBound
        } else if score >= beta {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        }
    }
}

/// Transposition table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    /// Remaining depth the result was searched to
    pub depth: i32,
    /// Score from the root color's perspective
    pub score: i32,
    /// Type of score (exact, lower bound, upper bound)
    pub entry_type: EntryType,
    /// Best move, in the key's coordinate frame
    pub best_move: Option<Pos>,
}

impl TTEntry {
    /// Apply this entry to a node searched to `depth` with window `(alpha, beta)`.
    ///
    /// Entries shallower than `depth` are ignored. An exact entry answers the
    /// node outright; bounds narrow the window, and an emptied window
    /// (`alpha >= beta`) answers the node with the stored score.
    pub fn cutoff(&self, depth: i32, alpha: &mut i32, beta: &mut i32) -> Option<i32> {
        if self.depth < depth {
            return None;
        }
        match self.entry_type {
            EntryType::Exact => return Some(self.score),
            EntryType::LowerBound => *alpha = (*alpha).max(self.score),
            EntryType::UpperBound => *beta = (*beta).min(self.score),
        }
        (*alpha >= *beta).then_some(self.score)
    }
}

/// What to drop when the table grows past its capacity.
///
/// Called before every store while the table holds more than `capacity`
/// entries. Returns the number of entries removed.
pub trait EvictionPolicy: fmt::Debug + Send {
    fn make_room(&mut self, entries: &mut HashMap<u64, TTEntry>, capacity: usize) -> usize;
}

/// Drop everything. Coarse, but bounds memory with no per-entry bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearOnOverflow;

impl EvictionPolicy for ClearOnOverflow {
    fn make_room(&mut self, entries: &mut HashMap<u64, TTEntry>, _capacity: usize) -> usize {
        let n = entries.len();
        entries.clear();
        n
    }
}

/// Drop entries at the shallowest depths until the table is at or under
/// half its capacity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShallowestFirst;

impl EvictionPolicy for ShallowestFirst {
    fn make_room(&mut self, entries: &mut HashMap<u64, TTEntry>, capacity: usize) -> usize {
        let before = entries.len();
        let target = capacity / 2;
        while entries.len() > target {
            let Some(min_depth) = entries.values().map(|e| e.depth).min() else {
                break;
            };
            entries.retain(|_, e| e.depth > min_depth);
        }
        before - entries.len()
    }
}

/// Statistics about table usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTStats {
    /// Entry count that triggers eviction
    pub capacity: usize,
    /// Number of entries currently stored
    pub used: usize,
    /// Number of times the eviction policy ran
    pub evictions: u64,
}

/// Transposition table for caching search results.
///
/// Keyed by the full 64-bit position key. Stores are depth-preferred: an
/// existing entry is kept only when it was searched strictly deeper.
pub struct TranspositionTable {
    entries: HashMap<u64, TTEntry>,
    capacity: usize,
    policy: Box<dyn EvictionPolicy>,
    evictions: u64,
}

impl TranspositionTable {
    /// Create a table that clears itself once it holds more than `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, Box::new(ClearOnOverflow))
    }

    /// Create a table with a custom eviction policy.
    #[must_use]
    pub fn with_policy(capacity: usize, policy: Box<dyn EvictionPolicy>) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            policy,
            evictions: 0,
        }
    }

    /// Look up a position.
    #[inline]
    #[must_use]
    pub fn probe(&self, key: u64) -> Option<&TTEntry> {
        self.entries.get(&key)
    }

    /// Store a position in the table.
    ///
    /// If the table is over capacity the eviction policy runs first. An
    /// existing entry with a strictly greater depth is kept; otherwise the new
    /// result replaces it.
    pub fn store(
        &mut self,
        key: u64,
        depth: i32,
        score: i32,
        entry_type: EntryType,
        best_move: Option<Pos>,
    ) {
        if self.entries.len() > self.capacity {
            let removed = self.policy.make_room(&mut self.entries, self.capacity);
            self.evictions += 1;
            trace!(
                "tt over capacity ({}), evicted {} entries with {:?}",
                self.capacity,
                removed,
                self.policy
            );
        }

        let entry = TTEntry {
            depth,
            score,
            entry_type,
            best_move,
        };
        match self.entries.get_mut(&key) {
            Some(existing) if existing.depth > depth => {}
            Some(existing) => *existing = entry,
            None => {
                self.entries.insert(key, entry);
            }
        }
    }

    /// Clear all entries in the table.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        TTStats {
            capacity: self.capacity,
            used: self.entries.len(),
            evictions: self.evictions,
        }
    }
}

impl fmt::Debug for TranspositionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranspositionTable")
            .field("capacity", &self.capacity)
            .field("used", &self.entries.len())
            .field("policy", &self.policy)
            .finish()
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_CAPACITY)
    }
}
