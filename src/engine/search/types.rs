//! Search limits, stats and results.

use crate::engine::eval::Score;

/// Depth used when no limit is given.
pub const DEFAULT_DEPTH: i32 = 3;

#[derive(Clone, Debug)]
pub struct SearchLimits {
    /// Plies searched below each root move. Values below zero behave as zero.
    pub depth: i32,
    pub nodes: Option<u64>,
    /// Milliseconds.
    pub movetime: Option<u64>,
}

impl SearchLimits {
    pub fn depth(depth: i32) -> Self {
        SearchLimits {
            depth,
            ..Default::default()
        }
    }

    /// True when a node or time budget can cut the search short.
    pub fn is_budgeted(&self) -> bool {
        self.nodes.is_some() || self.movetime.is_some()
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            nodes: None,
            movetime: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
}

/// Best root move and its minimax value.
#[derive(Clone, Debug)]
pub struct SearchResult<M> {
    pub best_move: M,
    pub score: Score,
    /// Deepest fully completed iteration; 0 if the budget ran out first.
    pub depth: u32,
    pub stats: SearchStats,
}
