//! Searcher: root move selection, budget handling and the iterative driver.

use shakmaty::Color;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core::{MoveGuard, PositionOracle};
use crate::engine::eval::{Evaluation, Score, MATE_SCORE};
use crate::error::EngineError;

use super::ordering;
use super::types::{SearchLimits, SearchResult, SearchStats};

pub struct Searcher {
    pub(super) evaluation: Evaluation,
    pub(super) stats: SearchStats,
    pub(super) stop: Arc<AtomicBool>,
    pub(super) start_time: Instant,
    pub(super) time_limit: Option<Duration>,
    pub(super) node_limit: Option<u64>,
}

impl Searcher {
    pub fn new(evaluation: Evaluation) -> Self {
        Searcher {
            evaluation,
            stats: SearchStats::default(),
            stop: Arc::new(AtomicBool::new(false)),
            start_time: Instant::now(),
            time_limit: None,
            node_limit: None,
        }
    }

    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    /// Raising this flag from another thread interrupts the running search.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    /// Counters of the last search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub(super) fn should_stop(&self) -> bool {
        if self.stop.load(Ordering::Relaxed) {
            return true;
        }
        if let Some(limit) = self.node_limit {
            if self.stats.nodes >= limit {
                return true;
            }
        }
        if let Some(limit) = self.time_limit {
            if self.start_time.elapsed() >= limit {
                return true;
            }
        }
        false
    }

    /// Pick a move for `side`, searching `depth` plies.
    pub fn select_move<P: PositionOracle + ?Sized>(
        &mut self,
        pos: &mut P,
        side: Color,
        depth: i32,
    ) -> Result<P::Move, EngineError> {
        check_side(&*pos, side)?;
        self.search(pos, &SearchLimits::depth(depth))
            .map(|result| result.best_move)
    }

    /// Run a search under `limits`.
    ///
    /// Without a node or time budget this is a single fixed-depth search.
    /// With one, depths 1..=limit are searched in turn and the deepest
    /// completed iteration wins. If nothing completed (budget exhausted or
    /// stop flag raised), the first ordered move is returned at depth 0.
    pub fn search<P: PositionOracle + ?Sized>(
        &mut self,
        pos: &mut P,
        limits: &SearchLimits,
    ) -> Result<SearchResult<P::Move>, EngineError> {
        self.stop.store(false, Ordering::Relaxed);
        self.start_time = Instant::now();
        self.stats = SearchStats::default();
        self.time_limit = limits.movetime.map(Duration::from_millis);
        self.node_limit = limits.nodes;

        let max_depth = limits.depth.max(0) as u32;
        let depths = if limits.is_budgeted() {
            1..=max_depth.max(1)
        } else {
            max_depth..=max_depth
        };

        let mut completed: Option<(P::Move, Score, u32)> = None;
        for depth in depths {
            match self.search_root(pos, depth) {
                Ok((best_move, score)) => {
                    self.report(depth, score);
                    let decided = score.abs() >= MATE_SCORE;
                    completed = Some((best_move, score, depth));
                    if decided {
                        break;
                    }
                }
                Err(EngineError::Interrupted) => break,
                Err(err) => return Err(err),
            }
        }

        let (best_move, score, depth) = match completed {
            Some(done) => done,
            None => {
                tracing::warn!("search budget exhausted before depth 1 completed");
                let legals = pos.legal_moves();
                let first = ordering::order_moves(&*pos, legals)
                    .into_iter()
                    .next()
                    .ok_or(EngineError::NoLegalMoves)?;
                (first, self.evaluation.evaluate(&*pos), 0)
            }
        };
        Ok(SearchResult {
            best_move,
            score,
            depth,
            stats: self.stats.clone(),
        })
    }

    /// Search every root move with a full window and keep the one most
    /// favourable to the side to move. Ties keep the earlier move.
    ///
    /// The root move does not consume depth: each child is searched `depth`
    /// further plies, so depth 0 evaluates every child statically.
    fn search_root<P: PositionOracle + ?Sized>(
        &mut self,
        pos: &mut P,
        depth: u32,
    ) -> Result<(P::Move, Score), EngineError> {
        let maximizing = pos.side_to_move() == Color::White;
        let legals = pos.legal_moves();
        let ordered = ordering::order_moves(&*pos, legals);

        let mut best: Option<(P::Move, Score)> = None;
        for mv in ordered {
            let score = {
                let mut child = MoveGuard::apply(&mut *pos, &mv)?;
                self.minimax(&mut *child, depth, -MATE_SCORE, MATE_SCORE, !maximizing)?
            };
            let improves = match &best {
                None => true,
                Some((_, incumbent)) if maximizing => score > *incumbent,
                Some((_, incumbent)) => score < *incumbent,
            };
            if improves {
                best = Some((mv, score));
            }
        }
        best.ok_or(EngineError::NoLegalMoves)
    }

    fn report(&self, depth: u32, score: Score) {
        tracing::debug!(
            depth,
            score,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            cutoffs = self.stats.cutoffs,
            elapsed_ms = self.start_time.elapsed().as_millis() as u64,
            "search iteration complete"
        );
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Evaluation::default())
    }
}

pub(crate) fn check_side<P: PositionOracle + ?Sized>(
    pos: &P,
    side: Color,
) -> Result<(), EngineError> {
    let to_move = pos.side_to_move();
    if to_move == side {
        Ok(())
    } else {
        Err(EngineError::SideMismatch {
            requested: side,
            to_move,
        })
    }
}
