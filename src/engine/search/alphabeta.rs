//! Depth-limited minimax with alpha-beta pruning.

use crate::core::{MoveGuard, PositionOracle, Winner};
use crate::engine::eval::{Score, DRAW_SCORE, MATE_SCORE};
use crate::error::EngineError;

use super::ordering;
use super::searcher::Searcher;

impl Searcher {
    /// Value of `pos` from White's point of view, searched `depth` plies.
    ///
    /// Returns [`EngineError::Interrupted`] when the budget runs out; the
    /// position is restored either way.
    pub(super) fn minimax<P: PositionOracle + ?Sized>(
        &mut self,
        pos: &mut P,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Result<Score, EngineError> {
        if self.should_stop() {
            return Err(EngineError::Interrupted);
        }
        self.stats.nodes += 1;

        if pos.is_checkmate() {
            return Ok(match pos.winner() {
                Winner::White => MATE_SCORE,
                Winner::Black => -MATE_SCORE,
                Winner::Draw | Winner::Undecided => DRAW_SCORE,
            });
        }
        if pos.is_stalemate() {
            return Ok(DRAW_SCORE);
        }
        if depth == 0 {
            self.stats.leaves += 1;
            return Ok(self.evaluation.evaluate(&*pos));
        }

        let legals = pos.legal_moves();
        let ordered = ordering::order_moves(&*pos, legals);

        if maximizing {
            let mut best = -MATE_SCORE;
            for mv in &ordered {
                let score = {
                    let mut child = MoveGuard::apply(&mut *pos, mv)?;
                    self.minimax(&mut *child, depth - 1, alpha, beta, false)?
                };
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = MATE_SCORE;
            for mv in &ordered {
                let score = {
                    let mut child = MoveGuard::apply(&mut *pos, mv)?;
                    self.minimax(&mut *child, depth - 1, alpha, beta, true)?
                };
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Ok(best)
        }
    }
}
