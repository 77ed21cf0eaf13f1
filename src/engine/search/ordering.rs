//! Move ordering: captures and checks first.

use crate::core::PositionOracle;

pub const CAPTURE_BONUS: i32 = 10;
pub const CHECK_BONUS: i32 = 5;

pub fn priority<P: PositionOracle + ?Sized>(pos: &P, mv: &P::Move) -> i32 {
    let mut score = 0;
    if pos.is_capture(mv) {
        score += CAPTURE_BONUS;
    }
    if pos.gives_check(mv) {
        score += CHECK_BONUS;
    }
    score
}

/// Reorder `moves` by descending priority. Equal priorities keep their
/// input order.
pub fn order_moves<P: PositionOracle + ?Sized>(pos: &P, moves: Vec<P::Move>) -> Vec<P::Move> {
    let mut scored: Vec<(P::Move, i32)> = moves
        .into_iter()
        .map(|mv| {
            let score = priority(pos, &mv);
            (mv, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(mv, _)| mv).collect()
}
