//! The narrow interface the search consumes, and the scoped apply/undo guard.

use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

use shakmaty::{Color, Piece, Square};

use crate::error::EngineError;

/// Game result as reported by the oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    White,
    Black,
    Draw,
    /// The game is still running.
    Undecided,
}

impl From<Color> for Winner {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Winner::White,
            Color::Black => Winner::Black,
        }
    }
}

/// A mutable position owned by one search call.
///
/// All mutation happens through [`apply`](PositionOracle::apply) and
/// [`undo`](PositionOracle::undo). Moves are opaque to the engine: they are
/// only cloned and compared.
pub trait PositionOracle {
    type Move: Clone + PartialEq + Debug;

    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play `mv`. Fails if the oracle rejects the move.
    fn apply(&mut self, mv: &Self::Move) -> Result<(), EngineError>;

    /// Take back the most recently applied move.
    fn undo(&mut self);

    fn is_checkmate(&self) -> bool;

    /// No legal moves and not in check.
    fn is_stalemate(&self) -> bool;

    fn winner(&self) -> Winner;

    fn is_capture(&self, mv: &Self::Move) -> bool;

    fn gives_check(&self, mv: &Self::Move) -> bool;

    /// Position identity without the move clocks.
    fn canonical_key(&self) -> String;

    fn side_to_move(&self) -> Color;

    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// Turn recorded move text into a legal move of this position.
    fn resolve_move(&self, notation: &str) -> Option<Self::Move>;
}

/// A move applied to a borrowed position, taken back on drop.
///
/// Dropping the guard is the only way the move is undone, so a cutoff
/// `break`, an early `return` and `?` propagation all restore the position.
pub struct MoveGuard<'a, P: PositionOracle + ?Sized> {
    pos: &'a mut P,
}

impl<'a, P: PositionOracle + ?Sized> MoveGuard<'a, P> {
    pub fn apply(pos: &'a mut P, mv: &P::Move) -> Result<Self, EngineError> {
        pos.apply(mv)?;
        Ok(MoveGuard { pos })
    }
}

impl<P: PositionOracle + ?Sized> Deref for MoveGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.pos
    }
}

impl<P: PositionOracle + ?Sized> DerefMut for MoveGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.pos
    }
}

impl<P: PositionOracle + ?Sized> Drop for MoveGuard<'_, P> {
    fn drop(&mut self) {
        self.pos.undo();
    }
}
