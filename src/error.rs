//! Error types shared by the oracle adapter, evaluator and search.

use shakmaty::Color;
use thiserror::Error;

/// Errors raised by the engine core.
///
/// Every variant except [`EngineError::Interrupted`] is a precondition or
/// contract violation: the core fails fast instead of guessing.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The FEN string could not be parsed or describes an illegal position.
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// A board cell holds a symbol that is not a chess piece.
    #[error("unrecognized piece symbol '{0}'")]
    UnknownPiece(char),

    /// A piece-placement field does not describe an 8x8 board.
    #[error("malformed piece placement: {0}")]
    MalformedPlacement(String),

    /// The oracle refused to play a move.
    #[error("illegal move {0}")]
    IllegalMove(String),

    /// Search was requested for a position without legal moves.
    #[error("no legal moves in position")]
    NoLegalMoves,

    /// The requested side does not match the position's side to move.
    #[error("search requested for {requested:?} but {to_move:?} is to move")]
    SideMismatch { requested: Color, to_move: Color },

    /// The evaluation name is not one of the known modes.
    #[error("unknown evaluation '{0}' (expected 'material' or 'piece-square')")]
    UnknownEvaluation(String),

    /// The node or time budget ran out, or the stop flag was raised.
    #[error("search interrupted")]
    Interrupted,
}
