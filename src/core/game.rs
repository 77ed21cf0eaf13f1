//! shakmaty-backed position oracle.

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Piece, Position, Square};

use super::oracle::{PositionOracle, Winner};
use crate::error::EngineError;

/// Strip the half-move clock and full-move number from a FEN.
///
/// Placement, side to move, castling rights and en-passant target remain,
/// separated by single spaces.
pub fn canonical_key(fen: &str) -> String {
    fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
}

pub(crate) fn fen_of(position: &Chess) -> String {
    Fen::from_position(position.clone(), EnPassantMode::Legal).to_string()
}

pub(crate) fn key_of(position: &Chess) -> String {
    canonical_key(&fen_of(position))
}

/// A chess position plus the stack of positions it was reached from.
#[derive(Clone, Debug, Default)]
pub struct Game {
    position: Chess,
    history: Vec<Chess>,
}

impl Game {
    /// Standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(position: Chess) -> Self {
        Game {
            position,
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let parsed: Fen = fen.parse().map_err(|err: shakmaty::fen::ParseFenError| {
            EngineError::InvalidFen {
                fen: fen.to_string(),
                reason: err.to_string(),
            }
        })?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|err| EngineError::InvalidFen {
                fen: fen.to_string(),
                reason: err.to_string(),
            })?;
        Ok(Self::from_position(position))
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Full FEN including move clocks.
    pub fn fen(&self) -> String {
        fen_of(&self.position)
    }

    /// Number of moves currently applied on top of the initial position.
    pub fn applied(&self) -> usize {
        self.history.len()
    }

    /// Play a move given in UCI or SAN notation.
    pub fn play_notation(&mut self, notation: &str) -> Result<Move, EngineError> {
        let mv = self
            .resolve_move(notation)
            .ok_or_else(|| EngineError::IllegalMove(notation.to_string()))?;
        self.apply(&mv)?;
        Ok(mv)
    }
}

impl PositionOracle for Game {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().into_iter().collect()
    }

    fn apply(&mut self, mv: &Move) -> Result<(), EngineError> {
        let next = self
            .position
            .clone()
            .play(mv)
            .map_err(|_| EngineError::IllegalMove(mv.to_uci(CastlingMode::Standard).to_string()))?;
        self.history.push(std::mem::replace(&mut self.position, next));
        Ok(())
    }

    fn undo(&mut self) {
        match self.history.pop() {
            Some(previous) => self.position = previous,
            None => tracing::warn!("undo requested with no applied moves"),
        }
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    fn winner(&self) -> Winner {
        if self.position.is_checkmate() {
            Winner::from(!self.position.turn())
        } else if self.position.is_stalemate() || self.position.is_insufficient_material() {
            Winner::Draw
        } else {
            Winner::Undecided
        }
    }

    fn is_capture(&self, mv: &Move) -> bool {
        mv.is_capture()
    }

    fn gives_check(&self, mv: &Move) -> bool {
        self.position
            .clone()
            .play(mv)
            .map(|next| next.is_check())
            .unwrap_or(false)
    }

    fn canonical_key(&self) -> String {
        key_of(&self.position)
    }

    fn side_to_move(&self) -> Color {
        self.position.turn()
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    fn resolve_move(&self, notation: &str) -> Option<Move> {
        let notation = notation.trim();
        if let Ok(uci) = notation.parse::<UciMove>() {
            if let Ok(mv) = uci.to_move(&self.position) {
                return self.position.is_legal(&mv).then_some(mv);
            }
        }
        let san: SanPlus = notation.parse().ok()?;
        san.san.to_move(&self.position).ok()
    }
}
