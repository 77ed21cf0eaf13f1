//! Static evaluation: material plus piece-square bonuses.
//!
//! Scores are centipawns from White's point of view. White and Black totals
//! are accumulated independently and the result is their difference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shakmaty::{Color, Piece, Role, Square};

use super::pst;
use crate::core::PositionOracle;
use crate::error::EngineError;

/// Centipawns, positive favours White.
pub type Score = i32;

pub const CENTIPAWNS_PER_PAWN: Score = 100;
/// Checkmate sentinel, 9999 pawns. Never reached by material alone.
pub const MATE_SCORE: Score = 9999 * CENTIPAWNS_PER_PAWN;
pub const DRAW_SCORE: Score = 0;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 300;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 10000;

/// Score in pawn units with two-decimal resolution.
pub fn to_pawns(score: Score) -> f64 {
    f64::from(score) / f64::from(CENTIPAWNS_PER_PAWN)
}

pub fn material_value(role: Role) -> i32 {
    match role {
        Role::Pawn => PAWN_VALUE,
        Role::Knight => KNIGHT_VALUE,
        Role::Bishop => BISHOP_VALUE,
        Role::Rook => ROOK_VALUE,
        Role::Queen => QUEEN_VALUE,
        Role::King => KING_VALUE,
    }
}

/// Which heuristic the leaves of the search use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Evaluation {
    /// Base material values only.
    Material,
    /// Material plus piece-square bonuses.
    #[default]
    PieceSquare,
}

impl Evaluation {
    pub fn evaluate<P: PositionOracle + ?Sized>(self, pos: &P) -> Score {
        let mut totals = Totals::default();
        for square in Square::ALL {
            if let Some(piece) = pos.piece_at(square) {
                let index = square as usize;
                totals.add(piece, self.piece_score(piece, index / 8, index % 8));
            }
        }
        totals.score()
    }

    /// Evaluate the piece-placement field of a FEN (rank 8 first).
    pub fn evaluate_placement(self, placement: &str) -> Result<Score, EngineError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(EngineError::MalformedPlacement(format!(
                "expected 8 ranks, found {}",
                rows.len()
            )));
        }

        let mut totals = Totals::default();
        for (row, text) in rows.iter().enumerate() {
            let rank = 7 - row;
            let mut file = 0usize;
            for symbol in text.chars() {
                if let Some(empty) = symbol.to_digit(10).filter(|n| (1..=8).contains(n)) {
                    file += empty as usize;
                } else {
                    let piece = piece_from_symbol(symbol)?;
                    if file >= 8 {
                        return Err(EngineError::MalformedPlacement(format!(
                            "rank {} has more than 8 files",
                            rank + 1
                        )));
                    }
                    totals.add(piece, self.piece_score(piece, rank, file));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(EngineError::MalformedPlacement(format!(
                    "rank {} covers {} files",
                    rank + 1,
                    file
                )));
            }
        }
        Ok(totals.score())
    }

    fn piece_score(self, piece: Piece, rank: usize, file: usize) -> i32 {
        let base = material_value(piece.role);
        match self {
            Evaluation::Material => base,
            Evaluation::PieceSquare => base + pst::bonus(piece.color, piece.role, rank, file),
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Material => write!(f, "material"),
            Evaluation::PieceSquare => write!(f, "piece-square"),
        }
    }
}

impl FromStr for Evaluation {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "material" => Ok(Evaluation::Material),
            "piece-square" | "pst" => Ok(Evaluation::PieceSquare),
            other => Err(EngineError::UnknownEvaluation(other.to_string())),
        }
    }
}

/// Map a FEN piece letter to a piece.
pub fn piece_from_symbol(symbol: char) -> Result<Piece, EngineError> {
    let role = match symbol.to_ascii_lowercase() {
        'p' => Role::Pawn,
        'n' => Role::Knight,
        'b' => Role::Bishop,
        'r' => Role::Rook,
        'q' => Role::Queen,
        'k' => Role::King,
        _ => return Err(EngineError::UnknownPiece(symbol)),
    };
    let color = if symbol.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Ok(Piece { color, role })
}

#[derive(Default)]
struct Totals {
    white: i32,
    black: i32,
}

impl Totals {
    fn add(&mut self, piece: Piece, value: i32) {
        match piece.color {
            Color::White => self.white += value,
            Color::Black => self.black += value,
        }
    }

    fn score(&self) -> Score {
        self.white - self.black
    }
}
