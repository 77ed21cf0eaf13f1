//! Shared helpers for integration tests.

#![allow(dead_code)]

use minimax_chess::engine::eval::{Evaluation, Score, DRAW_SCORE, MATE_SCORE};
use minimax_chess::engine::search::ordering::order_moves;
use minimax_chess::shakmaty::{Color, Move};
use minimax_chess::{Game, PositionOracle, Winner};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

pub mod positions {
    pub const STARTING: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    pub const ITALIAN: &str = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3";
    pub const BACK_RANK_WHITE: &str = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1";
    pub const BACK_RANK_BLACK: &str = "r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1";
    pub const ONLY_MOVE: &str = "7k/8/8/8/8/8/6q1/7K w - - 0 1";
    pub const CHECKMATED: &str = "R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1";
    pub const STALEMATE: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";
    pub const PAWN_ENDING: &str = "8/8/4k3/8/8/3K4/4P3/8 w - - 0 1";
    pub const HANGING_QUEEN: &str = "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1";
    pub const POISONED_PAWN: &str = "4k3/8/4p3/3p4/8/8/8/3QK3 w - - 0 1";
    pub const KNIGHT_ENDING: &str = "4k3/8/8/8/4N3/8/8/4K3 w - - 0 1";
}

pub fn game(fen: &str) -> Game {
    Game::from_fen(fen).unwrap()
}

/// Play up to `plies` random moves from the start, never ending the game.
pub fn random_walk(seed: u64, plies: usize) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut walk = Game::new();
    for _ in 0..plies {
        let moves = walk.legal_moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        walk.apply(mv).unwrap();
        if walk.winner() != Winner::Undecided {
            walk.undo();
            break;
        }
    }
    Game::from_fen(&walk.fen()).unwrap()
}

/// Swap colours and ranks of a FEN piece placement.
pub fn mirror_placement(placement: &str) -> String {
    placement
        .split('/')
        .rev()
        .map(swap_case)
        .collect::<Vec<_>>()
        .join("/")
}

/// Swap colours and ranks of a whole FEN.
pub fn mirror_fen(fen: &str) -> String {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let side = if fields[1] == "w" { "b" } else { "w" };
    let castling = if fields[2] == "-" {
        "-".to_string()
    } else {
        let swapped = swap_case(fields[2]);
        let mut upper: Vec<char> = swapped.chars().filter(char::is_ascii_uppercase).collect();
        let lower: Vec<char> = swapped.chars().filter(char::is_ascii_lowercase).collect();
        upper.extend(lower);
        upper.into_iter().collect()
    };
    let ep = match fields[3].as_bytes() {
        [file, b'3'] => format!("{}6", *file as char),
        [file, b'6'] => format!("{}3", *file as char),
        _ => "-".to_string(),
    };
    let mut out = vec![mirror_placement(fields[0]), side.to_string(), castling, ep];
    out.extend(fields[4..].iter().map(|s| s.to_string()));
    out.join(" ")
}

fn swap_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

/// Plain minimax without pruning or ordering. Stalemate scores as a draw.
pub fn reference_minimax(game: &mut Game, depth: u32, maximizing: bool, evaluation: Evaluation) -> Score {
    if game.is_checkmate() {
        return match game.winner() {
            Winner::White => MATE_SCORE,
            Winner::Black => -MATE_SCORE,
            _ => DRAW_SCORE,
        };
    }
    if game.legal_moves().is_empty() {
        return DRAW_SCORE;
    }
    if depth == 0 {
        return evaluation.evaluate(game);
    }
    let mut best = if maximizing { -MATE_SCORE } else { MATE_SCORE };
    for mv in game.legal_moves() {
        game.apply(&mv).unwrap();
        let score = reference_minimax(game, depth - 1, !maximizing, evaluation);
        game.undo();
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

/// Root move choice by plain minimax, with the same tie-break as the engine.
/// Each root move is followed by `depth` further plies.
pub fn reference_root(game: &mut Game, depth: u32, evaluation: Evaluation) -> (Move, Score) {
    let maximizing = game.side_to_move() == Color::White;
    let ordered = order_moves(&*game, game.legal_moves());
    let mut best: Option<(Move, Score)> = None;
    for mv in ordered {
        game.apply(&mv).unwrap();
        let score = reference_minimax(game, depth, !maximizing, evaluation);
        game.undo();
        let improves = match &best {
            None => true,
            Some((_, b)) if maximizing => score > *b,
            Some((_, b)) => score < *b,
        };
        if improves {
            best = Some((mv, score));
        }
    }
    best.unwrap()
}
