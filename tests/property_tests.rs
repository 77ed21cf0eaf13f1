//! Property-based checks over positions reached by random play.

mod common;

use common::{mirror_fen, random_walk, reference_root};
use minimax_chess::core::canonical_key;
use minimax_chess::engine::search::ordering::{order_moves, priority};
use minimax_chess::engine::{Evaluation, SearchLimits, Searcher};
use minimax_chess::shakmaty::CastlingMode;
use minimax_chess::{Game, PositionOracle};
use proptest::prelude::*;

fn uci_strings(moves: &[minimax_chess::shakmaty::Move]) -> Vec<String> {
    let mut out: Vec<String> = moves
        .iter()
        .map(|mv| mv.to_uci(CastlingMode::Standard).to_string())
        .collect();
    out.sort();
    out
}

proptest! {
    #[test]
    fn prop_evaluation_is_colour_symmetric(seed in any::<u64>(), plies in 0usize..40) {
        let pos = random_walk(seed, plies);
        let mirrored = Game::from_fen(&mirror_fen(&pos.fen())).unwrap();
        for evaluation in [Evaluation::Material, Evaluation::PieceSquare] {
            prop_assert_eq!(evaluation.evaluate(&mirrored), -evaluation.evaluate(&pos));
        }
    }

    #[test]
    fn prop_ordering_is_a_permutation(seed in any::<u64>(), plies in 0usize..40) {
        let pos = random_walk(seed, plies);
        let moves = pos.legal_moves();
        let ordered = order_moves(&pos, moves.clone());
        prop_assert_eq!(uci_strings(&ordered), uci_strings(&moves));

        // Priorities never increase along the ordering.
        for pair in ordered.windows(2) {
            prop_assert!(priority(&pos, &pair[0]) >= priority(&pos, &pair[1]));
        }
    }

    #[test]
    fn prop_canonical_key_ignores_clocks(
        seed in any::<u64>(),
        plies in 0usize..30,
        halfmove in 0u32..50,
        fullmove in 1u32..200,
    ) {
        let pos = random_walk(seed, plies);
        let fen = pos.fen();
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let rewritten = format!("{} {} {} {} {halfmove} {fullmove}", fields[0], fields[1], fields[2], fields[3]);
        let other = Game::from_fen(&rewritten).unwrap();
        prop_assert_eq!(other.canonical_key(), pos.canonical_key());
        prop_assert_eq!(canonical_key(&rewritten), pos.canonical_key());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_search_restores_position(seed in any::<u64>(), plies in 0usize..30, depth in -1i32..2) {
        let mut pos = random_walk(seed, plies);
        let before = pos.fen();
        let side = pos.side_to_move();
        let mut searcher = Searcher::new(Evaluation::PieceSquare);
        searcher.select_move(&mut pos, side, depth).unwrap();
        prop_assert_eq!(pos.fen(), before);
        prop_assert_eq!(pos.applied(), 0);
    }

    #[test]
    fn prop_alpha_beta_matches_minimax(seed in any::<u64>(), plies in 0usize..30, depth in 0u32..2) {
        let mut pos = random_walk(seed, plies);
        let (expected_move, expected_score) = reference_root(&mut pos, depth, Evaluation::PieceSquare);
        let mut searcher = Searcher::new(Evaluation::PieceSquare);
        let result = searcher.search(&mut pos, &SearchLimits::depth(depth as i32)).unwrap();
        prop_assert_eq!(result.score, expected_score);
        prop_assert_eq!(result.best_move, expected_move);
    }

    #[test]
    fn prop_selected_move_is_legal(seed in any::<u64>(), plies in 0usize..30) {
        let mut pos = random_walk(seed, plies);
        let side = pos.side_to_move();
        let mv = minimax_chess::select_move(&mut pos, side, 1).unwrap();
        prop_assert!(pos.legal_moves().contains(&mv));
    }
}
