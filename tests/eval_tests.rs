mod common;

use common::{game, mirror_fen, mirror_placement, positions};
use minimax_chess::engine::eval::{to_pawns, Evaluation, KNIGHT_VALUE, PAWN_VALUE};
use minimax_chess::engine::pst;
use minimax_chess::shakmaty::{Color, Role};
use minimax_chess::{EngineError, Game};

const SAMPLES: [&str; 6] = [
    positions::STARTING,
    positions::ITALIAN,
    positions::BACK_RANK_WHITE,
    positions::PAWN_ENDING,
    positions::HANGING_QUEEN,
    "r1bq1rk1/ppp2ppp/2np1n2/2b1p3/2B1P3/2NP1N2/PPP2PPP/R1BQ1RK1 w - - 0 7",
];

#[test]
fn test_mirror_negates_evaluation() {
    for evaluation in [Evaluation::Material, Evaluation::PieceSquare] {
        for fen in SAMPLES {
            let original = evaluation.evaluate(&game(fen));
            let mirrored = evaluation.evaluate(&game(&mirror_fen(fen)));
            assert_eq!(mirrored, -original, "{evaluation} {fen}");
        }
    }
}

#[test]
fn test_placement_matches_position() {
    for fen in SAMPLES {
        let placement = fen.split_whitespace().next().unwrap();
        let pos = game(fen);
        assert_eq!(
            Evaluation::PieceSquare.evaluate_placement(placement).unwrap(),
            Evaluation::PieceSquare.evaluate(&pos)
        );
        assert_eq!(
            Evaluation::PieceSquare
                .evaluate_placement(&mirror_placement(placement))
                .unwrap(),
            -Evaluation::PieceSquare.evaluate(&pos)
        );
    }
}

#[test]
fn test_evaluation_ignores_side_to_move_and_clocks() {
    let white = game("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
    let black = game("4k3/8/8/8/4P3/8/8/4K3 b - - 17 40");
    assert_eq!(
        Evaluation::PieceSquare.evaluate(&white),
        Evaluation::PieceSquare.evaluate(&black)
    );
}

#[test]
fn test_piece_square_bonus_applied() {
    // Lone white knight on e4 against bare kings on their home squares.
    let pos = game("4k3/8/8/8/4N3/8/8/4K3 w - - 0 1");
    let expected = KNIGHT_VALUE + pst::bonus(Color::White, Role::Knight, 3, 4)
        + pst::bonus(Color::White, Role::King, 0, 4)
        - pst::bonus(Color::Black, Role::King, 7, 4);
    assert_eq!(Evaluation::PieceSquare.evaluate(&pos), expected);
    assert_eq!(Evaluation::Material.evaluate(&pos), KNIGHT_VALUE);
}

#[test]
fn test_pawn_units() {
    let pos = game("4k3/8/8/8/8/8/PP6/4K3 w - - 0 1");
    assert_eq!(Evaluation::Material.evaluate(&pos), 2 * PAWN_VALUE);
    assert_eq!(to_pawns(Evaluation::Material.evaluate(&pos)), 2.0);
}

#[test]
fn test_unrecognized_content_fails_fast() {
    assert!(matches!(
        Evaluation::Material.evaluate_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN?"),
        Err(EngineError::UnknownPiece('?'))
    ));
    assert!(matches!(
        Evaluation::Material.evaluate_placement("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
        Err(EngineError::MalformedPlacement(_))
    ));
}

#[test]
fn test_startpos_zero() {
    assert_eq!(Evaluation::PieceSquare.evaluate(&Game::new()), 0);
}
