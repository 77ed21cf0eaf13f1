//! Piece-square tables.
//!
//! White tables are written as seen from White's side of the board: the
//! first row is rank 8, the last row is rank 1. Black tables are the exact
//! row reversal, so a Black piece on rank 8 reads the same entry a White
//! piece reads on rank 1.

use shakmaty::{Color, Role};

pub type Table = [[i32; 8]; 8];

const fn mirror(table: Table) -> Table {
    let mut out = [[0; 8]; 8];
    let mut row = 0;
    while row < 8 {
        out[row] = table[7 - row];
        row += 1;
    }
    out
}

pub const WHITE_PAWN: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const WHITE_KNIGHT: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

pub const WHITE_BISHOP: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

pub const WHITE_ROOK: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

pub const WHITE_QUEEN: Table = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

// Slight preference for the kingside castled square.
pub const WHITE_KING: Table = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 31, 20],
];

pub const BLACK_PAWN: Table = mirror(WHITE_PAWN);
pub const BLACK_KNIGHT: Table = mirror(WHITE_KNIGHT);
pub const BLACK_BISHOP: Table = mirror(WHITE_BISHOP);
pub const BLACK_ROOK: Table = mirror(WHITE_ROOK);
pub const BLACK_QUEEN: Table = mirror(WHITE_QUEEN);
pub const BLACK_KING: Table = mirror(WHITE_KING);

pub fn table(color: Color, role: Role) -> &'static Table {
    match (color, role) {
        (Color::White, Role::Pawn) => &WHITE_PAWN,
        (Color::White, Role::Knight) => &WHITE_KNIGHT,
        (Color::White, Role::Bishop) => &WHITE_BISHOP,
        (Color::White, Role::Rook) => &WHITE_ROOK,
        (Color::White, Role::Queen) => &WHITE_QUEEN,
        (Color::White, Role::King) => &WHITE_KING,
        (Color::Black, Role::Pawn) => &BLACK_PAWN,
        (Color::Black, Role::Knight) => &BLACK_KNIGHT,
        (Color::Black, Role::Bishop) => &BLACK_BISHOP,
        (Color::Black, Role::Rook) => &BLACK_ROOK,
        (Color::Black, Role::Queen) => &BLACK_QUEEN,
        (Color::Black, Role::King) => &BLACK_KING,
    }
}

/// Positional bonus for `role` of `color` on the square at `rank`/`file`
/// (both 0-based, rank 0 = rank 1).
pub fn bonus(color: Color, role: Role, rank: usize, file: usize) -> i32 {
    table(color, role)[7 - rank][file]
}
