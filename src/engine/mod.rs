//! Chess engine components
//!
//! This module contains the core engine functionality:
//! - Static evaluation (material and piece-square tables)
//! - Capture/check move ordering
//! - Minimax search with alpha-beta pruning
//! - Opening book gate and the phase dispatcher

pub mod book;
pub mod driver;
pub mod eval;
pub mod pst;
pub mod search;

pub use book::{BookError, OpeningBook, OpeningGate};
pub use driver::{select_move, Choice, Engine, GamePhase, MoveSource};
pub use eval::{to_pawns, Evaluation, Score, DRAW_SCORE, MATE_SCORE};
pub use search::{SearchLimits, SearchResult, SearchStats, Searcher};
