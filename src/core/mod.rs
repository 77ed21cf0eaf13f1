//! Position oracle seam
//!
//! The engine never touches board cells directly. Everything it needs from
//! the rules engine goes through [`PositionOracle`]:
//! - legal move enumeration and apply/undo
//! - terminal status (checkmate, draw)
//! - capture/check tests for move ordering
//! - canonical keys for opening book matching

pub mod game;
pub mod oracle;

pub use game::{canonical_key, Game};
pub use oracle::{MoveGuard, PositionOracle, Winner};
