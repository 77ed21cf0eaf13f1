pub mod config;
pub mod core;
pub mod engine;
pub mod error;

pub use config::EngineConfig;
pub use crate::core::{Game, MoveGuard, PositionOracle, Winner};
pub use engine::{select_move, Engine, Evaluation, OpeningBook, OpeningGate, Searcher};
pub use error::EngineError;
pub use shakmaty;
