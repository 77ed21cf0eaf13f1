//! Search: fixed-depth minimax with alpha-beta pruning, optional budgeted
//! iterative driver, capture/check move ordering.

mod alphabeta;
pub mod ordering;
mod searcher;
mod types;

pub(crate) use searcher::check_side;
pub use searcher::Searcher;
pub use types::{SearchLimits, SearchResult, SearchStats, DEFAULT_DEPTH};
