//! Move selection across game phases: book while it lasts, then search.

use shakmaty::Color;

use super::book::{BookError, OpeningBook, OpeningGate};
use super::eval::{Evaluation, Score};
use super::search::{check_side, SearchLimits, Searcher};
use crate::config::EngineConfig;
use crate::core::PositionOracle;
use crate::error::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Moves come from the opening book.
    Opening,
    /// Moves come from the search.
    Middlegame,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveSource {
    Book,
    Search { score: Score, depth: u32, nodes: u64 },
}

#[derive(Clone, Debug)]
pub struct Choice<M> {
    pub mv: M,
    pub source: MoveSource,
}

pub struct Engine {
    searcher: Searcher,
    gate: Option<OpeningGate>,
    phase: GamePhase,
    limits: SearchLimits,
}

impl Engine {
    /// Search-only engine.
    pub fn new(evaluation: Evaluation) -> Self {
        Engine {
            searcher: Searcher::new(evaluation),
            gate: None,
            phase: GamePhase::Middlegame,
            limits: SearchLimits::default(),
        }
    }

    /// Engine that consults `book` until the first miss.
    pub fn with_book(evaluation: Evaluation, book: OpeningBook, seed: Option<u64>) -> Self {
        let gate = match seed {
            Some(seed) => OpeningGate::with_seed(book, seed),
            None => OpeningGate::new(book),
        };
        Engine {
            gate: Some(gate),
            phase: GamePhase::Opening,
            ..Self::new(evaluation)
        }
    }

    /// Build from configuration, loading the book if one is configured.
    pub fn from_config(config: &EngineConfig) -> Result<Self, BookError> {
        let mut engine = match (&config.book_path, config.own_book) {
            (Some(path), true) => {
                let book = OpeningBook::load(path)?;
                Self::with_book(config.evaluation, book, config.seed)
            }
            _ => Self::new(config.evaluation),
        };
        engine.limits = config.limits();
        Ok(engine)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Default limits used by [`Engine::choose`].
    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Back to the opening phase (if a book is present).
    pub fn new_game(&mut self) {
        self.phase = if self.gate.is_some() {
            GamePhase::Opening
        } else {
            GamePhase::Middlegame
        };
    }

    /// Choose a move for `side` searching `depth` plies when out of book.
    pub fn select_move<P: PositionOracle + ?Sized>(
        &mut self,
        pos: &mut P,
        side: Color,
        depth: i32,
    ) -> Result<P::Move, EngineError> {
        let limits = SearchLimits {
            depth,
            ..self.limits.clone()
        };
        self.dispatch(pos, side, &limits).map(|choice| choice.mv)
    }

    /// Choose a move for the side to move under the configured limits.
    pub fn choose<P: PositionOracle + ?Sized>(
        &mut self,
        pos: &mut P,
    ) -> Result<Choice<P::Move>, EngineError> {
        let side = pos.side_to_move();
        let limits = self.limits.clone();
        self.dispatch(pos, side, &limits)
    }

    fn dispatch<P: PositionOracle + ?Sized>(
        &mut self,
        pos: &mut P,
        side: Color,
        limits: &SearchLimits,
    ) -> Result<Choice<P::Move>, EngineError> {
        check_side(&*pos, side)?;

        if self.phase == GamePhase::Opening {
            if let Some(mv) = self.gate.as_mut().and_then(|gate| gate.lookup(&*pos)) {
                tracing::info!(?mv, "book move");
                return Ok(Choice {
                    mv,
                    source: MoveSource::Book,
                });
            }
            tracing::info!("out of book, switching to search");
            self.phase = GamePhase::Middlegame;
        }

        let result = self.searcher.search(pos, limits)?;
        Ok(Choice {
            mv: result.best_move,
            source: MoveSource::Search {
                score: result.score,
                depth: result.depth,
                nodes: result.stats.nodes,
            },
        })
    }
}

/// Pick a move for `side_to_move` with a fixed-depth alpha-beta search.
///
/// The caller must have checked that the game is not over; a position
/// without legal moves yields [`EngineError::NoLegalMoves`].
pub fn select_move<P: PositionOracle + ?Sized>(
    position: &mut P,
    side_to_move: Color,
    search_depth: i32,
) -> Result<P::Move, EngineError> {
    Searcher::default().select_move(position, side_to_move, search_depth)
}
