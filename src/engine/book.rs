//! Opening book: canonical position key -> recorded moves, probed ahead of
//! the search with a seedable random pick.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use shakmaty::san::SanPlus;
use shakmaty::{CastlingMode, Chess, Position};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

use crate::core::game::key_of;
use crate::core::{canonical_key, PositionOracle};

#[derive(Debug, Error)]
pub enum BookError {
    #[error("failed to read opening book: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse opening book: {0}")]
    Json(#[from] serde_json::Error),
}

/// Canonical key -> list of move strings (UCI or SAN). Repeated moves count
/// as extra weight.
#[derive(Clone, Debug, Default)]
pub struct OpeningBook {
    entries: HashMap<String, Vec<String>>,
}

impl OpeningBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a book, choosing the format by extension (`.pgn` or JSON).
    pub fn load(path: &Path) -> Result<Self, BookError> {
        let is_pgn = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pgn"));
        let book = if is_pgn {
            Self::load_pgn(path)?
        } else {
            Self::load_json(path)?
        };
        tracing::info!(path = %path.display(), positions = book.len(), "opening book loaded");
        Ok(book)
    }

    /// Load a JSON object mapping position keys to move lists.
    pub fn load_json(path: &Path) -> Result<Self, BookError> {
        let reader = BufReader::new(File::open(path)?);
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        Ok(Self::from_entries(raw))
    }

    pub fn from_json_str(json: &str) -> Result<Self, BookError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::from_entries(raw))
    }

    /// Keys that collapse to the same canonical key are merged in sorted
    /// raw-key order, so candidate order does not depend on hashing.
    fn from_entries(raw: BTreeMap<String, Vec<String>>) -> Self {
        let mut book = OpeningBook::default();
        for (key, moves) in raw {
            if moves.is_empty() {
                tracing::warn!(%key, "skipping book entry without moves");
                continue;
            }
            book.insert(&key, moves);
        }
        book
    }

    /// Read a PGN file. Tag pairs are skipped; the move text of each game
    /// is replayed from the starting position and indexed move by move.
    pub fn load_pgn(path: &Path) -> Result<Self, BookError> {
        let reader = BufReader::new(File::open(path)?);
        let mut book = OpeningBook::default();
        let mut game = String::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            // A tag pair after move text starts the next game.
            if line.starts_with('[') && !game.is_empty() {
                book.ingest_movetext(&game);
                game.clear();
            }
            if line.is_empty() || line.starts_with('[') {
                continue;
            }
            game.push_str(line);
            game.push(' ');
        }
        if !game.is_empty() {
            book.ingest_movetext(&game);
        }
        Ok(book)
    }

    /// Replay one game's move text and record every move under the key of
    /// the position it was played from. Move numbers may be detached
    /// (`1. e4`) or glued to the move (`1.e4`, `3...Nf6`). Replay ends at
    /// the result token or the first unplayable move.
    pub fn ingest_movetext(&mut self, text: &str) {
        let mut pos = Chess::default();

        for token in text.split_whitespace() {
            if matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*") {
                break;
            }
            let san_text = strip_move_number(token);
            if san_text.is_empty() || san_text.starts_with('$') {
                continue;
            }
            let Ok(san) = san_text.parse::<SanPlus>() else {
                tracing::debug!(token, "ignoring unparsable token");
                continue;
            };
            let Ok(mv) = san.san.to_move(&pos) else {
                tracing::debug!(token, "stopping game at unplayable move");
                break;
            };
            let uci = mv.to_uci(CastlingMode::Standard).to_string();
            self.entries.entry(key_of(&pos)).or_default().push(uci);
            pos = match pos.play(&mv) {
                Ok(next) => next,
                Err(_) => break,
            };
        }
    }

    /// Add moves for a position. `key` may be a full FEN.
    pub fn insert(&mut self, key: &str, moves: impl IntoIterator<Item = String>) {
        self.entries
            .entry(canonical_key(key))
            .or_default()
            .extend(moves);
    }

    pub fn candidates(&self, key: &str) -> Option<&[String]> {
        self.entries
            .get(key)
            .map(Vec::as_slice)
            .filter(|moves| !moves.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `"12.Nf3"` -> `"Nf3"`, `"3..."` -> `""`; other tokens pass through.
fn strip_move_number(token: &str) -> &str {
    match token.find('.') {
        Some(dot) if dot > 0 && token[..dot].bytes().all(|b| b.is_ascii_digit()) => {
            token[dot..].trim_start_matches('.')
        }
        _ => token,
    }
}

/// Book probe with its own random source.
pub struct OpeningGate {
    book: OpeningBook,
    rng: StdRng,
}

impl OpeningGate {
    /// Gate seeded from the operating system.
    pub fn new(book: OpeningBook) -> Self {
        OpeningGate {
            book,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Gate with a reproducible sequence of picks.
    pub fn with_seed(book: OpeningBook, seed: u64) -> Self {
        OpeningGate {
            book,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn book(&self) -> &OpeningBook {
        &self.book
    }

    /// A uniformly random recorded move for `pos`, or `None` when the
    /// position is not in the book or the picked move is not legal here.
    pub fn lookup<P: PositionOracle + ?Sized>(&mut self, pos: &P) -> Option<P::Move> {
        let key = pos.canonical_key();
        let Some(candidates) = self.book.candidates(&key) else {
            tracing::debug!(%key, "book miss");
            return None;
        };
        let pick = candidates.choose(&mut self.rng)?;
        let resolved = pos.resolve_move(pick);
        if resolved.is_none() {
            tracing::warn!(%key, pick = %pick, "book move is not legal in this position");
        }
        resolved
    }
}
