//! Engine configuration.
//!
//! Settings come from an optional JSON file; command-line flags override
//! individual values. Every field has a default, so an empty object is a
//! valid configuration.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::engine::eval::Evaluation;
use crate::engine::search::{SearchLimits, DEFAULT_DEPTH};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    /// Search depth in plies below each root move.
    pub depth: i32,
    pub evaluation: Evaluation,
    /// Opening book file (`.pgn` or JSON).
    pub book_path: Option<PathBuf>,
    /// Use the book when one is configured.
    pub own_book: bool,
    /// Seed for the book's random pick; random when absent.
    pub seed: Option<u64>,
    /// Node budget.
    pub nodes: Option<u64>,
    /// Time budget in milliseconds.
    pub movetime: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: DEFAULT_DEPTH,
            evaluation: Evaluation::default(),
            book_path: None,
            own_book: true,
            seed: None,
            nodes: None,
            movetime: None,
        }
    }
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            depth: self.depth,
            nodes: self.nodes,
            movetime: self.movetime,
        }
    }
}
