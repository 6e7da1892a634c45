//! Flat, human-readable log of finished games.
//!
//! One line per game:
//! `<timestamp>, White: <name>, Black: <name>, Winner: <name-or-"Stalemate">`
//! with the timestamp in `ctime` layout (`Thu Oct 16 09:04:05 2026`).

use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::{DateTime, Local};

use crate::chess_errors::ChessErrors;
use crate::game::game_outcome::Outcome;
use crate::game_state::chess_rules::DEFAULT_RESULT_LOG_PATH;

const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub timestamp: DateTime<Local>,
    pub white: String,
    pub black: String,
    pub outcome: Outcome,
}

impl GameResult {
    pub fn now(white: &str, black: &str, outcome: Outcome) -> Self {
        Self {
            timestamp: Local::now(),
            white: white.to_owned(),
            black: black.to_owned(),
            outcome,
        }
    }

    pub fn winner_label(&self) -> &str {
        match self.outcome {
            Outcome::WhiteWon => &self.white,
            Outcome::BlackWon => &self.black,
            Outcome::Stalemate | Outcome::Playing => "Stalemate",
        }
    }

    pub fn format_line(&self) -> String {
        format!(
            "{}, White: {}, Black: {}, Winner: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.white,
            self.black,
            self.winner_label()
        )
    }
}

/// Sink for finished games.
pub trait ResultRecorder {
    fn record(&mut self, entry: &GameResult) -> Result<(), ChessErrors>;
}

/// Appends results to a text file, creating it on first use.
#[derive(Debug, Clone)]
pub struct FileResultLog {
    path: PathBuf,
}

impl Default for FileResultLog {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_LOG_PATH)
    }
}

impl FileResultLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All recorded lines, oldest first. A log that was never written is empty.
    pub fn read_records(&self) -> Result<Vec<String>, ChessErrors> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text.lines().map(str::to_owned).collect()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl ResultRecorder for FileResultLog {
    fn record(&mut self, entry: &GameResult) -> Result<(), ChessErrors> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", entry.format_line())?;
        Ok(())
    }
}

/// In-memory log. Clones share the same line buffer, so a caller can keep
/// a handle after giving one to a game.
#[derive(Debug, Clone, Default)]
pub struct MemoryResultLog {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemoryResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl ResultRecorder for MemoryResultLog {
    fn record(&mut self, entry: &GameResult) -> Result<(), ChessErrors> {
        self.lines.borrow_mut().push(entry.format_line());
        Ok(())
    }
}
