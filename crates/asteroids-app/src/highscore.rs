//! Persistent top-10 highscore table.
//!
//! The file holds alternating lines: a player name, then that player's score.
//! Entries are kept best first.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use crate::error::HighscoreError;

/// Maximum number of entries kept.
pub const MAX_ENTRIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighscoreEntry {
    pub name: String,
    pub score: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighscoreTable {
    entries: Vec<HighscoreEntry>,
}

impl HighscoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the file format. A name without a following score line, or a
    /// score that is not an integer, is corruption.
    pub fn parse(text: &str) -> Result<Self, HighscoreError> {
        let mut entries = Vec::new();
        let mut lines = text.lines().enumerate();

        while let Some((name_index, name)) = lines.next() {
            let Some((index, score)) = lines.next() else {
                return Err(HighscoreError::Corrupted {
                    line: name_index + 1,
                });
            };
            let score = score
                .trim()
                .parse::<i64>()
                .map_err(|_| HighscoreError::Corrupted { line: index + 1 })?;
            entries.push(HighscoreEntry {
                name: name.to_string(),
                score,
            });
        }

        entries.truncate(MAX_ENTRIES);
        Ok(Self { entries })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, HighscoreError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Like [`HighscoreTable::load`], but a missing file is an empty table.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, HighscoreError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HighscoreError> {
        std::fs::write(path, self.to_file_string())?;
        Ok(())
    }

    pub fn to_file_string(&self) -> String {
        let mut text = String::new();
        for entry in &self.entries {
            let _ = writeln!(text, "{}\n{}", entry.name, entry.score);
        }
        text
    }

    pub fn entries(&self) -> &[HighscoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index the score would take: the first entry it strictly beats, or the
    /// end of a table that is not yet full. `None` if it does not qualify.
    pub fn position_for(&self, score: i64) -> Option<usize> {
        match self.entries.iter().position(|e| score > e.score) {
            Some(index) => Some(index),
            None if self.entries.len() < MAX_ENTRIES => Some(self.entries.len()),
            None => None,
        }
    }

    /// Insert a score, shifting lower entries down and dropping the one that
    /// falls off the end. Returns the index it landed at.
    ///
    /// Line breaks in `name` become spaces so the entry stays on one line.
    pub fn insert(&mut self, name: &str, score: i64) -> Option<usize> {
        let index = self.position_for(score)?;
        self.entries.insert(
            index,
            HighscoreEntry {
                name: name.replace(|c: char| c == '\n' || c == '\r', " "),
                score,
            },
        );
        self.entries.truncate(MAX_ENTRIES);
        Some(index)
    }
}
