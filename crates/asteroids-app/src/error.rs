//! Error types for the shell around the simulation.

use std::io;

use thiserror::Error;

use asteroids_core::error::SimError;

#[derive(Debug, Error)]
pub enum HighscoreError {
    #[error("could not access highscore file: {0}")]
    Io(#[from] io::Error),

    #[error("highscore file is corrupted at line {line}")]
    Corrupted { line: usize },
}

/// A line from the command reader that could not be understood.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("invalid JSON command: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum GameLoopError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("snapshot sink failed: {0}")]
    Sink(#[from] io::Error),
}
