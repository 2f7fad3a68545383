//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// Every asteroid destroyed with a ship still alive.
    Won,
    /// Every ship destroyed.
    Lost,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }

    /// The result this phase represents, if the game is over.
    pub fn result(self) -> Option<GameResult> {
        match self {
            GamePhase::Playing => None,
            GamePhase::Won => Some(GameResult::Won),
            GamePhase::Lost => Some(GameResult::Lost),
        }
    }
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Won,
    Lost,
}

/// Entity variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Asteroid,
    Bullet,
}

/// Why an entity left the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DestroyCause {
    /// Hit by (or hit) an asteroid.
    Collision,
    /// Bullet outlived its time-to-live.
    Expired,
    /// Asteroid too small to split further.
    Shattered,
}
