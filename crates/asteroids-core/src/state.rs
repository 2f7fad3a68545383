//! Game state snapshot: the complete visible state handed to the shell each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, GamePhase, GameResult};
use crate::events::GameEvent;
use crate::types::{Seconds, Vector2};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    /// Timestamp of the tick that produced this snapshot.
    pub now: Seconds,
    /// Number of ticks processed so far.
    pub tick: u64,
    pub phase: GamePhase,
    pub score: i64,
    /// One descriptor per live entity.
    pub entities: Vec<DrawDescriptor>,
    pub events: Vec<GameEvent>,
    pub counts: EntityCounts,
}

/// What the render sink needs to paint one entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DrawDescriptor {
    Ship { position: Vector2, angle: f64 },
    Asteroid { position: Vector2, radius: f64 },
    Bullet { position: Vector2 },
}

impl DrawDescriptor {
    pub fn kind(&self) -> EntityKind {
        match self {
            DrawDescriptor::Ship { .. } => EntityKind::Ship,
            DrawDescriptor::Asteroid { .. } => EntityKind::Asteroid,
            DrawDescriptor::Bullet { .. } => EntityKind::Bullet,
        }
    }

    pub fn position(&self) -> Vector2 {
        match *self {
            DrawDescriptor::Ship { position, .. }
            | DrawDescriptor::Asteroid { position, .. }
            | DrawDescriptor::Bullet { position } => position,
        }
    }
}

/// Live entity counts per variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub ships: usize,
    pub asteroids: usize,
    pub bullets: usize,
}

impl EntityCounts {
    pub fn total(&self) -> usize {
        self.ships + self.asteroids + self.bullets
    }
}

/// Terminal result plus the score it finished with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub result: GameResult,
    pub final_score: i64,
    /// Time the terminal state was reached.
    pub ended_at: Seconds,
}
