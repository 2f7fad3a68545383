//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{DestroyCause, EntityKind, GameResult};
use crate::types::Vector2;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A ship fired a bullet.
    ShotFired { position: Vector2, angle: f64 },
    /// An asteroid split into two of `radius` each.
    AsteroidSplit { position: Vector2, radius: f64 },
    /// An entity left the registry.
    Destroyed {
        kind: EntityKind,
        position: Vector2,
        cause: DestroyCause,
    },
    /// The game reached a terminal state.
    GameOver { result: GameResult, score: i64 },
}
