//! Runtime game configuration.
//!
//! [`GameConfig`] mirrors the tunables in [`crate::constants`]. A TOML file can
//! override any subset of them; missing keys fall back to the compile-time
//! defaults, so a minimal file only lists the values being changed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, SimError};
use crate::types::Bounds;

/// Runtime-tunable game configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Field / loop ────────────────────────────────────────────────────────
    pub screen_width: f64,
    pub screen_height: f64,
    pub tick_interval_ms: u64,
    pub presentation_delay_secs: f64,

    // ── Score ───────────────────────────────────────────────────────────────
    pub initial_score: i64,
    pub score_decay_per_sec: f64,

    // ── Ship ────────────────────────────────────────────────────────────────
    pub ship_radius: f64,
    pub ship_max_speed: f64,
    pub ship_thrust: f64,
    pub ship_turn_rate: f64,
    pub shoot_cooldown_secs: f64,

    // ── Bullet ──────────────────────────────────────────────────────────────
    pub bullet_speed: f64,
    pub bullet_radius: f64,
    pub bullet_time_to_live_secs: f64,

    // ── Asteroids ───────────────────────────────────────────────────────────
    pub large_asteroids: usize,
    pub medium_asteroids: usize,
    pub large_asteroid_radius: f64,
    pub medium_asteroid_radius: f64,
    pub min_split_radius: f64,

    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tick_interval_ms: TICK_INTERVAL_MS,
            presentation_delay_secs: PRESENTATION_DELAY_SECS,
            initial_score: INITIAL_SCORE,
            score_decay_per_sec: SCORE_DECAY_PER_SEC,
            ship_radius: SHIP_RADIUS,
            ship_max_speed: SHIP_MAX_SPEED,
            ship_thrust: SHIP_THRUST,
            ship_turn_rate: SHIP_TURN_RATE,
            shoot_cooldown_secs: SHOOT_COOLDOWN_SECS,
            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            bullet_time_to_live_secs: BULLET_TIME_TO_LIVE_SECS,
            large_asteroids: INITIAL_LARGE_ASTEROIDS,
            medium_asteroids: INITIAL_MEDIUM_ASTEROIDS,
            large_asteroid_radius: LARGE_ASTEROID_RADIUS,
            medium_asteroid_radius: MEDIUM_ASTEROID_RADIUS,
            min_split_radius: MIN_SPLIT_RADIUS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.screen_width, self.screen_height)
    }

    /// Reject values that would produce degenerate entities or a dead loop.
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ship_radius", self.ship_radius),
            ("bullet_radius", self.bullet_radius),
            ("large_asteroid_radius", self.large_asteroid_radius),
            ("medium_asteroid_radius", self.medium_asteroid_radius),
            ("min_split_radius", self.min_split_radius),
            ("ship_max_speed", self.ship_max_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidConfig {
                    field,
                    reason: "must be a positive number",
                });
            }
        }

        let non_negative = [
            ("presentation_delay_secs", self.presentation_delay_secs),
            ("score_decay_per_sec", self.score_decay_per_sec),
            ("shoot_cooldown_secs", self.shoot_cooldown_secs),
            ("bullet_time_to_live_secs", self.bullet_time_to_live_secs),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SimError::InvalidConfig {
                    field,
                    reason: "must be zero or positive",
                });
            }
        }

        if self.screen_width <= 2.0 * SHIP_SPAWN_MARGIN
            || self.screen_height <= 2.0 * SHIP_SPAWN_MARGIN
        {
            return Err(SimError::InvalidConfig {
                field: "screen_width",
                reason: "field must be larger than twice the spawn margin",
            });
        }

        if self.tick_interval_ms == 0 {
            return Err(SimError::InvalidConfig {
                field: "tick_interval_ms",
                reason: "must be at least 1",
            });
        }

        Ok(())
    }
}
