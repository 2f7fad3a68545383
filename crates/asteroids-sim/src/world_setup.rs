//! Entity spawn factories for setting up a game.
//!
//! Creates the player ship and the opening asteroid field.

use hecs::Entity;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use asteroids_core::components::{Body, Ship};
use asteroids_core::config::GameConfig;
use asteroids_core::constants::*;
use asteroids_core::error::SimError;
use asteroids_core::types::{Seconds, Vector2};

use crate::registry::EntityRegistry;

/// Populate an empty registry with the opening field: one ship plus the
/// configured large and medium asteroids.
pub fn setup_game(
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    now: Seconds,
) -> Result<(), SimError> {
    spawn_player_ship(registry, rng, config, now)?;
    for _ in 0..config.large_asteroids {
        spawn_random_asteroid(registry, rng, config, config.large_asteroid_radius, now)?;
    }
    for _ in 0..config.medium_asteroids {
        spawn_random_asteroid(registry, rng, config, config.medium_asteroid_radius, now)?;
    }
    Ok(())
}

/// Spawn the ship at a random in-bounds position, at rest.
/// It cannot fire until the cooldown has elapsed from `now`.
pub fn spawn_player_ship(
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    now: Seconds,
) -> Result<Entity, SimError> {
    let position = random_position(rng, config, SHIP_SPAWN_MARGIN);
    spawn_ship_at(registry, position, config, now)
}

/// Spawn a ship at a given position, at rest.
pub fn spawn_ship_at(
    registry: &mut EntityRegistry,
    position: Vector2,
    config: &GameConfig,
    now: Seconds,
) -> Result<Entity, SimError> {
    let body = Body::new(position, Vector2::ZERO, config.ship_radius, now)?;
    Ok(registry.spawn_ship(body, Ship::new(SHIP_INITIAL_ANGLE, now)))
}

/// Spawn an asteroid of `radius` at a random position, drifting with a
/// random velocity whose per-axis speed lies in the initial range.
pub fn spawn_random_asteroid(
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    radius: f64,
    now: Seconds,
) -> Result<Entity, SimError> {
    let position = random_position(rng, config, ASTEROID_SPAWN_MARGIN);
    let velocity = Vector2::new(random_axis_speed(rng), random_axis_speed(rng));
    spawn_asteroid_at(registry, position, velocity, radius, now)
}

/// Spawn an asteroid with explicit state.
pub fn spawn_asteroid_at(
    registry: &mut EntityRegistry,
    position: Vector2,
    velocity: Vector2,
    radius: f64,
    now: Seconds,
) -> Result<Entity, SimError> {
    let body = Body::new(position, velocity, radius, now)?;
    Ok(registry.spawn_asteroid(body))
}

/// Uniform position at least `margin` away from every edge.
fn random_position(rng: &mut ChaCha8Rng, config: &GameConfig, margin: f64) -> Vector2 {
    Vector2::new(
        rng.gen_range(margin..=config.screen_width - margin),
        rng.gen_range(margin..=config.screen_height - margin),
    )
}

/// Speed in the initial asteroid range with a random sign.
fn random_axis_speed(rng: &mut ChaCha8Rng) -> f64 {
    let speed = rng.gen_range(ASTEROID_MIN_AXIS_SPEED..=ASTEROID_MAX_AXIS_SPEED);
    if rng.gen_bool(0.5) {
        -speed
    } else {
        speed
    }
}
