//! Asteroid system: motion, collision resolution and splitting.
//!
//! Runs after ships and bullets have moved, so collision checks see their
//! current-tick positions.

use hecs::Entity;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use asteroids_core::config::GameConfig;
use asteroids_core::constants::SPLIT_MAX_AXIS_SPEED;
use asteroids_core::enums::DestroyCause;
use asteroids_core::events::GameEvent;
use asteroids_core::types::{Seconds, Vector2};

use crate::registry::EntityRegistry;
use crate::systems::destroy;

/// Update every asteroid alive at the start of the pass.
///
/// Fragments spawned by a split are not visited until the next tick.
pub fn run(
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    now: Seconds,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    for asteroid in registry.asteroids() {
        update(registry, asteroid, rng, now, config, events);
    }
}

/// Advance one asteroid, then resolve its collisions with bullets and ships.
///
/// Every hit is resolved on its own: the projectile is destroyed and the
/// asteroid splits once per hit. Checks stop as soon as the asteroid itself
/// is gone.
pub fn update(
    registry: &mut EntityRegistry,
    asteroid: Entity,
    rng: &mut ChaCha8Rng,
    now: Seconds,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    let Some(body) = registry.body_mut(asteroid) else {
        return;
    };
    body.advance(now, config.bounds());

    for bullet in registry.bullets() {
        if !registry.contains(asteroid) {
            return;
        }
        if collides(registry, asteroid, bullet) {
            destroy(registry, bullet, DestroyCause::Collision, events);
            split(registry, asteroid, rng, now, config, events);
        }
    }

    for ship in registry.ships() {
        if !registry.contains(asteroid) {
            return;
        }
        if collides(registry, asteroid, ship) {
            destroy(registry, ship, DestroyCause::Collision, events);
            split(registry, asteroid, rng, now, config, events);
        }
    }
}

/// Split an asteroid in two halves, or destroy it once it is too small.
///
/// The asteroid keeps its identity and shrinks in place; the other half is a
/// new asteroid at the same position with a random velocity.
pub fn split(
    registry: &mut EntityRegistry,
    asteroid: Entity,
    rng: &mut ChaCha8Rng,
    now: Seconds,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    let Some(body) = registry.body_mut(asteroid) else {
        return;
    };

    if body.radius() <= config.min_split_radius {
        destroy(registry, asteroid, DestroyCause::Shattered, events);
        return;
    }

    let velocity = Vector2::new(
        rng.gen_range(-SPLIT_MAX_AXIS_SPEED..=SPLIT_MAX_AXIS_SPEED),
        rng.gen_range(-SPLIT_MAX_AXIS_SPEED..=SPLIT_MAX_AXIS_SPEED),
    );
    let fragment = body.split(velocity, now);
    registry.spawn_asteroid(fragment);

    tracing::debug!(
        ?asteroid,
        position = ?fragment.position,
        radius = fragment.radius(),
        "asteroid split"
    );
    events.push(GameEvent::AsteroidSplit {
        position: fragment.position,
        radius: fragment.radius(),
    });
}

fn collides(registry: &EntityRegistry, a: Entity, b: Entity) -> bool {
    match (registry.body(a), registry.body(b)) {
        (Some(a), Some(b)) => a.collides_with(&b),
        _ => false,
    }
}
