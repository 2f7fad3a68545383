//! Kinematic integration system.
//!
//! Advances each entity from its own last update to `now`, then wraps it
//! around the field edges.

use hecs::Entity;

use asteroids_core::types::{Bounds, Seconds};

use crate::registry::EntityRegistry;

/// Advance every ship.
pub fn advance_ships(registry: &mut EntityRegistry, now: Seconds, bounds: Bounds) {
    let ships = registry.ships();
    advance_all(registry, &ships, now, bounds);
}

/// Advance every bullet.
pub fn advance_bullets(registry: &mut EntityRegistry, now: Seconds, bounds: Bounds) {
    let bullets = registry.bullets();
    advance_all(registry, &bullets, now, bounds);
}

/// Advance a snapshot of handles, skipping any that are no longer live.
pub fn advance_all(
    registry: &mut EntityRegistry,
    entities: &[Entity],
    now: Seconds,
    bounds: Bounds,
) {
    for &entity in entities {
        if let Some(body) = registry.body_mut(entity) {
            body.advance(now, bounds);
        }
    }
}
