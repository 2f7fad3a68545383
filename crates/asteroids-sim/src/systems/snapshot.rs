//! Snapshot system: queries the registry and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the registry.

use hecs::World;

use asteroids_core::components::{Asteroid, Body, Bullet, Ship};
use asteroids_core::enums::GamePhase;
use asteroids_core::events::GameEvent;
use asteroids_core::state::{DrawDescriptor, GameStateSnapshot};
use asteroids_core::types::Seconds;

use crate::registry::EntityRegistry;

/// Build a complete GameStateSnapshot from the current registry state.
pub fn build_snapshot(
    registry: &EntityRegistry,
    now: Seconds,
    tick: u64,
    phase: GamePhase,
    score: i64,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        now,
        tick,
        phase,
        score,
        entities: build_draw_list(registry.world()),
        events,
        counts: registry.counts(),
    }
}

/// One descriptor per live entity: ships first, then asteroids, then bullets,
/// so bullets paint on top.
pub fn build_draw_list(world: &World) -> Vec<DrawDescriptor> {
    let mut entities = Vec::with_capacity(world.len() as usize);

    entities.extend(
        world
            .query::<(&Body, &Ship)>()
            .iter()
            .map(|(_, (body, ship))| DrawDescriptor::Ship {
                position: body.position,
                angle: ship.angle,
            }),
    );
    entities.extend(
        world
            .query::<(&Body, &Asteroid)>()
            .iter()
            .map(|(_, (body, _))| DrawDescriptor::Asteroid {
                position: body.position,
                radius: body.radius(),
            }),
    );
    entities.extend(
        world
            .query::<(&Body, &Bullet)>()
            .iter()
            .map(|(_, (body, _))| DrawDescriptor::Bullet {
                position: body.position,
            }),
    );

    entities
}
