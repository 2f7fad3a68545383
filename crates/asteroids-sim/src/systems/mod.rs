//! Systems that operate on the entity registry each tick.
//!
//! Systems are plain functions over `&mut EntityRegistry` (or `&EntityRegistry`
//! for read-only). They do not own state; all state lives in components.

pub mod asteroids;
pub mod controls;
pub mod lifetime;
pub mod movement;
pub mod snapshot;

use hecs::Entity;

use asteroids_core::enums::DestroyCause;
use asteroids_core::events::GameEvent;

use crate::registry::EntityRegistry;

/// Remove an entity and record why it left.
pub fn destroy(
    registry: &mut EntityRegistry,
    entity: Entity,
    cause: DestroyCause,
    events: &mut Vec<GameEvent>,
) {
    if let Some(removed) = registry.remove(entity) {
        tracing::debug!(?entity, kind = ?removed.kind, ?cause, "entity destroyed");
        events.push(GameEvent::Destroyed {
            kind: removed.kind,
            position: removed.body.position,
            cause,
        });
    }
}
