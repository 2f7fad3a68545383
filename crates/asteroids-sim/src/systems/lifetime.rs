//! Lifetime system: removes bullets that outlived their time-to-live.

use asteroids_core::components::Bullet;
use asteroids_core::enums::DestroyCause;
use asteroids_core::events::GameEvent;
use asteroids_core::types::Seconds;

use crate::registry::EntityRegistry;
use crate::systems::destroy;

/// Destroy every bullet strictly older than `time_to_live`.
pub fn run(
    registry: &mut EntityRegistry,
    now: Seconds,
    time_to_live: Seconds,
    events: &mut Vec<GameEvent>,
) {
    let expired: Vec<_> = registry
        .world()
        .query::<&Bullet>()
        .iter()
        .filter(|(_, bullet)| bullet.is_expired(now, time_to_live))
        .map(|(entity, _)| entity)
        .collect();

    for entity in expired {
        destroy(registry, entity, DestroyCause::Expired, events);
    }
}
