//! Entity registry: the single owner of every live entity.
//!
//! Entities live in one hecs `World`. Each carries a [`Body`] plus one variant
//! component, so the per-variant collections (ships, asteroids, bullets) are
//! queries over the same storage as the combined collection. Spawning inserts
//! into both views at once and a despawn removes from both at once.

use hecs::{Entity, World};

use asteroids_core::components::{Asteroid, Body, Bullet, Ship};
use asteroids_core::enums::EntityKind;
use asteroids_core::state::EntityCounts;

/// An entity that has just left the registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Removed {
    pub kind: EntityKind,
    pub body: Body,
}

/// Owning collection of all live entities.
#[derive(Default)]
pub struct EntityRegistry {
    world: World,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_ship(&mut self, body: Body, ship: Ship) -> Entity {
        self.world.spawn((body, ship))
    }

    pub fn spawn_asteroid(&mut self, body: Body) -> Entity {
        self.world.spawn((body, Asteroid))
    }

    pub fn spawn_bullet(&mut self, body: Body, bullet: Bullet) -> Entity {
        self.world.spawn((body, bullet))
    }

    /// Remove an entity by identity.
    ///
    /// Removing an entity that is no longer live is a caller bug: it panics in
    /// debug builds and is logged and ignored in release builds.
    pub fn remove(&mut self, entity: Entity) -> Option<Removed> {
        let found = self
            .kind(entity)
            .zip(self.world.get::<&Body>(entity).ok().map(|b| *b));
        debug_assert!(found.is_some(), "removed entity {entity:?} that is not live");
        let Some((kind, body)) = found else {
            tracing::warn!(?entity, "ignoring removal of an entity that is not live");
            return None;
        };
        // Cannot fail: liveness was checked above.
        let _ = self.world.despawn(entity);
        Some(Removed { kind, body })
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    /// Variant of a live entity.
    pub fn kind(&self, entity: Entity) -> Option<EntityKind> {
        if self.world.get::<&Ship>(entity).is_ok() {
            Some(EntityKind::Ship)
        } else if self.world.get::<&Asteroid>(entity).is_ok() {
            Some(EntityKind::Asteroid)
        } else if self.world.get::<&Bullet>(entity).is_ok() {
            Some(EntityKind::Bullet)
        } else {
            None
        }
    }

    // --- Snapshots of handles ---
    //
    // Traversals take one of these before mutating, so entities spawned during
    // the pass are not visited and removed ones can be skipped via `contains`.

    pub fn ships(&self) -> Vec<Entity> {
        self.handles::<Ship>()
    }

    pub fn asteroids(&self) -> Vec<Entity> {
        self.handles::<Asteroid>()
    }

    pub fn bullets(&self) -> Vec<Entity> {
        self.handles::<Bullet>()
    }

    /// Every live entity.
    pub fn all(&self) -> Vec<Entity> {
        self.world.iter().map(|entity_ref| entity_ref.entity()).collect()
    }

    fn handles<T: hecs::Component>(&self) -> Vec<Entity> {
        self.world
            .query::<&T>()
            .iter()
            .map(|(entity, _)| entity)
            .collect()
    }

    // --- Counts ---

    pub fn ship_count(&self) -> usize {
        self.count::<Ship>()
    }

    pub fn asteroid_count(&self) -> usize {
        self.count::<Asteroid>()
    }

    pub fn bullet_count(&self) -> usize {
        self.count::<Bullet>()
    }

    pub fn counts(&self) -> EntityCounts {
        EntityCounts {
            ships: self.ship_count(),
            asteroids: self.asteroid_count(),
            bullets: self.bullet_count(),
        }
    }

    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.world.len() == 0
    }

    fn count<T: hecs::Component>(&self) -> usize {
        self.world.query::<&T>().iter().count()
    }

    // --- Component access ---

    /// Copy of an entity's body.
    pub fn body(&self, entity: Entity) -> Option<Body> {
        self.world.get::<&Body>(entity).ok().map(|b| *b)
    }

    pub fn body_mut(&mut self, entity: Entity) -> Option<&mut Body> {
        self.world.query_one_mut::<&mut Body>(entity).ok()
    }

    pub fn ship(&self, entity: Entity) -> Option<Ship> {
        self.world.get::<&Ship>(entity).ok().map(|s| *s)
    }

    /// Mutable ship state together with its body.
    pub fn ship_mut(&mut self, entity: Entity) -> Option<(&mut Body, &mut Ship)> {
        self.world
            .query_one_mut::<(&mut Body, &mut Ship)>(entity)
            .ok()
    }

    pub fn bullet(&self, entity: Entity) -> Option<Bullet> {
        self.world.get::<&Bullet>(entity).ok().map(|b| *b)
    }

    /// Read-only access to the underlying world, for queries.
    pub fn world(&self) -> &World {
        &self.world
    }
}
