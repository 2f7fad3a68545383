//! Control system: applies the sampled input state and fire requests to ships.

use asteroids_core::commands::InputState;
use asteroids_core::components::{Body, Bullet};
use asteroids_core::config::GameConfig;
use asteroids_core::events::GameEvent;
use asteroids_core::types::Seconds;

use crate::registry::EntityRegistry;

/// Apply held controls to every ship. Called once per tick.
///
/// Forward thrust wins over reverse, and a left turn over a right turn, when
/// both keys of a pair are held.
pub fn run(registry: &mut EntityRegistry, input: InputState, config: &GameConfig) {
    let thrust = if input.thrust_forward {
        Some(config.ship_thrust)
    } else if input.thrust_back {
        Some(-config.ship_thrust)
    } else {
        None
    };

    let turn = if input.turn_left {
        Some(-config.ship_turn_rate)
    } else if input.turn_right {
        Some(config.ship_turn_rate)
    } else {
        None
    };

    if thrust.is_none() && turn.is_none() {
        return;
    }

    for entity in registry.ships() {
        let Some((body, ship)) = registry.ship_mut(entity) else {
            continue;
        };
        if let Some(thrust) = thrust {
            body.velocity = ship.thrust(body.velocity, thrust, config.ship_max_speed);
        }
        if let Some(turn) = turn {
            ship.rotate(turn);
        }
    }
}

/// Fire from every ship whose cooldown has elapsed.
///
/// The bullet starts at the ship's position, born at `now`, moving along the
/// ship's heading.
pub fn fire(
    registry: &mut EntityRegistry,
    now: Seconds,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    let mut shots = Vec::new();

    for entity in registry.ships() {
        let Some((body, ship)) = registry.ship_mut(entity) else {
            continue;
        };
        if !ship.can_shoot(now, config.shoot_cooldown_secs) {
            continue;
        }
        ship.last_shot = now;
        shots.push((body.position, ship.angle, ship.heading()));
    }

    for (position, angle, heading) in shots {
        let body = match Body::new(
            position,
            heading.scaled(config.bullet_speed),
            config.bullet_radius,
            now,
        ) {
            Ok(body) => body,
            Err(err) => {
                tracing::error!(%err, "bullet not spawned");
                continue;
            }
        };
        registry.spawn_bullet(body, Bullet::new(angle, now));
        tracing::debug!(?position, angle, "shot fired");
        events.push(GameEvent::ShotFired { position, angle });
    }
}
