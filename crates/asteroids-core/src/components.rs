//! ECS components for hecs entities.
//!
//! Every live entity carries a [`Body`] plus exactly one variant component
//! ([`Ship`], [`Asteroid`] or [`Bullet`]). The methods here are pure
//! per-entity rules; anything that spawns or removes entities lives in the
//! simulation systems.

use serde::{Deserialize, Serialize};

use crate::constants::WRAP_MARGIN;
use crate::error::SimError;
use crate::types::{Bounds, Seconds, Vector2};

/// Physical state shared by every entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BodyFields")]
pub struct Body {
    pub position: Vector2,
    pub velocity: Vector2,
    /// Always finite and strictly positive.
    radius: f64,
    /// Time of the last motion integration.
    pub last_update: Seconds,
}

/// Unchecked wire form of [`Body`]; deserializing goes through [`Body::new`].
#[derive(Deserialize)]
struct BodyFields {
    position: Vector2,
    velocity: Vector2,
    radius: f64,
    last_update: Seconds,
}

impl TryFrom<BodyFields> for Body {
    type Error = SimError;

    fn try_from(fields: BodyFields) -> Result<Self, Self::Error> {
        Body::new(fields.position, fields.velocity, fields.radius, fields.last_update)
    }
}

impl Body {
    /// Create a body, rejecting a non-positive or non-finite radius.
    pub fn new(
        position: Vector2,
        velocity: Vector2,
        radius: f64,
        now: Seconds,
    ) -> Result<Self, SimError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius(radius));
        }
        Ok(Self {
            position,
            velocity,
            radius,
            last_update: now,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Split this body in two: its radius is halved in place and a second body
    /// of the same (halved) radius is returned at the same position, moving
    /// with `velocity` and born at `now`.
    ///
    /// Callers only split bodies above a positive minimum radius, so both
    /// halves keep a positive radius.
    pub fn split(&mut self, velocity: Vector2, now: Seconds) -> Body {
        self.radius /= 2.0;
        Body {
            position: self.position,
            velocity,
            radius: self.radius,
            last_update: now,
        }
    }

    /// Integrate position over the time since the last update, then wrap
    /// around the field edges.
    pub fn advance(&mut self, now: Seconds, bounds: Bounds) {
        if !self.velocity.is_zero() {
            let dt = now - self.last_update;
            self.position += self.velocity.scaled(dt);
        }

        self.position.x = wrap_axis(self.position.x, bounds.width, self.radius);
        self.position.y = wrap_axis(self.position.y, bounds.height, self.radius);

        self.last_update = now;
    }

    /// True if the two bodies overlap. Touching exactly is not a collision.
    pub fn collides_with(&self, other: &Body) -> bool {
        self.position
            .distance_to(other.position.x, other.position.y)
            < self.radius + other.radius
    }
}

/// Per-axis wraparound. The margin keeps an entity sitting exactly on the
/// threshold from bouncing between edges.
fn wrap_axis(value: f64, extent: f64, radius: f64) -> f64 {
    if value > extent + radius + WRAP_MARGIN {
        -radius
    } else if value < -radius - WRAP_MARGIN {
        extent + radius
    } else {
        value
    }
}

/// Player ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// Heading in radians. Not normalised.
    pub angle: f64,
    pub last_shot: Seconds,
}

impl Ship {
    pub fn new(angle: f64, now: Seconds) -> Self {
        Self {
            angle,
            last_shot: now,
        }
    }

    pub fn rotate(&mut self, delta: f64) {
        self.angle += delta;
    }

    /// Unit vector along the current heading.
    pub fn heading(&self) -> Vector2 {
        Vector2::from_angle(self.angle)
    }

    /// Velocity after applying `thrust` along the heading.
    ///
    /// Below `max_speed` the impulse is always accepted, even if it overshoots.
    /// At or above `max_speed` it is only accepted if it lowers the speed;
    /// otherwise the current velocity is returned unchanged.
    pub fn thrust(&self, velocity: Vector2, thrust: f64, max_speed: f64) -> Vector2 {
        let candidate = velocity + self.heading().scaled(thrust);
        let speed = velocity.magnitude();
        if speed < max_speed || candidate.magnitude() < speed {
            candidate
        } else {
            velocity
        }
    }

    /// True once strictly more than `cooldown` has passed since the last shot.
    pub fn can_shoot(&self, now: Seconds, cooldown: Seconds) -> bool {
        now - self.last_shot > cooldown
    }
}

/// Drifting asteroid. Its size lives in [`Body`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asteroid;

/// Projectile fired by a ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    /// Heading the bullet was fired at.
    pub angle: f64,
    pub birth: Seconds,
}

impl Bullet {
    pub fn new(angle: f64, birth: Seconds) -> Self {
        Self { angle, birth }
    }

    /// True once the bullet is strictly older than `time_to_live`.
    pub fn is_expired(&self, now: Seconds, time_to_live: Seconds) -> bool {
        now - self.birth > time_to_live
    }
}
