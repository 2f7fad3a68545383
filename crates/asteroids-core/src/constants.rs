//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind [`crate::config::GameConfig`].

// --- Loop ---

/// Interval between ticks driven by the shell (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 50;

/// Delay between reaching Won/Lost and halting the loop (seconds).
pub const PRESENTATION_DELAY_SECS: f64 = 2.0;

// --- Field ---

/// Play field width in pixels.
pub const SCREEN_WIDTH: f64 = 600.0;

/// Play field height in pixels.
pub const SCREEN_HEIGHT: f64 = 400.0;

/// Extra distance past `edge + radius` before an entity wraps.
/// Keeps an entity sitting on the threshold from flipping sides every tick.
pub const WRAP_MARGIN: f64 = 10.0;

// --- Score ---

/// Score at game start.
pub const INITIAL_SCORE: i64 = 1_000_000;

/// Points lost per second of play.
pub const SCORE_DECAY_PER_SEC: f64 = 100.0;

// --- Ship ---

/// Ship collision radius.
pub const SHIP_RADIUS: f64 = 10.0;

/// Heading of a freshly spawned ship (radians).
pub const SHIP_INITIAL_ANGLE: f64 = 0.5;

/// Speed above which forward thrust is refused.
pub const SHIP_MAX_SPEED: f64 = 80.0;

/// Minimum time between two shots (seconds). Strictly greater is required.
pub const SHOOT_COOLDOWN_SECS: f64 = 0.5;

/// Thrust impulse applied per tick while a thrust key is held.
pub const SHIP_THRUST: f64 = 5.0;

/// Rotation applied per tick while a turn key is held (radians).
pub const SHIP_TURN_RATE: f64 = 0.3;

/// Ship spawn margin from the field edges.
pub const SHIP_SPAWN_MARGIN: f64 = 50.0;

// --- Bullet ---

pub const BULLET_SPEED: f64 = 100.0;

pub const BULLET_RADIUS: f64 = 3.0;

/// Bullet lifetime (seconds). Expires once age is strictly greater.
pub const BULLET_TIME_TO_LIVE_SECS: f64 = 5.0;

// --- Asteroids ---

pub const LARGE_ASTEROID_RADIUS: f64 = 20.0;

pub const MEDIUM_ASTEROID_RADIUS: f64 = 10.0;

pub const INITIAL_LARGE_ASTEROIDS: usize = 5;

pub const INITIAL_MEDIUM_ASTEROIDS: usize = 5;

/// Asteroids at or below this radius are destroyed instead of split.
pub const MIN_SPLIT_RADIUS: f64 = 5.0;

/// Per-axis speed range of initial asteroids (sign chosen at random).
pub const ASTEROID_MIN_AXIS_SPEED: f64 = 30.0;
pub const ASTEROID_MAX_AXIS_SPEED: f64 = 60.0;

/// Per-axis bound of the velocity given to a split fragment.
pub const SPLIT_MAX_AXIS_SPEED: f64 = 60.0;

/// Asteroid spawn margin from the field edges.
pub const ASTEROID_SPAWN_MARGIN: f64 = 30.0;
