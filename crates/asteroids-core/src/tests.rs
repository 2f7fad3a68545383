#[cfg(test)]
mod tests {
    use crate::commands::{Control, InputState, PlayerCommand};
    use crate::components::{Body, Bullet, Ship};
    use crate::config::GameConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::{ConfigError, SimError};
    use crate::events::GameEvent;
    use crate::state::{DrawDescriptor, GameStateSnapshot};
    use crate::types::{Bounds, Vector2};

    fn body(x: f64, y: f64, vx: f64, vy: f64, r: f64) -> Body {
        Body::new(Vector2::new(x, y), Vector2::new(vx, vy), r, 0.0).unwrap()
    }

    // ---- Vector2 ----

    #[test]
    fn test_vector_magnitude() {
        let v = Vector2::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-10);
        assert_eq!(Vector2::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_vector_distance() {
        let a = Vector2::new(1.0, 1.0);
        assert!((a.distance_to(4.0, 5.0) - 5.0).abs() < 1e-10);
        assert_eq!(a.distance_to(1.0, 1.0), 0.0);
    }

    #[test]
    fn test_vector_from_angle() {
        let v = Vector2::from_angle(std::f64::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-10);
        assert!((v.y - 1.0).abs() < 1e-10);
    }

    // ---- Body ----

    #[test]
    fn test_body_rejects_non_positive_radius() {
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Body::new(Vector2::ZERO, Vector2::ZERO, r, 0.0);
            assert!(matches!(result, Err(SimError::InvalidRadius(_))), "radius {r}");
        }
    }

    #[test]
    fn test_advance_integrates_own_elapsed_time() {
        let mut b = body(100.0, 100.0, 10.0, -20.0, 5.0);
        b.last_update = 1.0;
        b.advance(1.5, Bounds::default());
        assert!((b.position.x - 105.0).abs() < 1e-10);
        assert!((b.position.y - 90.0).abs() < 1e-10);
        assert_eq!(b.last_update, 1.5);
    }

    #[test]
    fn test_advance_stationary_only_touches_timestamp() {
        let mut b = body(100.0, 100.0, 0.0, 0.0, 5.0);
        b.advance(3.0, Bounds::default());
        assert_eq!(b.position, Vector2::new(100.0, 100.0));
        assert_eq!(b.last_update, 3.0);
    }

    #[test]
    fn test_wraparound_right_edge() {
        let bounds = Bounds::default();
        // 600 + 5 + 10 = 615 is the threshold; 616 wraps to -radius.
        let mut b = body(610.0, 200.0, 6.0, 0.0, 5.0);
        b.advance(1.0, bounds);
        assert_eq!(b.position.x, -5.0);
        assert_eq!(b.position.y, 200.0);
    }

    #[test]
    fn test_wraparound_left_and_top_edges() {
        let bounds = Bounds::default();
        let mut b = body(-14.0, -14.0, -2.0, -2.0, 3.0);
        b.advance(1.0, bounds);
        assert_eq!(b.position.x, SCREEN_WIDTH + 3.0);
        assert_eq!(b.position.y, SCREEN_HEIGHT + 3.0);
    }

    #[test]
    fn test_on_threshold_does_not_wrap() {
        let mut b = body(615.0, 200.0, 0.0, 0.0, 5.0);
        b.advance(1.0, Bounds::default());
        assert_eq!(b.position.x, 615.0);
    }

    #[test]
    fn test_coordinates_stay_within_wrap_band() {
        let bounds = Bounds::default();
        let mut b = body(300.0, 200.0, 57.0, -43.0, 20.0);
        for i in 1..2000 {
            b.advance(i as f64 * 0.05, bounds);
            assert!(b.position.x >= -20.0 - WRAP_MARGIN);
            assert!(b.position.x <= bounds.width + 20.0 + WRAP_MARGIN);
            assert!(b.position.y >= -20.0 - WRAP_MARGIN);
            assert!(b.position.y <= bounds.height + 20.0 + WRAP_MARGIN);
        }
    }

    #[test]
    fn test_collision_is_strict_and_symmetric() {
        let a = body(0.0, 0.0, 0.0, 0.0, 10.0);
        let touching = body(15.0, 0.0, 0.0, 0.0, 5.0);
        let overlapping = body(14.9, 0.0, 0.0, 0.0, 5.0);
        assert!(!a.collides_with(&touching));
        assert!(!touching.collides_with(&a));
        assert!(a.collides_with(&overlapping));
        assert!(overlapping.collides_with(&a));
    }

    #[test]
    fn test_body_deserialize_validates_radius() {
        let valid = r#"{"position":{"x":1.0,"y":2.0},"velocity":{"x":0.0,"y":0.0},"radius":4.0,"last_update":0.5}"#;
        let body: Body = serde_json::from_str(valid).unwrap();
        assert_eq!(body.radius(), 4.0);
        assert_eq!(body.position, Vector2::new(1.0, 2.0));

        for radius in ["0.0", "-3.0"] {
            let json = format!(
                r#"{{"position":{{"x":1.0,"y":2.0}},"velocity":{{"x":0.0,"y":0.0}},"radius":{radius},"last_update":0.5}}"#
            );
            let err = serde_json::from_str::<Body>(&json).unwrap_err();
            assert!(err.to_string().contains("radius"), "{err}");
        }
    }

    #[test]
    fn test_split_halves_in_place() {
        let mut parent = body(40.0, 60.0, 30.0, -30.0, 20.0);
        let fragment = parent.split(Vector2::new(-12.0, 45.0), 3.0);

        assert_eq!(parent.radius(), 10.0);
        assert_eq!(parent.velocity, Vector2::new(30.0, -30.0));
        assert_eq!(fragment.radius(), 10.0);
        assert_eq!(fragment.position, parent.position);
        assert_eq!(fragment.velocity, Vector2::new(-12.0, 45.0));
        assert_eq!(fragment.last_update, 3.0);
    }

    // ---- Ship ----

    #[test]
    fn test_ship_rotate_is_unbounded() {
        let mut ship = Ship::new(0.0, 0.0);
        for _ in 0..100 {
            ship.rotate(0.3);
        }
        assert!((ship.angle - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_thrust_below_cap_may_overshoot() {
        let ship = Ship::new(0.0, 0.0);
        let v = ship.thrust(Vector2::new(79.0, 0.0), 50.0, SHIP_MAX_SPEED);
        assert!((v.x - 129.0).abs() < 1e-10);
    }

    #[test]
    fn test_thrust_at_cap_rejects_speed_gain() {
        let ship = Ship::new(0.0, 0.0);
        let at_cap = Vector2::new(80.0, 0.0);
        let mut v = at_cap;
        for _ in 0..20 {
            v = ship.thrust(v, 5.0, SHIP_MAX_SPEED);
            assert!(v.magnitude() <= 80.0);
        }
        assert_eq!(v, at_cap);
    }

    #[test]
    fn test_thrust_at_cap_allows_braking() {
        let ship = Ship::new(0.0, 0.0);
        let v = ship.thrust(Vector2::new(90.0, 0.0), -5.0, SHIP_MAX_SPEED);
        assert!((v.x - 85.0).abs() < 1e-10);
    }

    #[test]
    fn test_shoot_cooldown_is_strict() {
        let ship = Ship::new(0.0, 10.0);
        assert!(!ship.can_shoot(10.25, SHOOT_COOLDOWN_SECS));
        assert!(!ship.can_shoot(10.5, SHOOT_COOLDOWN_SECS));
        assert!(ship.can_shoot(10.51, SHOOT_COOLDOWN_SECS));
    }

    // ---- Bullet ----

    #[test]
    fn test_bullet_expiry_is_strict() {
        let bullet = Bullet::new(0.0, 2.0);
        assert!(!bullet.is_expired(6.0, BULLET_TIME_TO_LIVE_SECS));
        assert!(!bullet.is_expired(7.0, BULLET_TIME_TO_LIVE_SECS));
        assert!(bullet.is_expired(7.01, BULLET_TIME_TO_LIVE_SECS));
    }

    // ---- Input / commands ----

    #[test]
    fn test_input_state_set() {
        let mut input = InputState::default();
        assert!(input.is_idle());
        input.set(Control::TurnLeft, true);
        assert!(input.turn_left);
        assert!(!input.is_idle());
        input.set(Control::TurnLeft, false);
        assert!(input.is_idle());
    }

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Press {
                control: Control::ThrustForward,
            },
            PlayerCommand::Release {
                control: Control::TurnRight,
            },
            PlayerCommand::SetInput {
                input: InputState {
                    thrust_back: true,
                    ..Default::default()
                },
            },
            PlayerCommand::Fire,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    #[test]
    fn test_fire_command_json_shape() {
        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"Fire"}"#).unwrap();
        assert_eq!(cmd, PlayerCommand::Fire);
    }

    // ---- Snapshot ----

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot {
            now: 1.25,
            tick: 3,
            phase: GamePhase::Playing,
            score: 999_875,
            entities: vec![
                DrawDescriptor::Ship {
                    position: Vector2::new(1.0, 2.0),
                    angle: 0.5,
                },
                DrawDescriptor::Asteroid {
                    position: Vector2::new(3.0, 4.0),
                    radius: 20.0,
                },
                DrawDescriptor::Bullet {
                    position: Vector2::new(5.0, 6.0),
                },
            ],
            events: vec![GameEvent::GameOver {
                result: GameResult::Won,
                score: 10,
            }],
            counts: Default::default(),
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
        assert!(json.contains(r#""kind":"Asteroid""#));
    }

    #[test]
    fn test_phase_results() {
        assert_eq!(GamePhase::Playing.result(), None);
        assert_eq!(GamePhase::Won.result(), Some(GameResult::Won));
        assert_eq!(GamePhase::Lost.result(), Some(GameResult::Lost));
        assert!(!GamePhase::Playing.is_terminal());
        assert!(GamePhase::Lost.is_terminal());
    }

    // ---- Config ----

    #[test]
    fn test_config_defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, SCREEN_WIDTH);
        assert_eq!(config.initial_score, INITIAL_SCORE);
        assert_eq!(config.large_asteroids + config.medium_asteroids, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("seed = 7\nship_max_speed = 120.0\n").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.ship_max_speed, 120.0);
        assert_eq!(config.bullet_speed, BULLET_SPEED);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = GameConfig::from_toml_str("ship_radius = 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(SimError::InvalidConfig {
                field: "ship_radius",
                ..
            })
        ));

        let err = GameConfig::from_toml_str("screen_width = \"wide\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "large_asteroids = 2\nmedium_asteroids = 0\n").unwrap();
        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.large_asteroids, 2);
        assert_eq!(config.medium_asteroids, 0);

        let missing = GameConfig::load(dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
