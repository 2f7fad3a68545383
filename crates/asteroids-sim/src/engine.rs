//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the entity registry, processes player commands,
//! runs all systems, tracks the score and the Playing/Won/Lost state machine,
//! and produces `GameStateSnapshot`s. Completely headless: the caller drives
//! it with explicit timestamps, so tests can use synthetic time.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use asteroids_core::commands::{InputState, PlayerCommand};
use asteroids_core::config::GameConfig;
use asteroids_core::enums::GamePhase;
use asteroids_core::error::SimError;
use asteroids_core::events::GameEvent;
use asteroids_core::state::{GameOutcome, GameStateSnapshot};
use asteroids_core::types::Seconds;

use crate::registry::EntityRegistry;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    /// RNG seed. Overrides `game.seed`; with neither set the RNG is seeded
    /// from entropy.
    pub seed: Option<u64>,
    pub game: GameConfig,
}

impl SimConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed.or(self.game.seed) {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// The simulation engine. Owns the registry and all game state.
pub struct SimulationEngine {
    registry: EntityRegistry,
    config: GameConfig,
    phase: GamePhase,
    score: i64,
    last_score_update: Seconds,
    now: Seconds,
    tick: u64,
    input: InputState,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
    outcome: Option<GameOutcome>,
}

impl SimulationEngine {
    /// Start a new game at `now` with the standard opening field.
    pub fn new(config: SimConfig, now: Seconds) -> Result<Self, SimError> {
        let mut engine = Self::empty(config, now)?;
        world_setup::setup_game(&mut engine.registry, &mut engine.rng, &engine.config, now)?;
        tracing::info!(
            ships = engine.registry.ship_count(),
            asteroids = engine.registry.asteroid_count(),
            "game started"
        );
        Ok(engine)
    }

    /// Start a game at `now` with no entities. Populate it through
    /// [`SimulationEngine::registry_mut`] and the `world_setup` factories.
    pub fn empty(config: SimConfig, now: Seconds) -> Result<Self, SimError> {
        config.game.validate()?;
        Ok(Self {
            registry: EntityRegistry::new(),
            phase: GamePhase::Playing,
            score: config.game.initial_score,
            last_score_update: now,
            now,
            tick: 0,
            input: InputState::default(),
            rng: config.rng(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            outcome: None,
            config: config.game,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the held-key state sampled by the next tick.
    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Fire from every ship whose cooldown has elapsed. Ignored once the game
    /// is over.
    pub fn fire(&mut self, now: Seconds) {
        if self.phase != GamePhase::Playing {
            return;
        }
        systems::controls::fire(&mut self.registry, now, &self.config, &mut self.events);
    }

    /// Advance the simulation to `now` and return the resulting snapshot.
    ///
    /// `now` must not go backwards. Once the game is Won or Lost, ticks no
    /// longer change entities or score.
    pub fn tick(&mut self, now: Seconds) -> GameStateSnapshot {
        if self.phase == GamePhase::Playing {
            self.now = now;
            self.tick += 1;
            self.process_commands(now);
            self.run_systems(now);
            self.check_termination(now);
        } else {
            self.command_queue.clear();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.registry,
            self.now,
            self.tick,
            self.phase,
            self.score,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Result and final score, once the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// True once the presentation delay after Won/Lost has elapsed.
    /// The shell stops ticking and shows the result screen at this point.
    pub fn is_halted(&self, now: Seconds) -> bool {
        self.outcome
            .is_some_and(|o| now - o.ended_at >= self.config.presentation_delay_secs)
    }

    /// Number of ticks processed while playing.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Mutable registry access for custom setups.
    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    /// Process all queued commands.
    fn process_commands(&mut self, now: Seconds) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, now);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand, now: Seconds) {
        match command {
            PlayerCommand::Press { control } => self.input.set(control, true),
            PlayerCommand::Release { control } => self.input.set(control, false),
            PlayerCommand::SetInput { input } => self.input = input,
            PlayerCommand::Fire => self.fire(now),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, now: Seconds) {
        let bounds = self.config.bounds();

        // 1. Held controls
        systems::controls::run(&mut self.registry, self.input, &self.config);
        // 2. Score decay
        self.update_score(now);
        // 3. Ship motion
        systems::movement::advance_ships(&mut self.registry, now, bounds);
        // 4. Bullet motion, then expiry
        systems::movement::advance_bullets(&mut self.registry, now, bounds);
        systems::lifetime::run(
            &mut self.registry,
            now,
            self.config.bullet_time_to_live_secs,
            &mut self.events,
        );
        // 5. Asteroid motion and collisions against current-tick positions
        systems::asteroids::run(
            &mut self.registry,
            &mut self.rng,
            now,
            &self.config,
            &mut self.events,
        );
    }

    /// Lose points for the time since the last update, truncated toward zero.
    fn update_score(&mut self, now: Seconds) {
        let elapsed = now - self.last_score_update;
        self.score = (self.score as f64 - elapsed * self.config.score_decay_per_sec) as i64;
        self.last_score_update = now;
    }

    /// No ships means Lost, checked first; otherwise no asteroids means Won.
    fn check_termination(&mut self, now: Seconds) {
        let phase = if self.registry.ship_count() == 0 {
            GamePhase::Lost
        } else if self.registry.asteroid_count() == 0 {
            GamePhase::Won
        } else {
            return;
        };

        let Some(result) = phase.result() else {
            return;
        };
        self.phase = phase;
        self.outcome = Some(GameOutcome {
            result,
            final_score: self.score,
            ended_at: now,
        });
        self.events.push(GameEvent::GameOver {
            result,
            score: self.score,
        });
        tracing::info!(?result, score = self.score, "game over");
    }
}
