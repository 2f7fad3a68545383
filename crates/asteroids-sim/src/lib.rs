//! Simulation engine for the asteroids game.
//!
//! Owns the entity registry (a hecs world), runs systems once per tick
//! and produces GameStateSnapshots for the shell.

pub mod engine;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use asteroids_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use registry::EntityRegistry;
