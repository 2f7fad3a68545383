//! Asteroids terminal shell.
//!
//! Drives the simulation from a fixed-cadence game loop thread, reads player
//! commands line by line, streams snapshots as JSON lines and keeps the
//! highscore table.

pub mod error;
pub mod game_loop;
pub mod highscore;
pub mod input;
pub mod screens;
pub mod sink;
pub mod state;

pub use asteroids_core as core;
