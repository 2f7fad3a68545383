//! Player commands sent from the shell to the simulation.
//!
//! Commands are queued and processed at the start of the next tick.

use serde::{Deserialize, Serialize};

/// Held-key control state, sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub thrust_forward: bool,
    pub thrust_back: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        !(self.thrust_forward || self.thrust_back || self.turn_left || self.turn_right)
    }

    /// Set or clear a single control.
    pub fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::ThrustForward => self.thrust_forward = held,
            Control::ThrustBack => self.thrust_back = held,
            Control::TurnLeft => self.turn_left = held,
            Control::TurnRight => self.turn_right = held,
        }
    }
}

/// One of the four held controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    ThrustForward,
    ThrustBack,
    TurnLeft,
    TurnRight,
}

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// A control key went down.
    Press { control: Control },
    /// A control key went up.
    Release { control: Control },
    /// Replace the whole held-key state.
    SetInput { input: InputState },
    /// Fire from every ship (subject to cooldown).
    Fire,
}
