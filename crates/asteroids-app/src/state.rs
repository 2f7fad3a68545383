//! Messages shared between the command reader and the game loop thread.

use asteroids_core::commands::PlayerCommand;

/// Commands sent to the game loop thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

impl From<PlayerCommand> for GameLoopCommand {
    fn from(command: PlayerCommand) -> Self {
        Self::Player(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asteroids_core::commands::Control;
    use std::sync::mpsc;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(PlayerCommand::Fire.into()).unwrap();
        tx.send(
            PlayerCommand::Press {
                control: Control::TurnLeft,
            }
            .into(),
        )
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], GameLoopCommand::Player(PlayerCommand::Fire));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::Press {
                control: Control::TurnLeft
            })
        ));
        assert_eq!(commands[2], GameLoopCommand::Shutdown);
    }
}
