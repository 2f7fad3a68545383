//! Line-based command reader.
//!
//! Each input line is one command:
//!
//! - `+w` / `-w` press or release a control key (`w` forward, `s` back,
//!   `a` turn left, `d` turn right)
//! - `fire` shoots
//! - `quit` ends the game
//! - a JSON object is decoded as a [`PlayerCommand`]

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread::JoinHandle;

use asteroids_core::commands::{Control, PlayerCommand};

use crate::error::InputError;
use crate::state::GameLoopCommand;

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<GameLoopCommand>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if line.starts_with('{') {
        let command: PlayerCommand = serde_json::from_str(line)?;
        return Ok(Some(command.into()));
    }

    let command = match line {
        "quit" | "exit" => GameLoopCommand::Shutdown,
        "fire" => PlayerCommand::Fire.into(),
        _ => {
            let (pressed, key) = if let Some(key) = line.strip_prefix('+') {
                (true, key)
            } else if let Some(key) = line.strip_prefix('-') {
                (false, key)
            } else {
                return Err(InputError::Unknown(line.to_string()));
            };
            let control =
                control_for_key(key).ok_or_else(|| InputError::Unknown(line.to_string()))?;
            if pressed {
                PlayerCommand::Press { control }.into()
            } else {
                PlayerCommand::Release { control }.into()
            }
        }
    };
    Ok(Some(command))
}

fn control_for_key(key: &str) -> Option<Control> {
    match key {
        "w" => Some(Control::ThrustForward),
        "s" => Some(Control::ThrustBack),
        "a" => Some(Control::TurnLeft),
        "d" => Some(Control::TurnRight),
        _ => None,
    }
}

/// Forward commands read from `reader` to the game loop until `quit`, end of
/// input, or the loop hangs up.
pub fn spawn_command_reader<R>(
    reader: R,
    cmd_tx: mpsc::Sender<GameLoopCommand>,
) -> io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    std::thread::Builder::new()
        .name("asteroids-input".into())
        .spawn(move || read_commands(reader, &cmd_tx))
}

fn read_commands<R: BufRead>(reader: R, cmd_tx: &mpsc::Sender<GameLoopCommand>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(%err, "stopped reading commands");
                return;
            }
        };
        match parse_line(&line) {
            Ok(Some(command)) => {
                if cmd_tx.send(command).is_err() || command == GameLoopCommand::Shutdown {
                    return;
                }
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "ignoring input line"),
        }
    }
    tracing::debug!("command input closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_key_toggles() {
        assert_eq!(
            parse_line("+w").unwrap(),
            Some(GameLoopCommand::Player(PlayerCommand::Press {
                control: Control::ThrustForward
            }))
        );
        assert_eq!(
            parse_line(" -d ").unwrap(),
            Some(GameLoopCommand::Player(PlayerCommand::Release {
                control: Control::TurnRight
            }))
        );
    }

    #[test]
    fn test_parse_words_and_blank() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(
            parse_line("fire").unwrap(),
            Some(GameLoopCommand::Player(PlayerCommand::Fire))
        );
        assert_eq!(parse_line("quit").unwrap(), Some(GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_parse_json_command() {
        let cmd = parse_line(r#"{"type":"Press","control":"TurnLeft"}"#).unwrap();
        assert_eq!(
            cmd,
            Some(GameLoopCommand::Player(PlayerCommand::Press {
                control: Control::TurnLeft
            }))
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(parse_line("+x"), Err(InputError::Unknown(_))));
        assert!(matches!(parse_line("jump"), Err(InputError::Unknown(_))));
        assert!(matches!(parse_line("{nope"), Err(InputError::Json(_))));
    }

    #[test]
    fn test_reader_stops_at_quit() {
        let (tx, rx) = mpsc::channel();
        let input = Cursor::new("+w\nbogus\n\nfire\nquit\n-w\n");
        read_commands(input, &tx);

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[1], GameLoopCommand::Player(PlayerCommand::Fire));
        assert_eq!(commands[2], GameLoopCommand::Shutdown);
    }
}
