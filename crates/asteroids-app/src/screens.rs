//! Text screens shown outside of play.

use std::fmt::Write as _;

use asteroids_core::enums::GameResult;
use asteroids_core::state::GameOutcome;

use crate::highscore::HighscoreTable;

const RULE: &str = "===================================";

pub fn menu() -> String {
    [
        RULE,
        "========     ASTEROIDS     ========",
        RULE,
        "Controls (one per line):",
        "  +w / -w   thrust forward on / off",
        "  +s / -s   thrust back on / off",
        "  +a / -a   turn left on / off",
        "  +d / -d   turn right on / off",
        "  fire      shoot",
        "  quit      leave the game",
        RULE,
    ]
    .join("\n")
}

/// The result screen shown once the game loop halts.
pub fn outcome(outcome: &GameOutcome) -> String {
    let banner = match outcome.result {
        GameResult::Won => "========     YOU  WIN!     ========",
        GameResult::Lost => "========     YOU LOSE!     ========",
    };
    let mut text = [RULE, "========     ASTEROIDS     ========", RULE, banner, RULE].join("\n");
    if outcome.result == GameResult::Won {
        let _ = write!(text, "\nScore: {}", outcome.final_score);
    }
    text
}

pub fn highscores(table: &HighscoreTable) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "=============================================");
    let _ = writeln!(text, "========     ASTEROIDS HIGHSCORE     ========");
    let _ = write!(text, "=============================================");
    if table.is_empty() {
        let _ = write!(text, "\nNo highscores yet.");
    }
    for (i, entry) in table.entries().iter().enumerate() {
        let _ = write!(text, "\n{} - {} - {}", i + 1, entry.name, entry.score);
    }
    text
}
