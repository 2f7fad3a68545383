use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use asteroids_app::game_loop;
use asteroids_app::highscore::HighscoreTable;
use asteroids_app::input;
use asteroids_app::screens;
use asteroids_app::sink::JsonLinesSink;
use asteroids_core::config::GameConfig;
use asteroids_core::enums::GameResult;
use asteroids_sim::engine::SimConfig;

#[derive(Parser)]
#[command(name = "asteroids")]
#[command(about = "Asteroids arcade simulation driven from the terminal")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a game. Commands are read from stdin, snapshots go to stdout.
    Play {
        /// TOML file overriding game settings
        #[arg(long)]
        config: Option<PathBuf>,
        /// Fixed RNG seed for a reproducible field
        #[arg(long)]
        seed: Option<u64>,
        /// Name recorded in the highscore table on a win
        #[arg(long, default_value = "player")]
        name: String,
        /// Highscore file
        #[arg(long, default_value = "HighScore")]
        highscores: PathBuf,
    },
    /// Show the highscore table.
    Highscores {
        #[arg(long, default_value = "HighScore")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    match Args::parse().command {
        Command::Play {
            config,
            seed,
            name,
            highscores,
        } => play(config, seed, &name, &highscores),
        Command::Highscores { file } => {
            let table = HighscoreTable::load(&file)
                .with_context(|| format!("failed reading highscores {}", file.display()))?;
            println!("{}", screens::highscores(&table));
            Ok(())
        }
    }
}

fn play(
    config: Option<PathBuf>,
    seed: Option<u64>,
    name: &str,
    highscores: &Path,
) -> Result<()> {
    let game = match &config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed loading config {}", path.display()))?,
        None => GameConfig::default(),
    };

    eprintln!("{}", screens::menu());

    let (cmd_tx, handle) = game_loop::spawn_game_loop(
        SimConfig { seed, game },
        JsonLinesSink::stdout(),
    )
    .context("failed to spawn game loop thread")?;
    // Detached: it stops at `quit`, end of input, or once the loop hangs up.
    input::spawn_command_reader(io::BufReader::new(io::stdin()), cmd_tx)
        .context("failed to spawn input thread")?;

    let outcome = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))??;
    let Some(outcome) = outcome else {
        tracing::info!("game abandoned");
        return Ok(());
    };

    println!("{}", screens::outcome(&outcome));
    if outcome.result != GameResult::Won {
        return Ok(());
    }

    let mut table = HighscoreTable::load_or_default(highscores)
        .with_context(|| format!("failed reading highscores {}", highscores.display()))?;
    if let Some(index) = table.insert(name, outcome.final_score) {
        table
            .save(highscores)
            .with_context(|| format!("failed writing highscores {}", highscores.display()))?;
        tracing::info!(position = index + 1, "new highscore");
    }
    println!("{}", screens::highscores(&table));
    Ok(())
}
