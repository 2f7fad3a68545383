//! Game loop thread. Runs the simulation engine at a fixed cadence and emits snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel and are drained at the start of each tick.
//! The loop ends on `Shutdown`, a disconnected channel, or once the engine has
//! halted after the presentation delay.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use asteroids_core::state::GameOutcome;
use asteroids_sim::engine::{SimConfig, SimulationEngine};

use crate::error::GameLoopError;
use crate::sink::SnapshotSink;
use crate::state::GameLoopCommand;

/// What the game loop thread hands back when it ends. `None` means the player
/// quit before the game was decided; a quit during the presentation delay
/// still reports the result.
pub type LoopResult = Result<Option<GameOutcome>, GameLoopError>;

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input side to use, and the handle that
/// yields the outcome.
pub fn spawn_game_loop<S>(
    config: SimConfig,
    mut sink: S,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopResult>)>
where
    S: SnapshotSink + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("asteroids-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(config, 0.0)?;
            run_game_loop(engine, &cmd_rx, &mut sink)
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Time starts at zero when the loop starts.
pub fn run_game_loop<S: SnapshotSink>(
    mut engine: SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    sink: &mut S,
) -> LoopResult {
    let tick_duration = Duration::from_millis(engine.config().tick_interval_ms);
    let start = Instant::now();
    let mut next_tick_time = start;
    tracing::info!(?tick_duration, "game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::info!(tick = engine.tick_count(), "game loop stopped");
                    return Ok(engine.outcome());
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick
        let now = start.elapsed().as_secs_f64();
        let snapshot = engine.tick(now);

        // 3. Hand the snapshot to the renderer
        sink.emit(&snapshot)?;

        // 4. Stop once the result has been on screen long enough
        if engine.is_halted(now) {
            tracing::info!(tick = engine.tick_count(), "game loop halted");
            return Ok(engine.outcome());
        }

        // 5. Wait for the next deadline
        next_tick_time += tick_duration;
        if let Some(wait) = wait_for_deadline(&mut next_tick_time, Instant::now(), tick_duration) {
            std::thread::sleep(wait);
        }
    }
}

/// Time left until `deadline`. A loop running more than two ticks late
/// drops its backlog: the deadline moves up to `now` and there is no wait.
fn wait_for_deadline(deadline: &mut Instant, now: Instant, tick: Duration) -> Option<Duration> {
    if *deadline > now {
        return Some(*deadline - now);
    }
    if now - *deadline > tick * 2 {
        *deadline = now;
    }
    None
}
