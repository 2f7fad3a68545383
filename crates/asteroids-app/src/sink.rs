//! Render sinks: where the game loop sends each snapshot.

use std::io::{self, Write};

use asteroids_core::state::GameStateSnapshot;

/// Receives one snapshot per tick.
pub trait SnapshotSink {
    fn emit(&mut self, snapshot: &GameStateSnapshot) -> io::Result<()>;
}

/// Writes each snapshot as one line of JSON.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLinesSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> SnapshotSink for JsonLinesSink<W> {
    fn emit(&mut self, snapshot: &GameStateSnapshot) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

/// Keeps every snapshot in memory.
impl SnapshotSink for Vec<GameStateSnapshot> {
    fn emit(&mut self, snapshot: &GameStateSnapshot) -> io::Result<()> {
        self.push(snapshot.clone());
        Ok(())
    }
}
