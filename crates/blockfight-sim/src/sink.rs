//! Snapshot sink: one JSON document per line.

use std::io::{self, Write};

use blockfight_core::host::Renderer;
use blockfight_core::Snapshot;
use tracing::warn;

/// Streams every `every`th snapshot as a JSON line. `every == 0` writes nothing.
///
/// `Renderer::render` cannot fail, so the first write error is kept and
/// returned from [`JsonLines::finish`]; later snapshots are dropped.
pub struct JsonLines<W> {
    out: W,
    every: u64,
    written: u64,
    error: Option<io::Error>,
}

impl<W: Write> JsonLines<W> {
    /// Wraps `out`, writing every `every`th snapshot.
    pub fn new(out: W, every: u64) -> Self {
        Self {
            out,
            every,
            written: 0,
            error: None,
        }
    }

    /// Snapshots written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flushes and hands back the writer, or the first error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_line(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write> Renderer for JsonLines<W> {
    fn render(&mut self, snapshot: &Snapshot) {
        if self.every == 0 || self.error.is_some() || snapshot.tick % self.every != 0 {
            return;
        }
        match self.write_line(snapshot) {
            Ok(()) => self.written += 1,
            Err(err) => {
                warn!(tick = snapshot.tick, error = %err, "snapshot stream failed");
                self.error = Some(err);
            }
        }
    }
}
