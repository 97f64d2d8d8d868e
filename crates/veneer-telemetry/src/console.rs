//! `MakeWriter` that forwards formatted events to the browser console.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Writer factory routing each event to the console method matching its level.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ConsoleWriter;

/// Buffers a single formatted event and emits it when dropped.
pub(crate) struct ConsoleLine {
    level: Level,
    buffer: Vec<u8>,
}

impl Write for ConsoleLine {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buffer);
        let line = text.trim_end().to_string();
        if line.is_empty() {
            return;
        }
        match self.level {
            Level::ERROR => gloo::console::error!(line),
            Level::WARN => gloo::console::warn!(line),
            Level::INFO => gloo::console::info!(line),
            _ => gloo::console::debug!(line),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}
