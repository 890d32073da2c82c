//! Output sinks for rendered lines.
//!
//! The renderer writes through the [`Sink`] trait: an append-only target
//! accepting `write` and `write_line` calls with in-order delivery and no
//! buffering contract beyond that. [`StdoutSink`] is the production sink;
//! [`BufferSink`] captures output for tests and for rendering to a string.

use std::io::Write;

/// An append-only text output target.
pub trait Sink {
    /// Append `text` as-is.
    fn write(&mut self, text: &str) -> std::io::Result<()>;

    /// Append `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> std::io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}

/// Sink that appends to the process's standard output stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write(&mut self, text: &str) -> std::io::Result<()> {
        let mut out = std::io::stdout().lock();
        out.write_all(text.as_bytes())
    }
}

/// Sink that captures output into an in-memory string.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    buf: String,
}

impl BufferSink {
    /// Create an empty buffer sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> &str {
        &self.buf
    }

    /// Consume the sink, returning the captured output.
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Sink for BufferSink {
    fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.buf.push_str(text);
        Ok(())
    }
}
