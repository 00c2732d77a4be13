use std::io;

use tracing_subscriber::fmt::MakeWriter;

use super::LogSink;

/// Short-lived writer handed out per event by [`LogSink`]'s `MakeWriter`.
///
/// Bytes are buffered and split into lines when the writer is flushed or
/// dropped; each non-blank line becomes one record.
pub struct SinkWriter {
    sink: LogSink,
    buf: Vec<u8>,
}

impl SinkWriter {
    fn new(sink: LogSink) -> Self {
        Self {
            sink,
            buf: Vec::new(),
        }
    }

    fn emit_lines(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buf);
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            self.sink.write_line(line);
        }
        self.buf.clear();
    }
}

impl io::Write for SinkWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit_lines();
        Ok(())
    }
}

impl Drop for SinkWriter {
    fn drop(&mut self) {
        self.emit_lines();
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = SinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SinkWriter::new(self.clone())
    }
}
