//! Per-invocation capture of structured log output.
//!
//! - `sink`: the mutex-guarded record buffer
//! - `writer`: `MakeWriter` glue so `tracing_subscriber` writes into a sink
//! - `logger`: the scoped dispatcher handed to the analysis engine

pub mod logger;
pub mod sink;
pub mod writer;

pub use logger::CaptureLogger;
pub use sink::LogSink;
pub use writer::SinkWriter;
