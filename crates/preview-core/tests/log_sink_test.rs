//! Tests for the log capture sink and the logger bound to it.

use std::io::Write;
use std::sync::{Arc, Barrier};
use std::thread;

use tracing_subscriber::fmt::MakeWriter;

use preview_core::logsink::{CaptureLogger, LogSink};
use preview_core::types::UNKNOWN_LEVEL;

/// Every write appends exactly one record, decodable or not.
#[test]
fn test_one_record_per_line() {
    let sink = LogSink::new();
    sink.write_line(r#"{"timestamp":"2024-01-01T00:00:00Z","level":"INFO","fields":{"message":"ok"}}"#);
    sink.write_line("not json at all");
    sink.write_line("{\"level\": 5}");
    sink.write_line("");

    let records = sink.drain();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].msg, "ok");
    assert_eq!(records[1].level, UNKNOWN_LEVEL);
    assert_eq!(records[1].msg, "not json at all");
    assert_eq!(records[2].msg, "{\"level\": 5}");
    assert_eq!(records[3].msg, "");
}

/// Drain empties the buffer and preserves arrival order.
#[test]
fn test_drain_preserves_order() {
    let sink = LogSink::new();
    for i in 0..50 {
        sink.write_line(&format!("line {i}"));
    }
    let records = sink.drain();
    assert_eq!(records.len(), 50);
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r.msg, format!("line {i}"));
    }
    assert!(sink.is_empty());
}

/// Concurrent writers never lose records.
#[test]
fn test_concurrent_writers() {
    let sink = LogSink::new();
    let threads = 8;
    let per_thread = 250;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let sink = sink.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..per_thread {
                    sink.write_line(&format!("t{t} #{i}"));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let records = sink.drain();
    assert_eq!(records.len(), threads * per_thread);
    // Per-writer order is preserved even though writers interleave.
    for t in 0..threads {
        let mine: Vec<usize> = records
            .iter()
            .filter_map(|r| r.msg.strip_prefix(&format!("t{t} #")))
            .map(|n| n.parse().unwrap())
            .collect();
        assert_eq!(mine, (0..per_thread).collect::<Vec<_>>());
    }
}

/// The MakeWriter splits buffered bytes into lines on drop.
#[test]
fn test_writer_splits_lines_on_drop() {
    let sink = LogSink::new();
    {
        let mut w = sink.make_writer();
        w.write_all(b"first\nsec").unwrap();
        w.write_all(b"ond\n\nthird").unwrap();
    }
    let msgs: Vec<String> = sink.drain().into_iter().map(|r| r.msg).collect();
    assert_eq!(msgs, ["first", "second", "third"]);
}

/// Records logged through the scoped logger land in the sink, structured.
#[test]
fn test_logger_captures_tracing_events() {
    let sink = LogSink::new();
    let logger = CaptureLogger::new(&sink, "debug").unwrap();
    logger.in_scope(|| {
        tracing::debug!(prefix = "parser", root = "modules/vpc", "parsing module");
        tracing::error!(err = "unexpected EOF", "failed to parse");
        tracing::trace!("filtered out");
    });
    tracing::info!("outside the scope");

    let records = sink.drain();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].level, "DEBUG");
    assert_eq!(records[0].msg, "parsing module");
    assert_eq!(records[0].prefix, "parser");
    assert_eq!(records[0].root, "modules/vpc");
    assert_eq!(records[1].level, "ERROR");
    assert_eq!(records[1].err, "unexpected EOF");
    assert!(records[0].time <= records[1].time);
}

/// Engine worker threads log into the same sink by re-entering the scope.
#[test]
fn test_worker_threads_share_the_sink() {
    let sink = LogSink::new();
    let logger = CaptureLogger::new(&sink, "info").unwrap();

    thread::scope(|s| {
        for w in 0..4 {
            let logger = logger.clone();
            s.spawn(move || {
                logger.in_scope(|| {
                    for i in 0..25 {
                        tracing::info!(prefix = "worker", "w{w} step {i}");
                    }
                })
            });
        }
    });

    let records = sink.drain();
    assert_eq!(records.len(), 100);
    assert!(records.iter().all(|r| r.prefix == "worker" && r.level == "INFO"));
}

/// An invalid filter directive is a configuration error.
#[test]
fn test_invalid_filter_rejected() {
    let sink = LogSink::new();
    let err = CaptureLogger::new(&sink, "engine=loud").unwrap_err();
    assert!(err.to_string().contains("logging.filter"));
}
