//! # preview-core
//!
//! The host-boundary bridge around an infrastructure-as-code analysis
//! engine. A JavaScript host hands over a nested object of file contents and
//! an optional parameter object; it always gets back one JSON envelope with
//! `output`, `diags` and `parser_logs`.
//!
//! ## Architecture
//!
//! - `vfs`: host object → `VirtualFileTree`, per-node skip-and-continue
//! - `logsink`: mutex-guarded record buffer and the scoped logger bound to it
//! - `engine`: the `AnalysisEngine` seam and the bundled `InventoryEngine`
//! - `bridge`: invoker, panic guard and envelope marshaling
//! - `types`: wire types mirrored to TypeScript via ts-rs
//! - `config`, `errors`, `tracing`: ambient concerns

pub mod bridge;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logsink;
pub mod tracing;
pub mod types;
pub mod vfs;

pub use bridge::PreviewBridge;
pub use config::PreviewConfig;
pub use errors::BridgeError;
pub use types::{Diagnostic, LogRecord, ResponseEnvelope, Severity};
