//! Structured field names shared by bridge log events.
//!
//! Captured records surface `prefix`, `root` and `err` as dedicated
//! columns, so events meant for the host use these names.

/// Subsystem that emitted the record (e.g. "filetree").
pub const PREFIX: &str = "prefix";

/// Module root directory the record refers to.
pub const ROOT: &str = "root";

/// Error text attached to the record.
pub const ERR: &str = "err";

/// Prefix used by the file tree builder.
pub const PREFIX_FILETREE: &str = "filetree";

/// Prefix used by the analysis invoker.
pub const PREFIX_INVOKER: &str = "invoker";

/// Prefix used by the bundled inventory engine.
pub const PREFIX_INVENTORY: &str = "inventory";
