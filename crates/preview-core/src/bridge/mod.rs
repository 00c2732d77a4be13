//! The host-call pipeline: build the tree, invoke the engine, marshal the
//! envelope, all inside one panic guard.

pub mod guard;
pub mod invoker;
pub mod phase;
pub mod preview;

pub use guard::{protect, Fault};
pub use invoker::{invoke, Invocation};
pub use phase::Phase;
pub use preview::PreviewBridge;
