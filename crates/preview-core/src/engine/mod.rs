//! The analysis engine seam.
//!
//! The bridge never interprets infrastructure code itself; it hands a
//! [`VirtualFileTree`](crate::vfs::VirtualFileTree) to an [`AnalysisEngine`].
//! [`InventoryEngine`] is the engine bundled with the NAPI module.

pub mod inventory;
pub mod traits;

pub use inventory::{InventoryEngine, InventoryOutput, ModuleSummary};
pub use traits::{Analysis, AnalysisEngine, AnalysisRequest};
