// Wed Oct 14 2026 - Alex

pub mod manager;
pub mod store;

pub use manager::{OutputManager, OutputSummary};
pub use store::{DryRunStore, FsStore, MemoryStore, OutputStore};
