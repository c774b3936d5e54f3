// Tue Oct 13 2026 - Alex

pub mod signature;
pub mod vtable;

pub use signature::{FunctionKind, Signature, SignatureNormalizer, TargetArg};
pub use vtable::{Capability, RootKind, VTableBuilder, VTableLayout, VTableSlot};
