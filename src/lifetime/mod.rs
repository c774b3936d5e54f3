// Thu Oct 15 2026 - Alex

//! Runtime side of the generated wrappers: the release-once guard, the
//! handle registry, and the managed receiver and proxy objects.

pub mod error;
pub mod guard;
pub mod proxy;
pub mod receiver;
pub mod registry;

pub use error::{LifetimeError, LifetimeResult};
pub use guard::ReleaseGuard;
pub use proxy::ProxyHandle;
pub use receiver::{Receiver, ReceiverOptions, ReceiverPhase};
pub use registry::{HandleRegistry, NativeHandle};
