// Thu Oct 15 2026 - Alex

use crate::lifetime::NativeHandle;
use thiserror::Error;

/// Contract violations at the native boundary. Kept apart from generator
/// errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifetimeError {
    #[error("native handle is null")]
    NullHandle,
    #[error("invalid self reference: expected {expected}, got {actual}")]
    InvalidSelfReference { expected: NativeHandle, actual: NativeHandle },
    #[error("no live object registered for {0}")]
    ObjectNotFound(NativeHandle),
    #[error("object {0} is already released")]
    Released(NativeHandle),
    #[error("release without a matching retain on {0}")]
    UnbalancedRelease(NativeHandle),
}

pub type LifetimeResult<T> = std::result::Result<T, LifetimeError>;
