// Thu Oct 15 2026 - Alex

use crate::lifetime::error::{LifetimeError, LifetimeResult};
use crate::lifetime::guard::ReleaseGuard;
use crate::lifetime::registry::NativeHandle;
use std::fmt;

type ReleaseFn = Box<dyn Fn(NativeHandle) + Send + Sync>;

/// Owning wrapper over a native object reference. Holds one native
/// reference and gives it back at most once, on [`ProxyHandle::dispose`] or
/// on drop, whichever comes first.
pub struct ProxyHandle {
    handle: NativeHandle,
    guard: ReleaseGuard,
    release: ReleaseFn,
}

impl ProxyHandle {
    pub fn new<F>(handle: NativeHandle, release: F) -> LifetimeResult<Self>
    where
        F: Fn(NativeHandle) + Send + Sync + 'static,
    {
        if handle.is_null() {
            return Err(LifetimeError::NullHandle);
        }
        Ok(Self {
            handle,
            guard: ReleaseGuard::new(),
            release: Box::new(release),
        })
    }

    /// `None` for a null handle, the way returned references are wrapped.
    pub fn from_native_or_null<F>(handle: NativeHandle, release: F) -> Option<Self>
    where
        F: Fn(NativeHandle) + Send + Sync + 'static,
    {
        Self::new(handle, release).ok()
    }

    pub fn handle(&self) -> LifetimeResult<NativeHandle> {
        if self.guard.is_released() {
            return Err(LifetimeError::Released(self.handle));
        }
        Ok(self.handle)
    }

    pub fn is_disposed(&self) -> bool {
        self.guard.is_released()
    }

    pub fn dispose(&self) -> bool {
        if !self.guard.try_release() {
            return false;
        }
        (self.release)(self.handle);
        true
    }
}

impl Drop for ProxyHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for ProxyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyHandle")
            .field("handle", &self.handle)
            .field("disposed", &self.guard.is_released())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_release() -> (Arc<AtomicUsize>, impl Fn(NativeHandle) + Send + Sync + 'static) {
        let releases = Arc::new(AtomicUsize::new(0));
        let counter = releases.clone();
        (releases, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_rejects_null() {
        let (releases, release) = counting_release();
        assert_eq!(
            ProxyHandle::new(NativeHandle::NULL, release).unwrap_err(),
            LifetimeError::NullHandle
        );
        assert!(ProxyHandle::from_native_or_null(NativeHandle::NULL, |_| {}).is_none());
        assert_eq!(releases.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_dispose_then_drop_releases_once() {
        let (releases, release) = counting_release();
        let proxy = ProxyHandle::new(NativeHandle(0x2000), release).unwrap();
        assert_eq!(proxy.handle().unwrap(), NativeHandle(0x2000));

        assert!(proxy.dispose());
        assert!(!proxy.dispose());
        assert_eq!(
            proxy.handle().unwrap_err(),
            LifetimeError::Released(NativeHandle(0x2000))
        );
        drop(proxy);

        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_releases() {
        let (releases, release) = counting_release();
        drop(ProxyHandle::new(NativeHandle(0x3000), release).unwrap());
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }
}
