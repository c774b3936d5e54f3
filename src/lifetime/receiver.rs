// Thu Oct 15 2026 - Alex

use crate::lifetime::error::{LifetimeError, LifetimeResult};
use crate::lifetime::guard::ReleaseGuard;
use crate::lifetime::registry::{HandleRegistry, NativeHandle, RegistryEntry, RegistryMap};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiverPhase {
    Constructed,
    Active,
    Released,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReceiverOptions {
    /// Dispose as soon as the count reaches zero.
    pub auto_dispose: bool,
    /// Allow [`Receiver::from_handle`] lookups.
    pub reversible: bool,
}

#[derive(Debug)]
struct RefState {
    count: usize,
    phase: ReceiverPhase,
}

type DisposeHook<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Managed object that native code holds by handle. Reference counted from
/// the native side; registered in a [`HandleRegistry`] while the count is
/// above zero.
pub struct Receiver<T: Send + Sync + 'static> {
    value: T,
    handle: NativeHandle,
    allocation: Mutex<Option<Box<[u8]>>>,
    state: Mutex<RefState>,
    guard: ReleaseGuard,
    options: ReceiverOptions,
    registry: &'static HandleRegistry,
    on_dispose: Option<DisposeHook<T>>,
}

impl<T: Send + Sync + 'static> Receiver<T> {
    /// Allocates a zeroed native block of `size` bytes and returns the
    /// receiver in the `Constructed` phase with a count of zero.
    pub fn new(value: T, size: usize, options: ReceiverOptions) -> Arc<Self> {
        Self::with_registry(value, size, options, HandleRegistry::global())
    }

    pub fn with_registry(
        value: T,
        size: usize,
        options: ReceiverOptions,
        registry: &'static HandleRegistry,
    ) -> Arc<Self> {
        Self::build(value, size, options, registry, None)
    }

    /// Like [`Receiver::new`] with a hook that runs once at disposal.
    pub fn with_dispose_hook<F>(value: T, size: usize, options: ReceiverOptions, hook: F) -> Arc<Self>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self::build(value, size, options, HandleRegistry::global(), Some(Box::new(hook)))
    }

    fn build(
        value: T,
        size: usize,
        options: ReceiverOptions,
        registry: &'static HandleRegistry,
        on_dispose: Option<DisposeHook<T>>,
    ) -> Arc<Self> {
        let allocation = vec![0u8; size.max(1)].into_boxed_slice();
        let handle = NativeHandle(allocation.as_ptr() as usize);

        Arc::new(Self {
            value,
            handle,
            allocation: Mutex::new(Some(allocation)),
            state: Mutex::new(RefState {
                count: 0,
                phase: ReceiverPhase::Constructed,
            }),
            guard: ReleaseGuard::new(),
            options,
            registry,
            on_dispose,
        })
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn handle(&self) -> NativeHandle {
        self.handle
    }

    pub fn options(&self) -> ReceiverOptions {
        self.options
    }

    pub fn phase(&self) -> ReceiverPhase {
        self.state.lock().phase
    }

    pub fn ref_count(&self) -> usize {
        self.state.lock().count
    }

    pub fn has_one_ref(&self) -> bool {
        self.state.lock().count == 1
    }

    pub fn has_any_ref(&self) -> bool {
        self.state.lock().count >= 1
    }

    pub fn is_disposed(&self) -> bool {
        self.guard.is_released()
    }

    /// Retains once and hands out the native handle.
    pub fn to_native(self: &Arc<Self>) -> LifetimeResult<NativeHandle> {
        self.retain()?;
        Ok(self.handle)
    }

    /// Increments the count. The first retain roots the object in the
    /// registry.
    pub fn retain(self: &Arc<Self>) -> LifetimeResult<usize> {
        let (count, displaced) = {
            let mut entries = self.registry.lock();
            let mut state = self.state.lock();

            if state.phase == ReceiverPhase::Released {
                return Err(LifetimeError::Released(self.handle));
            }

            state.count += 1;
            state.phase = ReceiverPhase::Active;
            let displaced = if state.count == 1 {
                let entry: RegistryEntry = self.clone();
                entries.insert(self.handle, entry)
            } else {
                None
            };
            (state.count, displaced)
        };
        drop(displaced);
        Ok(count)
    }

    /// Decrements the count. Returns `true` for the call that reached zero.
    pub fn release(&self) -> LifetimeResult<bool> {
        let (reached_zero, unrooted) = {
            let mut entries = self.registry.lock();
            self.release_locked(&mut entries)?
        };
        drop(unrooted);
        if reached_zero {
            self.finish_release();
        }
        Ok(reached_zero)
    }

    fn release_locked(
        &self,
        entries: &mut RegistryMap,
    ) -> LifetimeResult<(bool, Option<RegistryEntry>)> {
        let mut state = self.state.lock();

        if state.count == 0 {
            return Err(match state.phase {
                ReceiverPhase::Released => LifetimeError::Released(self.handle),
                _ => LifetimeError::UnbalancedRelease(self.handle),
            });
        }

        state.count -= 1;
        if state.count > 0 {
            return Ok((false, None));
        }

        state.phase = ReceiverPhase::Released;
        Ok((true, entries.remove(&self.handle)))
    }

    fn finish_release(&self) {
        log::trace!("{} released", self.handle);
        if self.options.auto_dispose {
            self.dispose();
        }
    }

    /// Frees the native block. Only the first call does anything. A still
    /// rooted object is unrooted first so no lookup can reach freed memory.
    pub fn dispose(&self) -> bool {
        if !self.guard.try_release() {
            return false;
        }
        let unrooted = self.unroot();
        drop(unrooted);
        self.allocation.lock().take();
        if let Some(hook) = &self.on_dispose {
            hook(&self.value);
        }
        log::trace!("{} disposed", self.handle);
        true
    }

    fn unroot(&self) -> Option<RegistryEntry> {
        let mut entries = self.registry.lock();
        let mut state = self.state.lock();

        let own = entries
            .get(&self.handle)
            .map_or(false, |entry| Arc::as_ptr(entry) as *const () == self as *const Self as *const ());
        state.phase = ReceiverPhase::Released;
        if !own {
            return None;
        }
        if state.count > 0 {
            log::warn!("{} disposed with {} native reference(s) outstanding", self.handle, state.count);
        }
        state.count = 0;
        entries.remove(&self.handle)
    }

    /// Reverse lookup for a handle passed in from native code. Native code
    /// passed a retained reference, so a found object gives one back.
    pub fn from_handle(handle: NativeHandle) -> LifetimeResult<Arc<Self>> {
        Self::from_handle_in(HandleRegistry::global(), handle)
    }

    pub fn from_handle_in(
        registry: &'static HandleRegistry,
        handle: NativeHandle,
    ) -> LifetimeResult<Arc<Self>> {
        if handle.is_null() {
            return Err(LifetimeError::NullHandle);
        }

        let (receiver, reached_zero, unrooted) = {
            let mut entries = registry.lock();
            let entry = entries
                .get(&handle)
                .cloned()
                .ok_or(LifetimeError::ObjectNotFound(handle))?;
            let receiver = entry
                .downcast::<Self>()
                .map_err(|_| LifetimeError::ObjectNotFound(handle))?;
            if !receiver.options.reversible {
                return Err(LifetimeError::ObjectNotFound(handle));
            }
            let (reached_zero, unrooted) = receiver.release_locked(&mut entries)?;
            (receiver, reached_zero, unrooted)
        };

        drop(unrooted);
        if reached_zero {
            receiver.finish_release();
        }
        Ok(receiver)
    }

    /// Verifies that native code called back with this object's own handle.
    /// Only checked in debug builds.
    pub fn check_self(&self, handle: NativeHandle) -> LifetimeResult<()> {
        if cfg!(debug_assertions) && handle != self.handle {
            return Err(LifetimeError::InvalidSelfReference {
                expected: self.handle,
                actual: handle,
            });
        }
        Ok(())
    }
}

impl<T: Send + Sync + 'static> Drop for Receiver<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<T: Send + Sync + 'static> fmt::Debug for Receiver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Receiver")
            .field("handle", &self.handle)
            .field("count", &state.count)
            .field("phase", &state.phase)
            .field("disposed", &self.guard.is_released())
            .finish()
    }
}
