// Thu Oct 15 2026 - Alex

use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Address of a native-visible allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NativeHandle(pub usize);

impl NativeHandle {
    pub const NULL: NativeHandle = NativeHandle(0);

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

pub type RegistryEntry = Arc<dyn Any + Send + Sync>;
pub type RegistryMap = HashMap<NativeHandle, RegistryEntry>;

static GLOBAL: Lazy<HandleRegistry> = Lazy::new(HandleRegistry::new);

/// Handle -> live object map. Keeps objects alive while only native code
/// refers to them and serves reverse lookups.
///
/// Lock order: this registry's lock is always taken before any object's
/// reference-count lock.
#[derive(Default)]
pub struct HandleRegistry {
    entries: Mutex<RegistryMap>,
}

impl HandleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> &'static HandleRegistry {
        &GLOBAL
    }

    /// Holds the registry lock for a compound operation.
    pub fn lock(&self) -> MutexGuard<'_, RegistryMap> {
        self.entries.lock()
    }

    pub fn insert(&self, handle: NativeHandle, entry: RegistryEntry) -> Option<RegistryEntry> {
        self.entries.lock().insert(handle, entry)
    }

    pub fn remove(&self, handle: NativeHandle) -> Option<RegistryEntry> {
        self.entries.lock().remove(&handle)
    }

    pub fn contains(&self, handle: NativeHandle) -> bool {
        self.entries.lock().contains_key(&handle)
    }

    pub fn get<T: Any + Send + Sync>(&self, handle: NativeHandle) -> Option<Arc<T>> {
        let entry = self.entries.lock().get(&handle).cloned()?;
        entry.downcast::<T>().ok()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl fmt::Debug for HandleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandleRegistry").field("entries", &self.len()).finish()
    }
}
