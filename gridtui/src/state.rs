//! Reactive state wrapper.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::wakeup::{WakeupHandle, WakeupSender};

/// Reactive state with interior mutability.
///
/// `State<T>` is cheap to clone; clones share the same cell. Every mutation
/// bumps a version counter (used by widgets to invalidate derived caches)
/// and pings the wakeup channel so the event loop re-renders.
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    version: Arc<AtomicU64>,
    wakeup: WakeupHandle,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            version: Arc::new(AtomicU64::new(0)),
            wakeup: WakeupHandle::new(),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Read through a closure without cloning.
    pub fn with<F, O>(&self, f: F) -> O
    where
        F: FnOnce(&T) -> O,
    {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Replace the value.
    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = value;
            self.bump();
        }
    }

    /// Mutate the value in place.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
            self.bump();
        }
    }

    /// Monotonic counter incremented on every mutation.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Install the runtime's wakeup sender.
    pub fn install_wakeup(&self, sender: WakeupSender) {
        self.wakeup.install(sender);
    }

    fn bump(&self) {
        self.version.fetch_add(1, Ordering::SeqCst);
        self.wakeup.send();
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            version: Arc::clone(&self.version),
            wakeup: self.wakeup.clone(),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
