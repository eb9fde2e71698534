//! Reactive state cells and keyed hook storage
//!
//! A [`State<T>`] is a shared, versioned cell. Event handlers capture a clone
//! of the handle and write to it; the next build reads the new value.
//!
//! [`HookState`] maps string keys to state cells so that component-local
//! state (the selected tab of an uncontrolled `Tabs`, the load status of an
//! `Image`) survives across rebuilds of the same tree.

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rustc_hash::FxHashMap;

/// Shared reactive cell
pub struct State<T> {
    value: Arc<RwLock<T>>,
    version: Arc<AtomicU64>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            version: Arc::clone(&self.version),
        }
    }
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Replace the value
    pub fn set(&self, value: T) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value;
        self.version.fetch_add(1, Ordering::SeqCst);
    }

    /// Mutate the value in place
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value.write().unwrap_or_else(PoisonError::into_inner));
        self.version.fetch_add(1, Ordering::SeqCst);
        result
    }

    /// Read the value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of writes since creation
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Whether two handles point at the same cell
    pub fn ptr_eq(&self, other: &State<T>) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl<T: Clone> State<T> {
    pub fn get(&self) -> T {
        self.with(T::clone)
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| {
            f.debug_struct("State")
                .field("value", value)
                .field("version", &self.version())
                .finish()
        })
    }
}

/// Keyed storage for component-local state
#[derive(Default)]
pub struct HookState {
    slots: Mutex<FxHashMap<String, Box<dyn Any + Send + Sync>>>,
}

impl HookState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the state cell stored under `key`, creating it with `init` on
    /// first use.
    ///
    /// A slot holding a different type is replaced.
    pub fn use_state_keyed<T, F>(&self, key: &str, init: F) -> State<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = slots.get(key) {
            if let Some(state) = existing.downcast_ref::<State<T>>() {
                return state.clone();
            }
            tracing::warn!("hook slot {key:?} reused with a different type; resetting");
        }

        let state = State::new(init());
        slots.insert(key.to_string(), Box::new(state.clone()));
        state
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every stored slot
    pub fn clear(&self) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl fmt::Debug for HookState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookState").field("slots", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_set_and_version() {
        let s = State::new(1);
        assert_eq!(s.version(), 0);
        s.set(2);
        s.update(|v| *v += 1);
        assert_eq!(s.get(), 3);
        assert_eq!(s.version(), 2);
    }

    #[test]
    fn test_clone_shares_cell() {
        let a = State::new(String::from("a"));
        let b = a.clone();
        b.set("b".into());
        assert_eq!(a.get(), "b");
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_keyed_state_persists() {
        let hooks = HookState::new();
        let first = hooks.use_state_keyed("tabs", || 0usize);
        first.set(2);
        let second = hooks.use_state_keyed("tabs", || 0usize);
        assert_eq!(second.get(), 2);
        assert!(first.ptr_eq(&second));
    }

    #[test]
    fn test_keyed_state_type_mismatch_resets() {
        let hooks = HookState::new();
        hooks.use_state_keyed("slot", || 5u32).set(9);
        let replaced = hooks.use_state_keyed("slot", || String::from("fresh"));
        assert_eq!(replaced.get(), "fresh");
        assert_eq!(hooks.len(), 1);
    }
}
