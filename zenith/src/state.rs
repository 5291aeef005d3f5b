use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// State cell with interior mutability and a dirty flag.
///
/// The host polls `is_dirty()` to decide whether a re-render is needed and
/// calls `clear_dirty()` after rendering. Lock poisoning is recovered from:
/// a panic in one handler must not wedge every later read.
#[derive(Debug)]
pub struct State<T> {
    inner: RwLock<T>,
    dirty: AtomicBool,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: RwLock::new(value),
            dirty: AtomicBool::new(false),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    /// Read the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Update the value using a closure that reports whether anything changed.
    ///
    /// The dirty flag is only raised when the closure returns `true`.
    pub fn update(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        let changed = match self.inner.write() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        };
        if changed {
            self.dirty.store(true, Ordering::SeqCst);
        }
        changed
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_marks_dirty_only_on_change() {
        let state = State::new(1);
        assert!(!state.update(|_| false));
        assert!(!state.is_dirty());

        assert!(state.update(|v| {
            *v += 1;
            true
        }));
        assert!(state.is_dirty());
        assert_eq!(state.get(), 2);

        state.clear_dirty();
        assert!(!state.is_dirty());
    }
}
