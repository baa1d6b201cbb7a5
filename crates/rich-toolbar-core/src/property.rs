//! Change-detecting properties.
//!
//! A [`Property<T>`] wraps a value behind a lock and reports whether a write
//! actually changed it, so owners only emit their notification signals when
//! something observable happened.
//!
//! # Example
//!
//! ```
//! use rich_toolbar_core::{Property, Signal};
//!
//! struct ToggleState {
//!     selected: Property<bool>,
//!     toggled: Signal<bool>,
//! }
//!
//! impl ToggleState {
//!     fn set_selected(&self, selected: bool) {
//!         if self.selected.set(selected) {
//!             self.toggled.emit(selected);
//!         }
//!     }
//! }
//!
//! let state = ToggleState { selected: Property::new(false), toggled: Signal::new() };
//! state.set_selected(true);
//! assert!(state.selected.get());
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value cell that tracks changes.
///
/// `set()` compares the new value with the current one and returns whether
/// the value actually changed.
///
/// # Thread Safety
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Replace the value with the result of `f`, returning the new value.
    ///
    /// The read and the write happen under one lock, so concurrent updates
    /// are never lost.
    pub fn update<F>(&self, f: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        let mut current = self.value.write();
        let next = f(&current);
        *current = next.clone();
        next
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

static_assertions::assert_impl_all!(Property<bool>: Send, Sync);
