//! This module provides settable values which report every change to an observer.
//!
//! # Examples
//!
//! ```
//! use rseq::observable::Observable;
//! use std::cell::RefCell;
//!
//! let changes = RefCell::new(Vec::new());
//! let mut temperature = Observable::new(|old: Option<&i32>, new: &i32| {
//!     changes.borrow_mut().push((old.copied(), *new));
//! });
//!
//! temperature.set(18);
//! temperature.set(21);
//!
//! assert_eq!(temperature.get(), Some(&21));
//! assert_eq!(*changes.borrow(), vec![(None, 18), (Some(18), 21)]);
//! ```

use core::fmt;

/// [`Observable<T, F>`] holds an optional value of type `T` and calls the observer `F` whenever a value is set.
///
/// The observer gets the old value (if there was one) and the new value, after the new value is stored.
pub struct Observable<T, F> {
    value: Option<T>,
    observer: F,
}

impl<T, F> Observable<T, F>
where
    F: Fn(Option<&T>, &T),
{
    /// Create an observable without a value; the observer is not called.
    /// - `observer` is called on every change.
    pub const fn new(observer: F) -> Self {
        Observable {
            value: None,
            observer,
        }
    }

    /// Create an observable with an initial value, notifying the observer about it once.
    /// - `value` is the initial value.
    /// - `observer` is called on every change, starting with this one.
    pub fn with_value(value: T, observer: F) -> Self {
        let mut observable = Observable::new(observer);
        observable.set(value);
        observable
    }

    /// Replace the value and notify the observer. Setting an equal value still counts as a change.
    /// - `value` is the new value.
    ///
    /// Returns the old value, if any.
    pub fn set(&mut self, value: T) -> Option<T> {
        let old = self.value.replace(value);
        if let Some(new) = &self.value {
            (self.observer)(old.as_ref(), new);
        }
        old
    }

    /// The current value, if one was set.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consume `self` and return the current value, if one was set.
    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Observable<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
