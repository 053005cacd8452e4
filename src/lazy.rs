//! This module provides values which are computed on first use and then cached, safely shared between threads.
//!
//! # Examples
//!
//! ```
//! use rseq::lazy::Lazy;
//! use rseq::sources;
//! use rseq::Sequence;
//!
//! let primes = Lazy::new(|| {
//!     sources::range(2u32, 50)
//!         .filter(|n| (2..*n).all(|d| n % d != 0))
//!         .to(Vec::new())
//! });
//!
//! assert!(primes.get_if_initialized().is_none());
//! assert_eq!(primes.len(), 15);
//! assert_eq!(primes.get_if_initialized().map(|p| p[0]), Some(2));
//! ```

use std::fmt;
use std::ops::Deref;
use std::sync::{Mutex, OnceLock, PoisonError};

/// [`Lazy<T, F>`] holds a value of type `T` which is computed by the provider `F` when it is first asked for.
///
/// The provider runs at most once, even if several threads ask concurrently: the others wait for its result.
/// If the provider panics, the value stays uninitialized and every later access panics as well.
pub struct Lazy<T, F = fn() -> T> {
    value: OnceLock<T>,
    /// `None` once the provider was taken
    provider: Mutex<Option<F>>,
}

impl<T, F> Lazy<T, F>
where
    F: FnOnce() -> T,
{
    /// Create a lazy value without computing it.
    /// - `provider` computes the value.
    pub const fn new(provider: F) -> Self {
        Lazy {
            value: OnceLock::new(),
            provider: Mutex::new(Some(provider)),
        }
    }

    /// Get the value, computing it first if this is the first access.
    ///
    /// # Panics
    ///
    /// Panics if the provider panics, now or on an earlier access.
    pub fn get(&self) -> &T {
        self.value.get_or_init(|| {
            let provider = self
                .provider
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take();
            match provider {
                Some(provider) => {
                    tracing::trace!(r#type = std::any::type_name::<T>(), "initializing lazy value");
                    provider()
                }
                None => panic!("lazy value is unavailable since its provider panicked"),
            }
        })
    }

    /// Get the value if it has already been computed, without computing it otherwise.
    #[inline]
    pub fn get_if_initialized(&self) -> Option<&T> {
        self.value.get()
    }

    /// Consume `self` and return the value, computing it first if necessary.
    ///
    /// # Panics
    ///
    /// Panics if the provider panicked on an earlier access.
    pub fn into_inner(self) -> T {
        match self.value.into_inner() {
            Some(value) => value,
            None => match self
                .provider
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner)
            {
                Some(provider) => provider(),
                None => panic!("lazy value is unavailable since its provider panicked"),
            },
        }
    }
}

impl<T, F> Deref for Lazy<T, F>
where
    F: FnOnce() -> T,
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T: Default> Default for Lazy<T> {
    fn default() -> Self {
        Lazy::new(T::default)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => f.debug_tuple("Lazy").field(value).finish(),
            None => f.write_str("Lazy(<uninit>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::panic::{self, AssertUnwindSafe};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_get() {
        let calls = AtomicUsize::new(0);
        let value = Lazy::new(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            "computed"
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(*value.get(), "computed");
        assert_eq!(*value.get(), "computed");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_deref() {
        let text: Lazy<String> = Lazy::new(|| "abc".to_string());

        assert_eq!(text.len(), 3);
    }

    #[test]
    fn test_get_if_initialized() {
        let value = Lazy::new(|| 7);

        assert_eq!(value.get_if_initialized(), None);
        value.get();
        assert_eq!(value.get_if_initialized(), Some(&7));
    }

    #[test]
    fn test_into_inner() {
        assert_eq!(Lazy::new(|| vec![1]).into_inner(), vec![1]);

        let value = Lazy::new(|| 2);
        value.get();
        assert_eq!(value.into_inner(), 2);
    }

    #[test]
    fn test_default_debug() {
        let value = Lazy::<u8>::default();

        assert_eq!(format!("{:?}", value), "Lazy(<uninit>)");
        assert_eq!(*value, 0);
        assert_eq!(format!("{:?}", value), "Lazy(0)");
    }

    #[test]
    fn test_once_across_threads() {
        let calls = AtomicUsize::new(0);
        let value = Lazy::new(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            (1..=100).sum::<u32>()
        });

        crossbeam::scope(|s| {
            for _ in 0..8 {
                s.spawn(|_| assert_eq!(*value.get(), 5050));
            }
        })
        .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_panicking_provider() {
        let value = Lazy::new(|| -> u8 { panic!("provider failed") });

        let first = panic::catch_unwind(AssertUnwindSafe(|| *value.get()));
        assert!(first.is_err());
        assert_eq!(value.get_if_initialized(), None);

        let second = panic::catch_unwind(AssertUnwindSafe(|| *value.get()));
        assert!(second.is_err());
    }
}
