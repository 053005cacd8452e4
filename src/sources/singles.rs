//! This module provides the sequences with at most one element.

use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::Sequence;

use core::marker::PhantomData;

/// [`Empty<T>`] has no elements at all.
#[derive(Debug)]
pub struct Empty<T> {
    item: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

/// Create a sequence without elements.
pub fn empty<T>() -> Empty<T> {
    Empty { item: PhantomData }
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    type Cursor<'s> = EmptyCursor<T>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        EmptyCursor { item: PhantomData }
    }
}

/// The cursor of [`Empty`].
pub struct EmptyCursor<T> {
    item: PhantomData<fn() -> T>,
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        false
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        Err(SequenceError::Exhausted)
    }
}

/// [`Maybe<T>`] has one element if it holds a value and none otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maybe<T> {
    element: Option<T>,
}

/// Create a sequence with exactly one element.
/// - `element` is the element.
pub fn single<T: Clone>(element: T) -> Maybe<T> {
    Maybe {
        element: Some(element),
    }
}

/// Create a sequence with one element if there is a value and none otherwise.
/// - `element` is the possibly absent value.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// assert_eq!(sources::maybe(Some('x')).count(), 1);
/// assert_eq!(sources::maybe(None::<char>).count(), 0);
/// ```
pub fn maybe<T: Clone>(element: Option<T>) -> Maybe<T> {
    Maybe { element }
}

impl<T: Clone> Sequence for Maybe<T> {
    type Item = T;

    type Cursor<'s> = MaybeCursor<'s, T>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        MaybeCursor {
            element: self.element.as_ref(),
        }
    }
}

/// The cursor of [`Maybe`].
pub struct MaybeCursor<'s, T> {
    /// the element if it was not handed out yet
    element: Option<&'s T>,
}

impl<T: Clone> Cursor for MaybeCursor<'_, T> {
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.element.is_some()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        self.element
            .take()
            .cloned()
            .ok_or(SequenceError::Exhausted)
    }
}
