//! This module bridges std-iterables to sequences.

use crate::cursor::IterCursor;
use crate::Sequence;

use core::cell::Cell;
use core::iter;
use core::option;

/// [`FromIterable<I>`] yields the elements of a cloneable iterable, cloning the iterable for every traversal.
#[derive(Debug, Clone)]
pub struct FromIterable<I> {
    iterable: I,
}

/// Create a restartable sequence from an iterable.
/// - `iterable` is cloned and turned into an iterator for each traversal.
///
/// References to collections are cheap to clone, so borrowing a collection is the usual way to use this.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
/// use std::collections::BTreeMap;
///
/// let ages = BTreeMap::from([("ann", 31), ("bob", 27)]);
/// let names = sources::from_iterable(&ages).map(|(name, _)| *name);
///
/// assert_eq!(names.to(Vec::new()), vec!["ann", "bob"]);
/// assert_eq!(names.count(), 2);
/// ```
pub fn from_iterable<I>(iterable: I) -> FromIterable<I>
where
    I: IntoIterator + Clone,
{
    FromIterable { iterable }
}

impl<I> Sequence for FromIterable<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    type Cursor<'s> = IterCursor<I::IntoIter>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.iterable.clone().into_iter())
    }
}

/// [`FromIter<I>`] yields the elements of an iterator which can be consumed only once.
///
/// The first traversal takes the iterator; every later traversal is empty.
pub struct FromIter<I> {
    iter: Cell<Option<I>>,
}

/// Create a single-use sequence from an iterator.
/// - `iter` is the iterator.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let once = sources::from_iter("ab".chars());
///
/// assert_eq!(once.to(String::new()), "ab");
/// assert_eq!(once.count(), 0);
/// ```
pub fn from_iter<I: Iterator>(iter: I) -> FromIter<I> {
    FromIter {
        iter: Cell::new(Some(iter)),
    }
}

impl<I: Iterator> Sequence for FromIter<I> {
    type Item = I::Item;

    type Cursor<'s> = IterCursor<iter::Flatten<option::IntoIter<I>>>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        let iter = self.iter.take();
        if iter.is_none() {
            tracing::warn!("single-use sequence traversed again, it yields nothing");
        }
        IterCursor::new(iter.into_iter().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::assert_yields;
    use crate::Cursor;

    use alloc::vec;

    #[test]
    fn test_from_iterable() {
        let numbers = vec![1, 2, 3];
        let sequence = from_iterable(&numbers);

        assert_yields!(sequence, [&1, &2, &3]);
        assert_yields!(sequence, [&1, &2, &3]);
    }

    #[test]
    fn test_from_iterable_range() {
        assert_yields!(from_iterable(0..3), [0, 1, 2]);
    }

    #[test]
    fn test_from_iter() {
        let sequence = from_iter(vec![1, 2].into_iter());

        assert_yields!(sequence, [1, 2]);
        assert_yields!(sequence, []);
    }

    #[test]
    fn test_from_iter_partial_traversal() {
        let sequence = from_iter(0..5);

        let mut cursor = sequence.cursor();
        assert_eq!(cursor.next(), Ok(0));
        drop(cursor);

        assert_eq!(sequence.first(), None);
    }
}
