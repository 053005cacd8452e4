//! This module defines cursors, the per-traversal state of a sequence, extensionally by means of a trait.
//! Additionally, it provides the building blocks shared by the cursors of sources and stages.

use super::error::SequenceError;

/// A characterization of cursors over elements of some type: a cursor is an object which can tell whether there is another element and which can hand out that element.
///
/// Every traversal of a [`Sequence`](crate::Sequence) is a fresh cursor, so the cursor is the only place where traversal state lives.
pub trait Cursor {
    /// The type of the elements the cursor visits.
    type Item;

    /// Tell whether another element is available.
    ///
    /// Calling this repeatedly without calling [`next`](Cursor::next) in between must give the same answer and must not advance the position.
    fn has_next(&mut self) -> bool;

    /// Consume exactly one element and return it.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Exhausted`] if there is no element left.
    fn next(&mut self) -> Result<Self::Item, SequenceError>;

    /// Consume the next element if there is one.
    #[inline]
    fn pull(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            self.next().ok()
        } else {
            None
        }
    }
}

impl<C: Cursor + ?Sized> Cursor for alloc::boxed::Box<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        (**self).next()
    }
}

/// [`Lookahead<T>`] is the state of a cursor which has to compute its next element before it can tell whether there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookahead<T> {
    /// Nothing is computed yet.
    Pending,
    /// The next element is computed and cached.
    Ready(T),
    /// There are no more elements, for good.
    Exhausted,
}

impl<T> Lookahead<T> {
    /// Whether an element is cached.
    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, Lookahead::Ready(_))
    }

    /// Hand out the cached element and go back to [`Lookahead::Pending`].
    /// An exhausted lookahead stays exhausted.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Exhausted`] if no element is cached.
    pub fn take(&mut self) -> Result<T, SequenceError> {
        match core::mem::replace(self, Lookahead::Pending) {
            Lookahead::Ready(x) => Ok(x),
            Lookahead::Exhausted => {
                *self = Lookahead::Exhausted;
                Err(SequenceError::Exhausted)
            }
            Lookahead::Pending => Err(SequenceError::Exhausted),
        }
    }
}

/// [`IterCursor<I>`] turns an [`Iterator`] into a cursor by buffering one element ahead.
#[derive(Debug)]
pub struct IterCursor<I: Iterator> {
    /// the wrapped iterator
    iter: I,
    /// element fetched ahead of time
    lookahead: Lookahead<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    /// Wrap `iter`; nothing is fetched until the cursor is asked.
    pub fn new(iter: I) -> Self {
        IterCursor {
            iter,
            lookahead: Lookahead::Pending,
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        if let Lookahead::Pending = self.lookahead {
            self.lookahead = match self.iter.next() {
                Some(x) => Lookahead::Ready(x),
                None => Lookahead::Exhausted,
            };
        }
        self.lookahead.is_ready()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        self.has_next();
        self.lookahead.take()
    }
}

/// [`Iter<C>`] drives a cursor through the [`Iterator`]-interface.
#[derive(Debug)]
pub struct Iter<C> {
    cursor: C,
}

impl<C: Cursor> Iter<C> {
    /// Wrap `cursor`, which continues from wherever it stands.
    pub fn new(cursor: C) -> Self {
        Iter { cursor }
    }

    /// Give back the underlying cursor.
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.pull()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_lookahead_take() {
        let mut lookahead = Lookahead::Ready(1);
        assert_eq!(lookahead.take(), Ok(1));
        assert_eq!(lookahead, Lookahead::Pending);
        assert_eq!(lookahead.take(), Err(SequenceError::Exhausted));

        let mut lookahead: Lookahead<u8> = Lookahead::Exhausted;
        assert_eq!(lookahead.take(), Err(SequenceError::Exhausted));
        assert_eq!(lookahead, Lookahead::Exhausted);
    }

    #[test]
    fn test_iter_cursor_has_next_is_idempotent() {
        let mut cursor = IterCursor::new(vec![1, 2].into_iter());
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Ok(1));
        assert_eq!(cursor.next(), Ok(2));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), Err(SequenceError::Exhausted));
    }

    #[test]
    fn test_iter() {
        let cursor = IterCursor::new("abc".chars());
        let collected: Vec<char> = Iter::new(cursor).collect();
        assert_eq!(collected, vec!['a', 'b', 'c']);
    }
}
