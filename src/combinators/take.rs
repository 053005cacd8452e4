use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::Sequence;

/// [`Take<S>`] keeps at most a fixed number of elements from the front of `S`.
///
/// This makes it the usual way to get something finite out of an infinite sequence.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let powers = sources::iterate(|| 1, |n| n * 2).take(5);
///
/// assert_eq!(powers.to(Vec::new()), vec![1, 2, 4, 8, 16]);
/// ```
#[derive(Debug, Clone)]
pub struct Take<S> {
    sequence: S,
    count: usize,
}

impl<S> Take<S> {
    pub fn new(sequence: S, count: usize) -> Self {
        Take { sequence, count }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    type Cursor<'s> = TakeCursor<S::Cursor<'s>>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        TakeCursor {
            upstream: self.sequence.cursor(),
            left: self.count,
        }
    }
}

/// The cursor of [`Take`].
pub struct TakeCursor<C> {
    upstream: C,
    /// remaining budget
    left: usize,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.left > 0 && self.upstream.has_next()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        self.left -= 1;
        self.upstream.next()
    }
}
