use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::Sequence;

/// [`Skip<S>`] leaves out a fixed number of elements from the front of `S`.
///
/// The elements are discarded lazily, when the cursor is first asked for something,
/// and not when the sequence or the cursor is created.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let tail = sources::chars("hello").skip(3);
///
/// assert_eq!(tail.to(String::new()), "lo");
/// ```
#[derive(Debug, Clone)]
pub struct Skip<S> {
    sequence: S,
    count: usize,
}

impl<S> Skip<S> {
    pub fn new(sequence: S, count: usize) -> Self {
        Skip { sequence, count }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    type Cursor<'s> = SkipCursor<S::Cursor<'s>>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        SkipCursor {
            upstream: self.sequence.cursor(),
            left: self.count,
        }
    }
}

/// The cursor of [`Skip`].
pub struct SkipCursor<C> {
    upstream: C,
    /// elements still to be discarded
    left: usize,
}

impl<C: Cursor> SkipCursor<C> {
    fn discard(&mut self) {
        while self.left > 0 && self.upstream.pull().is_some() {
            self.left -= 1;
        }
        self.left = 0;
    }
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.discard();
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        self.discard();
        self.upstream.next()
    }
}

#[cfg(test)]
mod tests {
    use crate::sources;
    use crate::{assert_exhausted, assert_yields};
    use crate::{Cursor, Sequence};

    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[test]
    fn test_skip() {
        let numbers = sources::of(vec![1, 2, 3]);

        assert_yields!(numbers.by_ref().skip(0), [1, 2, 3]);
        assert_yields!(numbers.by_ref().skip(2), [3]);
        assert_yields!(numbers.by_ref().skip(3), []);
        assert_yields!(numbers.by_ref().skip(9), []);
    }

    #[test]
    fn test_skip_is_lazy() {
        let pulled = Cell::new(0);
        let sequence = sources::range(0, 10).on_each(|_| pulled.set(pulled.get() + 1)).skip(4);

        let mut cursor = sequence.cursor();
        assert_eq!(pulled.get(), 0);

        assert!(cursor.has_next());
        assert_eq!(pulled.get(), 4);
        assert_eq!(cursor.next(), Ok(4));
        assert_eq!(pulled.get(), 5);
    }

    #[test]
    fn test_skip_exhausted() {
        let sequence = sources::range(0, 2).skip(5);

        let mut cursor = sequence.cursor();
        assert_exhausted!(cursor);
    }

    #[test]
    fn test_take_then_skip_partition() {
        let numbers = sources::chars("partition");

        for n in 0..=numbers.count() {
            let mut front: Vec<char> = numbers.by_ref().take(n).to(Vec::new());
            let back: Vec<char> = numbers.by_ref().skip(n).to(Vec::new());
            front.extend(back);
            assert_eq!(front, numbers.to(Vec::new()));
        }
    }
}
