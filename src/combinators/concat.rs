use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::Sequence;

/// [`Concat<S, O>`] produces all elements of `S` followed by all elements of `O`.
///
/// The cursor of `O` is only created once `S` is exhausted, so a single-use `O` is left alone by traversals which stop early.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let numbers = sources::of(vec![1, 2]).concat(sources::of(vec![3, 4]));
///
/// assert_eq!(numbers.to(Vec::new()), vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Concat<S, O> {
    sequence: S,
    other: O,
}

impl<S, O> Concat<S, O> {
    pub fn new(sequence: S, other: O) -> Self {
        Concat { sequence, other }
    }
}

impl<S, O> Sequence for Concat<S, O>
where
    S: Sequence,
    O: Sequence<Item = S::Item>,
{
    type Item = S::Item;

    type Cursor<'s> = ConcatCursor<'s, S::Cursor<'s>, O>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        ConcatCursor {
            first: self.sequence.cursor(),
            other: &self.other,
            second: None,
        }
    }
}

/// The cursor of [`Concat`].
pub struct ConcatCursor<'s, C, O: Sequence + 's> {
    first: C,
    other: &'s O,
    /// cursor of `other`, created on first need
    second: Option<O::Cursor<'s>>,
}

impl<'s, C, O> Cursor for ConcatCursor<'s, C, O>
where
    C: Cursor,
    O: Sequence<Item = C::Item> + 's,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        if self.first.has_next() {
            return true;
        }
        let other = self.other;
        self.second.get_or_insert_with(|| other.cursor()).has_next()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        if self.first.has_next() {
            return self.first.next();
        }
        let other = self.other;
        self.second.get_or_insert_with(|| other.cursor()).next()
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
    fn test_concat() {
        let sequence = sources::of(vec![1, 2]).concat(sources::of(vec![3, 4]));

        assert_yields!(sequence, [1, 2, 3, 4]);
        assert_yields!(sequence, [1, 2, 3, 4]);
    }

    #[test]
    fn test_concat_empty_sides() {
        assert_yields!(sources::empty().concat(sources::single(1)), [1]);
        assert_yields!(sources::single(1).concat(sources::empty()), [1]);

        let nothing = sources::empty::<u8>().concat(sources::empty());
        let mut cursor = nothing.cursor();
        assert_exhausted!(cursor);
    }

    #[test]
    fn test_concat_second_is_lazy() {
        let touched = Cell::new(false);
        let second = sources::single(9).on_each(|_| touched.set(true));
        let sequence = sources::of(vec![1, 2]).concat(second);

        assert_eq!(sequence.take(2).to(Vec::new()), vec![1, 2]);
        assert!(!touched.get());
    }

    #[test]
    fn test_concat_single_use_second() {
        let sequence = sources::chars("ab").concat(sources::from_iter("cd".chars()));

        let mut cursor = sequence.cursor();
        assert_eq!(cursor.next(), Ok('a'));
        drop(cursor);

        assert_yields!(sequence, ['a', 'b', 'c', 'd']);
        assert_yields!(sequence, ['a', 'b']);
    }
}
