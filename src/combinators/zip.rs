use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::Sequence;

/// [`Zip<S, O, F>`] combines the elements of `S` and `O` at equal positions with `F`.
///
/// The result ends as soon as either side ends; the rest of the longer side is dropped silently.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let pairs = sources::of(vec![1, 2, 3]).zip(sources::chars("ab"), |n, c| (n, c));
///
/// assert_eq!(pairs.to(Vec::new()), vec![(1, 'a'), (2, 'b')]);
/// ```
#[derive(Debug, Clone)]
pub struct Zip<S, O, F> {
    sequence: S,
    other: O,
    combiner: F,
}

impl<S, O, F> Zip<S, O, F> {
    pub fn new(sequence: S, other: O, combiner: F) -> Self {
        Zip {
            sequence,
            other,
            combiner,
        }
    }
}

impl<S, O, F, R> Sequence for Zip<S, O, F>
where
    S: Sequence,
    O: Sequence,
    F: Fn(S::Item, O::Item) -> R,
{
    type Item = R;

    type Cursor<'s> = ZipCursor<'s, S::Cursor<'s>, O::Cursor<'s>, F>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        ZipCursor {
            left: self.sequence.cursor(),
            right: self.other.cursor(),
            combiner: &self.combiner,
        }
    }
}

/// The cursor of [`Zip`].
pub struct ZipCursor<'s, C, D, F> {
    left: C,
    right: D,
    combiner: &'s F,
}

impl<C, D, F, R> Cursor for ZipCursor<'_, C, D, F>
where
    C: Cursor,
    D: Cursor,
    F: Fn(C::Item, D::Item) -> R,
{
    type Item = R;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.left.has_next() && self.right.has_next()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        let x = self.left.next()?;
        let y = self.right.next()?;
        Ok((self.combiner)(x, y))
    }
}
