use crate::cursor::{Cursor, Lookahead};
use crate::error::SequenceError;
use crate::Sequence;

/// [`Filter<S, P>`] keeps the elements of `S` satisfying the predicate `P`.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let is_greater_zero = |n: &i32| *n > 0;
///
/// let positives = sources::of(vec![0, 1, -1, 2]).filter(is_greater_zero);
///
/// assert_eq!(positives.to(Vec::new()), vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    sequence: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub fn new(sequence: S, predicate: P) -> Self {
        Filter {
            sequence,
            predicate,
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    type Cursor<'s> = FilterCursor<'s, S::Cursor<'s>, P>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterCursor {
            upstream: self.sequence.cursor(),
            predicate: &self.predicate,
            lookahead: Lookahead::Pending,
        }
    }
}

/// The cursor of [`Filter`].
///
/// Asking for the next element searches upstream for a match and caches it,
/// so the predicate is tested exactly once per upstream element.
pub struct FilterCursor<'s, C: Cursor, P> {
    upstream: C,
    predicate: &'s P,
    lookahead: Lookahead<C::Item>,
}

impl<C, P> Cursor for FilterCursor<'_, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        if let Lookahead::Pending = self.lookahead {
            self.lookahead = Lookahead::Exhausted;
            while let Some(x) = self.upstream.pull() {
                if (self.predicate)(&x) {
                    self.lookahead = Lookahead::Ready(x);
                    break;
                }
            }
        }
        self.lookahead.is_ready()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        self.has_next();
        self.lookahead.take()
    }
}
