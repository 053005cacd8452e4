use crate::cursor::{Cursor, IterCursor};
use crate::error::SequenceError;
use crate::Sequence;

/// [`FlatMap<S, F>`] replaces each element of `S` by the elements of the iterable `F` computes from it.
///
/// All elements of one inner iterable are produced before the next upstream element is pulled.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let repeated = sources::of(vec![1, 2, 3]).flat_map(|n| vec![n; n]);
///
/// assert_eq!(repeated.to(Vec::new()), vec![1, 2, 2, 3, 3, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct FlatMap<S, F> {
    sequence: S,
    transform: F,
}

impl<S, F> FlatMap<S, F> {
    pub fn new(sequence: S, transform: F) -> Self {
        FlatMap {
            sequence,
            transform,
        }
    }
}

impl<S, F, I> Sequence for FlatMap<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> I,
    I: IntoIterator,
{
    type Item = I::Item;

    type Cursor<'s> = FlatMapCursor<'s, S::Cursor<'s>, F, I>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        FlatMapCursor {
            upstream: self.sequence.cursor(),
            transform: &self.transform,
            inner: None,
        }
    }
}

/// The cursor of [`FlatMap`].
pub struct FlatMapCursor<'s, C, F, I: IntoIterator> {
    upstream: C,
    transform: &'s F,
    /// cursor over the iterable of the last upstream element
    inner: Option<IterCursor<I::IntoIter>>,
}

impl<C, F, I> Cursor for FlatMapCursor<'_, C, F, I>
where
    C: Cursor,
    F: Fn(C::Item) -> I,
    I: IntoIterator,
{
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        loop {
            if let Some(inner) = &mut self.inner {
                if inner.has_next() {
                    return true;
                }
            }
            match self.upstream.pull() {
                Some(x) => self.inner = Some(IterCursor::new((self.transform)(x).into_iter())),
                None => {
                    self.inner = None;
                    return false;
                }
            }
        }
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        match &mut self.inner {
            Some(inner) => inner.next(),
            None => Err(SequenceError::Exhausted),
        }
    }
}

/// [`Flatten<S>`] replaces each element of `S`, an iterable itself, by its elements.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let flat = sources::of(vec![vec![1], vec![], vec![2, 3]]).flatten();
///
/// assert_eq!(flat.to(Vec::new()), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Flatten<S> {
    sequence: S,
}

impl<S> Flatten<S> {
    pub fn new(sequence: S) -> Self {
        Flatten { sequence }
    }
}

impl<S> Sequence for Flatten<S>
where
    S: Sequence,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;

    type Cursor<'s> = FlattenCursor<S::Cursor<'s>>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        FlattenCursor {
            upstream: self.sequence.cursor(),
            inner: None,
        }
    }
}

/// The cursor of [`Flatten`].
pub struct FlattenCursor<C>
where
    C: Cursor,
    C::Item: IntoIterator,
{
    upstream: C,
    inner: Option<IterCursor<<C::Item as IntoIterator>::IntoIter>>,
}

impl<C> Cursor for FlattenCursor<C>
where
    C: Cursor,
    C::Item: IntoIterator,
{
    type Item = <C::Item as IntoIterator>::Item;

    fn has_next(&mut self) -> bool {
        loop {
            if let Some(inner) = &mut self.inner {
                if inner.has_next() {
                    return true;
                }
            }
            match self.upstream.pull() {
                Some(iterable) => self.inner = Some(IterCursor::new(iterable.into_iter())),
                None => {
                    self.inner = None;
                    return false;
                }
            }
        }
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        match &mut self.inner {
            Some(inner) => inner.next(),
            None => Err(SequenceError::Exhausted),
        }
    }
}
