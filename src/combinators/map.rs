use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::Sequence;

/// [`Map<S, F>`] applies a function to each element of `S`.
///
/// The function is applied when an element is pulled, so it runs once per pulled element and not at all for elements never pulled.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let lengths = sources::of(vec!["a", "bcd", "ef"]).map(str::len);
///
/// assert_eq!(lengths.to(Vec::new()), vec![1, 3, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    sequence: S,
    transform: F,
}

impl<S, F> Map<S, F> {
    pub fn new(sequence: S, transform: F) -> Self {
        Map {
            sequence,
            transform,
        }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    type Cursor<'s> = MapCursor<'s, S::Cursor<'s>, F>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        MapCursor {
            upstream: self.sequence.cursor(),
            transform: &self.transform,
        }
    }
}

/// The cursor of [`Map`]; it buffers nothing.
pub struct MapCursor<'s, C, F> {
    upstream: C,
    transform: &'s F,
}

impl<C, F, U> Cursor for MapCursor<'_, C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        self.upstream.next().map(self.transform)
    }
}

/// [`OnEach<S, F>`] passes the elements of `S` through unchanged, showing each to an action as it is pulled.
#[derive(Debug, Clone)]
pub struct OnEach<S, F> {
    sequence: S,
    action: F,
}

impl<S, F> OnEach<S, F> {
    pub fn new(sequence: S, action: F) -> Self {
        OnEach { sequence, action }
    }
}

impl<S, F> Sequence for OnEach<S, F>
where
    S: Sequence,
    F: Fn(&S::Item),
{
    type Item = S::Item;

    type Cursor<'s> = OnEachCursor<'s, S::Cursor<'s>, F>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        OnEachCursor {
            upstream: self.sequence.cursor(),
            action: &self.action,
        }
    }
}

/// The cursor of [`OnEach`].
pub struct OnEachCursor<'s, C, F> {
    upstream: C,
    action: &'s F,
}

impl<C, F> Cursor for OnEachCursor<'_, C, F>
where
    C: Cursor,
    F: Fn(&C::Item),
{
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        let x = self.upstream.next()?;
        (self.action)(&x);
        Ok(x)
    }
}
