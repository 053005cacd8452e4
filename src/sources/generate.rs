//! This module provides sequences whose elements are computed on demand by user functions.
//!
//! There are three configurations, each with its own type:
//! - [`Repeat`] calls a supplier for every element and never ends.
//! - [`Iterate`] starts with the supplier's value and applies a successor to the previous element, and never ends.
//! - [`Generate`] works like [`Iterate`] but ends before the first value failing a predicate.

use crate::cursor::{Cursor, Lookahead};
use crate::error::SequenceError;
use crate::Sequence;

/// [`Repeat<G>`] is the infinite sequence of the values of the supplier `G`.
#[derive(Debug, Clone)]
pub struct Repeat<G> {
    supplier: G,
}

/// Create an infinite sequence calling a supplier for each element.
/// - `supplier` computes the elements; it is called anew each time an element is pulled.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
/// use std::cell::Cell;
///
/// let ticks = Cell::new(0);
/// let clock = sources::generate(|| {
///     ticks.set(ticks.get() + 1);
///     ticks.get()
/// });
///
/// assert_eq!(clock.take(3).to(Vec::new()), vec![1, 2, 3]);
/// ```
pub fn generate<T, G>(supplier: G) -> Repeat<G>
where
    G: Fn() -> T,
{
    Repeat { supplier }
}

/// Create an infinite sequence of a certain constant.
/// - `x` is the constant.
///
/// # Examples
///
/// Creating an infinite sequence of `true`s:
///
/// ```
/// let trues = rseq::sources::constant(true);
/// ```
pub fn constant<T: Clone>(x: T) -> Repeat<impl Fn() -> T> {
    generate(move || x.clone())
}

impl<T, G> Sequence for Repeat<G>
where
    G: Fn() -> T,
{
    type Item = T;

    type Cursor<'s> = RepeatCursor<'s, G>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        RepeatCursor {
            supplier: &self.supplier,
        }
    }
}

/// The cursor of [`Repeat`].
pub struct RepeatCursor<'s, G> {
    supplier: &'s G,
}

impl<T, G> Cursor for RepeatCursor<'_, G>
where
    G: Fn() -> T,
{
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        true
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        Ok((self.supplier)())
    }
}

/// [`Iterate<G, N>`] is the infinite sequence starting with the value of the supplier `G` and continuing with the successor `N` of the previous element.
#[derive(Debug, Clone)]
pub struct Iterate<G, N> {
    supplier: G,
    successor: N,
}

/// Create an infinite sequence from a first element and a successor.
/// - `supplier` computes the first element.
/// - `successor` computes an element from the previous one.
///
/// The successor is applied when an element is pulled, not ahead of time.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let fibonacci = sources::iterate(|| (0u64, 1u64), |(a, b)| (*b, a + b)).map(|(a, _)| a);
///
/// assert_eq!(fibonacci.take(7).to(Vec::new()), vec![0, 1, 1, 2, 3, 5, 8]);
/// ```
pub fn iterate<T, G, N>(supplier: G, successor: N) -> Iterate<G, N>
where
    T: Clone,
    G: Fn() -> T,
    N: Fn(&T) -> T,
{
    Iterate {
        supplier,
        successor,
    }
}

impl<T, G, N> Sequence for Iterate<G, N>
where
    T: Clone,
    G: Fn() -> T,
    N: Fn(&T) -> T,
{
    type Item = T;

    type Cursor<'s> = IterateCursor<'s, G, N, T>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterateCursor {
            supplier: &self.supplier,
            successor: &self.successor,
            previous: None,
        }
    }
}

/// The cursor of [`Iterate`].
pub struct IterateCursor<'s, G, N, T> {
    supplier: &'s G,
    successor: &'s N,
    /// the element handed out last
    previous: Option<T>,
}

impl<T, G, N> Cursor for IterateCursor<'_, G, N, T>
where
    T: Clone,
    G: Fn() -> T,
    N: Fn(&T) -> T,
{
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        true
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        let x = match &self.previous {
            None => (self.supplier)(),
            Some(previous) => (self.successor)(previous),
        };
        self.previous = Some(x.clone());
        Ok(x)
    }
}

/// [`Generate<G, P, N>`] is the sequence starting with the value of the supplier `G` and continuing with the successor `N` of the previous element,
/// as long as the elements satisfy the predicate `P`.
#[derive(Debug, Clone)]
pub struct Generate<G, P, N> {
    supplier: G,
    predicate: P,
    successor: N,
}

/// Create a sequence from a first element and a successor which ends before the first element failing a predicate.
/// - `supplier` computes the first element.
/// - `predicate` decides whether an element still belongs to the sequence.
/// - `successor` computes an element from the previous one.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let below_three = sources::generate_while(|| 0, |x| *x < 3, |x| x + 1);
///
/// assert_eq!(below_three.to(Vec::new()), vec![0, 1, 2]);
/// ```
pub fn generate_while<T, G, P, N>(supplier: G, predicate: P, successor: N) -> Generate<G, P, N>
where
    T: Clone,
    G: Fn() -> T,
    P: Fn(&T) -> bool,
    N: Fn(&T) -> T,
{
    Generate {
        supplier,
        predicate,
        successor,
    }
}

impl<T, G, P, N> Sequence for Generate<G, P, N>
where
    T: Clone,
    G: Fn() -> T,
    P: Fn(&T) -> bool,
    N: Fn(&T) -> T,
{
    type Item = T;

    type Cursor<'s> = GenerateCursor<'s, G, P, N, T>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        GenerateCursor {
            supplier: &self.supplier,
            predicate: &self.predicate,
            successor: &self.successor,
            previous: None,
            lookahead: Lookahead::Pending,
        }
    }
}

/// The cursor of [`Generate`].
///
/// The next candidate is computed and tested once, when it is first asked for;
/// after the first candidate failing the predicate the cursor stays exhausted.
pub struct GenerateCursor<'s, G, P, N, T> {
    supplier: &'s G,
    predicate: &'s P,
    successor: &'s N,
    /// the element handed out last
    previous: Option<T>,
    lookahead: Lookahead<T>,
}

impl<T, G, P, N> Cursor for GenerateCursor<'_, G, P, N, T>
where
    T: Clone,
    G: Fn() -> T,
    P: Fn(&T) -> bool,
    N: Fn(&T) -> T,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        if let Lookahead::Pending = self.lookahead {
            let candidate = match &self.previous {
                None => (self.supplier)(),
                Some(previous) => (self.successor)(previous),
            };
            self.lookahead = if (self.predicate)(&candidate) {
                Lookahead::Ready(candidate)
            } else {
                Lookahead::Exhausted
            };
        }
        self.lookahead.is_ready()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        self.has_next();
        let x = self.lookahead.take()?;
        self.previous = Some(x.clone());
        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{assert_exhausted, assert_starts_with, assert_yields};

    use core::cell::Cell;

    #[test]
    fn test_generate() {
        let calls = Cell::new(0);
        let sequence = generate(|| {
            calls.set(calls.get() + 1);
            calls.get() * 10
        });

        let mut cursor = sequence.cursor();
        assert!(cursor.has_next());
        assert_eq!(calls.get(), 0);
        assert_eq!(cursor.next(), Ok(10));
        assert_eq!(cursor.next(), Ok(20));
        assert!(cursor.has_next());
    }

    #[test]
    fn test_constant() {
        assert_starts_with!(constant('z'), ['z', 'z', 'z']);
    }

    #[test]
    fn test_iterate() {
        let sequence = iterate(|| 1u32, |n| n * 3);

        assert_starts_with!(sequence, [1, 3, 9, 27]);
        assert_starts_with!(sequence, [1, 3]);
    }

    #[test]
    fn test_iterate_is_lazy() {
        let successions = Cell::new(0);
        let sequence = iterate(
            || 0,
            |n| {
                successions.set(successions.get() + 1);
                n + 1
            },
        );

        let mut cursor = sequence.cursor();
        assert_eq!(cursor.next(), Ok(0));
        assert_eq!(successions.get(), 0);
        assert_eq!(cursor.next(), Ok(1));
        assert_eq!(successions.get(), 1);
    }

    #[test]
    fn test_generate_while() {
        let sequence = generate_while(|| 0, |x| *x < 3, |x| x + 1);

        assert_yields!(sequence, [0, 1, 2]);
        assert_yields!(sequence, [0, 1, 2]);
    }

    #[test]
    fn test_generate_while_first_fails() {
        let sequence = generate_while(|| 5, |x| *x < 3, |x| x + 1);

        let mut cursor = sequence.cursor();
        assert_exhausted!(cursor);
    }

    #[test]
    fn test_generate_while_evaluates_once() {
        let tests = Cell::new(0);
        let successions = Cell::new(0);
        let sequence = generate_while(
            || 0,
            |x| {
                tests.set(tests.get() + 1);
                *x < 2
            },
            |x| {
                successions.set(successions.get() + 1);
                x + 1
            },
        );

        let mut cursor = sequence.cursor();
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!((tests.get(), successions.get()), (1, 0));

        assert_eq!(cursor.next(), Ok(0));
        assert_eq!(cursor.next(), Ok(1));
        assert_eq!((tests.get(), successions.get()), (2, 1));

        assert!(!cursor.has_next());
        assert!(!cursor.has_next());
        assert_exhausted!(cursor);
        assert_eq!((tests.get(), successions.get()), (3, 2));
    }
}
