//! rseq is a library of lazy sequences: restartable, possibly infinite sources of elements on which transformation stages can be layered without ever materializing intermediate collections.
//!
//! ## Design
//!
//! The idea of this library is to split a sequence into two parts:
//! One part describing *what* is traversed (the [`Sequence`]), which is an immutable value.
//! Another part doing the traversal (the [`Cursor`]), which holds all the state of a single pass.
//! A sequence is nothing but a factory of cursors, so nothing is computed until a cursor is created and advanced,
//! and every traversal starts over from the beginning with a cursor of its own.
//!
//! The following graphic illustrates how the cursors of a pipeline pull on demand (whereas a textual description is contained in the docs of [`Sequence`] and [`Cursor`]):
//!
//! <pre>
//! source            stage                stage               caller
//! ------            -----                -----               ------
//!
//! [1, 2, 3, 4]  <-- Filter(even)   <--   Map(x * 10)   <--   next()?
//!     |                 |                    |
//!     | 1 (rejected)    |                    |
//!     | 2 ------------> | 2 ---------------> | 20 ---------> 20
//!     |                 |                    |
//!    ...               ...                  ...
//! </pre>
//!
//! ## Usage
//!
//! To build a sequence you start from one of the sources in the [`sources`]-module and chain stages like
//! [`map`](Sequence::map), [`filter`](Sequence::filter) or [`zip`](Sequence::zip) onto it (the stages live in the [`combinators`]-module).
//! The result is consumed by terminal operations like [`fold`](Sequence::fold), [`first`](Sequence::first) or [`to`](Sequence::to),
//! or traversed by hand with a [`cursor`](Sequence::cursor).
//! Because terminal operations only borrow the sequence, it can be traversed as often as one likes,
//! provided its source is restartable (all sources but [`from_iter`](sources::from_iter) and [`from_receiver`](sources::from_receiver) are).
//! To keep a sequence around while building a pipeline over it, build the pipeline over a reference (see [`by_ref`](Sequence::by_ref)).
//!
//! Besides sequences the crate provides a persistent [`cons`]-list, [`observable`]-values reporting their changes and (with feature `std`) a thread-safe [`lazy`]-value.
//!
//! # Examples
//!
//! Squares of the odd numbers below ten, traversed twice:
//!
//! ```
//! use rseq::sources;
//! use rseq::Sequence;
//!
//! let odd_squares = sources::range(0, 10).filter(|n| n % 2 == 1).map(|n| n * n);
//!
//! assert_eq!(odd_squares.to(Vec::new()), vec![1, 9, 25, 49, 81]);
//! assert_eq!(odd_squares.fold(0, |acc, n| acc + n), 165);
//! ```
//!
//! The Collatz sequence of 6, an example of a sequence generated on demand:
//!
//! ```
//! use rseq::sources;
//! use rseq::Sequence;
//!
//! let collatz = sources::generate_while(
//!     || 6u64,
//!     |n| *n != 1,
//!     |n| if n % 2 == 0 { n / 2 } else { 3 * n + 1 },
//! );
//!
//! assert_eq!(collatz.display().to_string(), "(6, 3, 10, 5, 16, 8, 4, 2)");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod combinators;

pub mod cons;

pub mod cursor;

pub mod error;

#[cfg(feature = "std")]
pub mod lazy;

pub mod observable;

pub mod sources;

pub use cursor::Cursor;
pub use error::SequenceError;

use combinators::{Chunk, Concat, Filter, FlatMap, Flatten, Map, OnEach, Skip, Take, Zip};
use cursor::Iter;

use core::fmt;

/// [`Sequence`] characterizes values which can be traversed (possibly infinitely often) by cursors over elements of type [`Item`](Sequence::Item).
///
/// An implementation only has to say how to create a fresh cursor.
/// The stages (which consume `self` and return a new sequence) and the terminal operations (which borrow `self` and traverse it once) come for free.
///
/// Implementations must not keep traversal state in the sequence itself: two cursors of the same sequence are independent of each other.
pub trait Sequence {
    /// The type of the elements.
    type Item;

    /// The type of the cursors, which may borrow from the sequence.
    type Cursor<'s>: Cursor<Item = Self::Item>
    where
        Self: 's;

    /// Create a cursor positioned before the first element.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Borrow `self` such that stages can be chained without giving the sequence away.
    ///
    /// # Examples
    ///
    /// ```
    /// use rseq::sources;
    /// use rseq::Sequence;
    ///
    /// let numbers = sources::of(vec![1, 2, 3]);
    /// let doubled = numbers.by_ref().map(|n| n * 2);
    ///
    /// assert_eq!(doubled.to(Vec::new()), vec![2, 4, 6]);
    /// assert_eq!(numbers.count(), 3);
    /// ```
    #[inline]
    fn by_ref(&self) -> &Self {
        self
    }

    /// Traverse `self` through the [`Iterator`]-interface.
    #[inline]
    fn iter(&self) -> Iter<Self::Cursor<'_>> {
        Iter::new(self.cursor())
    }

    /// Count the elements of one full traversal.
    ///
    /// The traversal does not terminate for infinite sequences.
    fn count(&self) -> usize {
        let mut cursor = self.cursor();
        let mut count = 0;
        while cursor.pull().is_some() {
            count += 1;
        }
        count
    }

    /// Count the elements satisfying a predicate.
    /// - `predicate` decides which elements count.
    fn count_by<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut cursor = self.cursor();
        let mut count = 0;
        while let Some(x) = cursor.pull() {
            if predicate(&x) {
                count += 1;
            }
        }
        count
    }

    /// Combine the elements from left to right starting with an initial value.
    /// - `init` is the initial value.
    /// - `op` combines the intermediate result with the next element.
    fn fold<R, F>(&self, init: R, op: F) -> R
    where
        F: FnMut(R, Self::Item) -> R,
    {
        self.iter().fold(init, op)
    }

    /// Combine the elements from left to right starting with the first element.
    /// - `op` combines the intermediate result with the next element.
    ///
    /// A single element is returned as is without invoking `op`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if there are no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use rseq::sources;
    /// use rseq::{Sequence, SequenceError};
    ///
    /// assert_eq!(sources::of(vec![1, 2, 3]).reduce(|a, b| a * 10 + b), Ok(123));
    /// assert_eq!(sources::empty::<u8>().reduce(|a, b| a + b), Err(SequenceError::Empty));
    /// ```
    fn reduce<F>(&self, op: F) -> Result<Self::Item, SequenceError>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut iter = self.iter();
        let first = iter.next().ok_or(SequenceError::Empty)?;
        Ok(iter.fold(first, op))
    }

    /// Get the first element, if any.
    #[inline]
    fn first(&self) -> Option<Self::Item> {
        self.cursor().pull()
    }

    /// Get the last element, if any.
    fn last(&self) -> Option<Self::Item> {
        self.iter().last()
    }

    /// Get the element at a position, if there are enough elements.
    /// - `index` is the zero-based position.
    fn nth(&self, index: usize) -> Option<Self::Item> {
        self.iter().nth(index)
    }

    /// Traverse `self` once, handing every element to an action.
    /// - `action` is invoked on each element in order.
    fn foreach<F>(&self, action: F)
    where
        F: FnMut(Self::Item),
    {
        self.iter().for_each(action);
    }

    /// Traverse `self` once, appending every element to a collection which is returned afterwards.
    /// - `collection` is the collection to extend.
    ///
    /// # Examples
    ///
    /// ```
    /// use rseq::sources;
    /// use rseq::Sequence;
    ///
    /// let letters = sources::chars("cab").to(std::collections::BTreeSet::new());
    ///
    /// assert_eq!(letters.into_iter().collect::<String>(), "abc");
    /// ```
    fn to<C>(&self, mut collection: C) -> C
    where
        C: Extend<Self::Item>,
    {
        collection.extend(self.iter());
        collection
    }

    /// Render `self` as a parenthesized, comma separated list like `(1, 2, 3)`.
    ///
    /// Formatting traverses `self` once; it does not terminate for infinite sequences.
    #[inline]
    fn display(&self) -> Show<'_, Self> {
        Show { sequence: self }
    }

    /// Apply a function to each element.
    /// - `transform` is the function.
    #[inline]
    fn map<U, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, transform)
    }

    /// Observe each element when it is pulled, leaving the elements untouched.
    /// - `action` is invoked once per pulled element, in pull order.
    #[inline]
    fn on_each<F>(self, action: F) -> OnEach<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item),
    {
        OnEach::new(self, action)
    }

    /// Keep only the elements satisfying a predicate.
    /// - `predicate` decides which elements are kept.
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Replace each element by the elements of an iterable computed from it.
    /// - `transform` computes the iterable.
    #[inline]
    fn flat_map<I, F>(self, transform: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        I: IntoIterator,
        F: Fn(Self::Item) -> I,
    {
        FlatMap::new(self, transform)
    }

    /// Replace each element, an iterable itself, by its elements.
    #[inline]
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: IntoIterator,
    {
        Flatten::new(self)
    }

    /// Keep at most a given number of elements from the front.
    /// - `n` is the number of elements to keep.
    #[inline]
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Leave out a given number of elements from the front.
    /// - `n` is the number of elements to leave out.
    #[inline]
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Group consecutive elements into vectors of a given size; the last one may be shorter.
    /// - `size` is the size of the groups.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Precondition`] if `size` is zero.
    #[inline]
    fn chunk(self, size: usize) -> Result<Chunk<Self>, SequenceError>
    where
        Self: Sized,
    {
        Chunk::new(self, size)
    }

    /// Append the elements of another sequence.
    /// - `other` is the sequence traversed after `self`.
    #[inline]
    fn concat<O>(self, other: O) -> Concat<Self, O>
    where
        Self: Sized,
        O: Sequence<Item = Self::Item>,
    {
        Concat::new(self, other)
    }

    /// Combine the elements of `self` and another sequence position by position.
    /// - `other` is the other sequence.
    /// - `combiner` combines two elements at the same position.
    ///
    /// The result is as long as the shorter of both sequences.
    #[inline]
    fn zip<O, R, F>(self, other: O, combiner: F) -> Zip<Self, O, F>
    where
        Self: Sized,
        O: Sequence,
        F: Fn(Self::Item, O::Item) -> R,
    {
        Zip::new(self, other, combiner)
    }
}

impl<S: Sequence> Sequence for &S {
    type Item = S::Item;

    type Cursor<'s> = S::Cursor<'s>
    where
        Self: 's;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        S::cursor(self)
    }
}

/// [`Show`] renders a sequence with [`Display`](fmt::Display), see [`Sequence::display`].
pub struct Show<'a, S: ?Sized> {
    sequence: &'a S,
}

impl<S> fmt::Display for Show<'_, S>
where
    S: Sequence + ?Sized,
    S::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        let mut cursor = self.sequence.cursor();
        if let Some(x) = cursor.pull() {
            write!(f, "{}", x)?;
            while let Some(x) = cursor.pull() {
                write!(f, ", {}", x)?;
            }
        }
        f.write_str(")")
    }
}

#[doc(hidden)]
pub mod __private {
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

/// Assert that one full traversal of a sequence yields exactly the given elements.
///
/// # Examples
///
/// ```
/// use rseq::assert_yields;
/// use rseq::sources;
///
/// assert_yields!(sources::chars("ab"), ['a', 'b']);
/// assert_yields!(sources::empty::<char>(), []);
/// ```
#[macro_export]
macro_rules! assert_yields {
    ($sequence:expr, []) => {
        assert_eq!($crate::Sequence::count(&$sequence), 0);
    };
    ($sequence:expr, [$($x:expr),+ $(,)?]) => {
        assert_eq!(
            ::core::iter::Iterator::collect::<$crate::__private::Vec<_>>(
                $crate::Sequence::iter(&$sequence)
            ),
            $crate::__private::vec![$($x),+]
        );
    };
}

/// Assert that a (possibly infinite) sequence starts with the given elements.
///
/// # Examples
///
/// ```
/// use rseq::assert_starts_with;
/// use rseq::sources;
///
/// assert_starts_with!(sources::generate(|| 7), [7, 7, 7]);
/// ```
#[macro_export]
macro_rules! assert_starts_with {
    ($sequence:expr, [$($x:expr),+ $(,)?]) => {
        let expected = $crate::__private::vec![$($x),+];
        let actual: $crate::__private::Vec<_> = ::core::iter::Iterator::take(
            $crate::Sequence::iter(&$sequence),
            expected.len(),
        )
        .collect();
        assert_eq!(actual, expected);
    };
}

/// Assert that a cursor has no elements left, neither by [`has_next`](Cursor::has_next) nor by [`next`](Cursor::next).
#[macro_export]
macro_rules! assert_exhausted {
    ($cursor:expr) => {
        assert!(!$crate::Cursor::has_next(&mut $cursor));
        assert_eq!(
            $crate::Cursor::next(&mut $cursor),
            Err($crate::SequenceError::Exhausted)
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[test]
    fn test_count() {
        let numbers = sources::of(vec![1, 2, 3, 4]);
        assert_eq!(numbers.count(), 4);
        assert_eq!(numbers.count_by(|n| n % 2 == 0), 2);
        assert_eq!(sources::empty::<u8>().count(), 0);
    }

    #[test]
    fn test_fold() {
        let numbers = sources::of(vec![1, 2, 3]);
        let digits = numbers.fold(Vec::new(), |mut acc, n| {
            acc.push(n);
            acc
        });
        assert_eq!(digits, vec![1, 2, 3]);
        assert_eq!(sources::empty::<u8>().fold(9, |acc, _| acc + 1), 9);
    }

    #[test]
    fn test_reduce() {
        assert_eq!(sources::empty::<u8>().reduce(|a, b| a + b), Err(SequenceError::Empty));

        let calls = Cell::new(0);
        let single = sources::single(5).reduce(|a, b| {
            calls.set(calls.get() + 1);
            a + b
        });
        assert_eq!(single, Ok(5));
        assert_eq!(calls.get(), 0);

        assert_eq!(sources::of(vec![1, 2, 3]).reduce(|a, b| a - b), Ok(-4));
    }

    #[test]
    fn test_first_last_nth() {
        let empty = sources::empty::<u8>();
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
        assert_eq!(empty.nth(0), None);

        let numbers = sources::of(vec![7, 8, 9]);
        assert_eq!(numbers.first(), Some(7));
        assert_eq!(numbers.last(), Some(9));
        assert_eq!(numbers.nth(1), Some(8));
        assert_eq!(numbers.nth(3), None);
    }

    #[test]
    fn test_first_on_infinite() {
        assert_eq!(sources::iterate(|| 1u64, |n| n * 2).first(), Some(1));
        assert_eq!(sources::iterate(|| 1u64, |n| n * 2).nth(10), Some(1024));
    }

    #[test]
    fn test_foreach() {
        let mut seen = Vec::new();
        sources::chars("xyz").foreach(|c| seen.push(c));
        assert_eq!(seen, vec!['x', 'y', 'z']);
    }

    #[test]
    fn test_to() {
        let numbers = sources::of(vec![3, 4]);
        assert_eq!(numbers.to(vec![1, 2]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_display() {
        assert_eq!(sources::of(vec![1, 2, 3]).display().to_string(), "(1, 2, 3)");
        assert_eq!(sources::single("a").display().to_string(), "(a)");
        assert_eq!(sources::empty::<u8>().display().to_string(), "()");
    }

    #[test]
    fn test_by_ref() {
        let numbers = sources::of(vec![1, 2, 3]);
        assert_yields!(numbers.by_ref().map(|n| n + 1), [2, 3, 4]);
        assert_yields!(numbers, [1, 2, 3]);
    }

    #[test]
    fn test_restartable() {
        let pipeline = sources::range(0, 6)
            .filter(|n| n % 2 == 0)
            .map(|n| n * 10)
            .zip(sources::chars("abc"), |n, c| (n, c));

        let first = pipeline.to(Vec::new());
        let second = pipeline.to(Vec::new());
        assert_eq!(first, vec![(0, 'a'), (20, 'b'), (40, 'c')]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_independent_cursors() {
        let numbers = sources::of(vec![1, 2, 3]);
        let mut c1 = numbers.cursor();
        let mut c2 = numbers.cursor();

        assert_eq!(c1.next(), Ok(1));
        assert_eq!(c1.next(), Ok(2));
        assert_eq!(c2.next(), Ok(1));
        assert_eq!(c1.next(), Ok(3));
        assert_exhausted!(c1);
        assert_eq!(c2.next(), Ok(2));
    }

    #[test]
    fn test_assert_yields_references() {
        let numbers = [4, 5];
        let borrowed = sources::from_slice(&numbers);

        assert_yields!(borrowed, [&4, &5]);
        assert_yields!(borrowed.by_ref().skip(2), []);
        assert_starts_with!(borrowed, [&4]);

        let words = vec![String::from("a")];
        assert_yields!(sources::from_iterable(&words), [&String::from("a")]);
    }

    #[test]
    fn test_on_each_is_lazy() {
        let seen = Cell::new(0);
        let observed = sources::of(vec![1, 2, 3]).on_each(|_| seen.set(seen.get() + 1));
        assert_eq!(seen.get(), 0);

        assert_eq!(observed.first(), Some(1));
        assert_eq!(seen.get(), 1);

        assert_yields!(observed, [1, 2, 3]);
        assert_eq!(seen.get(), 4);
    }
}
