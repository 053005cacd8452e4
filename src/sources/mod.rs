//! This module provides the sources sequences start from.
//! Each submodule implements one kind of source and its constructors are re-exported here.
//!
//! All sources are restartable (every traversal starts over from the first element) except
//! [`from_iter`] and [`from_receiver`], which wrap something that can be consumed only once.

mod arrays;
pub use arrays::{from_slice, of, Array, ArrayCursor, Slice, SliceCursor};

mod chars;
pub use chars::{chars, Chars, CharsCursor};

mod generate;
pub use generate::{
    constant, generate, generate_while, iterate, Generate, GenerateCursor, Iterate,
    IterateCursor, Repeat, RepeatCursor,
};

mod iterables;
pub use iterables::{from_iter, from_iterable, FromIter, FromIterable};

mod ranges;
pub use ranges::{char_range, range, range_step, range_with, Range, RangeCursor};

#[cfg(feature = "std")]
mod receivers;
#[cfg(feature = "std")]
pub use receivers::{from_receiver, Receive};

mod singles;
pub use singles::{empty, maybe, single, Empty, EmptyCursor, Maybe, MaybeCursor};

use crate::combinators::Flatten;
use crate::Sequence;

/// Create the sequence of the elements of the iterables in a sequence, one iterable after the other.
/// - `sequence` is the sequence of iterables.
///
/// This is the same as [`Sequence::flatten`].
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let words = sources::of(vec!["ab", "", "c"]).map(str::chars);
///
/// assert_eq!(sources::flatten(words).to(String::new()), "abc");
/// ```
pub fn flatten<S>(sequence: S) -> Flatten<S>
where
    S: Sequence,
    S::Item: IntoIterator,
{
    Flatten::new(sequence)
}
