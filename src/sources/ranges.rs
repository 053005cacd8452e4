//! This module provides half-open ranges `[begin, end)` stepping from one value to the next with a successor function.
//!
//! The end is compared with [`PartialOrd`], so a range whose successor never gets past `end` is infinite
//! and a range whose `begin` is not below `end` is empty.
//! A successor returning `None` ends the range, which is how the numeric ranges stop at the bounds of their type.

use crate::cursor::Cursor;
use crate::error::{require, SequenceError};
use crate::Sequence;

use core::ops::Add;
use num_traits::{CheckedAdd, Zero};

/// [`Range<T, F>`] yields `begin`, `F(begin)`, `F(F(begin))`, ... as long as the values exist and are below `end`.
#[derive(Debug, Clone)]
pub struct Range<T, F> {
    begin: T,
    end: T,
    successor: F,
}

/// Create a range with a custom successor.
/// - `begin` is the first value (if it is below `end`).
/// - `end` is the exclusive bound.
/// - `successor` computes a value from the previous one, or `None` if there is none.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let powers = sources::range_with(1u8, 255, |n| n.checked_mul(3));
///
/// assert_eq!(powers.to(Vec::new()), vec![1, 3, 9, 27, 81, 243]);
/// ```
pub fn range_with<T, F>(begin: T, end: T, successor: F) -> Range<T, F>
where
    T: PartialOrd + Clone,
    F: Fn(&T) -> Option<T>,
{
    Range {
        begin,
        end,
        successor,
    }
}

/// Create the range of the numbers from `begin` (inclusive) to `end` (exclusive) in steps of one.
/// - `begin` is the first number.
/// - `end` is the exclusive bound.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// assert_eq!(sources::range(-1, 3).to(Vec::new()), vec![-1, 0, 1, 2]);
/// assert_eq!(sources::range(3, 3).count(), 0);
/// ```
pub fn range<T>(begin: T, end: T) -> Range<T, impl Fn(&T) -> Option<T>>
where
    T: Copy + PartialOrd + Add<Output = T> + From<bool>,
{
    // Every value handed out is below `end`, so its successor does not overflow.
    range_with(begin, end, |x: &T| Some(*x + T::from(true)))
}

/// Create the range of the numbers from `begin` (inclusive) to `end` (exclusive) in steps of a given size.
/// - `begin` is the first number.
/// - `end` is the exclusive bound.
/// - `step` is the distance between two numbers.
///
/// The range also ends where the next number would overflow `T`.
///
/// # Errors
///
/// [`SequenceError::Precondition`] if `step` is not positive.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let evens = sources::range_step(0, 10, 2)?;
///
/// assert_eq!(evens.to(Vec::new()), vec![0, 2, 4, 6, 8]);
/// assert_eq!(sources::range_step(200u8, 255, 50)?.to(Vec::new()), vec![200, 250]);
/// assert!(sources::range_step(0, 10, 0).is_err());
/// # Ok::<(), rseq::SequenceError>(())
/// ```
pub fn range_step<T>(
    begin: T,
    end: T,
    step: T,
) -> Result<Range<T, impl Fn(&T) -> Option<T>>, SequenceError>
where
    T: Copy + PartialOrd + CheckedAdd + Zero,
{
    require(step > T::zero(), "step > 0")?;
    Ok(range_with(begin, end, move |x: &T| x.checked_add(&step)))
}

/// Create the range of the characters from `begin` (inclusive) to `end` (exclusive).
/// - `begin` is the first character.
/// - `end` is the exclusive bound.
///
/// Code points which are not characters (the surrogates) are skipped.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// assert_eq!(sources::char_range('a', 'f').to(String::new()), "abcde");
/// ```
pub fn char_range(begin: char, end: char) -> Range<char, impl Fn(&char) -> Option<char>> {
    range_with(begin, end, |c: &char| match *c as u32 + 1 {
        0xD800 => Some('\u{E000}'),
        n => char::from_u32(n),
    })
}

impl<T, F> Sequence for Range<T, F>
where
    T: PartialOrd + Clone,
    F: Fn(&T) -> Option<T>,
{
    type Item = T;

    type Cursor<'s> = RangeCursor<'s, T, F>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        RangeCursor {
            current: Some(self.begin.clone()),
            end: &self.end,
            successor: &self.successor,
        }
    }
}

/// The cursor of [`Range`].
pub struct RangeCursor<'s, T, F> {
    /// `None` once the successor gave up
    current: Option<T>,
    end: &'s T,
    successor: &'s F,
}

impl<T, F> Cursor for RangeCursor<'_, T, F>
where
    T: PartialOrd,
    F: Fn(&T) -> Option<T>,
{
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        matches!(&self.current, Some(x) if x < self.end)
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        let x = self.current.take().ok_or(SequenceError::Exhausted)?;
        self.current = (self.successor)(&x);
        Ok(x)
    }
}
