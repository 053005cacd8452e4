//! This module provides sequences over in-memory arrays, either owned or borrowed.

use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::Sequence;

use alloc::vec::Vec;

/// [`Array<T>`] owns its elements and yields a clone of each.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Array<T> {
    elements: Vec<T>,
}

/// Create a sequence owning some elements.
/// - `elements` are the elements in order.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let numbers = sources::of(vec![3, 1, 2]);
///
/// assert_eq!(numbers.to(Vec::new()), vec![3, 1, 2]);
/// assert_eq!(numbers.to(Vec::new()), vec![3, 1, 2]);
/// ```
pub fn of<T: Clone>(elements: Vec<T>) -> Array<T> {
    Array { elements }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(elements: Vec<T>) -> Self {
        Array { elements }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> Sequence for Array<T> {
    type Item = T;

    type Cursor<'s> = ArrayCursor<'s, T>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        ArrayCursor {
            elements: SliceCursor::new(&self.elements),
        }
    }
}

/// The cursor of [`Array`].
pub struct ArrayCursor<'s, T> {
    elements: SliceCursor<'s, T>,
}

impl<T: Clone> Cursor for ArrayCursor<'_, T> {
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.elements.has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        self.elements.next().cloned()
    }
}

/// [`Slice<'a, T>`] borrows its elements and yields a reference to each.
#[derive(Debug)]
pub struct Slice<'a, T> {
    elements: &'a [T],
}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

/// Create a sequence borrowing some elements.
/// - `elements` are the elements in order.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let words = ["to", "be"];
///
/// assert_eq!(sources::from_slice(&words).map(|w| w.len()).fold(0, |a, b| a + b), 4);
/// ```
pub fn from_slice<T>(elements: &[T]) -> Slice<'_, T> {
    Slice { elements }
}

impl<'a, T> Sequence for Slice<'a, T> {
    type Item = &'a T;

    type Cursor<'s> = SliceCursor<'a, T>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self.elements)
    }
}

/// The cursor of [`Slice`].
pub struct SliceCursor<'a, T> {
    elements: &'a [T],
    /// position of the next element
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    fn new(elements: &'a [T]) -> Self {
        SliceCursor { elements, index: 0 }
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.index < self.elements.len()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        let x = self
            .elements
            .get(self.index)
            .ok_or(SequenceError::Exhausted)?;
        self.index += 1;
        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{assert_exhausted, assert_yields};

    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn test_of() {
        let words = of(vec![String::from("a"), String::from("b")]);

        assert_yields!(words, [String::from("a"), String::from("b")]);
        assert_yields!(words, [String::from("a"), String::from("b")]);
    }

    #[test]
    fn test_of_empty() {
        let nothing: Array<u8> = of(vec![]);

        let mut cursor = nothing.cursor();
        assert_exhausted!(cursor);
    }

    #[test]
    fn test_from_slice() {
        let numbers = [1, 2, 3];
        let sequence = from_slice(&numbers);

        assert_yields!(sequence, [&1, &2, &3]);
        assert_eq!(sequence.last(), Some(&3));
    }

    #[test]
    fn test_collect_into_array() {
        let squares: Array<u32> = (1..4).map(|n| n * n).collect();

        assert_yields!(squares, [1, 4, 9]);
    }

    #[test]
    fn test_cursor_positions() {
        let numbers = from_slice(&[5, 6]);

        let mut cursor = numbers.cursor();
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Ok(&5));
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Ok(&6));
        assert_exhausted!(cursor);
    }
}
