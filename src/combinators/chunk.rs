use crate::cursor::Cursor;
use crate::error::{require, SequenceError};
use crate::Sequence;

use alloc::vec::Vec;

/// [`Chunk<S>`] groups consecutive elements of `S` into vectors of a fixed size.
///
/// Only the last group may be shorter, and no group is ever empty.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let pairs = sources::range(1, 6).chunk(2)?;
///
/// assert_eq!(pairs.to(Vec::new()), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// # Ok::<(), rseq::SequenceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Chunk<S> {
    sequence: S,
    size: usize,
}

impl<S> Chunk<S> {
    /// Create the stage.
    /// - `sequence` is the sequence to group.
    /// - `size` is the size of the groups.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Precondition`] if `size` is zero.
    pub fn new(sequence: S, size: usize) -> Result<Self, SequenceError> {
        require(size > 0, "chunk size > 0")?;
        Ok(Chunk { sequence, size })
    }
}

impl<S: Sequence> Sequence for Chunk<S> {
    type Item = Vec<S::Item>;

    type Cursor<'s> = ChunkCursor<S::Cursor<'s>>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        ChunkCursor {
            upstream: self.sequence.cursor(),
            size: self.size,
        }
    }
}

/// The cursor of [`Chunk`].
pub struct ChunkCursor<C> {
    upstream: C,
    size: usize,
}

impl<C: Cursor> Cursor for ChunkCursor<C> {
    type Item = Vec<C::Item>;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        let mut block = Vec::with_capacity(self.size);
        while block.len() < self.size {
            match self.upstream.pull() {
                Some(x) => block.push(x),
                None => break,
            }
        }
        Ok(block)
    }
}
