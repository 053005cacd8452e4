//! This module defines the errors sequences and cursors can report.

use core::fmt;

/// [`SequenceError`] enumerates the ways an operation on a sequence can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// An argument violated the requirement given as message, e.g. a chunk size of zero.
    /// It is reported by the call receiving the argument, before any traversal begins.
    Precondition(&'static str),
    /// An element was requested from a cursor which has none left.
    Exhausted,
    /// A reduction was attempted over a traversal without elements.
    Empty,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::Precondition(message) => write!(f, "failed requirement: {}", message),
            SequenceError::Exhausted => write!(f, "cursor is exhausted"),
            SequenceError::Empty => write!(f, "sequence is empty"),
        }
    }
}

impl core::error::Error for SequenceError {}

/// Check a precondition on an argument.
/// - `condition` is what the argument has to satisfy.
/// - `message` describes the requirement and ends up in the error.
///
/// # Errors
///
/// [`SequenceError::Precondition`] with `message` if `condition` is `false`.
///
/// # Examples
///
/// ```
/// use rseq::error::{require, SequenceError};
///
/// assert!(require(1 > 0, "size > 0").is_ok());
/// assert_eq!(require(0 > 0, "size > 0"), Err(SequenceError::Precondition("size > 0")));
/// ```
pub fn require(condition: bool, message: &'static str) -> Result<(), SequenceError> {
    if condition {
        return Ok(());
    }
    tracing::debug!(requirement = message, "precondition violated");
    Err(SequenceError::Precondition(message))
}
