use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::Sequence;

/// [`Chars<'a>`] yields the characters of a string slice.
#[derive(Debug, Clone, Copy)]
pub struct Chars<'a> {
    text: &'a str,
}

/// Create the sequence of the characters of a string.
/// - `text` is the string.
///
/// # Examples
///
/// ```
/// use rseq::sources;
/// use rseq::Sequence;
///
/// let vowels = sources::chars("sequence").count_by(|c| "aeiou".contains(*c));
///
/// assert_eq!(vowels, 4);
/// ```
pub fn chars(text: &str) -> Chars<'_> {
    Chars { text }
}

impl<'a> Sequence for Chars<'a> {
    type Item = char;

    type Cursor<'s> = CharsCursor<'a>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        CharsCursor { rest: self.text }
    }
}

/// The cursor of [`Chars`].
pub struct CharsCursor<'a> {
    /// the part of the text not yet visited
    rest: &'a str,
}

impl Cursor for CharsCursor<'_> {
    type Item = char;

    #[inline]
    fn has_next(&mut self) -> bool {
        !self.rest.is_empty()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        let mut chars = self.rest.chars();
        let c = chars.next().ok_or(SequenceError::Exhausted)?;
        self.rest = chars.as_str();
        Ok(c)
    }
}
