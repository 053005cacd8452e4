//! This module provides sequences of the messages waiting in a channel.
//!
//! A traversal drains the messages queued at the time it runs and ends without waiting for more,
//! so every message is seen by exactly one traversal.

use crate::cursor::IterCursor;
use crate::Sequence;

use crossbeam::channel::{self, Receiver, Sender, TryIter};

/// [`Receive<X>`] abstracts receivers of messages of type `X` as sequences.
#[derive(Debug, Clone)]
pub struct Receive<X> {
    /// receiver of messages
    receiver: Receiver<X>,
}

/// Create a sequence draining a channel.
/// - `receiver` is the receiving end of the channel.
pub fn from_receiver<X>(receiver: Receiver<X>) -> Receive<X> {
    Receive { receiver }
}

impl<X> Receive<X> {
    /// Create an unbounded channel and return its sender together with the sequence of its messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use rseq::sources::Receive;
    /// use rseq::Sequence;
    ///
    /// let (tx, messages) = Receive::unbounded();
    /// tx.send(1).unwrap();
    /// tx.send(2).unwrap();
    ///
    /// assert_eq!(messages.to(Vec::new()), vec![1, 2]);
    /// assert_eq!(messages.count(), 0);
    /// ```
    pub fn unbounded() -> (Sender<X>, Self) {
        let (tx, rx) = channel::unbounded();
        (tx, from_receiver(rx))
    }

    /// Create a channel holding at most `capacity` messages and return its sender together with the sequence of its messages.
    pub fn bounded(capacity: usize) -> (Sender<X>, Self) {
        let (tx, rx) = channel::bounded(capacity);
        (tx, from_receiver(rx))
    }
}

impl<X> Sequence for Receive<X> {
    type Item = X;

    type Cursor<'s> = IterCursor<TryIter<'s, X>>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.receiver.try_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::assert_yields;
    use crate::Cursor;

    use std::thread;

    #[test]
    fn test_receive() {
        let (tx, messages) = Receive::unbounded();
        tx.send('a').unwrap();

        assert_yields!(messages, ['a']);
        assert_yields!(messages, []);

        tx.send('b').unwrap();
        tx.send('c').unwrap();
        assert_yields!(messages, ['b', 'c']);
    }

    #[test]
    fn test_receive_does_not_block() {
        let (tx, messages) = Receive::<u8>::bounded(1);

        let mut cursor = messages.cursor();
        assert!(!cursor.has_next());

        tx.send(1).unwrap();
        drop(tx);
        assert_eq!(messages.first(), Some(1));
    }

    #[test]
    fn test_receive_from_thread() {
        let (tx, rx) = channel::unbounded();

        let producer = thread::spawn(move || {
            for n in 0..4 {
                tx.send(n).unwrap();
            }
        });
        producer.join().unwrap();

        let messages = from_receiver(rx).map(|n| n * n);
        assert_yields!(messages, [0, 1, 4, 9]);
    }
}
