//! This module provides a persistent singly-linked list in the tradition of Lisp: a list is either nil or a pair of a first element (`car`) and the rest of the list (`cdr`).
//!
//! Lists are immutable and share structure, so [`cons`](List::cons) and [`cdr`](List::cdr) are O(1) and never copy elements.
//! Operations producing a new list copy (clone) only the part in front of the shared structure.
//!
//! All operations are loops over the list, so neither long lists nor dropping them can overflow the stack.
//!
//! # Examples
//!
//! ```
//! use rseq::cons::List;
//!
//! let tail = List::of(vec![2, 3]);
//! let list = List::cons(1, tail.clone());
//!
//! assert_eq!(list.to_string(), "(1, 2, 3)");
//! assert_eq!(list.cdr(), Some(&tail));
//! assert_eq!(list.fold_left(0, |acc, n| acc + n), 6);
//! ```

use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::Sequence;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

/// [`List<T>`] defines persistent cons-lists of type `T`.
pub struct List<T> {
    head: Option<Rc<Node<T>>>,
}

struct Node<T> {
    car: T,
    cdr: List<T>,
}

impl<T> List<T> {
    /// Create the empty list.
    #[inline]
    pub const fn nil() -> Self {
        List { head: None }
    }

    /// Create a list by prepending an element to an existing list, which is shared and not copied.
    /// - `car` is the new first element.
    /// - `cdr` is the rest of the list.
    #[inline]
    pub fn cons(car: T, cdr: Self) -> Self {
        List {
            head: Some(Rc::new(Node { car, cdr })),
        }
    }

    /// Create a list of some elements.
    /// - `elements` are the elements in order.
    pub fn of(elements: Vec<T>) -> Self {
        elements
            .into_iter()
            .rev()
            .fold(List::nil(), |cdr, car| List::cons(car, cdr))
    }

    /// Create a list by prepending an element to `self`.
    #[inline]
    pub fn prepend(&self, x: T) -> Self {
        List::cons(x, self.clone())
    }

    /// The first element, if any.
    #[inline]
    pub fn car(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.car)
    }

    /// All but the first element, if there is a first element.
    #[inline]
    pub fn cdr(&self) -> Option<&Self> {
        self.head.as_ref().map(|node| &node.cdr)
    }

    /// All but the first element; the rest of nil is nil.
    pub fn rest(&self) -> Self {
        self.cdr().cloned().unwrap_or_default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterate over references to the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { current: self }
    }

    /// View `self` as a (restartable) sequence of references to its elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use rseq::cons::List;
    /// use rseq::Sequence;
    ///
    /// let list = List::of(vec![1, 2, 3, 4]);
    ///
    /// assert_eq!(list.as_sequence().filter(|n| *n % 2 == 0).count(), 2);
    /// ```
    #[inline]
    pub fn as_sequence(&self) -> Elements<'_, T> {
        Elements { list: self }
    }

    /// The element at a position, if the list is long enough.
    /// - `index` is the zero-based position.
    pub fn nth(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// The last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Apply a function to each element and collect the results into a new list.
    /// - `transform` is the function.
    pub fn map<U, F>(&self, transform: F) -> List<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(transform).collect()
    }

    /// Combine the elements from left to right.
    /// - `init` is the initial value.
    /// - `op` combines the intermediate result with the next element.
    pub fn fold_left<R, F>(&self, init: R, op: F) -> R
    where
        F: FnMut(R, &T) -> R,
    {
        self.iter().fold(init, op)
    }

    /// Combine the elements from right to left.
    /// - `init` is the initial value.
    /// - `op` combines the next element with the intermediate result.
    ///
    /// # Examples
    ///
    /// ```
    /// use rseq::cons::List;
    ///
    /// let list = List::of(vec![1, 2, 3]);
    ///
    /// assert_eq!(list.fold_right(String::new(), |n, acc| acc + &n.to_string()), "321");
    /// ```
    pub fn fold_right<R, F>(&self, init: R, mut op: F) -> R
    where
        F: FnMut(&T, R) -> R,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |acc, x| op(x, acc))
    }

    /// Hand every element to an action, in order.
    /// - `action` is the action.
    pub fn foreach<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(action);
    }
}

impl<T: Clone> List<T> {
    /// Create a list by appending an element to a copy of `self`.
    pub fn append(&self, x: T) -> Self {
        self.iter().cloned().chain(core::iter::once(x)).collect()
    }

    /// Create a list of the elements of `self` followed by those of `other`.
    /// The result shares `other` and copies `self`.
    /// - `other` is the list to put behind.
    pub fn concat(&self, other: &Self) -> Self {
        let front: Vec<&T> = self.iter().collect();
        front
            .into_iter()
            .rev()
            .fold(other.clone(), |cdr, car| List::cons(car.clone(), cdr))
    }

    /// Keep only the elements satisfying a predicate.
    /// - `predicate` decides which elements are kept.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|x| predicate(x)).cloned().collect()
    }

    /// Create the list with the elements of `self` in reverse order.
    pub fn reverse(&self) -> Self {
        self.fold_left(List::nil(), |cdr, car| List::cons(car.clone(), cdr))
    }

    /// Split `self` into the longest prefix satisfying a predicate and the rest.
    /// The rest is shared with `self`.
    /// - `predicate` decides whether an element belongs to the prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use rseq::cons::List;
    ///
    /// let (small, rest) = List::of(vec![1, 2, 5, 1]).span(|n| *n < 3);
    ///
    /// assert_eq!(small, List::of(vec![1, 2]));
    /// assert_eq!(rest, List::of(vec![5, 1]));
    /// ```
    pub fn span<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let mut prefix = Vec::new();
        let mut rest = self;
        while let Some(node) = &rest.head {
            if !predicate(&node.car) {
                break;
            }
            prefix.push(node.car.clone());
            rest = &node.cdr;
        }
        (List::of(prefix), rest.clone())
    }

    /// Group runs of consecutive elements equal to the first element of their run.
    /// - `eq` decides whether an element equals the first element of the current run.
    pub fn group_by<E>(&self, mut eq: E) -> List<Self>
    where
        E: FnMut(&T, &T) -> bool,
    {
        let mut groups = Vec::new();
        let mut rest = self.clone();
        while let Some(node) = rest.head.clone() {
            let (same, other) = node.cdr.span(|x| eq(&node.car, x));
            groups.push(List::cons(node.car.clone(), same));
            rest = other;
        }
        List::of(groups)
    }

    /// Group runs of equal consecutive elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use rseq::cons::List;
    ///
    /// let runs = List::of(vec!['a', 'a', 'b', 'a']).group();
    ///
    /// assert_eq!(runs.to_string(), "((a, a), (b), (a))");
    /// ```
    pub fn group(&self) -> List<Self>
    where
        T: PartialEq,
    {
        self.group_by(|x, y| x == y)
    }

    /// Replace each element by the elements of a list computed from it.
    /// - `transform` computes the list.
    pub fn flat_map<U, F>(&self, mut transform: F) -> List<U>
    where
        U: Clone,
        F: FnMut(&T) -> List<U>,
    {
        let mut elements = Vec::new();
        for x in self.iter() {
            elements.extend(transform(x).iter().cloned());
        }
        List::of(elements)
    }

    /// Concatenate a list of lists.
    /// - `lists` are the lists in order.
    pub fn flatten(lists: &List<Self>) -> Self {
        lists.flat_map(Clone::clone)
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::nil()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(node) = head {
            match Rc::try_unwrap(node) {
                Ok(mut node) => head = node.cdr.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_sequence().display(), f)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List::of(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// [`Iter<'a, T>`] iterates over references to the elements of a [`List`].
pub struct Iter<'a, T> {
    current: &'a List<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.head.as_ref()?;
        self.current = &node.cdr;
        Some(&node.car)
    }
}

/// [`Elements<'a, T>`] is the sequence of references to the elements of a [`List`], see [`List::as_sequence`].
pub struct Elements<'a, T> {
    list: &'a List<T>,
}

impl<T> Clone for Elements<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Elements<'_, T> {}

impl<'a, T> Sequence for Elements<'a, T> {
    type Item = &'a T;

    type Cursor<'s> = ElementsCursor<'a, T>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        ElementsCursor { current: self.list }
    }
}

/// The cursor of [`Elements`].
pub struct ElementsCursor<'a, T> {
    current: &'a List<T>,
}

impl<'a, T> Cursor for ElementsCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn has_next(&mut self) -> bool {
        !self.current.is_empty()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        let node = self
            .current
            .head
            .as_ref()
            .ok_or(SequenceError::Exhausted)?;
        self.current = &node.cdr;
        Ok(&node.car)
    }
}
