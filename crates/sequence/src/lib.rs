//! Append-only ordered sequence.
//!
//! [`Sequence`] is the list type underneath every collection in the catalog.
//! It keeps insertion order, allows duplicates, and never removes elements.
//!
//! Two conventions are worth knowing before using it:
//!
//! - **Positions are 1-based.** [`get_element`](Sequence::get_element) and
//!   [`is_present`](Sequence::is_present) talk in positions `1..=size`.
//! - **Ranges are 0-based and half-open.** [`iterator`](Sequence::iterator)
//!   takes `[start, end)` offsets, so `iterator(0, size, 1)` visits every
//!   element exactly once.
//!
//! ```
//! use shelf_sequence::Sequence;
//!
//! let mut seq: Sequence<&str> = Sequence::new();
//! seq.add_last("a");
//! seq.add_last("b");
//! seq.add_last("c");
//! assert_eq!(seq.get_element(2).unwrap(), &"b");
//! assert_eq!(seq.is_present(&"c", |k, e| k.cmp(e)), Some(3));
//! let odd: Vec<_> = seq.iterator(0, seq.size(), 2).unwrap().collect();
//! assert_eq!(odd, [&"a", &"c"]);
//! ```

pub mod error;

use crate::error::{ErrorKind, Result};
use exn::OptionExt;
use std::cmp::Ordering;
use tracing::instrument;

/// An ordered, duplicate-permitting, append-only collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements currently held.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an element, returning the 1-based position it now occupies.
    pub fn add_last(&mut self, element: T) -> usize {
        self.items.push(element);
        self.items.len()
    }

    /// Returns the element at the given 1-based `position`.
    ///
    /// # Errors
    /// [`ErrorKind::OutOfRange`] if `position` is not within `1..=size`.
    pub fn get_element(&self, position: usize) -> Result<&T> {
        let size = self.size();
        position
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
            .ok_or_raise(|| ErrorKind::OutOfRange { position, size })
    }

    /// Mutable counterpart of [`get_element`](Self::get_element).
    pub fn get_element_mut(&mut self, position: usize) -> Result<&mut T> {
        let size = self.size();
        position
            .checked_sub(1)
            .and_then(|index| self.items.get_mut(index))
            .ok_or_raise(|| ErrorKind::OutOfRange { position, size })
    }

    /// # Errors
    /// [`ErrorKind::Empty`] if the sequence holds no elements.
    pub fn first_element(&self) -> Result<&T> {
        self.items.first().ok_or_raise(|| ErrorKind::Empty)
    }

    /// Linear search from the front of the sequence.
    ///
    /// `comparator(key, element)` is a three-way comparison, but only
    /// [`Ordering::Equal`] is acted upon: the elements are kept in insertion
    /// order, not sorted, so the other results carry no meaning here.
    ///
    /// Returns the 1-based position of the first match.
    #[instrument(level = "trace", skip_all, fields(size = self.size()))]
    pub fn is_present<K, F>(&self, key: &K, comparator: F) -> Option<usize>
    where
        K: ?Sized,
        F: Fn(&K, &T) -> Ordering,
    {
        self.items
            .iter()
            .position(|element| comparator(key, element) == Ordering::Equal)
            .map(|index| index + 1)
    }

    /// Lazily walks the 0-based, half-open range `[start, end)`, yielding
    /// every `stride`-th element.
    ///
    /// The returned iterator is [`Clone`], so it can be restarted from the
    /// beginning by cloning it before consumption. A `start` at or past `end`
    /// yields nothing.
    ///
    /// # Errors
    /// - [`ErrorKind::OutOfRange`] if `end` is greater than the size.
    /// - [`ErrorKind::InvalidStride`] if `stride` is zero.
    #[instrument(level = "trace", skip(self), fields(size = self.size()))]
    pub fn iterator(&self, start: usize, end: usize, stride: usize) -> Result<impl Iterator<Item = &T> + Clone + '_> {
        if end > self.size() {
            exn::bail!(ErrorKind::OutOfRange {
                position: end,
                size: self.size()
            });
        }
        if stride == 0 {
            exn::bail!(ErrorKind::InvalidStride);
        }
        let start = start.min(end);
        Ok(self.items[start..end].iter().step_by(stride))
    }

    /// Forward iteration over every element in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn letters() -> Sequence<char> {
        "abcdef".chars().collect()
    }

    #[test]
    fn new_sequence_is_empty() {
        let seq: Sequence<u8> = Sequence::new();
        assert_eq!(seq.size(), 0);
        assert!(seq.is_empty());
    }

    #[rstest]
    #[case("")]
    #[case("abcdef")]
    fn add_last_grows_by_one(#[case] initial: &str) {
        let mut seq: Sequence<char> = initial.chars().collect();
        let before = seq.size();
        let position = seq.add_last('z');
        assert_eq!(seq.size(), before + 1);
        assert_eq!(position, seq.size());
        assert_eq!(seq.get_element(seq.size()).unwrap(), &'z');
    }

    #[rstest]
    #[case(1, 'a')]
    #[case(4, 'd')]
    #[case(6, 'f')]
    fn get_element_is_one_based(letters: Sequence<char>, #[case] position: usize, #[case] expected: char) {
        assert_eq!(letters.get_element(position).unwrap(), &expected);
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(usize::MAX)]
    fn get_element_out_of_range(letters: Sequence<char>, #[case] position: usize) {
        let err = letters.get_element(position).unwrap_err();
        assert_eq!(*err, ErrorKind::OutOfRange { position, size: 6 });
    }

    #[rstest]
    fn get_element_mut_modifies_in_place(mut letters: Sequence<char>) {
        *letters.get_element_mut(2).unwrap() = 'B';
        assert_eq!(letters.iter().collect::<String>(), "aBcdef");
        assert!(letters.get_element_mut(0).is_err());
    }

    #[rstest]
    fn first(letters: Sequence<char>) {
        assert_eq!(letters.first_element().unwrap(), &'a');
    }

    #[test]
    fn first_of_empty() {
        let seq: Sequence<char> = Sequence::new();
        assert!(matches!(&*seq.first_element().unwrap_err(), ErrorKind::Empty));
    }

    #[rstest]
    #[case('a', Some(1))]
    #[case('e', Some(5))]
    #[case('q', None)]
    fn is_present_returns_position(letters: Sequence<char>, #[case] key: char, #[case] expected: Option<usize>) {
        assert_eq!(letters.is_present(&key, |k, e| k.cmp(e)), expected);
    }

    #[test]
    fn is_present_stops_at_first_match() {
        let seq: Sequence<(u8, &str)> = [(1, "x"), (2, "y"), (1, "z")].into_iter().collect();
        assert_eq!(seq.is_present(&1u8, |k, (id, _)| k.cmp(id)), Some(1));
    }

    #[test]
    fn is_present_ignores_ordering_of_unsorted_elements() {
        // Unsorted, so a binary search would miss "a" after seeing "z".
        let seq: Sequence<&str> = ["m", "z", "a"].into_iter().collect();
        assert_eq!(seq.is_present("a", |k, e| k.cmp(e)), Some(3));
    }

    #[rstest]
    #[case(0, 6, 1, "abcdef")]
    #[case(0, 6, 2, "ace")]
    #[case(1, 6, 2, "bdf")]
    #[case(2, 4, 1, "cd")]
    #[case(5, 6, 10, "f")]
    #[case(4, 2, 1, "")]
    #[case(6, 6, 1, "")]
    fn iterator_ranges(
        letters: Sequence<char>,
        #[case] start: usize,
        #[case] end: usize,
        #[case] stride: usize,
        #[case] expected: &str,
    ) {
        let visited: String = letters.iterator(start, end, stride).unwrap().collect();
        assert_eq!(visited, expected);
    }

    #[rstest]
    fn iterator_is_restartable(letters: Sequence<char>) {
        let iter = letters.iterator(0, letters.size(), 1).unwrap();
        let first: String = iter.clone().collect();
        let second: String = iter.collect();
        assert_eq!(first, second);
    }

    #[rstest]
    fn iterator_rejects_bad_arguments(letters: Sequence<char>) {
        assert!(matches!(
            &*letters.iterator(0, 7, 1).err().unwrap(),
            ErrorKind::OutOfRange { position: 7, size: 6 }
        ));
        assert!(matches!(&*letters.iterator(0, 6, 0).err().unwrap(), ErrorKind::InvalidStride));
    }
}
