//! The iteration kernel.
//!
//! [`Collection`] is the only abstraction that walks elements directly.
//! Sequences (slices, arrays, `Vec`, `VecDeque`) are visited in ascending
//! index order and report their index as the key; mappings (`HashMap`,
//! `BTreeMap`) are visited in their own enumeration order and report the
//! entry key. `Option<C>` models an absent collection: `None` is walked as
//! if it were empty.
//!
//! Every other operation in [`collection`](crate::collection) is built on
//! [`Collection::try_each`], so they all agree on visiting order.
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{each, index_of};
//!
//! let mut visited = Vec::new();
//! each(&vec!["a", "b", "c"], |value, index, _| visited.push((*index, *value)));
//! assert_eq!(visited, vec![(0, "a"), (1, "b"), (2, "c")]);
//!
//! assert_eq!(index_of(&[5, 6, 7, 6], &6), Some(1));
//! assert_eq!(index_of(&[1, 2], &9), None);
//! ```

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::convert::Infallible;
use std::hash::BuildHasher;
use std::ops::ControlFlow;

/// A walkable collection: an ordered sequence or a keyed mapping.
///
/// Implementors visit each element exactly once, calling the iterator with
/// the element, its key (index for sequences), and the collection itself.
/// The walk stops as soon as the iterator returns [`ControlFlow::Break`].
///
/// Walking never mutates the collection.
pub trait Collection {
    /// The element type.
    type Item;

    /// The key reported alongside each element: `usize` for sequences,
    /// the entry key for mappings.
    type Key: ?Sized;

    /// Visits elements in kernel order until the iterator breaks.
    ///
    /// Returns the break value, or `Continue(())` if every element was
    /// visited.
    fn try_each<B, F>(&self, iterator: F) -> ControlFlow<B>
    where
        F: FnMut(&Self::Item, &Self::Key, &Self) -> ControlFlow<B>;

    /// Threads an accumulator through every element in kernel order.
    fn fold<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &Self::Item, &Self::Key) -> A;

    /// Returns the number of elements a full walk would visit.
    fn size(&self) -> usize;
}

/// Calls `iterator(value, key, collection)` for every element.
///
/// Sequences are visited in ascending index order, mappings in their
/// enumeration order. An empty or absent (`None`) collection results in
/// zero invocations.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::each;
///
/// let scores = BTreeMap::from([("alice", 3), ("bob", 5)]);
/// let mut total = 0;
/// each(&scores, |score, _name, _| total += score);
/// assert_eq!(total, 8);
///
/// let absent: Option<Vec<i32>> = None;
/// let mut calls = 0;
/// each(&absent, |_, _, _| calls += 1);
/// assert_eq!(calls, 0);
/// ```
pub fn each<C, F>(collection: &C, mut iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item, &C::Key, &C),
{
    let _ = collection.try_each(|value, key, whole| {
        iterator(value, key, whole);
        ControlFlow::<Infallible>::Continue(())
    });
}

/// Returns the lowest index whose element equals `target`.
///
/// Equality is `PartialEq` with no conversion between types, so `NaN`
/// is never found. Returns `None` when no element matches or the sequence
/// is absent.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::index_of;
///
/// assert_eq!(index_of(&vec![5, 6, 7, 6], &6), Some(1));
/// assert_eq!(index_of(&vec!["x"], &"y"), None);
/// ```
pub fn index_of<C>(array: &C, target: &C::Item) -> Option<usize>
where
    C: Collection<Key = usize> + ?Sized,
    C::Item: PartialEq,
{
    array
        .try_each(|item, index, _| {
            if item == target {
                ControlFlow::Break(*index)
            } else {
                ControlFlow::Continue(())
            }
        })
        .break_value()
}

fn fold_sequence<'s, T, A, F>(
    items: impl Iterator<Item = &'s T>,
    initial: A,
    mut combine: F,
) -> A
where
    T: 's,
    F: FnMut(A, &T, &usize) -> A,
{
    items
        .enumerate()
        .fold(initial, |accumulator, (index, item)| combine(accumulator, item, &index))
}

fn walk_sequence<'s, T, S, B, F>(
    items: impl Iterator<Item = &'s T>,
    collection: &S,
    mut iterator: F,
) -> ControlFlow<B>
where
    T: 's,
    S: ?Sized,
    F: FnMut(&T, &usize, &S) -> ControlFlow<B>,
{
    for (index, item) in items.enumerate() {
        iterator(item, &index, collection)?;
    }
    ControlFlow::Continue(())
}

impl<T> Collection for [T] {
    type Item = T;
    type Key = usize;

    fn try_each<B, F>(&self, iterator: F) -> ControlFlow<B>
    where
        F: FnMut(&T, &usize, &Self) -> ControlFlow<B>,
    {
        walk_sequence(self.iter(), self, iterator)
    }

    fn fold<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &T, &usize) -> A,
    {
        fold_sequence(self.iter(), initial, combine)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Key = usize;

    fn try_each<B, F>(&self, iterator: F) -> ControlFlow<B>
    where
        F: FnMut(&T, &usize, &Self) -> ControlFlow<B>,
    {
        walk_sequence(self.iter(), self, iterator)
    }

    fn fold<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &T, &usize) -> A,
    {
        fold_sequence(self.iter(), initial, combine)
    }

    fn size(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Key = usize;

    fn try_each<B, F>(&self, iterator: F) -> ControlFlow<B>
    where
        F: FnMut(&T, &usize, &Self) -> ControlFlow<B>,
    {
        walk_sequence(self.iter(), self, iterator)
    }

    fn fold<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &T, &usize) -> A,
    {
        fold_sequence(self.iter(), initial, combine)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;
    type Key = usize;

    fn try_each<B, F>(&self, iterator: F) -> ControlFlow<B>
    where
        F: FnMut(&T, &usize, &Self) -> ControlFlow<B>,
    {
        walk_sequence(self.iter(), self, iterator)
    }

    fn fold<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &T, &usize) -> A,
    {
        fold_sequence(self.iter(), initial, combine)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Item = V;
    type Key = K;

    fn try_each<B, F>(&self, mut iterator: F) -> ControlFlow<B>
    where
        F: FnMut(&V, &K, &Self) -> ControlFlow<B>,
    {
        for (key, value) in self {
            iterator(value, key, self)?;
        }
        ControlFlow::Continue(())
    }

    fn fold<A, F>(&self, initial: A, mut combine: F) -> A
    where
        F: FnMut(A, &V, &K) -> A,
    {
        self.iter()
            .fold(initial, |accumulator, (key, value)| combine(accumulator, value, key))
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = V;
    type Key = K;

    fn try_each<B, F>(&self, mut iterator: F) -> ControlFlow<B>
    where
        F: FnMut(&V, &K, &Self) -> ControlFlow<B>,
    {
        for (key, value) in self {
            iterator(value, key, self)?;
        }
        ControlFlow::Continue(())
    }

    fn fold<A, F>(&self, initial: A, mut combine: F) -> A
    where
        F: FnMut(A, &V, &K) -> A,
    {
        self.iter()
            .fold(initial, |accumulator, (key, value)| combine(accumulator, value, key))
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// An absent collection walks as an empty one.
impl<C: Collection> Collection for Option<C> {
    type Item = C::Item;
    type Key = C::Key;

    fn try_each<B, F>(&self, mut iterator: F) -> ControlFlow<B>
    where
        F: FnMut(&C::Item, &C::Key, &Self) -> ControlFlow<B>,
    {
        match self {
            Some(inner) => inner.try_each(|value, key, _| iterator(value, key, self)),
            None => ControlFlow::Continue(()),
        }
    }

    fn fold<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &C::Item, &C::Key) -> A,
    {
        match self {
            Some(inner) => inner.fold(initial, combine),
            None => initial,
        }
    }

    fn size(&self) -> usize {
        self.as_ref().map_or(0, Collection::size)
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    type Item = C::Item;
    type Key = C::Key;

    fn try_each<B, F>(&self, mut iterator: F) -> ControlFlow<B>
    where
        F: FnMut(&C::Item, &C::Key, &Self) -> ControlFlow<B>,
    {
        (**self).try_each(|value, key, _| iterator(value, key, self))
    }

    fn fold<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &C::Item, &C::Key) -> A,
    {
        (**self).fold(initial, combine)
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}
