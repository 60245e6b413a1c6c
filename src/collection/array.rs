//! Operations across several sequences.
//!
//! - [`zip`], [`zip_many`]: pair up elements by position
//! - [`flatten`]: collapse a [`Nested`] tree into one sequence
//! - [`intersection`], [`difference`]: set-like comparisons, using
//!   `PartialEq` and keeping the first sequence's order

use super::kernel::each;
use super::predicate::{contains, every, filter};

/// Pairs up elements at the same index, stopping at the shorter sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::zip;
///
/// let pairs = zip(&['a', 'b', 'c', 'd'], &[1, 2, 3]);
/// assert_eq!(pairs, vec![('a', 1), ('b', 2), ('c', 3)]);
/// ```
pub fn zip<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(A, B)> {
    left.iter().cloned().zip(right.iter().cloned()).collect()
}

/// Groups the elements at each index into a row, stopping at the shortest
/// sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::zip_many;
///
/// let rows = zip_many(&[&[1, 2, 3][..], &[4, 5][..], &[6, 7, 8][..]]);
/// assert_eq!(rows, vec![vec![1, 4, 6], vec![2, 5, 7]]);
/// ```
pub fn zip_many<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<T>> {
    let length = sequences.iter().map(|sequence| sequence.len()).min().unwrap_or(0);
    (0..length)
        .map(|index| {
            sequences
                .iter()
                .map(|sequence| sequence[index].clone())
                .collect()
        })
        .collect()
}

/// A value or an arbitrarily deep list of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// A single value.
    Value(T),
    /// A list of nested values.
    List(Vec<Nested<T>>),
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// Flattens nested lists into a single sequence, depth first.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Nested, flatten};
///
/// let nested = vec![
///     Nested::Value(1),
///     Nested::List(vec![Nested::Value(2), Nested::List(vec![Nested::Value(3)])]),
///     Nested::List(vec![]),
///     Nested::Value(4),
/// ];
/// assert_eq!(flatten(&nested), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut result = Vec::new();
    flatten_into(nested, &mut result);
    result
}

fn flatten_into<T: Clone>(nested: &[Nested<T>], result: &mut Vec<T>) {
    each(nested, |element, _, _| match element {
        Nested::Value(value) => result.push(value.clone()),
        Nested::List(children) => flatten_into(children, result),
    });
}

/// Returns the distinct values of the first sequence that appear in every
/// other sequence.
///
/// With no sequences the result is empty.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::intersection;
///
/// let stooges = ["moe", "curly", "larry", "moe"];
/// let brothers = ["moe", "groucho", "larry"];
/// let shared = intersection(&[&stooges[..], &brothers[..]]);
/// assert_eq!(shared, vec!["moe", "larry"]);
/// ```
pub fn intersection<T: PartialEq + Clone>(sequences: &[&[T]]) -> Vec<T> {
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    let mut shared: Vec<T> = Vec::new();
    each(*head, |value, _, _| {
        if !contains(&shared, value) && every(rest, |other| contains(*other, value)) {
            shared.push(value.clone());
        }
    });
    shared
}

/// Returns the values of `sequence` that appear in none of `others`.
///
/// Repeated values in `sequence` are kept.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::difference;
///
/// let remaining = difference(&[1, 2, 3, 4, 5], &[&[5, 2, 10][..]]);
/// assert_eq!(remaining, vec![1, 3, 4]);
/// ```
pub fn difference<T: PartialEq + Clone>(sequence: &[T], others: &[&[T]]) -> Vec<T> {
    filter(sequence, |value| {
        !others.iter().any(|other| contains(*other, value))
    })
}
