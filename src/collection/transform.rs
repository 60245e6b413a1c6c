//! Transformation operations.
//!
//! These produce new sequences from a collection without touching the
//! input, with the exception of [`shuffle`], which permutes a slice in
//! place and hands the same slice back.
//!
//! - [`map`], [`pluck`], [`invoke`], [`invoke_with`]: one output per element
//! - [`uniq`], [`uniq_by`]: drop repeated values, keeping first occurrences
//! - [`first`], [`first_n`], [`last`], [`last_n`]: slice the ends of a sequence
//! - [`shuffle`], [`sort_by`]: reorder

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::ops::ControlFlow;

use rand::Rng;

use super::kernel::{Collection, each};
use super::record::Record;
use crate::error::InvokeError;

/// Returns `transform(element)` for every element, in kernel order.
///
/// The result has the same length as the collection.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::map;
///
/// let doubled = map(&vec![1, 2, 3], |number| number * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map<C, F, U>(collection: &C, mut transform: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> U,
{
    let mut results = Vec::with_capacity(collection.size());
    each(collection, |value, _, _| results.push(transform(value)));
    results
}

/// Extracts one named field from each record.
///
/// Records that lack the field contribute `None`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::pluck;
///
/// let people = vec![
///     HashMap::from([("name", "Moe"), ("role", "lead")]),
///     HashMap::from([("name", "Curly")]),
/// ];
/// assert_eq!(pluck(&people, "name"), vec![Some("Moe"), Some("Curly")]);
/// assert_eq!(pluck(&people, "role"), vec![Some("lead"), None]);
/// ```
pub fn pluck<C>(records: &C, property_name: &str) -> Vec<Option<<C::Item as Record>::Field>>
where
    C: Collection + ?Sized,
    C::Item: Record,
    <C::Item as Record>::Field: Clone,
{
    map(records, |record| record.field(property_name).cloned())
}

/// An element that can dispatch a method by name.
///
/// Implemented by callers for the element types they pass to [`invoke`].
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Invocable;
/// use underbar::error::InvokeError;
///
/// struct Word(&'static str);
///
/// impl Invocable<usize> for Word {
///     type Output = String;
///
///     fn invoke_method(&self, method: &str, times: &usize) -> Result<String, InvokeError> {
///         match method {
///             "repeat" => Ok(self.0.repeat(*times)),
///             "upper" => Ok(self.0.to_uppercase()),
///             other => Err(InvokeError::unknown_method(other)),
///         }
///     }
/// }
///
/// assert_eq!(Word("ab").invoke_method("repeat", &2), Ok("abab".to_string()));
/// ```
pub trait Invocable<A: ?Sized> {
    /// The value returned by the methods.
    type Output;

    /// Calls the method named `method` on `self` with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::UnknownMethod`] if `self` has no such method.
    fn invoke_method(&self, method: &str, arguments: &A) -> Result<Self::Output, InvokeError>;
}

/// Calls the method named `method_name` on every element with `arguments`.
///
/// Results are returned in kernel order. The walk stops at the first
/// element that does not know the method.
///
/// # Errors
///
/// Returns [`InvokeError::UnknownMethod`] from the first element that
/// rejects `method_name`.
pub fn invoke<C, A>(
    collection: &C,
    method_name: &str,
    arguments: &A,
) -> Result<Vec<<C::Item as Invocable<A>>::Output>, InvokeError>
where
    C: Collection + ?Sized,
    C::Item: Invocable<A>,
    A: ?Sized,
{
    let mut results = Vec::with_capacity(collection.size());
    let flow = collection.try_each(|value, _, _| {
        match value.invoke_method(method_name, arguments) {
            Ok(result) => {
                results.push(result);
                ControlFlow::Continue(())
            }
            Err(error) => ControlFlow::Break(error),
        }
    });
    match flow {
        ControlFlow::Continue(()) => Ok(results),
        ControlFlow::Break(error) => Err(error),
    }
}

/// Calls `function(element, arguments)` for every element.
///
/// The element plays the part of the receiver. Results are returned in
/// kernel order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::invoke_with;
///
/// let words = vec!["ab", "cde"];
/// let padded = invoke_with(&words, |word, fill| format!("{word}{fill}"), &"!");
/// assert_eq!(padded, vec!["ab!", "cde!"]);
/// ```
pub fn invoke_with<C, F, A, R>(collection: &C, mut function: F, arguments: &A) -> Vec<R>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item, &A) -> R,
    A: ?Sized,
{
    map(collection, |value| function(value, arguments))
}

/// Returns each distinct value once, keeping first occurrences in order.
///
/// Values are compared by their string form, so two values that display
/// the same are treated as one.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq;
///
/// assert_eq!(uniq(&vec![1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// ```
pub fn uniq<C>(sequence: &C) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Display + Clone,
{
    uniq_by(sequence, |value| value.to_string())
}

/// Returns each value whose `key` has not been seen before, in order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq_by;
///
/// let words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
/// let by_initial = uniq_by(&words, |word| word.chars().next());
/// assert_eq!(by_initial, vec!["apple", "banana", "cherry"]);
/// ```
pub fn uniq_by<C, F, K>(sequence: &C, mut key: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item) -> K,
    K: Hash + Eq,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    each(sequence, |value, _, _| {
        if seen.insert(key(value)) {
            unique.push(value.clone());
        }
    });
    unique
}

/// Returns the first element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `count` elements.
///
/// A `count` of zero yields an empty slice; a `count` past the end yields
/// the whole sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 0), &[] as &[i32]);
/// assert_eq!(first_n(&[1, 2, 3], 10), &[1, 2, 3]);
/// ```
#[inline]
pub fn first_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[..count.min(sequence.len())]
}

/// Returns the last element, or `None` for an empty sequence.
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the last `count` elements, in their original order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// ```
#[inline]
pub fn last_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[sequence.len() - count.min(sequence.len())..]
}

/// Shuffles the slice in place with the thread-local generator.
///
/// Returns the same slice so calls can be chained.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::shuffle;
///
/// let mut cards = vec![1, 2, 3, 4, 5];
/// let shuffled = shuffle(&mut cards);
/// shuffled.sort_unstable();
/// assert_eq!(cards, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T>(sequence: &mut [T]) -> &mut [T] {
    shuffle_with(sequence, &mut rand::rng())
}

/// Shuffles the slice in place (Fisher-Yates) with the given generator.
pub fn shuffle_with<'s, T, R>(sequence: &'s mut [T], random: &mut R) -> &'s mut [T]
where
    R: Rng + ?Sized,
{
    for index in (1..sequence.len()).rev() {
        let other = random.random_range(0..=index);
        sequence.swap(index, other);
    }
    sequence
}

/// Returns the values sorted by the key each one produces.
///
/// The sort is stable: values with equal keys keep their kernel order.
/// The key function runs once per element.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::sort_by;
///
/// let words = vec!["kiwi", "fig", "banana", "date"];
/// assert_eq!(sort_by(&words, |word| word.len()), vec!["fig", "kiwi", "date", "banana"]);
/// ```
pub fn sort_by<C, F, K>(collection: &C, mut key: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item) -> K,
    K: Ord,
{
    let mut keyed = map(collection, |value| (key(value), value.clone()));
    keyed.sort_by(|left, right| left.0.cmp(&right.0));
    keyed.into_iter().map(|(_, value)| value).collect()
}
