//! Reduction: folding a collection to a single value.
//!
//! [`reduce`] threads an accumulator through every element in kernel
//! order. The seed is always used as given, so falsy seeds such as `0`,
//! `false`, or `""` are honoured. [`reduce_default`] seeds with
//! `A::default()`, which is `0` for the numeric types.

use super::kernel::Collection;

/// Folds the collection into one value, starting from `initial`.
///
/// For each element, `accumulator = combine(accumulator, element)`.
/// An empty or absent collection returns `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce;
///
/// assert_eq!(reduce(&vec![1, 2, 3], |total, number| total + number, 0), 6);
/// assert_eq!(reduce(&Vec::<i32>::new(), |total, number| total + number, 0), 0);
///
/// // Falsy seeds are kept.
/// let all_false = reduce(&vec![true, true], |seen, flag| seen || !flag, false);
/// assert!(!all_false);
/// ```
pub fn reduce<C, F, A>(collection: &C, mut combine: F, initial: A) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    collection.fold(initial, |accumulator, value, _| combine(accumulator, value))
}

/// Folds the collection into one value, starting from `A::default()`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce_default;
///
/// let sum: i32 = reduce_default(&vec![1, 2, 3], |total: i32, number| total + number);
/// assert_eq!(sum, 6);
///
/// let joined: String = reduce_default(&["a", "b"], |text: String, piece| text + *piece);
/// assert_eq!(joined, "ab");
/// ```
pub fn reduce_default<C, F, A>(collection: &C, combine: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
    A: Default,
{
    reduce(collection, combine, A::default())
}
