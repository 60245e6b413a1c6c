//! Predicate operations: `filter`, `reject`, `every`, `any`, `contains`.
//!
//! Predicates receive each element by reference and may return any
//! [`Truthy`] value. `every`, `any` and `contains` stop walking as soon as
//! their answer is known.

use std::ops::ControlFlow;

use super::kernel::{Collection, each};
use super::truthy::Truthy;

/// Returns every element whose predicate result is truthy, in kernel order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::filter;
///
/// let odd = filter(&vec![1, 2, 3, 4, 5], |number| number % 2);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn filter<C, P, R>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> R,
    R: Truthy,
{
    let mut passed = Vec::new();
    each(collection, |value, _, _| {
        if predicate(value).is_truthy() {
            passed.push(value.clone());
        }
    });
    passed
}

/// Returns every element whose predicate result is falsy, in kernel order.
///
/// `filter` and `reject` with the same predicate partition the collection.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reject;
///
/// let even = reject(&vec![1, 2, 3, 4, 5], |number| number % 2);
/// assert_eq!(even, vec![2, 4]);
/// ```
pub fn reject<C, P, R>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> R,
    R: Truthy,
{
    filter(collection, |value| predicate(value).is_falsy())
}

/// Returns `true` if the predicate is truthy for every element.
///
/// Vacuously `true` for an empty or absent collection.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every;
///
/// assert!(every(&vec![2, 4, 6], |number| number % 2 == 0));
/// assert!(!every(&vec![2, 3], |number| number % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_| false));
/// ```
pub fn every<C, P, R>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> R,
    R: Truthy,
{
    collection
        .try_each(|value, _, _| {
            if predicate(value).is_truthy() {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_continue()
}

/// Returns `true` if the predicate is truthy for at least one element.
///
/// `false` for an empty or absent collection. Use [`any_truthy`] to test
/// the elements themselves.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::any;
///
/// assert!(any(&vec![1, 3, 4], |number| number % 2 == 0));
/// assert!(!any(&None::<Vec<i32>>, |_| true));
/// ```
pub fn any<C, P, R>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> R,
    R: Truthy,
{
    collection
        .try_each(|value, _, _| {
            if predicate(value).is_truthy() {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
}

/// Returns `true` if at least one element is itself truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::any_truthy;
///
/// assert!(any_truthy(&vec![0, 0, 7]));
/// assert!(!any_truthy(&vec!["", ""]));
/// ```
pub fn any_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    any(collection, |value| value.is_truthy())
}

/// Returns `true` if some element equals `target`.
///
/// Equality is `PartialEq` between values of the element type; no
/// conversion takes place. `false` for an absent collection.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::contains;
///
/// assert!(contains(&vec![1, 2, 3], &2));
///
/// let ages = HashMap::from([("ann", 31), ("ben", 27)]);
/// assert!(contains(&ages, &27));
/// assert!(!contains(&ages, &40));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    any(collection, |value| value == target)
}
