#![cfg(feature = "decorator")]
//! Unit tests for the memoize decorators.
//!
//! Tests cover:
//! - One computation per distinct argument
//! - Falsy results as cache hits
//! - Composite keys through memoize_by
//! - Recursive memoized functions
//! - Independence of separate wrappers

use rstest::rstest;
use std::cell::{Cell, OnceCell};
use underbar::decorator::{Memoize, memoize, memoize_by};

// =============================================================================
// memoize
// =============================================================================

#[rstest]
fn memoize_computes_each_argument_once() {
    let calls = Cell::new(0);
    let square = memoize(|number: &i64| {
        calls.set(calls.get() + 1);
        number * number
    });

    assert_eq!(square.call(4), 16);
    assert_eq!(square.call(4), 16);
    assert_eq!(square.call(5), 25);
    assert_eq!(calls.get(), 2);
    assert_eq!(square.len(), 2);
}

#[rstest]
#[case(0)]
#[case(1)]
fn memoize_caches_falsy_results(#[case] argument: u32) {
    let calls = Cell::new(0);
    let always_false = memoize(|_: &u32| {
        calls.set(calls.get() + 1);
        false
    });
    assert!(!always_false.call(argument));
    assert!(!always_false.call(argument));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn memoize_caches_empty_strings() {
    let calls = Cell::new(0);
    let blank = memoize(|_: &String| {
        calls.set(calls.get() + 1);
        String::new()
    });
    assert_eq!(blank.call("a".to_string()), "");
    assert_eq!(blank.call("a".to_string()), "");
    assert_eq!(calls.get(), 1);
    assert!(blank.is_cached(&"a".to_string()));
    assert!(!blank.is_cached(&"b".to_string()));
}

#[rstest]
fn memoize_wrappers_do_not_share_caches() {
    let calls = Cell::new(0);
    let function = |number: &i32| {
        calls.set(calls.get() + 1);
        *number
    };
    let first = memoize(function);
    let second = memoize(function);

    first.call(1);
    second.call(1);
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn memoize_supports_recursion() {
    type Fibonacci<'a> = Memoize<Box<dyn Fn(&u64) -> u64 + 'a>, u64, u64>;

    let slot: OnceCell<&Fibonacci<'_>> = OnceCell::new();
    let calls = Cell::new(0);
    let fibonacci: &Fibonacci<'_> = Box::leak(Box::<Fibonacci<'_>>::new(memoize(Box::new(|number: &u64| {
        calls.set(calls.get() + 1);
        let Some(itself) = slot.get() else {
            return 0;
        };
        if *number < 2 {
            *number
        } else {
            itself.call(number - 1) + itself.call(number - 2)
        }
    }))));
    let _ = slot.set(fibonacci);

    assert_eq!(fibonacci.call(50), 12_586_269_025);
    assert_eq!(calls.get(), 51);
}

// =============================================================================
// memoize_by
// =============================================================================

#[rstest]
fn memoize_by_uses_composite_key() {
    let calls = Cell::new(0);
    let area = memoize_by(
        |&(width, height): &(u32, u32)| {
            calls.set(calls.get() + 1);
            width * height
        },
        |&(width, height): &(u32, u32)| format!("{width}x{height}"),
    );

    assert_eq!(area.call((2, 3)), 6);
    assert_eq!(area.call((2, 3)), 6);
    assert_eq!(area.call((3, 2)), 6);
    assert_eq!(calls.get(), 2);
    assert_eq!(area.len(), 2);
}

#[rstest]
fn memoize_by_with_coarse_key_reuses_results() {
    let by_first_letter = memoize_by(
        |word: &String| word.to_uppercase(),
        |word: &String| word.chars().next(),
    );
    assert_eq!(by_first_letter.call("apple".to_string()), "APPLE");
    assert_eq!(by_first_letter.call("avocado".to_string()), "APPLE");
    assert_eq!(by_first_letter.call("berry".to_string()), "BERRY");
}

#[rstest]
fn memoize_by_is_empty_before_first_call() {
    let doubled = memoize_by(|value: &i32| value * 2, |value: &i32| *value);
    assert!(doubled.is_empty());
    assert_eq!(doubled.call(21), 42);
    assert!(!doubled.is_empty());
}
