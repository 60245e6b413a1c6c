#![cfg(feature = "collection")]
//! Unit tests for extend and defaults.
//!
//! Tests cover:
//! - Override order across several sources
//! - Falsy values surviving defaults
//! - Returning the mutated target

use rstest::rstest;
use std::collections::{BTreeMap, HashMap};
use underbar::collection::{defaults, extend};

// =============================================================================
// extend
// =============================================================================

#[rstest]
fn extend_later_sources_win() {
    let mut target = BTreeMap::from([("a", 1)]);
    let first = BTreeMap::from([("a", 2), ("b", 2)]);
    let second = BTreeMap::from([("b", 3), ("c", 3)]);
    extend(&mut target, [&first, &second]);
    assert_eq!(target, BTreeMap::from([("a", 2), ("b", 3), ("c", 3)]));
}

#[rstest]
fn extend_with_no_sources_leaves_target() {
    let mut target = HashMap::from([("a", 1)]);
    let sources: [&HashMap<&str, i32>; 0] = [];
    extend(&mut target, sources);
    assert_eq!(target, HashMap::from([("a", 1)]));
}

#[rstest]
fn extend_returns_target_for_chaining() {
    let mut target: BTreeMap<&str, &str> = BTreeMap::new();
    let source = BTreeMap::from([("k", "v")]);
    let returned = extend(&mut target, [&source]);
    returned.insert("x", "y");
    assert_eq!(target.len(), 2);
}

#[rstest]
fn extend_overwrites_with_falsy_values() {
    let mut target = HashMap::from([("count", 7)]);
    let source = HashMap::from([("count", 0)]);
    extend(&mut target, [&source]);
    assert_eq!(target["count"], 0);
}

// =============================================================================
// defaults
// =============================================================================

#[rstest]
fn defaults_fills_missing_keys_only() {
    let mut options = BTreeMap::from([("flavor", "chocolate")]);
    let fallback = BTreeMap::from([("flavor", "vanilla"), ("sprinkles", "lots")]);
    defaults(&mut options, [&fallback]);
    assert_eq!(
        options,
        BTreeMap::from([("flavor", "chocolate"), ("sprinkles", "lots")])
    );
}

#[rstest]
#[case(0)]
#[case(-1)]
fn defaults_never_replaces_present_numbers(#[case] present: i32) {
    let mut target = HashMap::from([("n", present)]);
    let source = HashMap::from([("n", 99)]);
    defaults(&mut target, [&source]);
    assert_eq!(target["n"], present);
}

#[rstest]
fn defaults_keeps_false_and_empty_strings() {
    let mut flags = HashMap::from([("verbose", false)]);
    defaults(&mut flags, [&HashMap::from([("verbose", true)])]);
    assert!(!flags["verbose"]);

    let mut names = HashMap::from([("nick", String::new())]);
    defaults(&mut names, [&HashMap::from([("nick", "ace".to_string())])]);
    assert_eq!(names["nick"], "");
}

#[rstest]
fn defaults_replaces_none() {
    let mut target: BTreeMap<&str, Option<i32>> = BTreeMap::from([("a", None), ("b", Some(0))]);
    let source = BTreeMap::from([("a", Some(1)), ("b", Some(2)), ("c", None)]);
    defaults(&mut target, [&source]);
    assert_eq!(
        target,
        BTreeMap::from([("a", Some(1)), ("b", Some(0)), ("c", None)])
    );
}

#[rstest]
fn defaults_first_source_wins() {
    let mut target: HashMap<&str, i32> = HashMap::new();
    let first = HashMap::from([("k", 1)]);
    let second = HashMap::from([("k", 2), ("j", 2)]);
    defaults(&mut target, [&first, &second]);
    assert_eq!(target, HashMap::from([("k", 1), ("j", 2)]));
}
