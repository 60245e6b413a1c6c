#![cfg(feature = "collection")]
//! Unit tests for transformation operations.
//!
//! Tests cover:
//! - map over sequences, mappings, and absent collections
//! - pluck with missing fields
//! - invoke by method name and invoke_with
//! - uniq / uniq_by first-occurrence semantics
//! - first / last and their counted forms
//! - shuffle and sort_by

use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;
use std::collections::{BTreeMap, HashMap};
use underbar::collection::{
    Invocable, first, first_n, invoke, invoke_with, last, last_n, map, pluck, shuffle,
    shuffle_with, sort_by, uniq, uniq_by,
};
use underbar::error::InvokeError;

// =============================================================================
// map
// =============================================================================

#[rstest]
fn map_preserves_order_and_length() {
    let numbers = vec![1, 2, 3];
    assert_eq!(map(&numbers, |number| number * 10), vec![10, 20, 30]);
}

#[rstest]
fn map_over_mapping_follows_enumeration_order() {
    let prices = BTreeMap::from([("b", 2.0), ("a", 1.5)]);
    assert_eq!(map(&prices, |price| price * 2.0), vec![3.0, 4.0]);
}

#[rstest]
fn map_over_absent_is_empty() {
    let absent: Option<Vec<i32>> = None;
    assert!(map(&absent, |number| *number).is_empty());
}

#[rstest]
fn map_can_change_element_type() {
    let lengths = map(&["one", "three"], |word| word.len());
    assert_eq!(lengths, vec![3, 5]);
}

// =============================================================================
// pluck
// =============================================================================

#[rstest]
fn pluck_extracts_named_field() {
    let people = vec![
        HashMap::from([("name", "moe"), ("age", "40")]),
        HashMap::from([("name", "larry"), ("age", "50")]),
        HashMap::from([("name", "curly"), ("age", "60")]),
    ];
    assert_eq!(
        pluck(&people, "name"),
        vec![Some("moe"), Some("larry"), Some("curly")]
    );
}

#[rstest]
fn pluck_reports_missing_fields_as_none() {
    let records = vec![
        BTreeMap::from([("id".to_string(), 1)]),
        BTreeMap::new(),
        BTreeMap::from([("id".to_string(), 3)]),
    ];
    assert_eq!(pluck(&records, "id"), vec![Some(1), None, Some(3)]);
}

#[rstest]
fn pluck_on_empty_is_empty() {
    let records: Vec<HashMap<String, i32>> = Vec::new();
    assert!(pluck(&records, "id").is_empty());
}

// =============================================================================
// invoke
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Tally(Vec<u32>);

impl Invocable<()> for Tally {
    type Output = Vec<u32>;

    fn invoke_method(&self, method: &str, _: &()) -> Result<Vec<u32>, InvokeError> {
        match method {
            "sorted" => {
                let mut values = self.0.clone();
                values.sort_unstable();
                Ok(values)
            }
            "reversed" => Ok(self.0.iter().rev().copied().collect()),
            other => Err(InvokeError::unknown_method(other)),
        }
    }
}

impl Invocable<str> for Tally {
    type Output = String;

    fn invoke_method(&self, method: &str, separator: &str) -> Result<String, InvokeError> {
        match method {
            "join" => Ok(self
                .0
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(separator)),
            other => Err(InvokeError::unknown_method(other)),
        }
    }
}

#[rstest]
fn invoke_calls_method_on_each_element() {
    let tallies = vec![Tally(vec![5, 1, 7]), Tally(vec![3, 2, 1])];
    let sorted = invoke(&tallies, "sorted", &()).unwrap();
    assert_eq!(sorted, vec![vec![1, 5, 7], vec![1, 2, 3]]);
}

#[rstest]
fn invoke_forwards_arguments() {
    let tallies = vec![Tally(vec![1, 2]), Tally(vec![3])];
    let joined = invoke(&tallies, "join", "-").unwrap();
    assert_eq!(joined, vec!["1-2".to_string(), "3".to_string()]);
}

#[rstest]
fn invoke_reports_unknown_method() {
    let tallies = vec![Tally(vec![1])];
    let error = invoke(&tallies, "explode", &()).unwrap_err();
    assert_eq!(error, InvokeError::unknown_method("explode"));
}

#[rstest]
fn invoke_on_empty_never_dispatches() {
    let tallies: Vec<Tally> = Vec::new();
    assert_eq!(invoke(&tallies, "explode", &()), Ok(Vec::<Vec<u32>>::new()));
}

#[rstest]
fn invoke_with_uses_element_as_receiver() {
    let words = vec!["ab".to_string(), "c".to_string()];
    let repeated = invoke_with(&words, |word, times| word.repeat(*times), &3);
    assert_eq!(repeated, vec!["ababab", "ccc"]);
}

// =============================================================================
// uniq
// =============================================================================

#[rstest]
#[case(vec![1, 2, 1, 3, 1, 4], vec![1, 2, 3, 4])]
#[case(vec![4, 4, 4], vec![4])]
#[case(vec![], vec![])]
fn uniq_keeps_first_occurrences(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    assert_eq!(uniq(&input), expected);
}

#[rstest]
fn uniq_compares_string_forms() {
    let labels = vec!["a".to_string(), "b".to_string(), "a".to_string()];
    assert_eq!(uniq(&labels), vec!["a".to_string(), "b".to_string()]);
}

#[rstest]
fn uniq_by_uses_derived_key() {
    let numbers = vec![-2, 1, 2, -1, 3];
    assert_eq!(uniq_by(&numbers, |number: &i32| number.abs()), vec![-2, 1, 3]);
}

// =============================================================================
// first / last
// =============================================================================

#[rstest]
fn first_and_last_of_sequence() {
    let numbers = [1, 2, 3];
    assert_eq!(first(&numbers), Some(&1));
    assert_eq!(last(&numbers), Some(&3));
}

#[rstest]
fn first_and_last_of_empty_are_none() {
    let empty: [i32; 0] = [];
    assert_eq!(first(&empty), None);
    assert_eq!(last(&empty), None);
}

#[rstest]
#[case(0, vec![])]
#[case(2, vec![1, 2])]
#[case(3, vec![1, 2, 3])]
#[case(99, vec![1, 2, 3])]
fn first_n_takes_prefix(#[case] count: usize, #[case] expected: Vec<i32>) {
    assert_eq!(first_n(&[1, 2, 3], count), expected.as_slice());
}

#[rstest]
#[case(0, vec![])]
#[case(2, vec![2, 3])]
#[case(99, vec![1, 2, 3])]
fn last_n_takes_suffix(#[case] count: usize, #[case] expected: Vec<i32>) {
    assert_eq!(last_n(&[1, 2, 3], count), expected.as_slice());
}

// =============================================================================
// shuffle / sort_by
// =============================================================================

#[rstest]
fn shuffle_is_a_permutation() {
    let mut deck: Vec<u32> = (0..52).collect();
    shuffle(&mut deck);
    deck.sort_unstable();
    assert_eq!(deck, (0..52).collect::<Vec<_>>());
}

#[rstest]
fn shuffle_with_seeded_generator_is_reproducible() {
    let mut left: Vec<u32> = (0..20).collect();
    let mut right = left.clone();
    shuffle_with(&mut left, &mut StdRng::seed_from_u64(7));
    shuffle_with(&mut right, &mut StdRng::seed_from_u64(7));
    assert_eq!(left, right);
}

#[rstest]
fn shuffle_of_empty_and_single_is_identity() {
    let mut empty: [u8; 0] = [];
    assert!(shuffle(&mut empty).is_empty());
    let mut single = [9];
    assert_eq!(shuffle(&mut single), &[9]);
}

#[rstest]
fn sort_by_is_stable() {
    let people = vec![("moe", 40), ("larry", 50), ("curly", 40)];
    let sorted = sort_by(&people, |person| person.1);
    assert_eq!(sorted, vec![("moe", 40), ("curly", 40), ("larry", 50)]);
}

#[rstest]
fn sort_by_over_mapping_sorts_values() {
    let scores = HashMap::from([("a", 3), ("b", 1), ("c", 2)]);
    assert_eq!(sort_by(&scores, |score| *score), vec![1, 2, 3]);
}
