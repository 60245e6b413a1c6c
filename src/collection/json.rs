//! `serde_json` values as collections, records, and mappings.
//!
//! A [`Value`] decides its shape at runtime: arrays walk as sequences
//! (keyed by [`JsonKey::Index`]), objects walk as mappings (keyed by
//! [`JsonKey::Name`]), and every other value walks as an empty collection.
//! A [`Map`] is always a mapping and supports `extend` and `defaults`.
//!
//! Truthiness follows the usual dynamic-language rules: `null`, `false`,
//! `0`, and `""` are falsy; arrays and objects are truthy even when empty.
//! Only `null` is [`Absent`].
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use underbar::collection::{json::uniq_json, pluck, filter};
//!
//! let people = json!([{"name": "moe", "age": 40}, {"name": "curly", "age": 0}]);
//! assert_eq!(pluck(&people, "name"), vec![Some(json!("moe")), Some(json!("curly"))]);
//! assert_eq!(filter(&people, |person| person["age"].clone()).len(), 1);
//!
//! let mixed = vec![json!(1), json!("1"), json!(2)];
//! assert_eq!(uniq_json(&mixed), vec![json!(1), json!(2)]);
//! ```

use std::borrow::Cow;
use std::ops::ControlFlow;

use serde_json::{Map, Value};

use super::kernel::Collection;
use super::record::{Absent, Mapping, Record};
use super::transform::uniq_by;
use super::truthy::Truthy;

/// The key reported when walking a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JsonKey {
    /// Position within an array.
    Index(usize),
    /// Property name within an object.
    Name(String),
}

impl Collection for Value {
    type Item = Self;
    type Key = JsonKey;

    fn try_each<B, F>(&self, mut iterator: F) -> ControlFlow<B>
    where
        F: FnMut(&Self, &JsonKey, &Self) -> ControlFlow<B>,
    {
        match self {
            Self::Array(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    iterator(element, &JsonKey::Index(index), self)?;
                }
            }
            Self::Object(properties) => {
                for (name, property) in properties {
                    iterator(property, &JsonKey::Name(name.clone()), self)?;
                }
            }
            _ => {}
        }
        ControlFlow::Continue(())
    }

    fn fold<A, F>(&self, initial: A, mut combine: F) -> A
    where
        F: FnMut(A, &Self, &JsonKey) -> A,
    {
        match self {
            Self::Array(elements) => {
                elements
                    .iter()
                    .enumerate()
                    .fold(initial, |accumulator, (index, element)| {
                        combine(accumulator, element, &JsonKey::Index(index))
                    })
            }
            Self::Object(properties) => {
                properties
                    .iter()
                    .fold(initial, |accumulator, (name, property)| {
                        combine(accumulator, property, &JsonKey::Name(name.clone()))
                    })
            }
            _ => initial,
        }
    }

    fn size(&self) -> usize {
        match self {
            Self::Array(elements) => elements.len(),
            Self::Object(properties) => properties.len(),
            _ => 0,
        }
    }
}

impl Collection for Map<String, Value> {
    type Item = Value;
    type Key = String;

    fn try_each<B, F>(&self, mut iterator: F) -> ControlFlow<B>
    where
        F: FnMut(&Value, &String, &Self) -> ControlFlow<B>,
    {
        for (name, property) in self {
            iterator(property, name, self)?;
        }
        ControlFlow::Continue(())
    }

    fn fold<A, F>(&self, initial: A, mut combine: F) -> A
    where
        F: FnMut(A, &Value, &String) -> A,
    {
        self.iter()
            .fold(initial, |accumulator, (name, property)| combine(accumulator, property, name))
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl Mapping for Map<String, Value> {
    fn lookup(&self, key: &String) -> Option<&Value> {
        self.get(key)
    }

    fn assign(&mut self, key: String, value: Value) {
        self.insert(key, value);
    }
}

impl Record for Value {
    type Field = Self;

    fn field(&self, name: &str) -> Option<&Self> {
        self.as_object().and_then(|properties| properties.get(name))
    }
}

impl Record for Map<String, Value> {
    type Field = Value;

    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.as_f64().is_some_and(|float| float.is_truthy()),
            Self::String(text) => !text.is_empty(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }
}

impl Absent for Value {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

/// Converts a value to the string a dynamic language would produce.
///
/// Numbers print without a trailing `.0`, strings print unquoted, arrays
/// join their elements with commas, and objects print as
/// `[object Object]`.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use underbar::collection::json::coerce_string;
///
/// assert_eq!(coerce_string(&json!(1.0)), "1");
/// assert_eq!(coerce_string(&json!("1")), "1");
/// assert_eq!(coerce_string(&json!([1, [2, "x"]])), "1,2,x");
/// assert_eq!(coerce_string(&json!(null)), "null");
/// ```
pub fn coerce_string(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(flag) => Cow::Borrowed(if *flag { "true" } else { "false" }),
        Value::Number(number) => match (number.as_i64(), number.as_u64(), number.as_f64()) {
            (Some(signed), _, _) => Cow::Owned(signed.to_string()),
            (_, Some(unsigned), _) => Cow::Owned(unsigned.to_string()),
            // Adding positive zero turns -0.0 into 0.0, which prints as "0".
            (_, _, Some(float)) => Cow::Owned((float + 0.0).to_string()),
            _ => Cow::Owned(number.to_string()),
        },
        Value::String(text) => Cow::Borrowed(text.as_str()),
        Value::Array(elements) => Cow::Owned(
            elements
                .iter()
                .map(|element| match element {
                    Value::Null => Cow::Borrowed(""),
                    other => coerce_string(other),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Borrowed("[object Object]"),
    }
}

/// Returns each value once, comparing by [`coerce_string`].
///
/// Values with the same string form collide, so `1` and `"1"` count as the
/// same value and the first one is kept.
pub fn uniq_json<C>(sequence: &C) -> Vec<Value>
where
    C: Collection<Item = Value> + ?Sized,
{
    uniq_by(sequence, |value| coerce_string(value).into_owned())
}

/// Flattens nested JSON arrays into a single sequence, depth first.
///
/// A value that is not an array flattens to itself.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use underbar::collection::json::flatten_json;
///
/// let flat = flatten_json(&json!([1, [2], [3, [[4]]]]));
/// assert_eq!(flat, vec![json!(1), json!(2), json!(3), json!(4)]);
/// ```
pub fn flatten_json(value: &Value) -> Vec<Value> {
    let mut result = Vec::new();
    flatten_value_into(value, &mut result);
    result
}

fn flatten_value_into(value: &Value, result: &mut Vec<Value>) {
    match value {
        Value::Array(elements) => {
            for element in elements {
                flatten_value_into(element, result);
            }
        }
        other => result.push(other.clone()),
    }
}
