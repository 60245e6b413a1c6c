//! Records, mappings, and absence.
//!
//! - [`Record`]: look up a named field (used by `pluck`)
//! - [`Mapping`]: a keyed collection that can be read and written (used by
//!   `extend` and `defaults`)
//! - [`Absent`]: whether a stored value counts as missing (used by
//!   `defaults`)
//!
//! Absence is narrower than falsiness: only `None` (and JSON
//! `null` with the `json` feature) is absent. `0`, `false`, and `""` are
//! present values and are never replaced by `defaults`.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::kernel::Collection;

/// A value with named fields.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::Record;
///
/// let person = HashMap::from([("name".to_string(), "Ada")]);
/// assert_eq!(person.field("name"), Some(&"Ada"));
/// assert_eq!(person.field("age"), None);
/// ```
pub trait Record {
    /// The type of the field values.
    type Field;

    /// Returns the field with the given name, or `None` if it is missing.
    fn field(&self, name: &str) -> Option<&Self::Field>;
}

impl<K, V, S> Record for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<K, V> Record for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<R: Record + ?Sized> Record for &R {
    type Field = R::Field;

    fn field(&self, name: &str) -> Option<&R::Field> {
        (**self).field(name)
    }
}

/// A keyed collection that supports lookup and assignment.
pub trait Mapping: Collection<Key: Sized> {
    /// Returns the value stored under `key`, if any.
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Item>;

    /// Stores `value` under `key`, replacing any previous value.
    fn assign(&mut self, key: Self::Key, value: Self::Item);
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// Whether a stored value counts as missing.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Absent;
///
/// assert!(None::<i32>.is_absent());
/// assert!(!Some(0).is_absent());
/// assert!(!0_i32.is_absent());
/// assert!(!false.is_absent());
/// ```
pub trait Absent {
    /// Returns `true` if the value should be treated as missing.
    fn is_absent(&self) -> bool;
}

impl<T> Absent for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

macro_rules! always_present {
    ($($present:ty),* $(,)?) => {
        $(
            impl Absent for $present {
                #[inline]
                fn is_absent(&self) -> bool {
                    false
                }
            }
        )*
    };
}

always_present!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    &str,
);

impl<T> Absent for Vec<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T: Absent + ?Sized> Absent for Box<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}
