//! Merging mappings: `extend` and `defaults`.
//!
//! Both mutate the target in place and hand it back, walking each source
//! with the kernel so that sources are applied in the order given.

use super::kernel::{Collection, each};
use super::record::{Absent, Mapping};

/// Copies every entry of every source onto `target`.
///
/// Later sources override earlier ones, and all of them override the
/// target's existing values.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::extend;
///
/// let mut target = BTreeMap::from([("a", 1)]);
/// let first = BTreeMap::from([("b", 2)]);
/// let second = BTreeMap::from([("a", 3)]);
/// extend(&mut target, [&first, &second]);
/// assert_eq!(target, BTreeMap::from([("a", 3), ("b", 2)]));
/// ```
pub fn extend<'s, M, S, I>(target: &mut M, sources: I) -> &mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Item: Clone,
    S: Collection<Item = M::Item, Key = M::Key> + ?Sized + 's,
    I: IntoIterator<Item = &'s S>,
{
    for source in sources {
        each(source, |value, key, _| target.assign(key.clone(), value.clone()));
    }
    target
}

/// Fills in entries of `target` that are missing or [`Absent`].
///
/// Existing values are never overwritten, including falsy ones such as
/// `0`, `false`, or `""`. When several sources provide the same key, the
/// first one wins.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::defaults;
///
/// let mut target = BTreeMap::from([("a", 1)]);
/// let fallback = BTreeMap::from([("a", 3), ("b", 2)]);
/// defaults(&mut target, [&fallback]);
/// assert_eq!(target, BTreeMap::from([("a", 1), ("b", 2)]));
/// ```
pub fn defaults<'s, M, S, I>(target: &mut M, sources: I) -> &mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Item: Clone + Absent,
    S: Collection<Item = M::Item, Key = M::Key> + ?Sized + 's,
    I: IntoIterator<Item = &'s S>,
{
    for source in sources {
        each(source, |value, key, _| {
            if target.lookup(key).is_none_or(Absent::is_absent) {
                target.assign(key.clone(), value.clone());
            }
        });
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_extend_from_other_mapping_type() {
        let mut target: HashMap<&str, i32> = HashMap::new();
        let source = std::collections::BTreeMap::from([("x", 1)]);
        extend(&mut target, [&source]);
        assert_eq!(target.get("x"), Some(&1));
    }

    #[test]
    fn test_defaults_fills_absent_option() {
        let mut target = HashMap::from([("a", None), ("b", Some(0))]);
        let source = HashMap::from([("a", Some(5)), ("b", Some(9))]);
        defaults(&mut target, [&source]);
        assert_eq!(target["a"], Some(5));
        assert_eq!(target["b"], Some(0));
    }

    #[test]
    fn test_first_default_source_wins() {
        let mut target: HashMap<&str, i32> = HashMap::new();
        let first = HashMap::from([("k", 1)]);
        let second = HashMap::from([("k", 2)]);
        defaults(&mut target, [&first, &second]);
        assert_eq!(target["k"], 1);
    }
}
