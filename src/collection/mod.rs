//! Generic operations over sequences and mappings.
//!
//! This module provides the iteration kernel and everything built on it:
//!
//! - [`Collection`], [`each`], [`index_of`]: the kernel
//! - [`filter`], [`reject`], [`every`], [`any`], [`any_truthy`], [`contains`]: predicates
//! - [`map`], [`pluck`], [`invoke`], [`invoke_with`], [`uniq`], [`uniq_by`],
//!   [`first`], [`first_n`], [`last`], [`last_n`], [`shuffle`], [`sort_by`]: transformations
//! - [`reduce`], [`reduce_default`]: reduction
//! - [`zip`], [`zip_many`], [`flatten`], [`intersection`], [`difference`]: arrays
//! - [`extend`], [`defaults`]: merging
//!
//! # Shapes
//!
//! A collection is either a sequence (slices, arrays, `Vec`, `VecDeque`),
//! visited in index order, or a mapping (`HashMap`, `BTreeMap`, and with the
//! `json` feature `serde_json::Map`), visited in its enumeration order.
//! Every operation accepts either shape, and `Option<C>` stands for a
//! collection that may be absent.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use underbar::collection::{any, every, map, reduce};
//!
//! let inventory = HashMap::from([("apples", 3), ("pears", 0)]);
//! assert!(any(&inventory, |count| *count == 0));
//! assert!(!every(&inventory, |count| *count));
//!
//! let total = reduce(&inventory, |total, count| total + count, 0);
//! assert_eq!(total, 3);
//!
//! let mut doubled = map(&inventory, |count| count * 2);
//! doubled.sort_unstable();
//! assert_eq!(doubled, vec![0, 6]);
//! ```

mod array;
mod kernel;
mod merge;
mod predicate;
mod record;
mod reduce;
mod transform;
mod truthy;

#[cfg(feature = "json")]
pub mod json;

pub use array::{Nested, difference, flatten, intersection, zip, zip_many};
pub use kernel::{Collection, each, index_of};
pub use merge::{defaults, extend};
pub use predicate::{any, any_truthy, contains, every, filter, reject};
pub use record::{Absent, Mapping, Record};
pub use reduce::{reduce, reduce_default};
pub use transform::{
    Invocable, first, first_n, invoke, invoke_with, last, last_n, map, pluck, shuffle,
    shuffle_with, sort_by, uniq, uniq_by,
};
pub use truthy::Truthy;
