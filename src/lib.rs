//! # underbar
//!
//! A functional utility library for Rust providing generic collection
//! operations and function decorators.
//!
//! ## Overview
//!
//! The library is organised around a small iteration kernel. Every other
//! collection operation is expressed through it, so all of them agree on
//! visiting order and on how absent collections behave.
//!
//! - **Iteration Kernel**: [`each`](collection::each), [`index_of`](collection::index_of)
//! - **Predicates**: `filter`, `reject`, `every`, `any`, `contains`
//! - **Transformations**: `map`, `pluck`, `invoke`, `uniq`, `first`, `last`, `shuffle`, `sort_by`
//! - **Reduction**: `reduce`
//! - **Arrays**: `zip`, `flatten`, `intersection`, `difference`
//! - **Merging**: `extend`, `defaults`
//! - **Decorators**: `once`, `memoize`, `throttle`, `delay`
//!
//! ## Feature Flags
//!
//! - `collection`: Collection kernel and every operation built on it
//! - `decorator`: Function decorators and the thread scheduler
//! - `async`: Tokio-backed scheduler for `delay`
//! - `json`: `serde_json` values as collections, records, and mappings
//! - `fxhash` / `ahash`: Faster hashers for memoization caches
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let even = filter(&numbers, |number| number % 2 == 0);
//! assert_eq!(even, vec![2, 4]);
//!
//! let total = reduce(&numbers, |total: i32, number| total + number, 0);
//! assert_eq!(total, 15);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits, and functions.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "decorator")]
    pub use crate::decorator::*;

    #[cfg(feature = "decorator")]
    pub use crate::schedule::*;

    pub use crate::error::*;
}

pub mod error;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "decorator")]
pub mod decorator;

#[cfg(feature = "decorator")]
pub mod schedule;
