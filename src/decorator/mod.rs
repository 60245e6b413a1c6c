//! Function decorators.
//!
//! Each decorator takes a function and returns a wrapper with altered
//! invocation semantics:
//!
//! - [`once`]: run on the first call only, then return the cached result
//! - [`memoize`], [`memoize_by`]: cache results per argument
//! - [`throttle`]: run at most once per time window
//! - [`delay`]: run once after a wait, through a
//!   [`Scheduler`](crate::schedule::Scheduler)
//!
//! Wrappers own their state. Two wrappers built from the same function
//! share nothing, and none of the synchronous wrappers is `Sync`.
//!
//! # Examples
//!
//! ```rust
//! use underbar::decorator::{memoize, once};
//!
//! let square = memoize(|number: &u64| number * number);
//! assert_eq!(square.call(12), 144);
//!
//! let greet = once(|name: String| format!("hello, {name}"));
//! assert_eq!(greet.call("ada".to_string()), "hello, ada");
//! assert_eq!(greet.call("grace".to_string()), "hello, ada");
//! ```

mod delay;
mod memoize;
mod once;
mod throttle;

pub use delay::delay;
pub use memoize::{CacheHasher, Memoize, MemoizeBy, memoize, memoize_by};
pub use once::{Once, once};
pub use throttle::{Clock, SystemClock, Throttle, throttle};
