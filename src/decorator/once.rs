//! Single-invocation wrapper.
//!
//! This module provides the [`Once`] wrapper returned by [`once`]. The first
//! call runs the wrapped function and caches its result; every later call
//! returns the cached result without running the function again, whatever
//! arguments it is given.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use underbar::decorator::once;
//!
//! let launches = Cell::new(0);
//! let launch = once(|(target, fuel): (&str, u32)| {
//!     launches.set(launches.get() + 1);
//!     format!("{target}:{fuel}")
//! });
//!
//! assert_eq!(launch.call(("moon", 10)), "moon:10");
//! assert_eq!(launch.call(("mars", 99)), "moon:10");
//! assert_eq!(launches.get(), 1);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;
use std::marker::PhantomData;

/// The internal state of a [`Once`] wrapper.
#[derive(Debug)]
enum OnceState<F, R> {
    /// Not called yet. Holds the wrapped function.
    Pending(F),
    /// Called. Holds the cached result.
    Called(R),
    /// The wrapped function is running, or panicked while running.
    Poisoned,
}

/// A function wrapper that runs its function at most once.
///
/// Arguments are passed as a single value; use a tuple for several
/// arguments, including whatever receiver the function needs.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `A` - The argument type
/// * `R` - The result type, cloned out of the cache on every call
///
/// # Thread Safety
///
/// This type is NOT thread-safe. The cache belongs to the wrapper and is
/// never shared.
pub struct Once<F, A, R> {
    state: RefCell<OnceState<F, R>>,
    arguments: PhantomData<fn(A)>,
}

/// Wraps `function` so that it runs on the first call only.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::once;
///
/// let initialize = once(|seed: u64| seed * 2);
/// assert_eq!(initialize.call(21), 42);
/// assert_eq!(initialize.call(1), 42);
/// ```
#[inline]
pub fn once<F, A, R>(function: F) -> Once<F, A, R>
where
    F: FnOnce(A) -> R,
{
    Once::new(function)
}

impl<F, A, R> Once<F, A, R>
where
    F: FnOnce(A) -> R,
{
    /// Creates a new wrapper around `function`.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(function)),
            arguments: PhantomData,
        }
    }

    /// Calls the wrapper.
    ///
    /// The first call runs the wrapped function with `arguments` and caches
    /// its result. Later calls ignore `arguments` and return a clone of the
    /// cached result.
    ///
    /// # Panics
    ///
    /// - If the wrapped function panics; the wrapper is then poisoned.
    /// - If the wrapper is poisoned, including when the wrapped function
    ///   calls its own wrapper.
    pub fn call(&self, arguments: A) -> R
    where
        R: Clone,
    {
        {
            let state = self.state.borrow();
            match &*state {
                OnceState::Called(result) => return result.clone(),
                OnceState::Poisoned => panic!("Once wrapper has been poisoned"),
                OnceState::Pending(_) => {}
            }
        }

        let function = {
            let mut state = self.state.borrow_mut();
            let OnceState::Pending(function) =
                std::mem::replace(&mut *state, OnceState::Poisoned)
            else {
                unreachable!()
            };
            function
        };

        tracing::debug!("once: running wrapped function");
        let result = function(arguments);
        *self.state.borrow_mut() = OnceState::Called(result.clone());
        result
    }
}

impl<F, A, R> Once<F, A, R> {
    /// Returns the cached result, or `None` if the wrapper has not
    /// completed a call.
    pub fn result(&self) -> Option<Ref<'_, R>> {
        Ref::filter_map(self.state.borrow(), |state| match state {
            OnceState::Called(result) => Some(result),
            _ => None,
        })
        .ok()
    }

    /// Returns `true` once the wrapped function has run to completion.
    pub fn is_called(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Called(_))
    }

    /// Returns `true` if the wrapped function panicked.
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Poisoned)
    }
}

impl<F, A, R: fmt::Debug> fmt::Debug for Once<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            OnceState::Pending(_) => formatter.write_str("Once(<pending>)"),
            OnceState::Called(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Poisoned => formatter.write_str("Once(<poisoned>)"),
        }
    }
}

static_assertions::assert_not_impl_any!(Once<fn(i32) -> i32, i32, i32>: Sync);
