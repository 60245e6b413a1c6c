//! Rate limiting: run a function at most once per time window.
//!
//! A [`Throttle`] runs its function on the first call and then ignores
//! calls until `window` has elapsed since the last run, answering them
//! with the most recent result instead.
//!
//! Time is read from a [`Clock`], [`SystemClock`] by default, so callers
//! can substitute a manual clock.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// A source of the current time.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// The monotonic system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// A function wrapper that runs at most once per window.
pub struct Throttle<F, A, R, C = SystemClock> {
    function: F,
    window: Duration,
    clock: C,
    last: RefCell<Option<(Instant, R)>>,
    arguments: PhantomData<fn(A)>,
}

/// Wraps `function` so that it runs at most once per `window`.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use underbar::decorator::throttle;
///
/// let save = throttle(|document: &str| document.len(), Duration::from_secs(60));
/// assert_eq!(save.call("draft"), 5);
/// // Within the window the previous result is returned.
/// assert_eq!(save.call("final draft"), 5);
/// ```
#[inline]
pub fn throttle<F, A, R>(function: F, window: Duration) -> Throttle<F, A, R>
where
    F: Fn(A) -> R,
{
    Throttle::with_clock(function, window, SystemClock)
}

impl<F, A, R, C> Throttle<F, A, R, C>
where
    F: Fn(A) -> R,
    C: Clock,
{
    /// Creates a throttle that reads time from `clock`.
    pub fn with_clock(function: F, window: Duration, clock: C) -> Self {
        Self {
            function,
            window,
            clock,
            last: RefCell::new(None),
            arguments: PhantomData,
        }
    }

    /// Calls the wrapper.
    ///
    /// Runs the function if it has never run or if `window` has elapsed
    /// since it last ran; otherwise returns the previous result and drops
    /// `arguments`.
    pub fn call(&self, arguments: A) -> R
    where
        R: Clone,
    {
        let now = self.clock.now();
        if let Some((ran_at, result)) = &*self.last.borrow()
            && now.saturating_duration_since(*ran_at) < self.window
        {
            tracing::trace!("throttle: call suppressed");
            return result.clone();
        }
        let result = (self.function)(arguments);
        *self.last.borrow_mut() = Some((now, result.clone()));
        result
    }

    /// Returns the configured window.
    pub const fn window(&self) -> Duration {
        self.window
    }
}
