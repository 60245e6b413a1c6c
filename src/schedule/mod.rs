//! Schedulers for deferred calls.
//!
//! [`delay`](crate::decorator::delay) does not own a timer. It hands a
//! [`Task`] to a [`Scheduler`] and returns the scheduler's handle, which
//! implements [`Cancel`]. Two schedulers are provided:
//!
//! - [`ThreadScheduler`]: one OS thread per deferred call
//! - [`TokioScheduler`] (feature `async`): one task on a tokio runtime
//!
//! Any other host timer can be plugged in by implementing [`Scheduler`].
//!
//! # Guarantees
//!
//! - A task runs no earlier than `wait` after it was scheduled.
//! - A task runs at most once.
//! - `cancel` returns `true` if and only if the task will never run.
//!   Cancelling after the task fired is a no-op that returns `false`.

use std::time::Duration;

use crate::error::ScheduleError;

mod state;
mod thread;

#[cfg(feature = "async")]
mod runtime;

pub use state::DelayState;
pub use thread::{ThreadHandle, ThreadScheduler};

#[cfg(feature = "async")]
pub use runtime::{TokioHandle, TokioScheduler};

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A handle that can discard a pending deferred call.
pub trait Cancel {
    /// Prevents the pending call from running.
    ///
    /// Returns `true` if the call was pending and will now never run, and
    /// `false` if it already fired or was already cancelled.
    fn cancel(&self) -> bool;

    /// Returns `true` while the call has neither fired nor been cancelled.
    fn is_pending(&self) -> bool;
}

/// A timer facility that runs a task after a delay.
pub trait Scheduler {
    /// The handle returned for each scheduled task.
    type Handle: Cancel;

    /// Schedules `task` to run once, no earlier than `wait` from now.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if the scheduler cannot accept the task.
    fn schedule(&self, wait: Duration, task: Task) -> Result<Self::Handle, ScheduleError>;
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    type Handle = S::Handle;

    fn schedule(&self, wait: Duration, task: Task) -> Result<Self::Handle, ScheduleError> {
        (**self).schedule(wait, task)
    }
}
