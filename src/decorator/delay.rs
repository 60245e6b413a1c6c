//! Deferred invocation.

use std::time::Duration;

use crate::error::ScheduleError;
use crate::schedule::Scheduler;

/// Runs `function(arguments)` once, no earlier than `wait` from now.
///
/// The timer belongs to `scheduler`; the returned handle can cancel the
/// call while it is still pending. The function's return value is
/// discarded. A zero `wait` still defers the call: it never runs before
/// `delay` returns on the calling thread's stack.
///
/// # Errors
///
/// Returns [`ScheduleError`] if the scheduler refuses the call.
///
/// # Examples
///
/// ```rust
/// use std::sync::mpsc;
/// use std::time::Duration;
/// use underbar::decorator::delay;
/// use underbar::schedule::ThreadScheduler;
///
/// let (sender, receiver) = mpsc::channel();
/// let handle = delay(
///     &ThreadScheduler::new(),
///     move |(left, right): (i32, i32)| sender.send(left + right),
///     Duration::from_millis(5),
///     (2, 3),
/// )
/// .unwrap();
///
/// handle.join().unwrap();
/// assert_eq!(receiver.recv().unwrap(), 5);
/// ```
pub fn delay<S, F, A, R>(
    scheduler: &S,
    function: F,
    wait: Duration,
    arguments: A,
) -> Result<S::Handle, ScheduleError>
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
{
    tracing::debug!(?wait, "delay: scheduling call");
    scheduler.schedule(
        wait,
        Box::new(move || {
            function(arguments);
        }),
    )
}
