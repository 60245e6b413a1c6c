//! A scheduler that parks one OS thread per deferred call.

use std::borrow::Cow;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use super::{Cancel, DelayState, Scheduler, Task};
use crate::error::ScheduleError;

/// Default name given to timer threads.
const THREAD_NAME: &str = "underbar-delay";

/// Runs each task on a dedicated thread that sleeps until the deadline.
///
/// Cancelling wakes the sleeping thread immediately, so a cancelled call
/// does not keep a thread alive for the rest of its wait.
///
/// # Examples
///
/// ```rust
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
/// use underbar::schedule::{Scheduler, ThreadScheduler};
///
/// let ran = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&ran);
/// let handle = ThreadScheduler::new()
///     .schedule(Duration::from_millis(1), Box::new(move || flag.store(true, Ordering::SeqCst)))
///     .unwrap();
/// handle.join().unwrap();
/// assert!(ran.load(Ordering::SeqCst));
/// ```
#[derive(Debug, Clone)]
pub struct ThreadScheduler {
    name: Cow<'static, str>,
}

impl ThreadScheduler {
    /// Creates a thread scheduler whose timer threads are named
    /// `underbar-delay`.
    pub const fn new() -> Self {
        Self {
            name: Cow::Borrowed(THREAD_NAME),
        }
    }

    /// Creates a thread scheduler whose timer threads carry `name`.
    pub fn with_name(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name given to timer threads.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for ThreadScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct Shared {
    state: DelayState,
    lock: Mutex<()>,
    wakeup: Condvar,
}

impl Scheduler for ThreadScheduler {
    type Handle = ThreadHandle;

    fn schedule(&self, wait: Duration, task: Task) -> Result<ThreadHandle, ScheduleError> {
        // A wait past the end of the clock only ends by cancellation.
        let deadline = Instant::now().checked_add(wait);
        let shared = Arc::new(Shared {
            state: DelayState::new(),
            lock: Mutex::new(()),
            wakeup: Condvar::new(),
        });
        let timer = Arc::clone(&shared);

        let thread = thread::Builder::new()
            .name(self.name.clone().into_owned())
            .spawn(move || {
                let mut guard = timer.lock.lock();
                match deadline {
                    Some(deadline) => {
                        while timer.state.is_pending() && Instant::now() < deadline {
                            timer.wakeup.wait_until(&mut guard, deadline);
                        }
                    }
                    None => {
                        while timer.state.is_pending() {
                            timer.wakeup.wait(&mut guard);
                        }
                    }
                }
                drop(guard);
                if timer.state.try_fire() {
                    tracing::debug!("delay: firing");
                    task();
                }
            })?;

        Ok(ThreadHandle { shared, thread })
    }
}

/// Handle to a call scheduled on a [`ThreadScheduler`].
///
/// Dropping the handle detaches the timer; the call still runs.
#[derive(Debug)]
pub struct ThreadHandle {
    shared: Arc<Shared>,
    thread: JoinHandle<()>,
}

impl ThreadHandle {
    /// Blocks until the timer thread exits, after running or discarding
    /// the call.
    ///
    /// # Errors
    ///
    /// Returns the panic payload if the deferred function panicked.
    pub fn join(self) -> thread::Result<()> {
        self.thread.join()
    }

    /// Returns `true` if the timer thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Returns `true` if the call was released to run.
    pub fn is_fired(&self) -> bool {
        self.shared.state.is_fired()
    }
}

impl Cancel for ThreadHandle {
    fn cancel(&self) -> bool {
        let cancelled = self.shared.state.try_cancel();
        if cancelled {
            // Taking the lock orders the notify after the timer's pending check.
            let _guard = self.shared.lock.lock();
            self.shared.wakeup.notify_all();
            tracing::debug!("delay: cancelled before firing");
        }
        cancelled
    }

    fn is_pending(&self) -> bool {
        self.shared.state.is_pending()
    }
}

static_assertions::assert_impl_all!(ThreadScheduler: Send, Sync);
static_assertions::assert_impl_all!(ThreadHandle: Send, Sync);
