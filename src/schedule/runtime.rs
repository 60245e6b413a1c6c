//! A scheduler backed by tokio timers.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};

use super::{Cancel, DelayState, Scheduler, Task};
use crate::error::ScheduleError;

/// Runs each task on a tokio runtime after `tokio::time::sleep`.
///
/// The scheduler either holds an explicit runtime handle or uses the
/// runtime of the calling context. Because it goes through tokio's timer,
/// tests with a paused clock can advance time deterministically.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use underbar::schedule::{Cancel, Scheduler, TokioScheduler};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let handle = TokioScheduler::current()
///     .schedule(Duration::from_secs(1), Box::new(|| println!("late")))
///     .unwrap();
/// assert!(handle.cancel());
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokioScheduler {
    handle: Option<Handle>,
}

impl TokioScheduler {
    /// Creates a scheduler that uses the runtime of the calling context.
    pub const fn current() -> Self {
        Self { handle: None }
    }

    /// Creates a scheduler bound to `handle`.
    pub const fn with_handle(handle: Handle) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    fn runtime(&self) -> Result<Handle, ScheduleError> {
        match &self.handle {
            Some(handle) => Ok(handle.clone()),
            None => Handle::try_current().map_err(|_| ScheduleError::NoRuntime),
        }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = TokioHandle;

    fn schedule(&self, wait: Duration, task: Task) -> Result<TokioHandle, ScheduleError> {
        let runtime = self.runtime()?;
        let state = Arc::new(DelayState::new());
        let timer = Arc::clone(&state);

        let join = runtime.spawn(async move {
            tokio::time::sleep(wait).await;
            if timer.try_fire() {
                tracing::debug!("delay: firing");
                task();
            }
        });

        Ok(TokioHandle { state, join })
    }
}

/// Handle to a call scheduled on a [`TokioScheduler`].
///
/// Dropping the handle detaches the timer task; the call still runs.
#[derive(Debug)]
pub struct TokioHandle {
    state: Arc<DelayState>,
    join: JoinHandle<()>,
}

impl TokioHandle {
    /// Waits until the timer task has run or discarded the call.
    ///
    /// A cancelled call completes with `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns the [`JoinError`] if the deferred function panicked or the
    /// runtime shut down first.
    pub async fn join(self) -> Result<(), JoinError> {
        match self.join.await {
            Err(error) if error.is_cancelled() && self.state.is_cancelled() => Ok(()),
            outcome => outcome,
        }
    }

    /// Returns `true` if the call was released to run.
    pub fn is_fired(&self) -> bool {
        self.state.is_fired()
    }
}

impl Cancel for TokioHandle {
    fn cancel(&self) -> bool {
        let cancelled = self.state.try_cancel();
        if cancelled {
            self.join.abort();
            tracing::debug!("delay: cancelled before firing");
        }
        cancelled
    }

    fn is_pending(&self) -> bool {
        self.state.is_pending()
    }
}
