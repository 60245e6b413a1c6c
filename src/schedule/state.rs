//! The pending/fired/cancelled state machine shared by every scheduler.
//!
//! A deferred call leaves `PENDING` exactly once, either to `FIRED` (the
//! timer won) or to `CANCELLED` (the handle won). Both transitions are a
//! single `compare_exchange`, so the wrapped function runs if and only if
//! `cancel` returned `false`.

use std::sync::atomic::{AtomicU8, Ordering};

/// State: waiting for the timer
const STATE_PENDING: u8 = 0;
/// State: the callback has been released to run
const STATE_FIRED: u8 = 1;
/// State: cancelled before firing
const STATE_CANCELLED: u8 = 2;

/// Shared state of one deferred call.
#[derive(Debug)]
pub struct DelayState {
    state: AtomicU8,
}

impl DelayState {
    /// Creates a state in `PENDING`.
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(STATE_PENDING),
        }
    }

    /// Moves `PENDING` to `FIRED`. Returns `true` if this call won.
    pub fn try_fire(&self) -> bool {
        self.transition(STATE_FIRED)
    }

    /// Moves `PENDING` to `CANCELLED`. Returns `true` if this call won.
    pub fn try_cancel(&self) -> bool {
        self.transition(STATE_CANCELLED)
    }

    fn transition(&self, target: u8) -> bool {
        self.state
            .compare_exchange(STATE_PENDING, target, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Returns `true` while neither firing nor cancellation has happened.
    pub fn is_pending(&self) -> bool {
        self.state.load(Ordering::Acquire) == STATE_PENDING
    }

    /// Returns `true` if the callback was released to run.
    pub fn is_fired(&self) -> bool {
        self.state.load(Ordering::Acquire) == STATE_FIRED
    }

    /// Returns `true` if the call was cancelled before firing.
    pub fn is_cancelled(&self) -> bool {
        self.state.load(Ordering::Acquire) == STATE_CANCELLED
    }
}

impl Default for DelayState {
    fn default() -> Self {
        Self::new()
    }
}
