//! Error types for the library.
//!
//! Most operations cannot fail: absent collections degrade to empty results
//! and function arguments are checked by the type system. The errors here
//! cover the two remaining boundaries, dispatching a method by name and
//! handing a deferred call to a scheduler.

use std::error::Error;
use std::fmt;

/// Represents an error when a method cannot be dispatched by name.
///
/// Returned by [`invoke`](crate::collection::invoke) when an element does
/// not recognise the requested method.
///
/// # Examples
///
/// ```rust
/// use underbar::error::InvokeError;
///
/// let error = InvokeError::UnknownMethod {
///     method: "shout".to_string(),
/// };
/// assert_eq!(format!("{error}"), "invoke: unknown method `shout`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    /// The element has no method with the given name.
    UnknownMethod {
        /// The requested method name.
        method: String,
    },
}

impl InvokeError {
    /// Creates an `UnknownMethod` error for the given name.
    pub fn unknown_method(method: impl Into<String>) -> Self {
        Self::UnknownMethod {
            method: method.into(),
        }
    }
}

impl fmt::Display for InvokeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMethod { method } => {
                write!(formatter, "invoke: unknown method `{method}`")
            }
        }
    }
}

impl Error for InvokeError {}

/// Errors surfaced when a deferred call cannot be scheduled.
///
/// The scheduler is an external collaborator; when it refuses work the
/// failure is returned to the caller of [`delay`](crate::decorator::delay)
/// instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// No tokio runtime is reachable from the calling context.
    NoRuntime,

    /// The operating system refused to spawn the timer thread.
    Spawn(String),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRuntime => {
                write!(
                    formatter,
                    "cannot schedule deferred call: no tokio runtime is available"
                )
            }
            Self::Spawn(message) => {
                write!(
                    formatter,
                    "cannot schedule deferred call: failed to spawn timer thread: {message}"
                )
            }
        }
    }
}

impl Error for ScheduleError {}

impl From<std::io::Error> for ScheduleError {
    fn from(error: std::io::Error) -> Self {
        Self::Spawn(error.to_string())
    }
}
