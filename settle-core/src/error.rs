// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error type for the settle workspace.
//!
//! The debounce primitive itself has no failure path: arming a timer and settling a
//! value cannot fail. [`SettleError`] covers the surfaces around it, such as
//! subscribing to a closed [`Subject`](crate::Subject) or reporting a failed
//! user action.
//!
//! # Examples
//!
//! ```
//! use settle_core::{IntoSettleError, SettleError};
//!
//! let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
//! let err = io.into_settle_error("save");
//! assert!(matches!(err, SettleError::ActionFailed { .. }));
//! assert_eq!(err.to_string(), "Action 'save' failed: disk full");
//! ```

/// Root error type for all settle operations.
#[derive(Debug, thiserror::Error)]
pub enum SettleError {
    /// The subject (or the debouncer owning it) has been closed.
    #[error("Subject is closed")]
    Closed,

    /// A bound action returned an error.
    #[error("Action '{context}' failed: {source}")]
    ActionFailed {
        /// Which action failed (usually the owning control's label)
        context: String,
        /// The error returned by the action
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Custom error from user code without further context.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SettleError {
    /// Wrap a user error.
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Wrap the error of a named action.
    pub fn action_failed(
        context: impl Into<String>,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ActionFailed {
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Returns `true` if this error reports a closed subject.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// Specialized Result type for settle operations.
pub type Result<T> = std::result::Result<T, SettleError>;

/// Conversion of arbitrary errors into [`SettleError`].
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`.
pub trait IntoSettleError {
    /// Convert into a `SettleError`, attaching `context` when it is not empty.
    fn into_settle_error(self, context: &str) -> SettleError;

    /// Convert into a `SettleError` without context.
    fn into_settle(self) -> SettleError
    where
        Self: Sized,
    {
        self.into_settle_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoSettleError for E {
    fn into_settle_error(self, context: &str) -> SettleError {
        if context.is_empty() {
            SettleError::user_error(self)
        } else {
            SettleError::action_failed(context, self)
        }
    }
}
