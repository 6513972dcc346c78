// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Owned background task with cancellation on drop.
//!
//! A [`SettleTask`] is the only way the settle crates put work on an executor. The
//! handle owns the task: dropping it (or calling [`SettleTask::cancel`]) signals the
//! task's [`CancellationToken`], and the spawned future is raced against that token so
//! the work stops at its next poll even if it never looks at the token itself.

use crate::CancellationToken;
use core::fmt;
use core::future::Future;
use futures::future;

/// Runtime-agnostic task handle with automatic cancellation on drop.
///
/// # Runtime Support
///
/// - **Tokio**: `tokio::spawn` (feature `runtime-tokio`, default)
/// - **smol**: `smol::spawn` (feature `runtime-smol`, used when tokio is disabled)
///
/// # Example
///
/// ```rust
/// use settle_core::SettleTask;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() {
/// let stopped = Arc::new(AtomicBool::new(false));
/// let flag = stopped.clone();
///
/// let task = SettleTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
///     flag.store(true, Ordering::SeqCst);
/// });
///
/// assert!(!task.is_cancelled());
/// drop(task);
/// # }
/// ```
pub struct SettleTask {
    cancel: CancellationToken,
}

impl SettleTask {
    /// Spawn `f` on the active runtime.
    ///
    /// `f` receives a clone of the task's token. The returned future is dropped as soon
    /// as the token is cancelled, without waiting for it to finish on its own.
    ///
    /// # Panics
    ///
    /// With `runtime-tokio`, panics when called outside of a Tokio runtime, exactly like
    /// `tokio::spawn`.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let work = f(cancel.clone());
        let guard = cancel.clone();

        let task = async move {
            let cancelled = guard.cancelled();
            futures::pin_mut!(cancelled);
            futures::pin_mut!(work);
            let _ = future::select(cancelled, work).await;
        };

        #[cfg(feature = "runtime-tokio")]
        tokio::spawn(task);

        #[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
        smol::spawn(task).detach();

        Self { cancel }
    }

    /// Signal the task to stop. Does not wait for it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` once [`cancel`](Self::cancel) was called or the handle was dropped.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl fmt::Debug for SettleTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettleTask")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl Drop for SettleTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
