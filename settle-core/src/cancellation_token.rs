// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic cancellation token.
//!
//! Works the same on every supported runtime, so a debouncer driver can be torn down
//! without depending on `tokio_util`.

use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use std::sync::Arc;

/// Cooperative cancellation signal shared between an owner and its background work.
///
/// Clones share the same state. Once [`cancel`](Self::cancel) has been called on any
/// clone, every pending and future [`cancelled`](Self::cancelled) future resolves.
///
/// # Example
///
/// ```
/// use settle_core::CancellationToken;
///
/// # #[tokio::main]
/// # async fn main() {
/// let token = CancellationToken::new();
/// let worker_token = token.clone();
///
/// let worker = tokio::spawn(async move {
///     worker_token.cancelled().await;
/// });
///
/// token.cancel();
/// worker.await.unwrap();
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    cancelled: AtomicBool,
    event: Event,
}

impl CancellationToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                cancelled: AtomicBool::new(false),
                event: Event::new(),
            }),
        }
    }

    /// Cancel the token and wake every waiter. Idempotent.
    pub fn cancel(&self) {
        // Flag before notify: a waiter woken by the event must observe the flag.
        self.shared.cancelled.store(true, Ordering::Release);
        self.shared.event.notify(usize::MAX);
    }

    /// Non-blocking check.
    ///
    /// ```
    /// use settle_core::CancellationToken;
    ///
    /// let token = CancellationToken::new();
    /// assert!(!token.is_cancelled());
    /// token.cancel();
    /// assert!(token.is_cancelled());
    /// ```
    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::Acquire)
    }

    /// Future resolving once the token is cancelled (immediately if it already is).
    pub fn cancelled(&self) -> Cancelled<'_> {
        Cancelled {
            token: self,
            listener: None,
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Future returned by [`CancellationToken::cancelled()`].
pub struct Cancelled<'a> {
    token: &'a CancellationToken,
    listener: Option<EventListener>,
}

impl Future for Cancelled<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        loop {
            if self.token.is_cancelled() {
                return Poll::Ready(());
            }

            match self.listener.as_mut() {
                Some(listener) => {
                    if Pin::new(listener).poll(cx).is_pending() {
                        return Poll::Pending;
                    }
                    // Notified: drop the spent listener and re-check the flag.
                    self.listener = None;
                }
                None => {
                    // Register first, then loop to re-check, so a cancel racing with
                    // registration is never missed.
                    self.listener = Some(self.token.shared.event.listen());
                }
            }
        }
    }
}
