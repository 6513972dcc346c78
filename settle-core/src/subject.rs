// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber broadcast of discrete events.
//!
//! A [`Subject`] has no "current value": a subscriber receives exactly the items sent
//! after it subscribed, one per [`Subject::send`], and nothing on subscription. This is
//! what lets a consumer react once per event without skipping an initial notification.
//!
//! ## Characteristics
//!
//! - **Hot**: late subscribers do not receive past items.
//! - **Unbounded**: each subscriber is fed by an unbounded mpsc channel.
//! - **Shared**: cheap to clone; all clones share the same state.
//! - **Close**: closing ends every subscriber stream and rejects further sends.
//!
//! ## Example
//!
//! ```
//! use settle_core::Subject;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = Subject::<i32>::new();
//! let mut stream = subject.subscribe().unwrap();
//!
//! subject.send(1).unwrap();
//! subject.send(2).unwrap();
//! subject.close();
//!
//! assert_eq!(stream.next().await, Some(1));
//! assert_eq!(stream.next().await, Some(2));
//! assert_eq!(stream.next().await, None);
//! # }
//! ```

use crate::SettleError;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::stream::{FusedStream, Stream};
use parking_lot::Mutex;
use std::sync::Arc;

struct SubjectState<T> {
    closed: bool,
    senders: Vec<UnboundedSender<T>>,
}

/// A hot, unbounded subject that broadcasts items to all current subscribers.
///
/// See the [module documentation](self) for details.
pub struct Subject<T: Clone + Send + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> Subject<T> {
    /// Creates an open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                senders: Vec::new(),
            })),
        }
    }

    /// Subscribe to items sent from now on.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::Closed`] if the subject has been closed.
    pub fn subscribe(&self) -> Result<SubjectStream<T>, SettleError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SettleError::Closed);
        }

        let (tx, rx) = mpsc::unbounded();
        state.senders.push(tx);
        Ok(SubjectStream { rx })
    }

    /// Send an item to all active subscribers.
    ///
    /// Subscribers whose stream was dropped are pruned here.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::Closed`] if the subject has been closed.
    pub fn send(&self, item: T) -> Result<(), SettleError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SettleError::Closed);
        }

        state
            .senders
            .retain(|tx| tx.unbounded_send(item.clone()).is_ok());
        Ok(())
    }

    /// Close the subject, ending every subscriber stream.
    ///
    /// The state lock serializes this against any `send` in flight: once it returns,
    /// nothing else is queued for any subscriber. Items queued earlier are still
    /// drained before the streams end. Idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    /// Returns `true` if the subject has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of subscribers still attached.
    ///
    /// Dropped subscribers are only removed on the next `send()`.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

/// Stream of the items a [`Subject`] sends after subscription.
#[derive(Debug)]
pub struct SubjectStream<T> {
    rx: UnboundedReceiver<T>,
}

impl<T> Stream for SubjectStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        Pin::new(&mut self.rx).poll_next(cx)
    }
}

impl<T> FusedStream for SubjectStream<T> {
    fn is_terminated(&self) -> bool {
        self.rx.is_terminated()
    }
}
