// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing-edge debounce operator.
//!
//! Each item re-arms a single timer to `item.timestamp + duration`; an item is emitted
//! only once its timer runs out without a newer item having arrived:
//! - a new item replaces the pending one and drops (cancels) its timer
//! - exactly one item per quiet period is emitted, the last one of the burst
//! - no leading-edge emission and no periodic emission
//! - when the source ends, a pending item whose quiet period has not yet run out is
//!   discarded; the source going away is a teardown, not a settlement
//! - a duration too large for the timer's clock (e.g. `Duration::MAX`) means the quiet
//!   period never runs out, so nothing is ever emitted

use crate::InstantTimestamped;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use futures::stream::{FusedStream, Stream};
use pin_project::pin_project;
use settle_runtime::{DefaultTimer, Timer};
use std::future::Future;

/// Extension trait providing the `debounce_with_timer` operator.
pub trait DebounceExt<T, TM>: Stream<Item = InstantTimestamped<T, TM>> + Sized
where
    TM: Timer,
{
    /// Emits an item only after `duration` has passed since its timestamp without a
    /// newer item arriving.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(feature = "runtime-tokio")]
    /// # #[tokio::main(flavor = "current_thread", start_paused = true)]
    /// # async fn main() {
    /// use futures::{channel::mpsc, StreamExt};
    /// use settle_runtime::{impls::tokio::TokioTimer, Timer};
    /// use settle_time::{DebounceExt, TokioTimestamped};
    /// use std::time::Duration;
    ///
    /// let timer = TokioTimer;
    /// let (tx, rx) = mpsc::unbounded();
    /// let mut debounced = Box::pin(rx.debounce_with_timer(Duration::from_millis(300), timer));
    ///
    /// tx.unbounded_send(TokioTimestamped::new("r", timer.now())).unwrap();
    /// tx.unbounded_send(TokioTimestamped::new("ru", timer.now())).unwrap();
    ///
    /// // "r" was superseded inside the quiet period
    /// assert_eq!(*debounced.next().await.unwrap(), "ru");
    /// # }
    /// # #[cfg(not(feature = "runtime-tokio"))]
    /// # fn main() {}
    /// ```
    fn debounce_with_timer(self, duration: Duration, timer: TM) -> Debounce<Self, TM>;
}

impl<S, T, TM> DebounceExt<T, TM> for S
where
    S: Stream<Item = InstantTimestamped<T, TM>>,
    TM: Timer,
{
    fn debounce_with_timer(self, duration: Duration, timer: TM) -> Debounce<Self, TM> {
        Debounce {
            stream: self,
            duration,
            timer,
            pending: None,
            sleep: None,
            done: false,
        }
    }
}

/// Convenience variant of [`DebounceExt`] using the timer of the active runtime.
pub trait DebounceWithDefaultTimerExt<T>:
    Stream<Item = InstantTimestamped<T, DefaultTimer>> + Sized
{
    fn debounce(self, duration: Duration) -> Debounce<Self, DefaultTimer>;
}

impl<S, T> DebounceWithDefaultTimerExt<T> for S
where
    S: Stream<Item = InstantTimestamped<T, DefaultTimer>>,
{
    fn debounce(self, duration: Duration) -> Debounce<Self, DefaultTimer> {
        DebounceExt::debounce_with_timer(self, duration, DefaultTimer::default())
    }
}

/// A pending item together with the instant its quiet period runs out.
///
/// `deadline` is `None` when that instant lies beyond the timer's clock.
struct Pending<I, D> {
    item: I,
    deadline: Option<D>,
}

/// Stream returned by [`DebounceExt::debounce_with_timer`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct Debounce<S: Stream, TM: Timer> {
    #[pin]
    stream: S,
    duration: Duration,
    timer: TM,
    pending: Option<Pending<S::Item, TM::Instant>>,
    #[pin]
    sleep: Option<TM::Sleep>,
    done: bool,
}

impl<S, T, TM> Stream for Debounce<S, TM>
where
    S: Stream<Item = InstantTimestamped<T, TM>>,
    TM: Timer,
{
    type Item = InstantTimestamped<T, TM>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        // Drain the source first so a queued newer item always supersedes the pending
        // one before its timer is looked at.
        loop {
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    let deadline = this.timer.checked_add(item.timestamp, *this.duration);

                    // The previous item settled before this one was produced: it was
                    // not superseded, only observed late.
                    let settled = match this.pending.take() {
                        Some(previous) if reached(previous.deadline, item.timestamp) => {
                            Some(previous.item)
                        }
                        _ => None,
                    };

                    match deadline {
                        Some(deadline) => {
                            let remaining = remaining_until(this.timer, deadline);
                            this.sleep.set(Some(this.timer.sleep_future(remaining)));
                        }
                        None => this.sleep.set(None),
                    }
                    *this.pending = Some(Pending { item, deadline });

                    if settled.is_some() {
                        return Poll::Ready(settled);
                    }
                }
                Poll::Ready(None) => {
                    *this.done = true;
                    this.sleep.set(None);
                    let now = this.timer.now();
                    return match this.pending.take() {
                        Some(last) if reached(last.deadline, now) => Poll::Ready(Some(last.item)),
                        _ => Poll::Ready(None),
                    };
                }
                Poll::Pending => break,
            }
        }

        let Some(deadline) = this.pending.as_ref().and_then(|pending| pending.deadline) else {
            return Poll::Pending;
        };

        let expired = this.timer.now() >= deadline
            || this
                .sleep
                .as_mut()
                .as_pin_mut()
                .is_some_and(|sleep| sleep.poll(cx).is_ready());

        if expired {
            this.sleep.set(None);
            return Poll::Ready(this.pending.take().map(|pending| pending.item));
        }

        Poll::Pending
    }
}

impl<S, T, TM> FusedStream for Debounce<S, TM>
where
    S: Stream<Item = InstantTimestamped<T, TM>>,
    TM: Timer,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

fn reached<I: Ord>(deadline: Option<I>, at: I) -> bool {
    deadline.is_some_and(|deadline| deadline <= at)
}

fn remaining_until<TM: Timer>(timer: &TM, deadline: TM::Instant) -> Duration {
    let now = timer.now();
    if deadline > now {
        deadline - now
    } else {
        Duration::ZERO
    }
}
