// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! An owned debouncer with an input slot and an output slot.
//!
//! Writing the input slot re-arms the quiet period; when it runs out, the last input is
//! committed to the output slot and broadcast once to subscribers.
//!
//! `set_input` writes the input slot on the caller's thread and hands the value to one
//! driver task. The driver owns the [`Debounce`](crate::Debounce) operator, and with
//! it the only pending timer; every output transition happens there.
//!
//! Dropping the debouncer cancels the driver and closes the output subject. The pending
//! timer itself is released when the runtime next polls the cancelled driver, not inside
//! `drop`; the closed subject is what guarantees no settlement is observed after the
//! drop. The driver also closes the subject whenever it stops for any other reason, so
//! subscribers see their stream end instead of waiting forever.

use crate::{DebounceExt, InstantTimestamped};
use core::fmt;
use core::time::Duration;
use futures::channel::mpsc::{self, UnboundedSender};
use futures::StreamExt;
use parking_lot::Mutex;
use settle_core::{SettleError, SettleTask, Subject, SubjectStream};
use settle_runtime::{DefaultTimer, Timer};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Trailing-edge debouncer over values of type `T`.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "runtime-tokio")]
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() -> Result<(), settle_core::SettleError> {
/// use futures::StreamExt;
/// use settle_time::Debouncer;
/// use std::time::Duration;
///
/// let search = Debouncer::new(String::new(), Duration::from_millis(300));
/// let mut settled = search.subscribe()?;
///
/// search.set_input("r".to_string());
/// search.set_input("ru".to_string());
/// search.set_input("rust".to_string());
///
/// assert_eq!(settled.next().await.as_deref(), Some("rust"));
/// assert_eq!(search.output(), "rust");
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "runtime-tokio"))]
/// # fn main() {}
/// ```
pub struct Debouncer<T, TM = DefaultTimer>
where
    T: Clone + Send + 'static,
    TM: Timer,
{
    delay: Duration,
    timer: TM,
    input: Mutex<T>,
    output: Arc<Mutex<T>>,
    settled: Subject<T>,
    settled_count: Arc<AtomicU64>,
    tx: UnboundedSender<InstantTimestamped<T, TM>>,
    driver: SettleTask,
}

impl<T> Debouncer<T, DefaultTimer>
where
    T: Clone + Send + 'static,
{
    /// Creates a debouncer on the active runtime with `input = output = initial`.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a runtime (see [`SettleTask::spawn`]).
    pub fn new(initial: T, delay: Duration) -> Self {
        Self::with_timer(initial, delay, DefaultTimer::default())
    }
}

impl<T, TM> Debouncer<T, TM>
where
    T: Clone + Send + 'static,
    TM: Timer,
{
    /// Creates a debouncer whose quiet periods are measured on `timer`.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a runtime (see [`SettleTask::spawn`]).
    pub fn with_timer(initial: T, delay: Duration, timer: TM) -> Self {
        let (tx, rx) = mpsc::unbounded::<InstantTimestamped<T, TM>>();
        let output = Arc::new(Mutex::new(initial.clone()));
        let settled = Subject::new();
        let settled_count = Arc::new(AtomicU64::new(0));

        let driver = {
            let output = output.clone();
            let settled = settled.clone();
            let settled_count = settled_count.clone();
            let timer = timer.clone();

            SettleTask::spawn(move |_cancel| async move {
                let _close = CloseOnExit(settled.clone());
                let debounced = rx.debounce_with_timer(delay, timer);
                futures::pin_mut!(debounced);

                while let Some(item) = debounced.next().await {
                    let value = item.into_inner();
                    *output.lock() = value.clone();
                    let count = settled_count.fetch_add(1, Ordering::SeqCst) + 1;
                    settle_core::debug!("debouncer settled (settlement #{})", count);

                    if settled.send(value).is_err() {
                        break;
                    }
                }
            })
        };

        settle_core::debug!("debouncer created with a {:?} quiet period", delay);

        Self {
            delay,
            timer,
            input: Mutex::new(initial),
            output,
            settled,
            settled_count,
            tx,
            driver,
        }
    }

    /// Records `value` as the current input and re-arms the quiet period.
    ///
    /// Never blocks. The quiet period is measured from this call.
    pub fn set_input(&self, value: T) {
        // Held across the send so the input slot and the channel agree on the last writer.
        let mut input = self.input.lock();
        *input = value.clone();

        let item = InstantTimestamped::new(value, self.timer.now());
        if self.tx.unbounded_send(item).is_err() {
            settle_core::error!("debouncer driver is gone; input dropped (runtime shutting down?)");
        }
    }

    /// The last value passed to [`set_input`](Self::set_input), or the initial value.
    pub fn input(&self) -> T {
        self.input.lock().clone()
    }

    /// The last settled value, or the initial value if nothing has settled yet.
    pub fn output(&self) -> T {
        self.output.lock().clone()
    }

    /// Stream of settled values: one item per settled burst, nothing on subscription.
    ///
    /// The stream ends when the debouncer is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::Closed`] if the output has been closed.
    pub fn subscribe(&self) -> Result<SubjectStream<T>, SettleError> {
        self.settled.subscribe()
    }

    /// The quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of settlements since construction.
    pub fn settled_count(&self) -> u64 {
        self.settled_count.load(Ordering::SeqCst)
    }
}

/// Closes the subject when the driver future completes, is cancelled or unwinds.
struct CloseOnExit<T: Clone + Send + 'static>(Subject<T>);

impl<T: Clone + Send + 'static> Drop for CloseOnExit<T> {
    fn drop(&mut self) {
        if !self.0.is_closed() {
            settle_core::debug!("debouncer driver stopped; closing settled stream");
            self.0.close();
        }
    }
}

impl<T, TM> fmt::Debug for Debouncer<T, TM>
where
    T: Clone + Send + fmt::Debug + 'static,
    TM: Timer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("input", &*self.input.lock())
            .field("output", &*self.output.lock())
            .field("settled_count", &self.settled_count())
            .finish_non_exhaustive()
    }
}

impl<T, TM> Drop for Debouncer<T, TM>
where
    T: Clone + Send + 'static,
    TM: Timer,
{
    fn drop(&mut self) {
        self.driver.cancel();
        self.settled.close();
        settle_core::debug!("debouncer dropped; pending quiet period cancelled");
    }
}
