// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;
use core::ops::{Add, Sub};
use core::time::Duration;

/// Delayed-execution capability.
///
/// `sleep_future(d)` completes once `d` has elapsed on the timer's clock. Dropping the
/// returned future before completion cancels the countdown; nothing observes it again.
pub trait Timer: Clone + Send + Sync + Debug + 'static {
    type Sleep: Future<Output = ()> + Send;

    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    fn now(&self) -> Self::Instant;

    /// `instant + duration`, or `None` when the result is not representable on this clock.
    ///
    /// A `None` deadline is one that is never reached.
    fn checked_add(&self, instant: Self::Instant, duration: Duration) -> Option<Self::Instant>;
}
