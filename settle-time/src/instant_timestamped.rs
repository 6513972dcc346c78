// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::ops::Deref;
use settle_runtime::Timer;

/// A value stamped with the instant it was produced, on a [`Timer`]'s clock.
///
/// The debounce operator measures quiescence from these stamps rather than from the
/// moment it happens to observe an item, so scheduling latency of the consuming task
/// never stretches or merges quiet periods.
///
/// ```rust
/// # #[cfg(feature = "runtime-tokio")]
/// # fn main() {
/// use settle_runtime::{impls::tokio::TokioTimer, Timer};
/// use settle_time::InstantTimestamped;
///
/// let timer = TokioTimer;
/// let item = InstantTimestamped::<_, TokioTimer>::new("ru", timer.now());
/// assert_eq!(*item, "ru");
/// # }
/// # #[cfg(not(feature = "runtime-tokio"))]
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct InstantTimestamped<T, TM: Timer> {
    pub value: T,
    pub timestamp: TM::Instant,
}

impl<T, TM: Timer> InstantTimestamped<T, TM> {
    pub fn new(value: T, timestamp: TM::Instant) -> Self {
        Self { value, timestamp }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone, TM: Timer> Clone for InstantTimestamped<T, TM> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone(), self.timestamp)
    }
}

impl<T: PartialEq, TM: Timer> PartialEq for InstantTimestamped<T, TM> {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp && self.value == other.value
    }
}

impl<T: Eq, TM: Timer> Eq for InstantTimestamped<T, TM> {}

impl<T, TM: Timer> Deref for InstantTimestamped<T, TM> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}
