// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-smol")]
use core::future::Future;
#[cfg(feature = "runtime-smol")]
use core::pin::Pin;
#[cfg(feature = "runtime-smol")]
use core::task::{Context, Poll};
#[cfg(feature = "runtime-smol")]
use std::time::{Duration, Instant};

#[cfg(feature = "runtime-smol")]
use crate::timer::Timer;

#[cfg(feature = "runtime-smol")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SmolTimer;

/// Sleep future of [`SmolTimer`].
#[cfg(feature = "runtime-smol")]
#[derive(Debug)]
pub struct SmolSleep {
    timer: async_io::Timer,
}

#[cfg(feature = "runtime-smol")]
impl Future for SmolSleep {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        Pin::new(&mut self.timer).poll(cx).map(|_| ())
    }
}

#[cfg(feature = "runtime-smol")]
impl Timer for SmolTimer {
    type Sleep = SmolSleep;

    type Instant = Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        SmolSleep {
            timer: async_io::Timer::after(duration),
        }
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn checked_add(&self, instant: Self::Instant, duration: Duration) -> Option<Self::Instant> {
        instant.checked_add(duration)
    }
}
