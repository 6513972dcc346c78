// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for the settle crates.
//!
//! The debounce primitive consumes a single capability from its environment: "wake me
//! after a duration, and forget about it if I stop waiting". [`Timer`] expresses it as a
//! sleep future: dropping the future before it completes guarantees it never completes,
//! which is the cancellation handle the debouncer relies on.
//!
//! - `runtime-tokio` (default): [`TokioTimer`](impls::tokio::TokioTimer)
//! - `runtime-smol`: [`SmolTimer`](impls::smol::SmolTimer)

pub mod impls;
pub mod timer;

pub use timer::Timer;

/// Timer of the active runtime feature (tokio wins when both are enabled).
#[cfg(feature = "runtime-tokio")]
pub type DefaultTimer = impls::tokio::TokioTimer;

/// Timer of the active runtime feature (tokio wins when both are enabled).
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultTimer = impls::smol::SmolTimer;
