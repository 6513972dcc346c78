// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing-edge debounce for async Rust.
//!
//! # Overview
//!
//! - **[`Debouncer<T>`]** - owned input/output slots; the output takes the last input
//!   once no new input has arrived for the configured delay
//! - **[`DebounceExt`]** - the same algorithm as a stream operator,
//!   `.debounce_with_timer(duration, timer)`
//! - **[`DebounceWithDefaultTimerExt`]** - `.debounce(duration)` with the active runtime's timer
//! - **[`InstantTimestamped<T, TM>`]** - a value stamped on a timer's clock
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - `TokioTimer`, tasks on `tokio::spawn`
//! - `runtime-smol` - `SmolTimer`, tasks on `smol::spawn`

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod debounce;
mod debouncer;
mod instant_timestamped;

pub mod prelude;

pub use debounce::{Debounce, DebounceExt, DebounceWithDefaultTimerExt};
pub use debouncer::Debouncer;
pub use instant_timestamped::InstantTimestamped;

#[cfg(feature = "runtime-tokio")]
pub use settle_runtime::impls::tokio::TokioTimer;

#[cfg(feature = "runtime-tokio")]
pub type TokioTimestamped<T> = InstantTimestamped<T, TokioTimer>;

#[cfg(feature = "runtime-smol")]
pub use settle_runtime::impls::smol::SmolTimer;

#[cfg(feature = "runtime-smol")]
pub type SmolTimestamped<T> = InstantTimestamped<T, SmolTimer>;
