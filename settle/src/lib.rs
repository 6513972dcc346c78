// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Settle
//!
//! Trailing-edge debouncing for async Rust.
//!
//! ## Overview
//!
//! A [`Debouncer`] separates a noisy producer from an expensive consumer. The producer
//! writes the input slot as often as it likes; the output slot only follows once the
//! input has been quiet for the configured delay, and every settled burst is announced
//! exactly once on [`Debouncer::subscribe`].
//!
//! [`DebouncedButton`] is the consumer pattern built on top of it: taps are collapsed
//! and the bound action runs once per settled burst.
//!
//! ## Quick Start
//!
//! ```rust
//! use settle::DebouncedButton;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main(flavor = "current_thread", start_paused = true)]
//! async fn main() {
//!     let saves = Arc::new(AtomicUsize::new(0));
//!     let counter = saves.clone();
//!
//!     let button = DebouncedButton::new(Duration::from_millis(300), move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     });
//!
//!     button.tap();
//!     button.tap();
//!     button.tap();
//!
//!     tokio::time::sleep(Duration::from_millis(400)).await;
//!     assert_eq!(saves.load(Ordering::SeqCst), 1);
//! }
//! ```
//!
//! The stream operator behind the debouncer is available on its own through
//! [`DebounceExt`](prelude::DebounceExt) for streams of timestamped values.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod button;
pub mod config;

pub use button::DebouncedButton;
pub use config::ButtonConfig;

// Re-export core types
pub use settle_core::{CancellationToken, IntoSettleError, Result, SettleError, SettleTask};
pub use settle_time::{Debouncer, InstantTimestamped};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ButtonConfig, DebouncedButton};
    pub use settle_core::{Result, SettleError};
    pub use settle_exec::SubscribeExt;
    pub use settle_runtime::Timer;
    pub use settle_time::prelude::*;
}
