// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core building blocks shared by the settle crates.
//!
//! - [`SettleError`] - the single error type of the workspace
//! - [`CancellationToken`] - runtime-agnostic cooperative cancellation
//! - [`SettleTask`] - an owned background task that is cancelled when dropped
//! - [`Subject`] - hot, discrete-event broadcast with no initial value
//!
//! Logging goes through the [`debug!`], [`warn!`] and [`error!`] macros, which forward
//! to `tracing` when the `tracing` feature is enabled (default).

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[cfg(not(any(feature = "runtime-tokio", feature = "runtime-smol")))]
compile_error!("settle-core needs a runtime: enable `runtime-tokio` or `runtime-smol`");

pub mod cancellation_token;
pub mod error;
mod logging;
pub mod settle_task;
pub mod subject;

pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::error::{IntoSettleError, Result, SettleError};
pub use self::settle_task::SettleTask;
pub use self::subject::{Subject, SubjectStream};

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing as __tracing;
