// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the settle workspace.
//!
//! Development and testing only.
//!
//! - [`test_channel`] - imperative sender paired with a stream, for feeding operators
//! - [`helpers`] - timing-aware stream assertions
//! - [`test_data`] - UI-flavoured fixtures (search field keystrokes, slider positions)
//! - [`CallCounter`] - counts invocations of a bound action
//!
//! # Example
//!
//! ```rust
//! use settle_test_utils::{assert_no_element_emitted, test_channel};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (_tx, mut stream) = test_channel::<i32>();
//! assert_no_element_emitted(&mut stream, 10).await;
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod call_counter;
pub mod helpers;
pub mod test_data;

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use call_counter::CallCounter;
pub use helpers::{assert_no_element_emitted, assert_stream_ended, run_pending_tasks, unwrap_stream};
pub use test_data::TestData;

/// Creates an unbounded channel whose receiving half is a `Stream`.
///
/// Dropping the sender ends the stream.
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = T> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
