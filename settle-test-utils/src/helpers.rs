// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Stream, StreamExt};
use std::time::Duration;
use tokio::time::sleep;

/// Asserts that `stream` yields nothing (neither an item nor its end) within `timeout_ms`.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        biased;
        _item = stream.next() => {
            panic!("Unexpected emission, expected no output within {timeout_ms} ms");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Waits up to `timeout_ms` for the next item and returns it.
///
/// # Panics
///
/// Panics on timeout or when the stream ends.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        item = stream.next() => match item {
            Some(item) => item,
            None => panic!("Expected item but stream ended"),
        },
        () = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("Timeout: No item received within {timeout_ms} ms");
        }
    }
}

/// Asserts that `stream` ends within `timeout_ms` without yielding another item.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        item = stream.next() => {
            assert!(item.is_none(), "Expected stream to end, but it emitted an item");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("Timeout: stream did not end within {timeout_ms} ms");
        }
    }
}

/// Yields enough times for freshly woken tasks on a current-thread runtime to run.
pub async fn run_pending_tasks() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
