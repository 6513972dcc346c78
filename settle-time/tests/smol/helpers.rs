// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Stream, StreamExt};
use std::time::Duration;

/// Next item of `stream`, or `None` if nothing (not even the end) arrives within `timeout`.
pub async fn next_within<S>(stream: &mut S, timeout: Duration) -> Option<Option<S::Item>>
where
    S: Stream + Unpin,
{
    smol::future::or(async { Some(stream.next().await) }, async {
        smol::Timer::after(timeout).await;
        None
    })
    .await
}

pub async fn sleep(duration: Duration) {
    smol::Timer::after(duration).await;
}
