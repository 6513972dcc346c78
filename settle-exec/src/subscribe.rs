// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use core::future::Future;
use futures::stream::{Stream, StreamExt};
use settle_core::{CancellationToken, Result};

/// Extension trait driving a stream with an async handler.
///
/// Items are handled one at a time, in arrival order: the handler for an item runs to
/// completion before the next item is pulled. This is what a debounced action wants,
/// since every settled value must trigger exactly one invocation.
#[async_trait]
pub trait SubscribeExt<T>: Stream<Item = T> + Sized {
    /// Consumes the stream, calling `on_next_func` for every item.
    ///
    /// # Behavior
    ///
    /// - Waits for each handler before pulling the next item
    /// - Runs until the stream ends or `cancellation_token` is cancelled
    /// - Handler errors go to `on_error_callback`; processing continues afterwards
    ///
    /// # Arguments
    ///
    /// * `on_next_func` - Async function called for each item, with a clone of the token
    /// * `on_error_callback` - Called with each error returned by `on_next_func`
    /// * `cancellation_token` - Optional token to stop processing. If `None`, a token
    ///   that is never cancelled is used.
    ///
    /// # Example
    ///
    /// ```rust
    /// use settle_exec::SubscribeExt;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> settle_core::Result<()> {
    /// let stream = futures::stream::iter(vec![1, 2, 3]);
    ///
    /// stream
    ///     .subscribe(
    ///         |item, _token| async move {
    ///             println!("settled: {item}");
    ///             Ok::<(), std::io::Error>(())
    ///         },
    ///         |err| eprintln!("action failed: {err}"),
    ///         None,
    ///     )
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    async fn subscribe<F, Fut, E, OnError>(
        self,
        on_next_func: F,
        on_error_callback: OnError,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<()>
    where
        F: Fn(T, CancellationToken) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        OnError: Fn(E) + Send + Sync + 'static,
        T: Send + 'static,
        E: Send + 'static;
}

#[async_trait]
impl<S, T> SubscribeExt<T> for S
where
    S: Stream<Item = T> + Send + Unpin + 'static,
    T: Send + 'static,
{
    async fn subscribe<F, Fut, E, OnError>(
        mut self,
        on_next_func: F,
        on_error_callback: OnError,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<()>
    where
        F: Fn(T, CancellationToken) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        OnError: Fn(E) + Send + Sync + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        let cancellation_token = cancellation_token.unwrap_or_default();

        while let Some(item) = self.next().await {
            if cancellation_token.is_cancelled() {
                break;
            }

            if let Err(error) = on_next_func(item, cancellation_token.clone()).await {
                on_error_callback(error);
            }
        }

        settle_core::debug!("subscription finished");
        Ok(())
    }
}
