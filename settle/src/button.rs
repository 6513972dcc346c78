// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A button whose action runs once per settled burst of taps.
//!
//! The button feeds every tap into a [`Debouncer<()>`](Debouncer) and runs its action
//! from the debouncer's settled-event stream. That stream carries no initial value, so a
//! button that is never tapped never runs its action.

use crate::ButtonConfig;
use core::convert::Infallible;
use core::future::Future;
use core::time::Duration;
use futures::future;
use settle_core::{CancellationToken, IntoSettleError, SettleError, SettleTask};
use settle_exec::SubscribeExt;
use settle_time::Debouncer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Debounced trigger for a bound action.
///
/// Dropping the button cancels any pending quiet period and the action task: taps made
/// before the drop that had not settled yet never run the action.
#[derive(Debug)]
pub struct DebouncedButton {
    label: String,
    debouncer: Debouncer<()>,
    invocations: Arc<AtomicU64>,
    action_task: SettleTask,
}

impl DebouncedButton {
    /// Creates a button running `action` once the taps have been quiet for `delay`.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a runtime.
    pub fn new<A>(delay: Duration, action: A) -> Self
    where
        A: Fn() + Send + Sync + 'static,
    {
        Self::from_config(ButtonConfig::default().with_delay(delay), action)
    }

    /// Creates a button from `config`.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a runtime.
    pub fn from_config<A>(config: ButtonConfig, action: A) -> Self
    where
        A: Fn() + Send + Sync + 'static,
    {
        Self::spawn(
            config,
            move || {
                action();
                future::ready(Ok::<(), Infallible>(()))
            },
            |_| {},
        )
    }

    /// Creates a button with a fallible async action.
    ///
    /// Errors are reported to `on_error` as [`SettleError::ActionFailed`] carrying the
    /// button's label; the button keeps reacting to later taps.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a runtime.
    pub fn with_async_action<A, Fut, E, OnError>(
        delay: Duration,
        action: A,
        on_error: OnError,
    ) -> Self
    where
        A: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
        OnError: Fn(SettleError) + Send + Sync + 'static,
    {
        Self::from_config_async(ButtonConfig::default().with_delay(delay), action, on_error)
    }

    /// Like [`with_async_action`](Self::with_async_action), configured from `config`.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a runtime.
    pub fn from_config_async<A, Fut, E, OnError>(
        config: ButtonConfig,
        action: A,
        on_error: OnError,
    ) -> Self
    where
        A: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
        OnError: Fn(SettleError) + Send + Sync + 'static,
    {
        Self::spawn(config, action, on_error)
    }

    fn spawn<A, Fut, E, OnError>(config: ButtonConfig, action: A, on_error: OnError) -> Self
    where
        A: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
        OnError: Fn(SettleError) + Send + Sync + 'static,
    {
        let ButtonConfig { delay, label } = config;
        let debouncer = Debouncer::new((), delay);
        let invocations = Arc::new(AtomicU64::new(0));
        let taps = debouncer.subscribe();

        let action_task = {
            let invocations = invocations.clone();
            let label = label.clone();

            SettleTask::spawn(move |cancel| async move {
                let taps = match taps {
                    Ok(taps) => taps,
                    Err(err) => {
                        settle_core::error!("button '{}' cannot observe its taps: {}", label, err);
                        return;
                    }
                };

                let on_next = move |(), _token: CancellationToken| {
                    invocations.fetch_add(1, Ordering::SeqCst);
                    action()
                };

                let context = label.clone();
                let on_error = move |err: E| {
                    let err = err.into_settle_error(&context);
                    settle_core::warn!("{}", err);
                    on_error(err);
                };

                if let Err(err) = taps.subscribe(on_next, on_error, Some(cancel)).await {
                    settle_core::error!("button '{}' stopped reacting to taps: {}", label, err);
                }
            })
        };

        settle_core::debug!("button '{}' created with a {:?} delay", label, delay);

        Self {
            label,
            debouncer,
            invocations,
            action_task,
        }
    }

    /// Registers an activation. Never blocks.
    pub fn tap(&self) {
        self.debouncer.set_input(());
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }

    /// How many times the action has been started.
    pub fn invocation_count(&self) -> u64 {
        self.invocations.load(Ordering::SeqCst)
    }
}

impl Drop for DebouncedButton {
    fn drop(&mut self) {
        self.action_task.cancel();
        settle_core::debug!("button '{}' dropped", self.label);
    }
}
