// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::channel::oneshot;
use settle_core::{CancellationToken, SettleTask};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_smol_task_runs_to_completion() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let (tx, rx) = oneshot::channel();

        // Act
        let _task = SettleTask::spawn(|_cancel| async move {
            let _ = tx.send(42);
        });

        // Assert
        assert_eq!(rx.await?, 42);

        Ok(())
    })
}

#[test]
fn test_smol_drop_stops_work_that_ignores_the_token() {
    smol::block_on(async {
        // Arrange
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();

        let task = SettleTask::spawn(|_cancel| async move {
            loop {
                smol::Timer::after(Duration::from_millis(5)).await;
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        smol::Timer::after(Duration::from_millis(30)).await;

        // Act
        drop(task);
        smol::Timer::after(Duration::from_millis(20)).await;
        let after_drop = ticks.load(Ordering::SeqCst);
        smol::Timer::after(Duration::from_millis(50)).await;

        // Assert
        assert!(after_drop > 0);
        assert_eq!(ticks.load(Ordering::SeqCst), after_drop);
    });
}

#[test]
fn test_smol_cancel_wakes_task_waiting_on_token() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let (tx, rx) = oneshot::channel();
        let token = CancellationToken::new();
        let waiter = token.clone();

        let _task = smol::spawn(async move {
            waiter.cancelled().await;
            let _ = tx.send(());
        });

        // Act
        token.cancel();

        // Assert
        rx.await?;
        assert!(token.is_cancelled());

        Ok(())
    })
}
