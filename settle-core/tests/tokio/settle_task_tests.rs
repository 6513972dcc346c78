// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use settle_core::SettleTask;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{advance, pause, sleep};

#[tokio::test]
async fn test_task_runs_to_completion() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = tokio::sync::oneshot::channel();

    // Act
    let _task = SettleTask::spawn(|_cancel| async move {
        let _ = tx.send(42);
    });

    // Assert
    assert_eq!(rx.await?, 42);

    Ok(())
}

#[tokio::test]
async fn test_cancel_flags_handle() {
    let task = SettleTask::spawn(|cancel| async move { cancel.cancelled().await });

    assert!(!task.is_cancelled());
    task.cancel();
    assert!(task.is_cancelled());
}

#[tokio::test]
async fn test_drop_stops_work_that_ignores_the_token() {
    // Arrange
    pause();
    let ticks = Arc::new(AtomicUsize::new(0));
    let counter = ticks.clone();

    let task = SettleTask::spawn(|_cancel| async move {
        loop {
            sleep(Duration::from_millis(10)).await;
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    advance(Duration::from_millis(35)).await;
    tokio::task::yield_now().await;
    let before_drop = ticks.load(Ordering::SeqCst);

    // Act
    drop(task);
    tokio::task::yield_now().await;
    advance(Duration::from_millis(100)).await;
    tokio::task::yield_now().await;

    // Assert
    assert_eq!(ticks.load(Ordering::SeqCst), before_drop);
}
