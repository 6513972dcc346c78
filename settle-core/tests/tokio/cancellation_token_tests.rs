// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::FutureExt;
use settle_core::CancellationToken;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_new_token_not_cancelled() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_cancel_is_idempotent() {
    let token = CancellationToken::default();
    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn test_clone_shares_state() {
    let token = CancellationToken::new();
    let other = token.clone();

    other.cancel();

    assert!(token.is_cancelled());
}

#[test]
fn test_cancelled_is_ready_when_already_cancelled() {
    let token = CancellationToken::new();
    token.cancel();

    assert!(token.cancelled().now_or_never().is_some());
}

#[test]
fn test_cancelled_is_pending_until_cancel() {
    let token = CancellationToken::new();
    let mut cancelled = Box::pin(token.cancelled());

    assert!((&mut cancelled).now_or_never().is_none());

    token.cancel();
    assert!(cancelled.now_or_never().is_some());
}

#[tokio::test]
async fn test_all_waiters_are_notified() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    let woken = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let token = token.clone();
            let woken = woken.clone();
            tokio::spawn(async move {
                token.cancelled().await;
                woken.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();

    tokio::time::sleep(Duration::from_millis(10)).await;

    // Act
    token.cancel();

    // Assert
    for handle in handles {
        tokio::time::timeout(Duration::from_millis(100), handle).await??;
    }
    assert_eq!(woken.load(Ordering::SeqCst), 10);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cancel_racing_with_registration_is_not_lost() -> anyhow::Result<()> {
    for _ in 0..100 {
        let token = CancellationToken::new();
        let waiter = token.clone();

        let handle = tokio::spawn(async move {
            waiter.cancelled().await;
        });
        token.cancel();

        tokio::time::timeout(Duration::from_millis(100), handle).await??;
    }

    Ok(())
}
