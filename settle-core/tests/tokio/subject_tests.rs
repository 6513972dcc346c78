// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use settle_core::{SettleError, Subject};

#[tokio::test]
async fn test_broadcasts_to_multiple_subscribers() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let mut a = subject.subscribe()?;
    let mut b = subject.subscribe()?;

    // Act
    subject.send(1)?;

    // Assert
    assert_eq!(a.next().await, Some(1));
    assert_eq!(b.next().await, Some(1));

    Ok(())
}

#[tokio::test]
async fn test_late_subscriber_misses_earlier_items() -> anyhow::Result<()> {
    let subject = Subject::<i32>::new();
    let mut early = subject.subscribe()?;

    subject.send(1)?;
    let mut late = subject.subscribe()?;
    subject.send(2)?;
    subject.close();

    assert_eq!(early.next().await, Some(1));
    assert_eq!(early.next().await, Some(2));
    assert_eq!(late.next().await, Some(2));
    assert_eq!(late.next().await, None);

    Ok(())
}

#[tokio::test]
async fn test_new_subscription_receives_nothing_initially() -> anyhow::Result<()> {
    let subject = Subject::<&'static str>::new();
    let mut stream = subject.subscribe()?;

    subject.close();

    assert_eq!(stream.next().await, None);

    Ok(())
}

#[tokio::test]
async fn test_send_and_subscribe_after_close_fail() {
    let subject = Subject::<i32>::new();
    subject.close();
    subject.close();

    assert!(subject.is_closed());
    assert!(matches!(subject.send(1), Err(SettleError::Closed)));
    assert!(matches!(subject.subscribe(), Err(SettleError::Closed)));
}

#[tokio::test]
async fn test_dropped_subscribers_are_pruned_on_send() -> anyhow::Result<()> {
    let subject = Subject::<i32>::new();
    let kept = subject.subscribe()?;
    let dropped = subject.subscribe()?;
    assert_eq!(subject.subscriber_count(), 2);

    drop(dropped);
    subject.send(7)?;

    assert_eq!(subject.subscriber_count(), 1);
    drop(kept);

    Ok(())
}

#[tokio::test]
async fn test_clones_share_state() -> anyhow::Result<()> {
    let subject = Subject::<i32>::new();
    let producer = subject.clone();
    let mut stream = subject.subscribe()?;

    producer.send(5)?;
    producer.close();

    assert!(subject.is_closed());
    assert_eq!(stream.next().await, Some(5));
    assert_eq!(stream.next().await, None);

    Ok(())
}
