// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::smol::helpers::{next_within, sleep};
use futures::channel::mpsc;
use settle_runtime::impls::smol::SmolTimer;
use settle_runtime::Timer;
use settle_test_utils::test_data::{query_r, query_ru, TestData};
use settle_time::{DebounceExt, SmolTimestamped};
use std::time::Duration;

const QUIET: Duration = Duration::from_millis(50);
const PATIENCE: Duration = Duration::from_secs(2);

#[test]
fn test_debounce_smol_burst_emits_last_value() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let timer = SmolTimer;
        let (tx, rx) = mpsc::unbounded::<SmolTimestamped<TestData>>();
        let mut debounced = Box::pin(rx.debounce_with_timer(QUIET, timer));

        // Act
        tx.unbounded_send(SmolTimestamped::new(query_r(), timer.now()))?;
        tx.unbounded_send(SmolTimestamped::new(query_ru(), timer.now()))?;

        // Assert
        let settled = next_within(&mut debounced, PATIENCE).await.flatten();
        assert_eq!(settled.map(|item| item.into_inner()), Some(query_ru()));
        assert!(next_within(&mut debounced, QUIET * 3).await.is_none());

        Ok(())
    })
}

#[test]
fn test_debounce_smol_discards_unsettled_value_on_end() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let timer = SmolTimer;
        let (tx, rx) = mpsc::unbounded::<SmolTimestamped<TestData>>();
        let mut debounced = Box::pin(rx.debounce_with_timer(Duration::from_secs(60), timer));

        // Act
        tx.unbounded_send(SmolTimestamped::new(query_r(), timer.now()))?;
        sleep(QUIET).await;
        drop(tx);

        // Assert
        assert!(matches!(next_within(&mut debounced, PATIENCE).await, Some(None)));

        Ok(())
    })
}
