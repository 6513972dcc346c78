// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::smol::helpers::{next_within, sleep};
use settle_time::Debouncer;
use std::time::Duration;

const DELAY: Duration = Duration::from_millis(50);
const PATIENCE: Duration = Duration::from_secs(2);

#[test]
fn test_debouncer_smol_burst_settles_once() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let debouncer = Debouncer::new(0u32, DELAY);
        let mut settled = debouncer.subscribe()?;

        // Act
        debouncer.set_input(1);
        debouncer.set_input(2);
        debouncer.set_input(3);

        // Assert
        assert_eq!(next_within(&mut settled, PATIENCE).await, Some(Some(3)));
        assert_eq!(next_within(&mut settled, DELAY * 3).await, None);
        assert_eq!(debouncer.output(), 3);
        assert_eq!(debouncer.settled_count(), 1);

        Ok(())
    })
}

#[test]
fn test_debouncer_smol_spaced_inputs_settle_individually() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let debouncer = Debouncer::new(0u32, DELAY);
        let mut settled = debouncer.subscribe()?;

        // Act & Assert
        debouncer.set_input(1);
        assert_eq!(next_within(&mut settled, PATIENCE).await, Some(Some(1)));

        debouncer.set_input(2);
        assert_eq!(next_within(&mut settled, PATIENCE).await, Some(Some(2)));

        assert_eq!(debouncer.settled_count(), 2);

        Ok(())
    })
}

#[test]
fn test_debouncer_smol_drop_before_settlement_ends_stream() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let debouncer = Debouncer::new(0u32, DELAY);
        let mut settled = debouncer.subscribe()?;

        // Act
        debouncer.set_input(1);
        drop(debouncer);
        sleep(DELAY * 2).await;

        // Assert
        assert_eq!(next_within(&mut settled, PATIENCE).await, Some(None));

        Ok(())
    })
}

#[test]
fn test_debouncer_smol_unrepresentable_delay_never_settles() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let debouncer = Debouncer::new(0u32, Duration::MAX);
        let mut settled = debouncer.subscribe()?;

        // Act
        debouncer.set_input(1);
        sleep(DELAY).await;
        debouncer.set_input(2);

        // Assert
        assert_eq!(next_within(&mut settled, DELAY * 2).await, None);
        assert!(debouncer.subscribe().is_ok());

        drop(debouncer);
        assert_eq!(next_within(&mut settled, PATIENCE).await, Some(None));

        Ok(())
    })
}
