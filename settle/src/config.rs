// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;

/// Construction parameters of a [`DebouncedButton`](crate::DebouncedButton).
///
/// ```
/// use settle::ButtonConfig;
/// use std::time::Duration;
///
/// let config = ButtonConfig::new("Save").with_delay(Duration::from_millis(500));
/// assert_eq!(config.label, "Save");
/// assert_eq!(config.delay, Duration::from_millis(500));
///
/// assert_eq!(ButtonConfig::default().delay, ButtonConfig::DEFAULT_DELAY);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonConfig {
    /// Quiet period after the last tap before the action runs.
    pub delay: Duration,
    /// Name used in logs and as the context of reported action errors.
    pub label: String,
}

impl ButtonConfig {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);
    pub const DEFAULT_LABEL: &'static str = "Button";

    /// A config with the given label and the default delay.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
            label: label.into(),
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LABEL)
    }
}
