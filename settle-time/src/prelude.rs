// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Commonly used traits and types.
//!
//! ```ignore
//! use settle_time::prelude::*;
//!
//! let settled = source.debounce(Duration::from_millis(300));
//! ```

pub use crate::debounce::{DebounceExt, DebounceWithDefaultTimerExt};
pub use crate::debouncer::Debouncer;
pub use crate::instant_timestamped::InstantTimestamped;
pub use settle_runtime::Timer;
