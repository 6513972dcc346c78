// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixtures modelled on the inputs a debounced control sees.

use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TestData {
    /// Contents of a search field after a keystroke.
    Query(String),
    /// Position of a slider, in percent.
    Slider(u8),
}

impl fmt::Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query(text) => write!(f, "query '{text}'"),
            Self::Slider(percent) => write!(f, "slider {percent}%"),
        }
    }
}

pub fn query_empty() -> TestData {
    TestData::Query(String::new())
}

pub fn query_r() -> TestData {
    TestData::Query("r".to_string())
}

pub fn query_ru() -> TestData {
    TestData::Query("ru".to_string())
}

pub fn query_rus() -> TestData {
    TestData::Query("rus".to_string())
}

pub fn query_rust() -> TestData {
    TestData::Query("rust".to_string())
}

pub fn slider_low() -> TestData {
    TestData::Slider(10)
}

pub fn slider_high() -> TestData {
    TestData::Slider(90)
}
