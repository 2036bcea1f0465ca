// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors produced when parsing unit and side names.

use thiserror::Error;

/// Error returned when a string does not name a [`Side`][crate::units::Side].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown side {text:?}, expected \"A\" or \"B\"")]
pub struct ParseSideError {
    text: String,
}

impl ParseSideError {
    pub(super) fn new(text: &str) -> Self {
        Self { text: text.into() }
    }

    /// The text that failed to parse.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Error returned when a string does not name a [`UnitKind`][crate::units::UnitKind].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown unit kind {text:?}")]
pub struct ParseUnitKindError {
    text: String,
}

impl ParseUnitKindError {
    pub(super) fn new(text: &str) -> Self {
        Self { text: text.into() }
    }

    /// The text that failed to parse.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Error returned when a unit marker is not of the form `<SIDE>-<KIND>`.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid unit marker {text:?}")]
pub struct ParseUnitIdError {
    text: String,
}

impl ParseUnitIdError {
    pub(super) fn new(text: &str) -> Self {
        Self { text: text.into() }
    }

    /// The text that failed to parse.
    pub fn text(&self) -> &str {
        &self.text
    }
}
