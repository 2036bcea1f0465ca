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

//! Errors used when building a `Grid` from placements or from its text form.

use thiserror::Error;

use crate::{board::Coordinate, units::UnitId};

/// Reason why a set of placements does not form a valid grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum LayoutError {
    /// The same unit was placed more than once.
    #[error("unit {0} is placed more than once")]
    DuplicateUnit(UnitId),
    /// Two units were placed on the same cell.
    #[error("cell {0} is already occupied")]
    AlreadyOccupied(Coordinate),
    /// A unit was placed outside the grid.
    #[error("cell {0} is out of bounds")]
    OutOfBounds(Coordinate),
}

/// Error returned when a cell marker is neither `x` nor a unit marker like `A-P1`.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid cell marker {text:?}")]
pub struct ParseCellError {
    text: String,
}

impl ParseCellError {
    pub(super) fn new(text: &str) -> Self {
        Self { text: text.into() }
    }

    /// The marker that failed to parse.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Error returned when parsing the text form of a grid.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum GridParseError {
    /// The text did not contain five non-empty lines.
    #[error("expected 5 rows, found {0}")]
    RowCount(usize),
    /// A row did not contain five markers.
    #[error("expected 5 cells in row {row}, found {found}")]
    ColumnCount { row: usize, found: usize },
    /// A marker could not be parsed.
    #[error("bad cell at row {row}, column {col}")]
    Cell {
        row: usize,
        col: usize,
        #[source]
        source: ParseCellError,
    },
    /// The markers parsed but the same unit appears twice.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
