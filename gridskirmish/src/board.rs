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

//! Types that make up the game board.
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::units::{Side, UnitId};

pub use self::{
    coordinate::{Coordinate, Path},
    errors::{GridParseError, LayoutError, ParseCellError},
    grid::Grid,
};

mod coordinate;
mod errors;
mod grid;
pub mod layout;

/// Width and height of the board.
pub const GRID_SIZE: usize = 5;

/// Contents of a single cell of the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    /// Nothing stands here.
    Empty,
    /// The given unit stands here.
    Unit(UnitId),
}

impl Cell {
    /// The unit in this cell, if any.
    pub fn unit(self) -> Option<UnitId> {
        match self {
            Cell::Empty => None,
            Cell::Unit(id) => Some(id),
        }
    }

    /// The side owning the unit in this cell, if any.
    pub fn owner(self) -> Option<Side> {
        self.unit().map(|id| id.owner)
    }

    /// Whether the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl From<UnitId> for Cell {
    fn from(id: UnitId) -> Self {
        Cell::Unit(id)
    }
}

impl fmt::Display for Cell {
    /// Empty cells are written as `x`, units as their marker, e.g. `A-P1`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Empty => f.pad("x"),
            Cell::Unit(id) => fmt::Display::fmt(id, f),
        }
    }
}

impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("x") {
            Ok(Cell::Empty)
        } else {
            s.parse()
                .map(Cell::Unit)
                .map_err(|_| ParseCellError::new(s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitKind;

    #[test]
    fn cell_markers() {
        let cell = Cell::Unit(UnitId::new(Side::A, UnitKind::H2));
        assert_eq!(cell.to_string(), "A-H2");
        assert_eq!(Cell::Empty.to_string(), "x");
        assert_eq!("a-h2".parse::<Cell>().unwrap(), cell);
        assert_eq!("X".parse::<Cell>().unwrap(), Cell::Empty);
        assert_eq!("A_H2".parse::<Cell>().unwrap_err().text(), "A_H2");
    }

    #[test]
    fn cell_accessors() {
        let id = UnitId::new(Side::B, UnitKind::P3);
        assert_eq!(Cell::from(id).owner(), Some(Side::B));
        assert_eq!(Cell::from(id).unit(), Some(id));
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::Empty.owner(), None);
    }
}
