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

//! The grid of cells that makes up the board.

use std::{
    borrow::Borrow,
    collections::HashSet,
    fmt,
    ops::Index,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    board::{Cell, Coordinate, GridParseError, LayoutError, GRID_SIZE},
    units::{Side, UnitId},
};

/// The 5x5 board. Row-major, `cells[row][col]`.
///
/// A grid is a plain value: moves produce a new grid rather than mutating one that
/// observers may still hold. Mutation is only available inside the crate, so every grid
/// handed out satisfies the layout invariants checked by [`Grid::from_units`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// A grid with no units on it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a grid from unit placements. Fails if a unit is placed twice, two units
    /// share a cell, or a coordinate is off the grid.
    pub fn from_units<I>(units: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (UnitId, Coordinate)>,
    {
        let mut grid = Self::empty();
        let mut seen = HashSet::new();
        for (id, coord) in units {
            if !seen.insert(id) {
                return Err(LayoutError::DuplicateUnit(id));
            }
            if !coord.in_bounds() {
                return Err(LayoutError::OutOfBounds(coord));
            }
            if !grid[coord].is_empty() {
                return Err(LayoutError::AlreadyOccupied(coord));
            }
            grid.set(coord, Cell::Unit(id));
        }
        Ok(grid)
    }

    /// Get the cell at the given [`Coordinate`]. Returns `None` if it is out of bounds.
    pub fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<Cell> {
        let coord = coord.borrow();
        self.cells
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
    }

    /// Overwrite the cell at the given [`Coordinate`]. Panics if it is out of bounds.
    pub(crate) fn set(&mut self, coord: Coordinate, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// Iterate over the rows of the grid, top (row 0) first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_SIZE]> {
        self.cells.iter()
    }

    /// Iterate over all occupied cells in row-major order.
    pub fn iter_units<'a>(&'a self) -> impl 'a + Iterator<Item = (Coordinate, UnitId)> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.unit().map(|id| (Coordinate::new(row, col), id)))
        })
    }

    /// Find where the given unit stands, if it is on the board.
    pub fn find(&self, unit: UnitId) -> Option<Coordinate> {
        self.iter_units()
            .find(|&(_, id)| id == unit)
            .map(|(coord, _)| coord)
    }

    /// Number of units of the given side on the board.
    pub fn live_count(&self, side: Side) -> usize {
        self.iter_units().filter(|(_, id)| id.owner == side).count()
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = Cell;

    fn index(&self, coord: B) -> &Self::Output {
        let coord = coord.borrow();
        &self.cells[coord.row][coord.col]
    }
}

impl fmt::Display for Grid {
    /// Writes one line per row, cells separated by a space.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parse the form written by `Display`. Blank lines are skipped and markers may be
    /// separated by any whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<_> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        if lines.len() != GRID_SIZE {
            return Err(GridParseError::RowCount(lines.len()));
        }
        let mut units = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            let markers: Vec<_> = line.split_whitespace().collect();
            if markers.len() != GRID_SIZE {
                return Err(GridParseError::ColumnCount {
                    row,
                    found: markers.len(),
                });
            }
            for (col, marker) in markers.into_iter().enumerate() {
                let cell = marker
                    .parse::<Cell>()
                    .map_err(|source| GridParseError::Cell { row, col, source })?;
                if let Cell::Unit(id) = cell {
                    units.push((id, Coordinate::new(row, col)));
                }
            }
        }
        Ok(Self::from_units(units)?)
    }
}
