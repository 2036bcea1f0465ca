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

use std::{cmp::Ordering, convert::TryFrom, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::GRID_SIZE;

/// The coordinates of a cell in the grid. Row 0 is side `B`'s home row, row 4 is side
/// `A`'s.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Vertical position of the cell.
    pub row: usize,
    /// Horizontal position of the cell.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate lies on the grid.
    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Shift this coordinate by a signed delta. Returns `None` if the result would leave
    /// the grid.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: shift(self.row, d_row)?,
            col: shift(self.col, d_col)?,
        })
    }

    /// The same cell as seen from the opposite end of the board.
    pub fn mirrored(self) -> Self {
        Self {
            row: GRID_SIZE - 1 - self.row,
            col: GRID_SIZE - 1 - self.col,
        }
    }

    /// Walk from this coordinate toward `dest`. See [`Path`].
    pub fn path_to(self, dest: Coordinate) -> Path {
        Path {
            current: self,
            dest,
        }
    }
}

fn shift(v: usize, delta: isize) -> Option<usize> {
    let v = isize::try_from(v).ok()?.checked_add(delta)?;
    usize::try_from(v).ok().filter(|&v| v < GRID_SIZE)
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Iterator over the cells swept when moving from one coordinate to another.
///
/// Each step moves the row and the column one cell toward the destination,
/// independently of each other. The origin is not yielded; the destination is always the
/// last item. A two-cell straight or diagonal move therefore has exactly one
/// intermediate cell.
#[derive(Debug, Clone)]
pub struct Path {
    current: Coordinate,
    dest: Coordinate,
}

impl Path {
    /// Cells strictly between the origin and the destination.
    pub fn intermediate(self) -> impl Iterator<Item = Coordinate> {
        let dest = self.dest;
        self.filter(move |&coord| coord != dest)
    }
}

fn step_toward(from: usize, to: usize) -> usize {
    match from.cmp(&to) {
        Ordering::Less => from + 1,
        Ordering::Greater => from - 1,
        Ordering::Equal => from,
    }
}

impl Iterator for Path {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.current == self.dest {
            return None;
        }
        self.current = Coordinate {
            row: step_toward(self.current.row, self.dest.row),
            col: step_toward(self.current.col, self.dest.col),
        };
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_on_grid() {
        let c = Coordinate::new(4, 2);
        assert_eq!(c.offset(-1, 0), Some(Coordinate::new(3, 2)));
        assert_eq!(c.offset(1, 0), None);
        assert_eq!(c.offset(-2, -2), Some(Coordinate::new(2, 0)));
        assert_eq!(c.offset(-2, -3), None);
        assert_eq!(Coordinate::new(0, 0).offset(0, -1), None);
    }

    #[test]
    fn diagonal_path() {
        let path: Vec<_> = Coordinate::new(4, 2).path_to(Coordinate::new(2, 0)).collect();
        assert_eq!(path, vec![Coordinate::new(3, 1), Coordinate::new(2, 0)]);
    }

    #[test]
    fn intermediate_cells() {
        let origin = Coordinate::new(2, 2);
        assert_eq!(origin.path_to(Coordinate::new(2, 3)).intermediate().count(), 0);
        assert_eq!(
            origin.path_to(Coordinate::new(0, 2)).intermediate().collect::<Vec<_>>(),
            vec![Coordinate::new(1, 2)]
        );
        assert_eq!(origin.path_to(origin).count(), 0);
    }

    #[test]
    fn mirror() {
        assert_eq!(Coordinate::new(4, 1).mirrored(), Coordinate::new(0, 3));
        assert_eq!(Coordinate::new(2, 2).mirrored(), Coordinate::new(2, 2));
        assert!(!Coordinate::new(5, 0).in_bounds());
    }
}
