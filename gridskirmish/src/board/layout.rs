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

//! Starting layouts. The session layer is free to supply any valid grid; these are the
//! layouts the command line game offers.
#[cfg(feature = "rng_gen")]
use rand::{seq::SliceRandom, Rng};

use crate::{
    board::{Cell, Coordinate, Grid, GRID_SIZE},
    units::{Side, UnitId, UnitKind},
};

/// Left-to-right order of the units in the standard layout, as seen by their owner.
pub const STANDARD_ORDER: [UnitKind; GRID_SIZE] = [
    UnitKind::P1,
    UnitKind::H1,
    UnitKind::H2,
    UnitKind::P2,
    UnitKind::P3,
];

/// Row the given side starts on.
pub fn home_row(side: Side) -> usize {
    match side {
        Side::A => GRID_SIZE - 1,
        Side::B => 0,
    }
}

/// The standard layout: each side fills its home row in [`STANDARD_ORDER`].
pub fn standard() -> Grid {
    home_rows(STANDARD_ORDER, STANDARD_ORDER)
}

/// A layout where each side's units are shuffled independently across its home row.
#[cfg(feature = "rng_gen")]
pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let mut a = STANDARD_ORDER;
    let mut b = STANDARD_ORDER;
    a.shuffle(rng);
    b.shuffle(rng);
    home_rows(a, b)
}

/// Fill both home rows. Orders are given from each owner's point of view, so side `B`'s
/// row is laid out right to left in grid coordinates.
fn home_rows(a: [UnitKind; GRID_SIZE], b: [UnitKind; GRID_SIZE]) -> Grid {
    let mut grid = Grid::empty();
    for (side, order) in [(Side::A, a), (Side::B, b)].iter() {
        for (i, &kind) in order.iter().enumerate() {
            let coord = Coordinate::new(home_row(Side::A), i);
            let coord = if side.is_flipped() { coord.mirrored() } else { coord };
            grid.set(coord, Cell::Unit(UnitId::new(*side, kind)));
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_is_mirrored() {
        let grid = standard();
        assert_eq!(grid.live_count(Side::A), 5);
        assert_eq!(grid.live_count(Side::B), 5);
        for &kind in UnitKind::ALL {
            let a = grid.find(UnitId::new(Side::A, kind)).unwrap();
            let b = grid.find(UnitId::new(Side::B, kind)).unwrap();
            assert_eq!(a.row, 4);
            assert_eq!(b, a.mirrored());
        }
        assert_eq!(
            grid.to_string(),
            "B-P3 B-P2 B-H2 B-H1 B-P1\n\
             x x x x x\n\
             x x x x x\n\
             x x x x x\n\
             A-P1 A-H1 A-H2 A-P2 A-P3"
        );
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn random_layout_fills_home_rows() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let grid = random(&mut rng);
            for (coord, id) in grid.iter_units() {
                assert_eq!(coord.row, home_row(id.owner));
            }
            assert_eq!(grid.iter_units().count(), 10);
        }
    }
}
