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

//! Move execution: sweeping the path and relocating the unit.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    board::{Cell, Coordinate, Grid},
    direction::Direction,
    game::PlannedMove,
    units::{UnitId, UnitRegistry},
};

/// Record of a move that was carried out.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Movement {
    /// The unit that moved.
    pub unit: UnitId,
    /// Direction of travel, in canonical orientation.
    pub direction: Direction,
    /// Where the unit started.
    pub from: Coordinate,
    /// Where the unit ended up.
    pub to: Coordinate,
    /// Enemy units removed from the board, in path order.
    pub captured: Vec<UnitId>,
}

/// Carry out a validated move, producing the grid and registry that result from it.
///
/// The inputs are left untouched. Every swept cell is cleared, so any enemy standing on
/// the path, destination included, is captured.
pub(super) fn execute(
    grid: &Grid,
    registry: &UnitRegistry,
    plan: &PlannedMove,
) -> (Grid, UnitRegistry, Movement) {
    let mut grid = *grid;
    let mut registry = registry.clone();
    let (from, to) = (plan.origin(), plan.destination());

    let marker = grid[from];
    grid.set(from, Cell::Empty);

    let mut captured = Vec::new();
    for coord in plan.path() {
        if let Cell::Unit(victim) = grid[coord] {
            debug_assert_ne!(victim.owner, plan.unit().owner, "swept a friendly unit");
            captured.push(victim);
        }
        grid.set(coord, Cell::Empty);
    }
    grid.set(to, marker);

    registry.relocate(plan.unit(), to);
    for &victim in &captured {
        registry.kill(victim);
    }

    let movement = Movement {
        unit: plan.unit(),
        direction: plan.direction(),
        from,
        to,
        captured,
    };
    (grid, registry, movement)
}
