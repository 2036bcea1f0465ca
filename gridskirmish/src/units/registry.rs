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

//! Registry of unit positions derived from the grid.
use std::collections::HashMap;

use crate::{
    board::{Coordinate, Grid},
    units::{Side, UnitId, UnitKind},
};

/// Position and liveness of a single unit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UnitStatus {
    /// Where the unit stands. `None` once the unit has been captured or if it was never
    /// on the board.
    position: Option<Coordinate>,
}

impl UnitStatus {
    fn at(position: Option<Coordinate>) -> Self {
        Self { position }
    }

    /// Whether the unit is still on the board.
    pub fn alive(&self) -> bool {
        self.position.is_some()
    }

    /// The unit's position, or `None` if it is dead.
    pub fn position(&self) -> Option<Coordinate> {
        self.position
    }
}

/// Cache of where each tracked unit stands.
///
/// The [`Grid`] is the source of truth; a registry is either rebuilt from a grid or
/// produced alongside one by the move executor. A registry may track both sides or only
/// one, in which case units of the other side are unknown to it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UnitRegistry {
    units: HashMap<UnitId, UnitStatus>,
}

impl UnitRegistry {
    /// Build a registry tracking all ten units from the given grid. Units missing from
    /// the grid are recorded as dead.
    pub fn from_grid(grid: &Grid) -> Self {
        Self::scan(grid, UnitId::all())
    }

    /// Build a registry tracking only the units of one side.
    pub fn for_side(grid: &Grid, side: Side) -> Self {
        Self::scan(grid, UnitId::roster(side))
    }

    fn scan(grid: &Grid, tracked: impl Iterator<Item = UnitId>) -> Self {
        let mut units: HashMap<_, _> = tracked.map(|id| (id, UnitStatus::at(None))).collect();
        for (coord, id) in grid.iter_units() {
            if let Some(status) = units.get_mut(&id) {
                status.position = Some(coord);
            }
        }
        Self { units }
    }

    /// Get the status of the given unit, if it is tracked by this registry.
    pub fn get(&self, unit: UnitId) -> Option<UnitStatus> {
        self.units.get(&unit).copied()
    }

    /// Iterate over the tracked units of one side in roster order.
    pub fn iter_side<'a>(
        &'a self,
        side: Side,
    ) -> impl 'a + Iterator<Item = (UnitKind, UnitStatus)> {
        UnitId::roster(side).filter_map(move |id| self.get(id).map(|status| (id.kind, status)))
    }

    /// Number of live tracked units on the given side.
    pub fn live_count(&self, side: Side) -> usize {
        self.iter_side(side).filter(|(_, status)| status.alive()).count()
    }

    /// Check that every tracked unit sits exactly where the grid says it does.
    pub fn agrees_with(&self, grid: &Grid) -> bool {
        self.units
            .iter()
            .all(|(&id, status)| grid.find(id) == status.position)
    }

    /// Move a tracked unit to a new position. Untracked units are ignored.
    pub(crate) fn relocate(&mut self, unit: UnitId, to: Coordinate) {
        if let Some(status) = self.units.get_mut(&unit) {
            status.position = Some(to);
        }
    }

    /// Mark a tracked unit as captured. Untracked units are ignored.
    pub(crate) fn kill(&mut self, unit: UnitId) {
        if let Some(status) = self.units.get_mut(&unit) {
            status.position = None;
        }
    }
}
