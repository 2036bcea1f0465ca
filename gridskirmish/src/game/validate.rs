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

//! Move validation. Nothing here mutates the grid or registry.
use crate::{
    board::{Coordinate, Grid, Path},
    command::Command,
    direction::Direction,
    game::RejectReason,
    units::{Side, UnitId, UnitKind, UnitRegistry},
};

/// A move that passed validation, ready to be executed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlannedMove {
    unit: UnitId,
    direction: Direction,
    from: Coordinate,
    to: Coordinate,
}

impl PlannedMove {
    /// The unit being moved.
    pub fn unit(&self) -> UnitId {
        self.unit
    }

    /// Resolved direction, in canonical orientation.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Where the unit starts.
    pub fn origin(&self) -> Coordinate {
        self.from
    }

    /// Where the unit ends up.
    pub fn destination(&self) -> Coordinate {
        self.to
    }

    /// Every cell swept by the move, ending with the destination.
    pub fn path(&self) -> Path {
        self.from.path_to(self.to)
    }

    /// Cells swept strictly between origin and destination.
    pub fn intermediate(&self) -> impl Iterator<Item = Coordinate> {
        self.path().intermediate()
    }
}

/// Check whether `side` may carry out `command` on `grid`, and compute where the unit
/// would end up.
///
/// Checks run in order and the first failure is reported: the unit must be known and
/// alive, the direction (after mirroring for side `B`) must be legal for its kind, the
/// destination must be on the grid, and no unit of the acting side may stand on any swept
/// cell, destination included. Enemy units on the path do not block.
pub fn plan_move(
    grid: &Grid,
    registry: &UnitRegistry,
    side: Side,
    command: &Command,
) -> Result<PlannedMove, RejectReason> {
    let kind: UnitKind = command
        .unit()
        .parse()
        .map_err(|_| RejectReason::UnknownUnit)?;
    let unit = UnitId::new(side, kind);
    let status = registry.get(unit).ok_or(RejectReason::UnknownUnit)?;
    let from = status.position().ok_or(RejectReason::DeadUnit)?;

    let direction = Direction::resolve(command.direction(), side)
        .filter(|&dir| kind.vocabulary().contains(dir))
        .ok_or(RejectReason::IllegalDirection)?;

    let (d_row, d_col) = direction.unit_delta();
    let to = from
        .offset(d_row * kind.reach(), d_col * kind.reach())
        .ok_or(RejectReason::OutOfBounds)?;

    let blocked = from
        .path_to(to)
        .any(|coord| grid.get(coord).and_then(|cell| cell.owner()) == Some(side));
    if blocked {
        return Err(RejectReason::BlockedByOwnUnit);
    }

    Ok(PlannedMove {
        unit,
        direction,
        from,
        to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(owner: Side, kind: UnitKind) -> UnitId {
        UnitId::new(owner, kind)
    }

    fn plan(grid: &Grid, side: Side, raw: &str) -> Result<PlannedMove, RejectReason> {
        let registry = UnitRegistry::from_grid(grid);
        plan_move(grid, &registry, side, &Command::parse(raw).unwrap())
    }

    fn grid(units: Vec<(UnitId, (usize, usize))>) -> Grid {
        Grid::from_units(units.into_iter().map(|(id, c)| (id, c.into()))).unwrap()
    }

    #[test]
    fn runner_steps_one_cell() {
        let g = grid(vec![(id(Side::A, UnitKind::P1), (4, 2))]);
        let mv = plan(&g, Side::A, "p1:f").unwrap();
        assert_eq!(mv.destination(), Coordinate::new(3, 2));
        assert_eq!(mv.direction(), Direction::Forward);
        assert_eq!(mv.intermediate().count(), 0);
    }

    #[test]
    fn scout_steps_two_cells() {
        let g = grid(vec![(id(Side::A, UnitKind::H1), (4, 2))]);
        let mv = plan(&g, Side::A, "h1:l").unwrap();
        assert_eq!(mv.destination(), Coordinate::new(4, 0));
        assert_eq!(mv.intermediate().collect::<Vec<_>>(), vec![Coordinate::new(4, 1)]);
    }

    #[test]
    fn side_b_is_mirrored() {
        let g = grid(vec![(id(Side::B, UnitKind::H2), (0, 2))]);
        let mv = plan(&g, Side::B, "h2:fl").unwrap();
        assert_eq!(mv.direction(), Direction::BackwardRight);
        assert_eq!(mv.destination(), Coordinate::new(2, 4));
    }

    #[test]
    fn unknown_unit() {
        let g = grid(vec![(id(Side::A, UnitKind::P1), (4, 2))]);
        assert_eq!(plan(&g, Side::A, "p9:f"), Err(RejectReason::UnknownUnit));

        let registry = UnitRegistry::for_side(&g, Side::A);
        let cmd = Command::parse("p1:f").unwrap();
        assert_eq!(
            plan_move(&g, &registry, Side::B, &cmd),
            Err(RejectReason::UnknownUnit)
        );
    }

    #[test]
    fn dead_unit_checked_before_direction() {
        let g = grid(vec![(id(Side::A, UnitKind::P1), (4, 2))]);
        assert_eq!(plan(&g, Side::A, "p2:f"), Err(RejectReason::DeadUnit));
        assert_eq!(plan(&g, Side::A, "p2:zz"), Err(RejectReason::DeadUnit));
    }

    #[test]
    fn illegal_direction() {
        let g = grid(vec![
            (id(Side::A, UnitKind::P1), (2, 2)),
            (id(Side::A, UnitKind::H2), (4, 4)),
        ]);
        assert_eq!(plan(&g, Side::A, "p1:fl"), Err(RejectReason::IllegalDirection));
        assert_eq!(plan(&g, Side::A, "h2:f"), Err(RejectReason::IllegalDirection));
        assert_eq!(plan(&g, Side::A, "p1:up"), Err(RejectReason::IllegalDirection));
        assert_eq!(plan(&g, Side::A, "p1:f:x"), Err(RejectReason::IllegalDirection));
    }

    #[test]
    fn out_of_bounds_ignores_occupancy() {
        let g = grid(vec![
            (id(Side::A, UnitKind::P1), (4, 2)),
            (id(Side::A, UnitKind::H2), (4, 4)),
            (id(Side::A, UnitKind::P2), (3, 3)),
        ]);
        assert_eq!(plan(&g, Side::A, "p1:b"), Err(RejectReason::OutOfBounds));
        // Blocked at (3, 3) as well, but the destination check comes first.
        assert_eq!(plan(&g, Side::A, "h2:fr"), Err(RejectReason::OutOfBounds));
    }

    #[test]
    fn own_units_block() {
        let g = grid(vec![
            (id(Side::A, UnitKind::H2), (4, 2)),
            (id(Side::A, UnitKind::P1), (3, 1)),
            (id(Side::A, UnitKind::P2), (2, 4)),
        ]);
        assert_eq!(plan(&g, Side::A, "h2:fl"), Err(RejectReason::BlockedByOwnUnit));
        // Friendly unit on the destination blocks too.
        assert_eq!(plan(&g, Side::A, "h2:fr"), Err(RejectReason::BlockedByOwnUnit));
    }

    #[test]
    fn enemies_do_not_block() {
        let g = grid(vec![
            (id(Side::A, UnitKind::H2), (4, 2)),
            (id(Side::B, UnitKind::P1), (3, 1)),
            (id(Side::B, UnitKind::P2), (2, 0)),
        ]);
        let mv = plan(&g, Side::A, "h2:fl").unwrap();
        assert_eq!(mv.destination(), Coordinate::new(2, 0));
    }
}
